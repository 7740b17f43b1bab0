//! Domain Layer
//!
//! Board entities and core abstractions.
//! This layer has no dependency on the document store or the UI.

mod entity;
mod card;
mod column;
mod board;
mod due;
mod notification;

pub use entity::{position_of, DomainError, DomainResult, Entity};
pub use card::Card;
pub use column::Column;
pub use board::Board;
pub use due::DueStatus;
pub use notification::{Notification, NotificationKind};
