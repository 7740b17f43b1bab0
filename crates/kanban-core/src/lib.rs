//! Kanban Board Core
//!
//! Layered the same way as the rest of the workspace:
//! - domain: cards, columns, the board aggregate and notifications
//! - ops: pure board-to-board operations and the drag resolver
//! - store / notify: the live board snapshot and the toast queue
//! - repository: document store abstraction and in-memory implementation
//! - session: the intent boundary used by the UI

pub mod domain;
pub mod ops;
pub mod store;
pub mod clock;
pub mod notify;
pub mod repository;
pub mod config;
pub mod session;

pub use domain::{Board, Card, Column, DomainError, DomainResult, DueStatus, Notification, NotificationKind};
pub use ops::DragToken;
pub use store::BoardStore;
pub use clock::{Clock, ManualClock, SystemClock};
pub use notify::{NotificationEvent, NotificationQueue};
pub use repository::{DocumentStore, MemoryDocumentStore};
pub use config::BoardConfig;
pub use session::BoardSession;
