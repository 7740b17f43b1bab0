//! Board Operations
//!
//! Pure functions from one board snapshot to the next.

mod positioning;
mod card_ops;
mod column_ops;
mod drag;

pub use positioning::array_move;
pub use card_ops::{add_card, delete_card, update_card};
pub use column_ops::{add_column, delete_column, move_column};
pub(crate) use column_ops::rekey_column;
pub use drag::{resolve, DragOutcome, DragToken, DragTracker, Touched};
