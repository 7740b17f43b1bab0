//! Repository Layer
//!
//! Document store abstraction and the in-memory implementation.

mod traits;
mod document;
mod memory;

pub use traits::{DocumentStore, SnapshotListener, Subscription};
pub use document::{board_from_snapshot, card_patches, order_patches, ColumnDocument, ColumnPatch, StoredColumn};
pub use memory::MemoryDocumentStore;
