//! Repository Layer - Core Traits
//!
//! Abstract interface to the external document database that mirrors the
//! board. Implementations may talk to a hosted service or stay in memory.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::DomainResult;

use super::document::{ColumnDocument, ColumnPatch, StoredColumn};

/// Receives the full collection every time it changes
pub type SnapshotListener = Arc<dyn Fn(Vec<StoredColumn>) + Send + Sync>;

/// Handle for a live snapshot subscription.
///
/// The subscription ends on [`Subscription::cancel`] or when dropped.
pub struct Subscription {
    unsubscribe: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unsubscribe: Mutex::new(Some(Box::new(unsubscribe))),
        }
    }

    pub fn cancel(&self) {
        let f = match self.unsubscribe.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        if let Some(f) = f {
            f();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Column document collection
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Start receiving snapshots
    fn subscribe(&self, on_snapshot: SnapshotListener) -> Subscription;

    /// Create a document, returning its new id
    async fn create(&self, doc: &ColumnDocument) -> DomainResult<String>;

    /// Apply a partial update to one document
    async fn update(&self, id: &str, patch: &ColumnPatch) -> DomainResult<()>;

    /// Delete a document by id
    async fn delete(&self, id: &str) -> DomainResult<()>;

    /// Apply several updates atomically
    async fn batch_update(&self, updates: &[(String, ColumnPatch)]) -> DomainResult<()>;
}
