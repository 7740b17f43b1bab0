//! In-Memory Document Store
//!
//! Keeps the column collection in process and pushes a snapshot to every
//! subscriber after each write, the way a hosted document database does.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Board, DomainError, DomainResult};

use super::document::{ColumnDocument, ColumnPatch, StoredColumn};
use super::traits::{DocumentStore, SnapshotListener, Subscription};

#[derive(Default)]
struct Inner {
    docs: HashMap<String, ColumnDocument>,
    listeners: HashMap<u64, SnapshotListener>,
    next_listener: u64,
}

impl Inner {
    fn snapshot(&self) -> Vec<StoredColumn> {
        let mut docs: Vec<StoredColumn> = self
            .docs
            .iter()
            .map(|(id, data)| StoredColumn {
                id: id.clone(),
                data: data.clone(),
            })
            .collect();
        docs.sort_by(|a, b| a.data.order.cmp(&b.data.order).then_with(|| a.id.cmp(&b.id)));
        docs
    }
}

/// Column collection held in memory
#[derive(Clone)]
pub struct MemoryDocumentStore {
    collection: String,
    inner: Arc<Mutex<Inner>>,
}

impl MemoryDocumentStore {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Store pre-filled with the columns of `board`, keeping their ids
    pub fn seeded(collection: impl Into<String>, board: &Board) -> Self {
        let store = Self::new(collection);
        if let Ok(mut inner) = store.inner.lock() {
            for column in board.columns() {
                inner.docs.insert(column.id.clone(), ColumnDocument::from(column));
            }
        }
        store
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Current documents, sorted by order
    pub fn documents(&self) -> Vec<StoredColumn> {
        self.lock().map(|inner| inner.snapshot()).unwrap_or_default()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().map(|inner| inner.listeners.len()).unwrap_or(0)
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| DomainError::Persistence(format!("{} store lock poisoned", self.collection)))
    }

    /// Send the current snapshot to every subscriber, outside the lock
    fn publish(&self) {
        let (docs, listeners) = match self.lock() {
            Ok(inner) => (inner.snapshot(), inner.listeners.values().cloned().collect::<Vec<_>>()),
            Err(_) => return,
        };
        for listener in listeners {
            listener(docs.clone());
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn subscribe(&self, on_snapshot: SnapshotListener) -> Subscription {
        let (key, docs) = match self.lock() {
            Ok(mut inner) => {
                let key = inner.next_listener;
                inner.next_listener += 1;
                inner.listeners.insert(key, on_snapshot.clone());
                (key, inner.snapshot())
            }
            Err(e) => {
                log::error!("subscribe to {} failed: {}", self.collection, e);
                return Subscription::new(|| {});
            }
        };
        log::debug!("subscribed to {} (listener {})", self.collection, key);
        on_snapshot(docs);

        let inner = Arc::clone(&self.inner);
        Subscription::new(move || {
            if let Ok(mut inner) = inner.lock() {
                inner.listeners.remove(&key);
            }
        })
    }

    async fn create(&self, doc: &ColumnDocument) -> DomainResult<String> {
        let id = Uuid::new_v4().to_string();
        self.lock()?.docs.insert(id.clone(), doc.clone());
        self.publish();
        Ok(id)
    }

    async fn update(&self, id: &str, patch: &ColumnPatch) -> DomainResult<()> {
        {
            let mut inner = self.lock()?;
            let doc = inner
                .docs
                .get_mut(id)
                .ok_or_else(|| DomainError::NotFound(format!("{}/{}", self.collection, id)))?;
            patch.apply(doc);
        }
        self.publish();
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let removed = self.lock()?.docs.remove(id);
        if removed.is_none() {
            return Err(DomainError::NotFound(format!("{}/{}", self.collection, id)));
        }
        self.publish();
        Ok(())
    }

    async fn batch_update(&self, updates: &[(String, ColumnPatch)]) -> DomainResult<()> {
        {
            let mut inner = self.lock()?;
            if let Some((missing, _)) = updates.iter().find(|(id, _)| !inner.docs.contains_key(id)) {
                return Err(DomainError::NotFound(format!("{}/{}", self.collection, missing)));
            }
            for (id, patch) in updates {
                if let Some(doc) = inner.docs.get_mut(id) {
                    patch.apply(doc);
                }
            }
        }
        self.publish();
        Ok(())
    }
}
