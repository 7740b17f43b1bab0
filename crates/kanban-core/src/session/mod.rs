//! Board Session
//!
//! The boundary the UI talks to. Each intent:
//! 1. computes the next board with a pure operation,
//! 2. commits it locally (optimistic),
//! 3. mirrors it to the document store when one is connected,
//! 4. on a failed write, restores the previous snapshot (unless something
//!    else committed meanwhile) and pushes an error notification.
//!
//! Intent methods never return errors; outcomes reach the user only as
//! notifications.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use log::{debug, error, info, warn};

use crate::clock::Clock;
use crate::config::BoardConfig;
use crate::domain::{Board, DomainError, DomainResult, Notification, NotificationKind};
use crate::notify::{NotificationListener, NotificationQueue};
use crate::ops::{self, DragToken, DragTracker, Touched};
use crate::repository::{
    board_from_snapshot, card_patches, order_patches, ColumnDocument, ColumnPatch, DocumentStore,
    MemoryDocumentStore, StoredColumn, Subscription,
};
use crate::store::{BoardListener, BoardStore};


/// User-facing messages
pub mod messages {
    pub const CARD_ADDED: &str = "Card added";
    pub const CARD_DELETED: &str = "Card deleted";
    pub const CARD_UPDATED: &str = "Card updated";
    pub const CARD_CONTENT_REQUIRED: &str = "Please enter card content";
    pub const COLUMN_ADDED: &str = "Column added";
    pub const COLUMN_DELETED: &str = "Column deleted";

    pub const ADD_CARD_FAILED: &str = "Failed to add card";
    pub const DELETE_CARD_FAILED: &str = "Failed to delete card";
    pub const UPDATE_CARD_FAILED: &str = "Failed to update card";
    pub const ADD_COLUMN_FAILED: &str = "Failed to add column";
    pub const DELETE_COLUMN_FAILED: &str = "Failed to delete column";
    pub const MOVE_CARD_FAILED: &str = "Failed to move card";
    pub const REORDER_COLUMNS_FAILED: &str = "Failed to reorder columns";
}

/// Remote side of a local change
enum RemoteWrite {
    Patches(Vec<(String, ColumnPatch)>),
    Delete {
        id: String,
        renumber: Vec<(String, ColumnPatch)>,
    },
}

pub struct BoardSession {
    store: Arc<BoardStore>,
    notifications: NotificationQueue,
    drag: Mutex<DragTracker>,
    remote: Option<Arc<dyn DocumentStore>>,
    subscription: Mutex<Option<Subscription>>,
}

impl BoardSession {
    /// Session without a document store; the board lives only in memory.
    pub fn local(board: Board, clock: Arc<dyn Clock>, ttl_ms: u64) -> Self {
        Self {
            store: Arc::new(BoardStore::new(board)),
            notifications: NotificationQueue::new(clock, ttl_ms),
            drag: Mutex::new(DragTracker::default()),
            remote: None,
            subscription: Mutex::new(None),
        }
    }

    /// Session mirrored to `remote`. The board starts empty and is replaced
    /// by every snapshot the store delivers.
    pub fn connected(remote: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>, ttl_ms: u64) -> Self {
        let session = Self {
            remote: Some(remote.clone()),
            ..Self::local(Board::new(), clock, ttl_ms)
        };

        let store = Arc::clone(&session.store);
        let subscription = remote.subscribe(Arc::new(move |docs: Vec<StoredColumn>| {
            debug!("remote snapshot with {} columns", docs.len());
            store.commit(board_from_snapshot(docs));
        }));
        if let Ok(mut slot) = session.subscription.lock() {
            *slot = Some(subscription);
        }
        session
    }

    /// Build the session described by `config`, starting from the sample board.
    pub fn from_config(config: &BoardConfig, clock: Arc<dyn Clock>) -> Self {
        if config.use_document_store {
            info!("mirroring board to in-memory collection `{}`", config.collection);
            let remote = MemoryDocumentStore::seeded(config.collection.clone(), &Board::sample());
            Self::connected(Arc::new(remote), clock, config.notification_ttl_ms)
        } else {
            info!("using local sample board");
            Self::local(Board::sample(), clock, config.notification_ttl_ms)
        }
    }

    pub fn board(&self) -> Arc<Board> {
        self.store.board()
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.list()
    }

    pub fn is_connected(&self) -> bool {
        self.subscription.lock().map(|s| s.is_some()).unwrap_or(false)
    }

    pub fn watch_board(&self, listener: BoardListener) {
        self.store.watch(listener);
    }

    pub fn watch_notifications(&self, listener: NotificationListener) {
        self.notifications.watch(listener);
    }

    /// Called by expiry timers
    pub fn sweep_notifications(&self) -> Vec<String> {
        self.notifications.sweep()
    }

    pub fn notify(&self, kind: NotificationKind, message: &str) -> String {
        self.notifications.push(kind, message)
    }

    // ========================
    // Card intents
    // ========================

    pub async fn add_card(&self, column_id: &str, content: &str) {
        debug!("add card to column {}", column_id);
        let before = self.store.board();
        let next = match ops::add_card(&before, column_id, content) {
            Ok(next) => next,
            Err(e) => {
                debug!("add card skipped: {}", e);
                return;
            }
        };
        let write = RemoteWrite::Patches(card_patches(&next, &[column_id.to_string()]));
        self.apply(before, next, write, Some(messages::CARD_ADDED), messages::ADD_CARD_FAILED)
            .await;
    }

    pub async fn delete_card(&self, column_id: &str, card_id: &str) {
        debug!("delete card {} from column {}", card_id, column_id);
        let before = self.store.board();
        let next = match ops::delete_card(&before, column_id, card_id) {
            Ok(next) => next,
            Err(e) => {
                // Already gone: still a success from the user's point of view.
                debug!("delete card skipped: {}", e);
                self.notify(NotificationKind::Success, messages::CARD_DELETED);
                return;
            }
        };
        let write = RemoteWrite::Patches(card_patches(&next, &[column_id.to_string()]));
        self.apply(before, next, write, Some(messages::CARD_DELETED), messages::DELETE_CARD_FAILED)
            .await;
    }

    pub async fn update_card(&self, column_id: &str, card_id: &str, content: &str, due_date: Option<NaiveDate>) {
        debug!("update card {} in column {}", card_id, column_id);
        let before = self.store.board();
        let next = match ops::update_card(&before, column_id, card_id, content, due_date) {
            Ok(next) => next,
            Err(DomainError::Validation(reason)) => {
                debug!("update card rejected: {}", reason);
                self.notify(NotificationKind::Error, messages::CARD_CONTENT_REQUIRED);
                return;
            }
            Err(e) => {
                debug!("update card skipped: {}", e);
                return;
            }
        };
        let write = RemoteWrite::Patches(card_patches(&next, &[column_id.to_string()]));
        self.apply(before, next, write, Some(messages::CARD_UPDATED), messages::UPDATE_CARD_FAILED)
            .await;
    }

    // ========================
    // Column intents
    // ========================

    pub async fn add_column(&self, title: &str) {
        debug!("add column {:?}", title);
        let before = self.store.board();
        let next = match ops::add_column(&before, title) {
            Ok(next) => next,
            Err(e) => {
                debug!("add column skipped: {}", e);
                return;
            }
        };
        let Some(column) = next.columns().last().cloned() else {
            return;
        };
        let version = self.store.commit(next);

        if let Some(remote) = &self.remote {
            match remote.create(&ColumnDocument::from(&column)).await {
                Ok(doc_id) => self.adopt_document_id(&column.id, &doc_id),
                Err(e) => {
                    self.fail(version, &before, messages::ADD_COLUMN_FAILED, &e);
                    return;
                }
            }
        }
        self.notify(NotificationKind::Success, messages::COLUMN_ADDED);
    }

    pub async fn delete_column(&self, column_id: &str) {
        debug!("delete column {}", column_id);
        let before = self.store.board();
        let next = match ops::delete_column(&before, column_id) {
            Ok(next) => next,
            Err(e) => {
                debug!("delete column skipped: {}", e);
                return;
            }
        };
        let write = RemoteWrite::Delete {
            id: column_id.to_string(),
            renumber: order_patches(&next),
        };
        self.apply(before, next, write, Some(messages::COLUMN_DELETED), messages::DELETE_COLUMN_FAILED)
            .await;
    }

    // ========================
    // Drag intents
    // ========================

    pub fn drag_start(&self, token: DragToken) {
        debug!("drag start {:?}", token);
        if let Ok(mut drag) = self.drag.lock() {
            drag.start(token);
        }
    }

    pub fn dragging(&self) -> Option<DragToken> {
        self.drag.lock().ok().and_then(|d| d.active().cloned())
    }

    /// Finish the current drag over `over` (`None` = dropped outside any target)
    pub async fn drag_end(&self, over: Option<DragToken>) {
        let active = self.drag.lock().ok().and_then(|mut d| d.finish());
        match active {
            Some(active) => self.drop_on(&active, over.as_ref()).await,
            None => debug!("drag end without drag start"),
        }
    }

    /// Resolve and apply a drop of `active` onto `over`
    pub async fn drop_on(&self, active: &DragToken, over: Option<&DragToken>) {
        let before = self.store.board();
        let Some(outcome) = ops::resolve(&before, active, over) else {
            debug!("drop of {:?} onto {:?} ignored", active, over);
            return;
        };

        let (write, failure) = match &outcome.touched {
            Touched::Cards(ids) => (
                RemoteWrite::Patches(card_patches(&outcome.board, ids)),
                messages::MOVE_CARD_FAILED,
            ),
            Touched::Order => (
                RemoteWrite::Patches(order_patches(&outcome.board)),
                messages::REORDER_COLUMNS_FAILED,
            ),
        };
        self.apply(before, outcome.board, write, None, failure).await;
    }

    // ========================
    // Lifecycle
    // ========================

    /// Stop listening to the document store and drop every pending
    /// notification. Intents still in flight finish without adding toasts.
    /// Called when the board view is torn down.
    pub fn teardown(&self) {
        let subscription = self.subscription.lock().ok().and_then(|mut s| s.take());
        if let Some(subscription) = subscription {
            subscription.cancel();
        }
        self.notifications.close();
        self.notifications.clear_watchers();
        self.store.clear_watchers();
        if let Ok(mut drag) = self.drag.lock() {
            drag.finish();
        }
        info!("board session torn down");
    }

    // ========================
    // Helpers
    // ========================

    async fn apply(
        &self,
        before: Arc<Board>,
        next: Board,
        write: RemoteWrite,
        success: Option<&str>,
        failure: &str,
    ) {
        let version = self.store.commit(next);

        if let Some(remote) = &self.remote {
            if let Err(e) = Self::write(remote.as_ref(), write).await {
                self.fail(version, &before, failure, &e);
                return;
            }
        }
        if let Some(message) = success {
            self.notify(NotificationKind::Success, message);
        }
    }

    async fn write(remote: &dyn DocumentStore, write: RemoteWrite) -> DomainResult<()> {
        match write {
            RemoteWrite::Patches(patches) => match patches.as_slice() {
                [] => Ok(()),
                [(id, patch)] => remote.update(id, patch).await,
                _ => remote.batch_update(&patches).await,
            },
            RemoteWrite::Delete { id, renumber } => {
                remote.delete(&id).await?;
                if !renumber.is_empty() {
                    remote.batch_update(&renumber).await?;
                }
                Ok(())
            }
        }
    }

    fn fail(&self, version: u64, before: &Board, message: &str, err: &DomainError) {
        error!("{}: {}", message, err);
        if self.store.commit_if_version(version, before.clone()).is_none() {
            warn!("board changed since the failed write; keeping the newer snapshot");
        }
        self.notify(NotificationKind::Error, message);
    }

    /// Swap a locally generated column id for the id the store assigned,
    /// unless a snapshot already brought the stored column in.
    fn adopt_document_id(&self, local_id: &str, doc_id: &str) {
        let board = self.store.board();
        if let Ok(next) = ops::rekey_column(&board, local_id, doc_id) {
            self.store.commit(next);
        }
    }
}
