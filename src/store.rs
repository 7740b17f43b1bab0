//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The board
//! session is the source of truth; these fields mirror its snapshots.

use leptos::prelude::*;
use reactive_stores::Store;

use kanban_core::{Board, Column, Notification, NotificationEvent};

/// Rendered board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Columns in display order
    pub columns: Vec<Column>,
    /// Visible toasts in insertion order
    pub notifications: Vec<Notification>,
}

impl AppState {
    pub fn new(board: &Board) -> Self {
        Self {
            columns: board.columns().to_vec(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the columns with a new board snapshot
pub fn store_set_board(store: &AppStore, board: &Board) {
    store.columns().set(board.columns().to_vec());
}

/// Apply a notification queue change. Ignored once the store is disposed.
pub fn store_apply_notification(store: &AppStore, event: &NotificationEvent) {
    let notifications = store.notifications();
    match event {
        NotificationEvent::Pushed { notification, .. } => {
            notifications.try_update(|n| n.push(notification.clone()));
        }
        NotificationEvent::Expired(ids) => {
            notifications.try_update(|n| n.retain(|entry| !ids.contains(&entry.id)));
        }
        NotificationEvent::Cleared => {
            notifications.try_update(|n| n.clear());
        }
    }
}
