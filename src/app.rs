//! Kanban Board Frontend App
//!
//! Builds the board session from config, mirrors it into the reactive store
//! and owns the toast expiry timers.

use std::collections::HashMap;
use std::sync::Arc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use reactive_stores::Store;

use kanban_core::{Board, BoardConfig, BoardSession, DragToken, NotificationEvent, SystemClock};

use crate::components::{BoardView, Header, NotificationList};
use crate::context::BoardContext;
use crate::store::{store_apply_notification, store_set_board, AppState};

/// Extra delay so the sweep runs after the deadline, not on it
const EXPIRY_SLACK_MS: u32 = 20;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let session = Arc::new(BoardSession::from_config(&config, Arc::new(SystemClock)));

    let store = Store::new(AppState::new(&session.board()));
    provide_context(store);

    session.watch_board(Arc::new(move |board: &Arc<Board>| {
        store_set_board(&store, board);
    }));

    // Pending expiry timers by notification id; dropping a Timeout cancels it.
    let timers = StoredValue::new_local(HashMap::<String, Timeout>::new());
    let weak = Arc::downgrade(&session);
    session.watch_notifications(Arc::new(move |event: &NotificationEvent| {
        store_apply_notification(&store, event);
        match event {
            NotificationEvent::Pushed { notification, ttl } => {
                let weak = weak.clone();
                let millis = u32::try_from(ttl.as_millis()).unwrap_or(u32::MAX).saturating_add(EXPIRY_SLACK_MS);
                // Sweep from a task so the firing timer is not dropped inside its own callback.
                let timeout = Timeout::new(millis, move || {
                    spawn_local(async move {
                        if let Some(session) = weak.upgrade() {
                            session.sweep_notifications();
                        }
                    });
                });
                timers.try_update_value(|t| {
                    t.insert(notification.id.clone(), timeout);
                });
            }
            NotificationEvent::Expired(ids) => {
                timers.try_update_value(|t| {
                    for id in ids {
                        t.remove(id);
                    }
                });
            }
            NotificationEvent::Cleared => {
                timers.try_update_value(|t| t.clear());
            }
        }
    }));

    let dnd = create_dnd_signals::<DragToken>();
    let ctx = BoardContext::new(Arc::clone(&session), dnd);
    provide_context(ctx.clone());

    let start_ctx = ctx.clone();
    let drop_ctx = ctx;
    bind_global_mouseup(
        dnd,
        move |token| start_ctx.drag_start(token),
        move |_active, over| drop_ctx.drag_end(over),
    );

    on_cleanup(move || {
        timers.try_update_value(|t| t.clear());
        session.teardown();
    });

    view! {
        <div class="kanban-app">
            <Header />
            <BoardView />
            <NotificationList />
        </div>
    }
}
