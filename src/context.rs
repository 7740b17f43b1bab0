//! Board Context
//!
//! Shared session and drag state provided via Leptos Context API.
//! Components call these methods directly; each one runs the session
//! intent on the local executor.

use std::sync::Arc;

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::DndSignals;

use kanban_core::{BoardSession, DragToken};

#[derive(Clone)]
pub struct BoardContext {
    pub session: Arc<BoardSession>,
    pub dnd: DndSignals<DragToken>,
}

impl BoardContext {
    pub fn new(session: Arc<BoardSession>, dnd: DndSignals<DragToken>) -> Self {
        Self { session, dnd }
    }

    pub fn add_card(&self, column_id: String, content: String) {
        let session = Arc::clone(&self.session);
        spawn_local(async move { session.add_card(&column_id, &content).await });
    }

    pub fn delete_card(&self, column_id: String, card_id: String) {
        let session = Arc::clone(&self.session);
        spawn_local(async move { session.delete_card(&column_id, &card_id).await });
    }

    pub fn update_card(&self, column_id: String, card_id: String, content: String, due_date: Option<NaiveDate>) {
        let session = Arc::clone(&self.session);
        spawn_local(async move {
            session.update_card(&column_id, &card_id, &content, due_date).await;
        });
    }

    pub fn add_column(&self, title: String) {
        let session = Arc::clone(&self.session);
        spawn_local(async move { session.add_column(&title).await });
    }

    pub fn delete_column(&self, column_id: String) {
        let session = Arc::clone(&self.session);
        spawn_local(async move { session.delete_column(&column_id).await });
    }

    pub fn drag_start(&self, token: DragToken) {
        self.session.drag_start(token);
    }

    pub fn drag_end(&self, over: Option<DragToken>) {
        let session = Arc::clone(&self.session);
        spawn_local(async move { session.drag_end(over).await });
    }
}

/// Get the board context
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
