//! Board header with title and counters.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();

    let summary = move || {
        store.columns().with(|columns| {
            let cards: usize = columns.iter().map(|c| c.cards.len()).sum();
            format!("{} columns, {} cards", columns.len(), cards)
        })
    };

    view! {
        <header class="board-header">
            <h1>"Kanban Board"</h1>
            <span class="board-summary">{summary}</span>
        </header>
    }
}
