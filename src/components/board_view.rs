//! Board View Component
//!
//! Columns side by side, followed by the add-column form.

use leptos::prelude::*;

use crate::components::{AddColumnForm, ColumnView};
use crate::context::use_board;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BoardView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_board();
    let dnd = ctx.dnd;

    let board_class = move || if dnd.any_dragging() { "kanban-board dragging" } else { "kanban-board" };

    view! {
        <div class=board_class>
            {move || {
                store.columns().get().into_iter()
                    .map(|column| view! { <ColumnView column=column /> })
                    .collect_view()
            }}
            <AddColumnForm />
        </div>
    }
}
