//! Column View Component
//!
//! A column is dragged by its header and accepts both cards and columns.
//! Cards inside it are drop targets of their own; leaving a card falls back
//! to the column.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_mousedown, make_on_target_mouseenter};

use kanban_core::{Column, DragToken};

use crate::components::{CardForm, CardView, DeleteConfirmButton};
use crate::context::use_board;

#[component]
pub fn ColumnView(column: Column) -> impl IntoView {
    let ctx = use_board();
    let dnd = ctx.dnd;

    let column_id = column.id.clone();
    let token = DragToken::column(column_id.clone());
    let card_count = column.cards.len();

    let on_mousedown = make_on_mousedown(dnd, token.clone());
    let on_mouseenter = make_on_target_mouseenter(dnd, token.clone());
    let on_mouseleave = make_on_mouseleave(dnd, None);

    let column_class = {
        let token = token.clone();
        move || {
            let mut class = String::from("kanban-column");
            if dnd.is_dragging(&token) {
                class.push_str(" dragging");
            }
            if dnd.is_drop_target(&token) {
                class.push_str(" drop-target");
            }
            class
        }
    };

    let on_delete = {
        let ctx = ctx.clone();
        let column_id = column_id.clone();
        Callback::new(move |_| ctx.delete_column(column_id.clone()))
    };

    let cards = column.cards.into_iter()
        .map(|card| view! { <CardView column_id=column_id.clone() card=card /> })
        .collect_view();

    view! {
        <section
            class=column_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <div class="column-header" on:mousedown=on_mousedown>
                <h2 class="column-title">{column.title}</h2>
                <span class="column-count">{card_count}</span>
                <DeleteConfirmButton button_class="column-delete-btn" on_confirm=on_delete />
            </div>
            <div class="column-cards">
                {cards}
            </div>
            <CardForm column_id=column_id.clone() />
        </section>
    }
}
