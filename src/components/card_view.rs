//! Card View Component
//!
//! Shows a card with its due date, or the inline edit form.

use chrono::Utc;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_mousedown, make_on_target_mouseenter};

use kanban_core::{Card, DragToken};

use crate::components::DeleteConfirmButton;
use crate::context::use_board;
use crate::format::{date_input_value, due_class, due_label, parse_date_input};

#[component]
pub fn CardView(column_id: String, card: Card) -> impl IntoView {
    let ctx = use_board();
    let dnd = ctx.dnd;

    let token = DragToken::card(column_id.clone(), card.id.clone());
    let on_mousedown = make_on_mousedown(dnd, token.clone());
    let on_mouseenter = make_on_target_mouseenter(dnd, token.clone());
    let on_mouseleave = make_on_mouseleave(dnd, Some(DragToken::column(column_id.clone())));

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(card.content.clone());
    let (draft_due, set_draft_due) = signal(date_input_value(card.due_date));

    let card_class = move || {
        let mut class = String::from("kanban-card");
        if dnd.is_dragging(&token) {
            class.push_str(" dragging");
        }
        if dnd.is_drop_target(&token) {
            class.push_str(" drop-target");
        }
        class
    };

    let content = card.content.clone();
    let due_date = card.due_date;
    let reset = move || {
        set_draft.set(content.clone());
        set_draft_due.set(date_input_value(due_date));
        set_editing.set(false);
    };

    let save = {
        let ctx = ctx.clone();
        let column_id = column_id.clone();
        let card_id = card.id.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            ctx.update_card(
                column_id.clone(),
                card_id.clone(),
                draft.get_untracked(),
                parse_date_input(&draft_due.get_untracked()),
            );
            set_editing.set(false);
        }
    };

    let on_delete = {
        let ctx = ctx.clone();
        let card_id = card.id.clone();
        Callback::new(move |_| ctx.delete_card(column_id.clone(), card_id.clone()))
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <div class="card-body" on:dblclick=move |_| set_editing.set(true)>
                        <p class="card-content">{card.content.clone()}</p>
                        {due_date.map(|due| view! {
                            <span class=due_class(due, Utc::now())>{due_label(due)}</span>
                        })}
                    </div>
                    <div class="card-actions">
                        <button class="card-edit-btn" title="Edit" on:click=move |_| set_editing.set(true)>"✎"</button>
                        <DeleteConfirmButton button_class="card-delete-btn" on_confirm=on_delete />
                    </div>
                }
            >
                <form class="card-edit-form" on:submit=save.clone()>
                    <textarea
                        class="card-edit-content"
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown={
                            let reset = reset.clone();
                            move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Escape" {
                                    reset();
                                }
                            }
                        }
                    ></textarea>
                    <input
                        type="date"
                        class="card-edit-due"
                        prop:value=move || draft_due.get()
                        on:input=move |ev| set_draft_due.set(event_target_value(&ev))
                    />
                    <div class="card-edit-actions">
                        <button type="submit">"Save"</button>
                        <button type="button" class="cancel-btn" on:click={
                            let reset = reset.clone();
                            move |_| reset()
                        }>"Cancel"</button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
