//! Card Form Component
//!
//! Adds a card to the bottom of a column.

use leptos::prelude::*;

use crate::context::use_board;

#[component]
pub fn CardForm(column_id: String) -> impl IntoView {
    let ctx = use_board();

    let (new_text, set_new_text) = signal(String::new());

    let add_card = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if text.trim().is_empty() { return; }
        ctx.add_card(column_id.clone(), text);
        set_new_text.set(String::new());
    };

    view! {
        <form class="card-add-form" on:submit=add_card>
            <input
                type="text"
                placeholder="Add a card..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"+"</button>
        </form>
    }
}
