//! Add Column Form Component

use leptos::prelude::*;

use crate::context::use_board;

/// Form appended after the last column
#[component]
pub fn AddColumnForm() -> impl IntoView {
    let ctx = use_board();

    let (new_title, set_new_title) = signal(String::new());

    let add_column = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get_untracked();
        if title.trim().is_empty() { return; }
        ctx.add_column(title);
        set_new_title.set(String::new());
    };

    view! {
        <form class="column-add-form" on:submit=add_column>
            <input
                type="text"
                placeholder="Add column..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add column"</button>
        </form>
    }
}
