//! Toast notifications, newest last.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NotificationList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-container">
            <For
                each=move || store.notifications().get()
                key=|n| n.id.clone()
                children=move |n| {
                    view! {
                        <div class=format!("toast toast-{}", n.kind.as_str()) role="status">
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
