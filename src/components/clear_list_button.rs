//! Clear List Button Component
//!
//! Removes every item at once. There is no confirmation step.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ClearListButton() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <a
            id="clear-list-btn"
            class="clear-items btn black"
            href="#"
            on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                ctx.clear_all();
            }
        >
            "Clear Items"
        </a>
    }
}
