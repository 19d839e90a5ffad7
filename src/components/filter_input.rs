//! Filter Input Component
//!
//! Live, case-insensitive filter on item names.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{self, use_view_store};

#[component]
pub fn FilterInput() -> impl IntoView {
    let ctx = use_app_context();
    let state = use_view_store();

    view! {
        <div class="input-field col s12">
            <input
                type="text"
                id="filter"
                placeholder="Filter Items"
                prop:value=move || store::store_filter(&state)
                on:input=move |ev| ctx.set_filter(event_target_value(&ev))
            />
        </div>
    }
}
