//! Grocery Form Component
//!
//! One form for both modes. The title and the visible buttons follow the
//! controller's mode; submitting (button or Enter) does what the mode says.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{self, use_view_store};

#[component]
pub fn GroceryForm() -> impl IntoView {
    let ctx = use_app_context();
    let state = use_view_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    let shows_add = move || store::store_shows_add_button(&state);
    let shows_edit = move || store::store_shows_edit_controls(&state);

    view! {
        <form id="grocery-item-form" on:submit=on_submit>
            <span id="grocery-mode-title" class="card-title">
                {move || store::store_form_title(&state)}
            </span>
            <div class="row">
                <div class="input-field col s12">
                    <input
                        type="text"
                        id="grocery-item-name"
                        placeholder="Item name"
                        prop:value=move || store::store_form(&state).name().to_string()
                        on:input=move |ev| store::store_set_name(&state, event_target_value(&ev))
                    />
                </div>
                <div class="input-field col s12">
                    <input
                        type="text"
                        id="grocery-item-description"
                        placeholder="Description"
                        prop:value=move || store::store_form(&state).description().to_string()
                        on:input=move |ev| store::store_set_description(&state, event_target_value(&ev))
                    />
                </div>
            </div>

            // Add mode
            <button
                type="submit"
                id="add-item-btn"
                class="btn"
                style=move || if shows_add() { "display: initial" } else { "display: none" }
            >
                "Add Item"
            </button>

            // Edit mode
            <button
                type="button"
                id="edit-btn"
                class="btn"
                style=move || if shows_edit() { "visibility: visible" } else { "visibility: hidden" }
                on:click=move |_| ctx.submit()
            >
                "Edit Item"
            </button>
            <button
                type="button"
                id="cancel-btn"
                class="btn grey"
                style=move || if shows_edit() { "visibility: visible" } else { "visibility: hidden" }
                on:click=move |_| ctx.cancel_edit()
            >
                "Cancel"
            </button>
        </form>
    }
}
