//! Item Row Component
//!
//! One grocery item with its delete and edit links.

use leptos::prelude::*;

use grocery_core::Item;

use crate::context::use_app_context;
use crate::store::{self, use_view_store};

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let state = use_view_store();

    let id = item.id;
    let row_style = move || {
        let display = if store::store_is_visible(&state, id) { "flex" } else { "none" };
        format!("display: {}; align-items: center; justify-content: space-between", display)
    };

    view! {
        <li id=format!("item-{}", id) class="collection-item" style=row_style>
            <div class="item-info">
                <h5 class="item-name">{item.name}</h5>
                <span class="item-description">{item.description}</span>
            </div>
            <div class="button-container">
                <a
                    class="delete-item secondary-content"
                    style="cursor: pointer"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        ctx.remove(id);
                    }
                >
                    <i class="fa fa-remove"></i>
                </a>
                <a
                    class="edit-item secondary-content"
                    style="cursor: pointer"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        ctx.begin_edit(id);
                    }
                >
                    <i class="fa fa-edit"></i>
                </a>
            </div>
        </li>
    }
}
