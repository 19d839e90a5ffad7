//! Item List Component

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{self, use_view_store};

#[component]
pub fn ItemList() -> impl IntoView {
    let state = use_view_store();

    view! {
        <ul class="collection item-list">
            <For
                each=move || store::store_items(&state)
                // Key on every rendered field so an edit re-renders the row
                key=|item| (item.id, item.name.clone(), item.description.clone())
                children=move |item| view! { <ItemRow item=item /> }
            />
        </ul>
    }
}
