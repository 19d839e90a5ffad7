//! Grocery List App
//!
//! Main application component: form card on top, filterable list below.

use leptos::prelude::*;
use reactive_stores::Store;

use grocery_core::GroceryConfig;

use crate::components::{ClearListButton, FilterInput, GroceryForm, ItemList};
use crate::context::AppContext;
use crate::store::{self, ViewState};

#[component]
pub fn App(config: GroceryConfig) -> impl IntoView {
    // View state first; the context publishes the loaded items into it
    let state = Store::new(ViewState::default());
    provide_context(state);
    provide_context(AppContext::new(&config, state));

    view! {
        <div class="container">
            <div class="row">
                <div class="col s12">
                    <div id="main" class="card">
                        <div class="card-content">
                            <GroceryForm />
                        </div>
                        <div class="card-action">
                            <h5 id="task-title">"Grocery List"</h5>
                            <FilterInput />
                            <ItemList />
                            <p class="item-count">
                                {move || format!("{} items", store::store_visible_count(&state))}
                            </p>
                            <ClearListButton />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
