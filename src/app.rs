//! List Manager App
//!
//! Root component: owns the state signal and lays out the widget.

use leptos::prelude::*;

use crate::components::{AddItemForm, EmptyState, FilterBar, ItemList, StatusFooter};
use crate::context::ListContext;
use crate::state::ListState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (state, set_state) = signal(ListState::new());

    // Provide context to all children
    provide_context(ListContext::new((state, set_state)));

    let has_items = move || !state.get().items.is_empty();

    view! {
        <div class="list-manager">
            // Header
            <header class="header">
                <h1>"List Manager"</h1>
                <p class="tagline">"Stay organized, stay productive"</p>
            </header>

            <AddItemForm />

            // Card with filter tabs, rows and footer; hidden until the
            // first item exists
            <Show when=has_items>
                <div class="list-card">
                    <FilterBar />
                    <ItemList />
                    <StatusFooter />
                </div>
            </Show>

            <Show when=move || !has_items()>
                <EmptyState />
            </Show>
        </div>
    }
}
