//! Item List Component
//!
//! The filtered item rows, or an empty message for the active filter.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::ListContext;
use crate::models::Filter;

/// Visible items under the active filter
#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<ListContext>().expect("ListContext should be provided");

    let visible = move || ctx.state.get().visible_items();

    let empty_message = move || match ctx.state.get().filter {
        Filter::All => "No items yet",
        Filter::Active => "No active items",
        Filter::Completed => "No completed items",
    };

    view! {
        <ul class="item-list">
            <Show when=move || visible().is_empty()>
                <li class="empty-filter">{empty_message}</li>
            </Show>
            <For
                each=visible
                // Completion is part of the key so a toggled row re-renders
                key=|item| (item.id.clone(), item.completed)
                children=move |item| view! { <ItemRow item=item /> }
            />
        </ul>
    }
}
