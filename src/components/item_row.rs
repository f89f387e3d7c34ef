//! Item Row Component
//!
//! A single list entry with toggle and delete controls.

use leptos::prelude::*;

use crate::context::ListContext;
use crate::models::Item;

/// One row: checkbox, text, delete button
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_context::<ListContext>().expect("ListContext should be provided");

    let completed = item.completed;
    let text = item.text.clone();
    let toggle_id = item.id.clone();
    let delete_id = item.id.clone();

    view! {
        <li class=move || if completed { "item-row completed" } else { "item-row" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| ctx.toggle(&toggle_id)
            />
            <span class="item-text">{text}</span>
            <button class="delete-btn" on:click=move |_| ctx.delete(&delete_id)>"×"</button>
        </li>
    }
}
