//! Status Footer Component
//!
//! Remaining-item count and the clear-completed control.

use leptos::prelude::*;

use crate::context::ListContext;

/// "1 item left" / "N items left"
fn items_left_label(active_count: usize) -> String {
    if active_count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", active_count)
    }
}

/// Footer row under the item list
#[component]
pub fn StatusFooter() -> impl IntoView {
    let ctx = use_context::<ListContext>().expect("ListContext should be provided");

    let label = move || items_left_label(ctx.state.get().active_count());
    let has_completed = move || ctx.state.get().completed_count() > 0;

    view! {
        <div class="status-footer">
            <span class="items-left">{label}</span>
            <Show when=has_completed>
                <button
                    class="clear-completed-btn"
                    on:click=move |_| ctx.clear_completed()
                >
                    "Clear completed"
                </button>
            </Show>
        </div>
    }
}
