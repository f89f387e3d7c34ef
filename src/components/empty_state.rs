//! Empty State Component
//!
//! Placeholder shown before the first item is added.

use leptos::prelude::*;

/// Panel rendered instead of the list card while the list is empty
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>"Add your first item to get started"</p>
        </div>
    }
}
