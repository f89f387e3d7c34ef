//! Filter Bar Component
//!
//! Tabs restricting which items are visible.

use std::str::FromStr;

use leptos::prelude::*;

use crate::context::ListContext;
use crate::models::Filter;

/// Filter tab options as (value, label) pairs
const FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("active", "Active"),
    ("completed", "Completed"),
];

/// Row of filter tabs, one per filter value
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<ListContext>().expect("ListContext should be provided");

    view! {
        <div class="filter-bar">
            {FILTERS.iter().map(|(value, label)| {
                let val = *value;
                let is_active = move || ctx.state.get().filter.as_str() == val;
                view! {
                    <button
                        class=move || if is_active() { "filter-tab active" } else { "filter-tab" }
                        on:click=move |_| match Filter::from_str(val) {
                            Ok(filter) => ctx.set_filter(filter),
                            // The tab table only holds the three known
                            // names, so an error here is a coding mistake
                            Err(err) => log::error!("{}", err),
                        }
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
