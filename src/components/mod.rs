//! UI Components
//!
//! Reusable Leptos components.

mod add_item_form;
mod item_row;
mod item_list;
mod filter_bar;
mod status_footer;
mod empty_state;

pub use add_item_form::AddItemForm;
pub use item_row::ItemRow;
pub use item_list::ItemList;
pub use filter_bar::FilterBar;
pub use status_footer::StatusFooter;
pub use empty_state::EmptyState;
