//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Filter;
use crate::state::ListState;

/// Read/write access to the widget state, with one method per user
/// action. Provided by `App`, consumed by every component below it.
#[derive(Clone, Copy)]
pub struct ListContext {
    /// Current state snapshot - read
    pub state: ReadSignal<ListState>,
    /// Current state snapshot - write
    set_state: WriteSignal<ListState>,
}

impl ListContext {
    pub fn new(state: (ReadSignal<ListState>, WriteSignal<ListState>)) -> Self {
        Self {
            state: state.0,
            set_state: state.1,
        }
    }

    /// Submit the current draft as a new item
    pub fn add(&self) {
        self.set_state.update(|state| {
            let draft = state.draft.clone();
            *state = state.add(&draft);
        });
    }

    /// Replace the pending input text
    pub fn set_draft(&self, text: String) {
        self.set_state.update(|state| *state = state.set_draft(text));
    }

    /// Flip one item's completion flag
    pub fn toggle(&self, id: &str) {
        self.set_state.update(|state| *state = state.toggle(id));
    }

    /// Remove one item
    pub fn delete(&self, id: &str) {
        self.set_state.update(|state| *state = state.delete(id));
    }

    /// Drop every completed item
    pub fn clear_completed(&self) {
        self.set_state.update(|state| *state = state.clear_completed());
    }

    /// Switch the visible subset
    pub fn set_filter(&self, filter: Filter) {
        self.set_state.update(|state| *state = state.set_filter(filter));
    }
}
