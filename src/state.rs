//! List State
//!
//! The widget's entire state as one value. Every operation takes the
//! current snapshot and returns the next one instead of mutating shared
//! structure, so the reactive layer swaps the whole value and the
//! transition model stays testable without any rendering surface.

use std::cell::Cell;

use crate::models::{Filter, Item};

/// Everything the widget owns: the items (newest first), the active
/// filter, and the pending input text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub items: Vec<Item>,
    pub filter: Filter,
    pub draft: String,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item from raw input, prepending it to the list.
    ///
    /// Whitespace-only input is rejected silently: the returned snapshot
    /// is unchanged, draft included.
    pub fn add(&self, raw_text: &str) -> Self {
        let text = raw_text.trim();
        if text.is_empty() {
            return self.clone();
        }
        log::debug!("add item {:?}", text);
        let item = Item {
            id: next_item_id(),
            text: text.to_string(),
            completed: false,
            created_at: now_ms(),
        };
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(item);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            filter: self.filter,
            draft: String::new(),
        }
    }

    /// Flip the completion flag of the item with `id`. Unknown ids are
    /// ignored, stale references from already-deleted rows degrade to a
    /// no-op.
    pub fn toggle(&self, id: &str) -> Self {
        let mut next = self.clone();
        if let Some(item) = next.items.iter_mut().find(|item| item.id == id) {
            item.completed = !item.completed;
        }
        next
    }

    /// Remove the item with `id`, keeping the order of the rest. Unknown
    /// ids are ignored.
    pub fn delete(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.items.retain(|item| item.id != id);
        next
    }

    /// Drop every completed item, keeping the order of the rest.
    pub fn clear_completed(&self) -> Self {
        log::debug!("clear {} completed items", self.completed_count());
        let mut next = self.clone();
        next.items.retain(|item| !item.completed);
        next
    }

    /// Replace the active filter. The item list is untouched.
    pub fn set_filter(&self, filter: Filter) -> Self {
        Self {
            filter,
            ..self.clone()
        }
    }

    /// Replace the pending input text.
    pub fn set_draft(&self, text: impl Into<String>) -> Self {
        Self {
            draft: text.into(),
            ..self.clone()
        }
    }

    /// Items visible under the active filter, in list order.
    pub fn visible_items(&self) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .cloned()
            .collect()
    }

    /// Count of items still open.
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    /// Count of items marked done.
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}

thread_local! {
    static NEXT_SEQ: Cell<u64> = Cell::new(0);
}

/// Fresh id for a new item: creation time plus a session-local counter,
/// so two adds landing in the same millisecond stay distinct.
fn next_item_id() -> String {
    let seq = NEXT_SEQ.with(|cell| {
        let n = cell.get();
        cell.set(n + 1);
        n
    });
    format!("{}-{}", now_ms(), seq)
}

/// Current time in milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_all(texts: &[&str]) -> ListState {
        texts
            .iter()
            .fold(ListState::new(), |state, text| state.add(text))
    }

    fn texts(state: &ListState) -> Vec<&str> {
        state.items.iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn test_add_prepends_trimmed_items() {
        let state = add_all(&["first", "  second  ", "third"]);

        assert_eq!(texts(&state), vec!["third", "second", "first"]);
        assert!(state.items.iter().all(|item| !item.completed));
    }

    #[test]
    fn test_add_rejects_whitespace_only() {
        let state = add_all(&["keep me", "", "   ", "\t\n"]);

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].text, "keep me");
    }

    #[test]
    fn test_add_clears_draft_only_on_success() {
        let state = ListState::new().set_draft("  walk dog  ");

        let added = state.add(&state.draft.clone());
        assert_eq!(added.draft, "");
        assert_eq!(added.items[0].text, "walk dog");

        let blank = ListState::new().set_draft("   ");
        let rejected = blank.add(&blank.draft.clone());
        assert_eq!(rejected, blank);
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let state = add_all(&["a", "b", "c", "d", "e"]);

        let mut ids: Vec<&str> = state.items.iter().map(|item| item.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_toggle_flips_only_matching_item() {
        let state = add_all(&["a", "b", "c"]);
        let id = state.items[1].id.clone();

        let toggled = state.toggle(&id);

        assert!(toggled.items[1].completed);
        assert_eq!(toggled.items[1].id, id);
        assert_eq!(toggled.items[1].text, "b");
        assert!(!toggled.items[0].completed);
        assert!(!toggled.items[2].completed);
        assert_eq!(texts(&toggled), texts(&state));
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        let state = add_all(&["a", "b"]);
        let id = state.items[0].id.clone();

        let round_trip = state.toggle(&id).toggle(&id);

        assert_eq!(round_trip, state);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let state = add_all(&["a", "b"]);

        assert_eq!(state.toggle("no-such-id"), state);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let state = add_all(&["a", "b", "c"]);
        let id = state.items[1].id.clone();

        let deleted = state.delete(&id);

        assert_eq!(texts(&deleted), vec!["c", "a"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let state = add_all(&["a", "b"]);

        assert_eq!(state.delete("no-such-id"), state);
    }

    #[test]
    fn test_clear_completed_keeps_active_in_order() {
        let state = add_all(&["a", "b", "c", "d"]);
        let state = state
            .toggle(&state.items[0].id.clone())
            .toggle(&state.items[2].id.clone());
        let active_before = state.active_count();

        let cleared = state.clear_completed();

        assert_eq!(cleared.completed_count(), 0);
        assert_eq!(cleared.active_count(), active_before);
        assert_eq!(texts(&cleared), vec!["c", "a"]);
    }

    #[test]
    fn test_clear_completed_without_completed_is_noop() {
        let state = add_all(&["a", "b"]);

        assert_eq!(state.clear_completed(), state);
    }

    #[test]
    fn test_set_filter_leaves_items_untouched() {
        let state = add_all(&["a", "b"]);

        let filtered = state.set_filter(Filter::Completed);

        assert_eq!(filtered.filter, Filter::Completed);
        assert_eq!(filtered.items, state.items);
        assert_eq!(filtered.draft, state.draft);
    }

    #[test]
    fn test_visible_items_per_filter() {
        let state = add_all(&["a", "b", "c"]);
        let state = state.toggle(&state.items[1].id.clone());

        let all: Vec<String> = state
            .visible_items()
            .into_iter()
            .map(|item| item.text)
            .collect();
        assert_eq!(all, vec!["c", "b", "a"]);

        let active: Vec<String> = state
            .set_filter(Filter::Active)
            .visible_items()
            .into_iter()
            .map(|item| item.text)
            .collect();
        assert_eq!(active, vec!["c", "a"]);

        let completed: Vec<String> = state
            .set_filter(Filter::Completed)
            .visible_items()
            .into_iter()
            .map(|item| item.text)
            .collect();
        assert_eq!(completed, vec!["b"]);
    }

    #[test]
    fn test_counts_track_completion() {
        let state = add_all(&["a", "b", "c"]);
        assert_eq!(state.active_count(), 3);
        assert_eq!(state.completed_count(), 0);

        let state = state.toggle(&state.items[0].id.clone());
        assert_eq!(state.active_count(), 2);
        assert_eq!(state.completed_count(), 1);
    }

    #[test]
    fn test_full_session_flow() {
        let state = ListState::new().add("Buy milk").add("Walk dog");
        assert_eq!(texts(&state), vec!["Walk dog", "Buy milk"]);

        let buy_milk_id = state.items[1].id.clone();
        let state = state.toggle(&buy_milk_id);
        assert_eq!(state.active_count(), 1);
        assert_eq!(state.completed_count(), 1);

        let state = state.set_filter(Filter::Completed);
        let visible: Vec<String> = state
            .visible_items()
            .into_iter()
            .map(|item| item.text)
            .collect();
        assert_eq!(visible, vec!["Buy milk"]);

        let state = state.clear_completed();
        assert_eq!(texts(&state), vec!["Walk dog"]);

        let state = state.set_filter(Filter::All);
        let visible: Vec<String> = state
            .visible_items()
            .into_iter()
            .map(|item| item.text)
            .collect();
        assert_eq!(visible, vec!["Walk dog"]);
        assert_eq!(state.active_count(), 1);
        assert_eq!(state.completed_count(), 0);
    }
}
