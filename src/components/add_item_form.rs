//! Add Item Form Component
//!
//! Input field plus submit button for creating new items.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::ListContext;

/// Form for creating new items from the pending input text
#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_context::<ListContext>().expect("ListContext should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add();
    };

    let draft_is_blank = move || ctx.state.get().draft.trim().is_empty();

    view! {
        <form class="add-item-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || ctx.state.get().draft
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    ctx.set_draft(input.value());
                }
            />
            <button type="submit" disabled=draft_is_blank>"Add"</button>
        </form>
    }
}
