//! Counter Input Component
//!
//! Minus / value / plus control. Never goes below zero.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn CounterInput(
    /// Row of the record within the selected list
    index: usize,
    /// Record the counter belongs to
    name: String,
    /// Current count
    value: u32,
) -> impl IntoView {
    let ctx = use_app_context();
    let name = StoredValue::new(name);
    let change = move |next: u32| name.with_value(|n| ctx.on_counter_changed(index, n, next));

    view! {
        <div class="counter-input">
            <button
                class="counter-btn decrement"
                disabled={value == 0}
                on:click=move |_| change(value.saturating_sub(1))
            >
                "−"
            </button>
            <span class="counter-value">{value}</span>
            <button
                class="counter-btn increment"
                on:click=move |_| change(value.saturating_add(1))
            >
                "+"
            </button>
        </div>
    }
}
