//! Record Table Component
//!
//! One row per record of the selected list.

use leptos::prelude::*;

use crate::components::CounterInput;
use crate::context::use_app_context;

#[component]
pub fn RecordTable() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <table class="record-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Counter"</th>
                </tr>
            </thead>
            <tbody>
                // Names can repeat within a list, so the row index is part of the key
                <For
                    each=move || ctx.current_records().into_iter().enumerate()
                    key=|(index, record)| (*index, record.name.clone(), record.counter)
                    children=move |(index, record)| {
                        let label = record.name.clone();
                        view! {
                            <tr>
                                <td class="record-name">{label}</td>
                                <td class="record-counter">
                                    <CounterInput index=index name=record.name value=record.counter />
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
        <Show when=move || ctx.current_records().is_empty()>
            <p class="empty-hint">
                {move || if ctx.current_selection().is_some() {
                    "This list is empty."
                } else {
                    "Select a list to start counting."
                }}
            </p>
        </Show>
    }
}
