//! Group Toolbar Component
//!
//! List dropdown and clear button on the left, import button on the right.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{open_import_dialog, use_ui_store};

#[component]
pub fn GroupToolbar() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();

    let on_select = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        ctx.on_group_selected((!value.is_empty()).then_some(value));
    };

    view! {
        <div class="toolbar">
            <div class="toolbar-left">
                <select class="group-select" on:change=on_select>
                    <option value="" disabled=true prop:selected=move || ctx.current_selection().is_none()>
                        "Select a list"
                    </option>
                    <For
                        each=move || ctx.current_groups()
                        key=|option| option.value.clone()
                        children=move |option| {
                            let value = option.value.clone();
                            let is_selected = move || ctx.current_selection().as_deref() == Some(value.as_str());
                            view! {
                                <option value=option.value prop:selected=is_selected>
                                    {option.label}
                                </option>
                            }
                        }
                    />
                </select>
                <button
                    class="icon-btn clear-btn"
                    title="Reset all counters in this list"
                    disabled=move || ctx.current_selection().is_none()
                    on:click=move |_| ctx.on_clear_requested()
                >
                    "Clear"
                </button>
            </div>
            <div class="toolbar-right">
                <button
                    class="icon-btn import-btn"
                    title="Import lists from a CSV file"
                    on:click=move |_| open_import_dialog(&ui)
                >
                    "Import"
                </button>
            </div>
        </div>
    }
}
