//! Import Dialog Component
//!
//! Modal with a file chooser. OK starts the read, parse and replace
//! pipeline; controls are disabled while an import is running.

use leptos::html::Input;
use leptos::prelude::*;
use tally_core::config::ACCEPTED_FILE_TYPES;
use tally_core::ImportPhase;

use crate::context::use_app_context;
use crate::store::{close_import_dialog, use_ui_store, UiStateStoreFields};

#[component]
pub fn ImportDialog() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();
    let file_input = NodeRef::<Input>::new();
    let (chosen, set_chosen) = signal(Option::<String>::None);

    let busy = move || ui.import_phase().get().is_busy();

    let on_change = move |_: web_sys::Event| {
        let name = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        set_chosen.set(name);
    };

    let on_ok = move |_: web_sys::MouseEvent| {
        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            ctx.import_file(file);
        }
    };

    let on_cancel = move |_: web_sys::MouseEvent| {
        set_chosen.set(None);
        close_import_dialog(&ui);
    };

    let status_class = move || match ui.import_phase().get() {
        ImportPhase::Failed(_) => "import-status error",
        _ => "import-status",
    };

    view! {
        <Show when=move || ui.dialog_open().get()>
            <div class="dialog-backdrop">
                <div class="dialog" role="dialog" aria-modal="true">
                    <div class="dialog-header">"Import file"</div>
                    <div class="dialog-body">
                        <input
                            type="file"
                            accept=ACCEPTED_FILE_TYPES
                            node_ref=file_input
                            disabled=busy
                            on:change=on_change
                        />
                        {move || ui.import_phase().get().message().map(|msg| view! {
                            <p class=status_class>{msg}</p>
                        })}
                    </div>
                    <div class="dialog-footer">
                        <button class="text-btn" disabled=busy on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button
                            class="text-btn primary"
                            disabled=move || busy() || chosen.get().is_none()
                            on:click=on_ok
                        >
                            "OK"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
