//! Application Context
//!
//! The counter board and the operations the components call, provided via
//! the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tally_core::config::ImportOptions;
use tally_core::{CounterBoard, GroupOption, ImportOutcome, Record, TallyError, TallyResult};

use crate::browser::{read_file_text, BrowserStorage};
use crate::store::{close_import_dialog, show_notice, UiStateStoreFields, UiStore};

pub type Board = CounterBoard<BrowserStorage>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Persisted groups, options and selection
    board: RwSignal<Board>,
    /// Dialog, import progress, notices
    ui: UiStore,
}

impl AppContext {
    pub fn new(board: RwSignal<Board>, ui: UiStore) -> Self {
        Self { board, ui }
    }

    /// Log a failure; anything but a warning is also shown to the user
    pub fn report(&self, err: TallyError) {
        if err.is_warning() {
            log::warn!("[STORE] {}", err);
            return;
        }
        log::error!("[STORE] {}", err);
        show_notice(&self.ui, err.to_string());
    }

    fn apply(&self, outcome: TallyResult<()>) {
        if let Err(e) = outcome {
            self.report(e);
        }
    }

    // ========================
    // Mutations
    // ========================

    pub fn on_file_imported(&self, text: &str) -> TallyResult<ImportOutcome> {
        self.board
            .write()
            .on_file_imported(text, ImportOptions::default())
    }

    /// Set the counter of one table row; `index` keeps repeated names apart
    pub fn on_counter_changed(&self, index: usize, name: &str, value: u32) {
        let outcome = self.board.write().on_row_counter_changed(index, name, value);
        self.apply(outcome);
    }

    pub fn on_clear_requested(&self) {
        let outcome = self.board.write().on_clear_requested();
        self.apply(outcome);
    }

    pub fn on_group_selected(&self, name: Option<String>) {
        let outcome = self.board.write().on_group_selected(name.as_deref());
        self.apply(outcome);
    }

    /// Read a file and replace the board with its contents.
    /// Ignored while another import is still running.
    pub fn import_file(&self, file: web_sys::File) {
        let ctx = *self;
        let started = ctx.ui.import_phase().write().begin_read();
        if let Err(e) = started {
            ctx.report(e);
            return;
        }

        spawn_local(async move {
            log::info!("[IMPORT] reading {} ({} bytes)", file.name(), file.size());
            let read = read_file_text(&file).await.map_err(TallyError::from);
            ctx.ui.import_phase().write().finish_read(&read);
            let text = match read {
                Ok(text) => text,
                Err(e) => return ctx.report(e),
            };

            let outcome = ctx.on_file_imported(&text);
            let parsed = outcome.as_ref().map(|o| o.summary).map_err(|e| e.clone());
            ctx.ui.import_phase().write().finish_parse(&parsed);
            match outcome {
                Ok(ImportOutcome { summary, storage_error }) => {
                    log::info!(
                        "[IMPORT] {} lists, {} items from {}",
                        summary.groups,
                        summary.records,
                        file.name()
                    );
                    close_import_dialog(&ctx.ui);
                    // Applied in memory but not saved
                    if let Some(e) = storage_error {
                        ctx.report(e.into());
                    }
                }
                Err(e) => ctx.report(e),
            }
        });
    }

    // ========================
    // Views
    // ========================

    pub fn current_groups(&self) -> Vec<GroupOption> {
        self.board.with(|b| b.current_groups().to_vec())
    }

    pub fn current_selection(&self) -> Option<String> {
        self.board.with(|b| b.current_selection().map(str::to_string))
    }

    pub fn current_records(&self) -> Vec<Record> {
        self.board.with(|b| b.current_records().to_vec())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
