//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Holds presentation-only state; the counter board lives in `AppContext`.

use leptos::prelude::*;
use reactive_stores::Store;
use tally_core::ImportPhase;

/// Presentation state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Import dialog visible
    pub dialog_open: bool,
    /// Progress of the current (or last) import
    pub import_phase: ImportPhase,
    /// Error shown to the user until dismissed or timed out
    pub notice: Option<Notice>,
    /// Id handed to the next notice
    pub notice_seq: u64,
}

/// A user-visible message; `seq` tells repeated texts apart
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub message: String,
}

/// True while `current` is still the notice numbered `seq`
pub fn is_current_notice(current: Option<&Notice>, seq: u64) -> bool {
    current.is_some_and(|n| n.seq == seq)
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show the import dialog with a fresh status line
pub fn open_import_dialog(store: &UiStore) {
    store.import_phase().write().reset();
    store.dialog_open().set(true);
}

pub fn close_import_dialog(store: &UiStore) {
    store.dialog_open().set(false);
}

pub fn show_notice(store: &UiStore, message: String) {
    let seq = store.notice_seq().get_untracked() + 1;
    store.notice_seq().set(seq);
    store.notice().set(Some(Notice { seq, message }));
}

pub fn dismiss_notice(store: &UiStore) {
    store.notice().set(None);
}
