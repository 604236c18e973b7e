//! Tally App
//!
//! Restores the saved board, provides context and lays out the widget.

use leptos::prelude::*;
use reactive_stores::Store;
use tally_core::{BoardState, CounterBoard};

use crate::browser::BrowserStorage;
use crate::components::{GroupToolbar, ImportDialog, NoticeBar, RecordTable};
use crate::context::AppContext;
use crate::store::{show_notice, UiState};

#[component]
pub fn App() -> impl IntoView {
    let ui = Store::new(UiState::default());

    // Restore saved counters; fall back to the sample lists on failure
    let mut board = CounterBoard::new(BrowserStorage, BoardState::sample());
    if let Err(e) = board.restore() {
        log::error!("[APP] {}", e);
        show_notice(&ui, e.to_string());
    }
    log::info!(
        "[APP] {} lists, selected {:?}",
        board.current_groups().len(),
        board.current_selection()
    );

    // Provide context to all children
    provide_context(ui);
    provide_context(AppContext::new(RwSignal::new(board), ui));

    view! {
        <main class="home">
            <GroupToolbar />
            <NoticeBar />
            <RecordTable />
            <ImportDialog />
        </main>
    }
}
