//! UI Components
//!
//! Leptos components for the counter widget.

mod group_toolbar;
mod record_table;
mod counter_input;
mod import_dialog;
mod notice_bar;

pub use group_toolbar::GroupToolbar;
pub use record_table::RecordTable;
pub use counter_input::CounterInput;
pub use import_dialog::ImportDialog;
pub use notice_bar::NoticeBar;
