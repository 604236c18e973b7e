//! Configuration
//!
//! Compile-time settings shared by the core and the UI.

/// localStorage key holding the whole persisted board
pub const STORAGE_KEY: &str = "tally.board.v1";

/// Field separator used when none is given
pub const DEFAULT_SEPARATOR: char = ',';

/// File types offered by the import dialog
pub const ACCEPTED_FILE_TYPES: &str = ".csv,text/csv";

/// How long an error notice stays on screen
pub const NOTICE_TIMEOUT_MS: u32 = 6_000;

/// Board shown on first start, before anything was imported
pub const SAMPLE_CSV: &str = "\
Groceries,Apples
,Bread
,Eggs
,Milk
Workout,Push-ups
,Squats
,Plank (minutes)
Reading,Chapters
,Pages
";

/// Options for turning imported text into groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    pub separator: char,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}
