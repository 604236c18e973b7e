//! Tally Core
//!
//! Browser-independent logic for the grouped counter widget:
//! - parser: two-column CSV into ordered groups
//! - board: counter state and its persistence
//! - import: import pipeline state machine

pub mod config;
mod error;
mod models;
mod parser;
mod storage;
mod board;
mod import;

pub use error::{ParseError, ReadFailure, RestoreError, StorageError, TallyError, TallyResult};
pub use models::{Group, GroupOption, GroupedData, Record};
pub use parser::{parse_csv, parse_grouped};
pub use storage::{KeyValueStore, MemoryStore};
pub use board::{BoardState, CounterBoard, ImportOutcome, ImportSummary};
pub use import::ImportPhase;
