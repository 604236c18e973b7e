//! Import Pipeline State
//!
//! Idle -> Reading -> Parsing -> Ready | Failed. A new import can only
//! start when no read or parse is in flight.

use crate::board::ImportSummary;
use crate::error::{TallyError, TallyResult};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImportPhase {
    #[default]
    Idle,
    Reading,
    Parsing,
    Ready(ImportSummary),
    Failed(String),
}

impl ImportPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, ImportPhase::Reading | ImportPhase::Parsing)
    }

    /// Enter `Reading`; rejected while another import is in flight
    pub fn begin_read(&mut self) -> TallyResult<()> {
        if self.is_busy() {
            return Err(TallyError::ImportBusy);
        }
        *self = ImportPhase::Reading;
        Ok(())
    }

    /// File text arrived (or the read failed)
    pub fn finish_read(&mut self, read: &TallyResult<String>) {
        if *self != ImportPhase::Reading {
            log::warn!("[IMPORT] read finished while {:?}", self);
        }
        *self = match read {
            Ok(_) => ImportPhase::Parsing,
            Err(e) => ImportPhase::Failed(e.to_string()),
        };
    }

    /// Parsing and storing completed (or failed)
    pub fn finish_parse(&mut self, outcome: &TallyResult<ImportSummary>) {
        *self = match outcome {
            Ok(summary) => ImportPhase::Ready(*summary),
            Err(e) => ImportPhase::Failed(e.to_string()),
        };
    }

    pub fn reset(&mut self) {
        if !self.is_busy() {
            *self = ImportPhase::Idle;
        }
    }

    /// Status line for the import dialog
    pub fn message(&self) -> Option<String> {
        match self {
            ImportPhase::Idle => None,
            ImportPhase::Reading => Some("Reading file...".to_string()),
            ImportPhase::Parsing => Some("Parsing...".to_string()),
            ImportPhase::Ready(s) => Some(format!("Imported {} lists, {} items", s.groups, s.records)),
            ImportPhase::Failed(msg) => Some(msg.clone()),
        }
    }
}
