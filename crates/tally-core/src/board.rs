//! Persisted Counter Board
//!
//! `BoardState` is the whole persisted value (groups, dropdown options,
//! selection). `CounterBoard` pairs it with a `KeyValueStore` and writes the
//! full state back after every successful mutation.

use serde::{Deserialize, Serialize};

use crate::config::{ImportOptions, SAMPLE_CSV, STORAGE_KEY};
use crate::error::{RestoreError, StorageError, TallyError, TallyResult};
use crate::models::{GroupOption, GroupedData, Record};
use crate::parser::{parse_csv, parse_grouped};
use crate::storage::KeyValueStore;

/// Counts reported after a successful import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub groups: usize,
    pub records: usize,
}

/// Result of an import that parsed and was applied in memory.
/// `storage_error` is set when saving the new board failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub summary: ImportSummary,
    pub storage_error: Option<StorageError>,
}

/// Everything the widget persists, stored as one document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardState {
    pub data: GroupedData,
    pub options: Vec<GroupOption>,
    pub selected: Option<String>,
}

impl BoardState {
    pub fn from_data(data: GroupedData) -> Self {
        let options = data.options();
        Self {
            data,
            options,
            selected: None,
        }
    }

    /// Board built from the bundled sample list, nothing selected
    pub fn sample() -> Self {
        Self::from_data(parse_csv(SAMPLE_CSV).unwrap_or_default())
    }

    /// Swap in new groups; options follow the new key set and a selection
    /// naming a vanished group is cleared.
    pub fn replace_all(&mut self, data: GroupedData) {
        self.options = data.options();
        self.data = data;
        self.revalidate_selection();
    }

    fn revalidate_selection(&mut self) {
        if let Some(selected) = &self.selected {
            if !self.data.contains(selected) {
                log::info!("[STORE] selection '{}' no longer exists, cleared", selected);
                self.selected = None;
            }
        }
    }

    /// Set the counter of the first record named `name` in `group`
    pub fn set_counter(&mut self, group: &str, name: &str, value: u32) -> TallyResult<()> {
        let record = self
            .group_records_mut(group)?
            .iter_mut()
            .find(|r| r.name == name)
            .ok_or_else(|| not_found(group, name))?;
        record.counter = value;
        Ok(())
    }

    /// Set the counter of the record at `index`, which must be named `name`.
    /// Rows with repeated names stay independent.
    pub fn set_counter_at(&mut self, group: &str, index: usize, name: &str, value: u32) -> TallyResult<()> {
        let record = self
            .group_records_mut(group)?
            .get_mut(index)
            .filter(|r| r.name == name)
            .ok_or_else(|| not_found(group, name))?;
        record.counter = value;
        Ok(())
    }

    fn group_records_mut(&mut self, group: &str) -> TallyResult<&mut Vec<Record>> {
        self.data
            .records_mut(group)
            .ok_or_else(|| TallyError::GroupNotFound(group.to_string()))
    }

    /// Zero every counter in `group`. Returns false when there is no such group.
    pub fn clear_counters(&mut self, group: Option<&str>) -> bool {
        let Some(records) = group.and_then(|g| self.data.records_mut(g)) else {
            return false;
        };
        for record in records.iter_mut() {
            record.counter = 0;
        }
        true
    }

    /// Change the selection; only existing groups can be selected
    pub fn select(&mut self, group: Option<&str>) -> TallyResult<()> {
        match group {
            Some(name) if !self.data.contains(name) => {
                Err(TallyError::GroupNotFound(name.to_string()))
            }
            _ => {
                self.selected = group.map(str::to_string);
                Ok(())
            }
        }
    }

    /// Records of the selected group; empty when nothing is selected
    pub fn current_records(&self) -> &[Record] {
        self.selected
            .as_deref()
            .and_then(|g| self.data.records(g))
            .unwrap_or_default()
    }

    /// Bring a deserialized value back in line with its own data
    fn normalize(mut self) -> Result<Self, RestoreError> {
        if let Some(name) = self.data.duplicate_name() {
            return Err(RestoreError(format!("group '{}' stored twice", name)));
        }
        let options = self.data.options();
        if options != self.options {
            log::warn!("[STORE] stored options out of date, regenerated");
            self.options = options;
        }
        self.revalidate_selection();
        Ok(self)
    }
}

fn not_found(group: &str, name: &str) -> TallyError {
    TallyError::NotFound {
        group: group.to_string(),
        record: name.to_string(),
    }
}

/// Board state bound to durable storage
#[derive(Debug)]
pub struct CounterBoard<S> {
    state: BoardState,
    storage: S,
}

impl<S: KeyValueStore> CounterBoard<S> {
    pub fn new(storage: S, state: BoardState) -> Self {
        Self { state, storage }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Reload from storage. Nothing stored yet gives the sample board.
    /// On error the current state is left untouched.
    pub fn restore(&mut self) -> Result<(), RestoreError> {
        let stored = self
            .storage
            .load(STORAGE_KEY)
            .map_err(|e| RestoreError(e.to_string()))?;

        self.state = match stored {
            Some(raw) => serde_json::from_str::<BoardState>(&raw)
                .map_err(|e| RestoreError(e.to_string()))?
                .normalize()?,
            None => {
                log::info!("[STORE] nothing saved yet, using sample lists");
                BoardState::sample()
            }
        };
        Ok(())
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.state).map_err(|e| StorageError(e.to_string()))?;
        self.storage.save(STORAGE_KEY, &raw)
    }

    /// Replace all groups and persist
    pub fn replace_all(&mut self, data: GroupedData) -> TallyResult<()> {
        self.state.replace_all(data);
        self.persist()?;
        Ok(())
    }

    pub fn set_counter(&mut self, group: &str, name: &str, value: u32) -> TallyResult<()> {
        self.state.set_counter(group, name, value)?;
        self.persist()?;
        Ok(())
    }

    pub fn clear_counters(&mut self, group: Option<&str>) -> TallyResult<()> {
        if self.state.clear_counters(group) {
            self.persist()?;
        }
        Ok(())
    }

    pub fn select(&mut self, group: Option<&str>) -> TallyResult<()> {
        self.state.select(group)?;
        self.persist()?;
        Ok(())
    }

    // ========================
    // Presentation Operations
    // ========================

    /// Parse imported text and replace the board with it.
    /// A parse error leaves the board unchanged. A failed save does not undo
    /// the import; it is handed back in the outcome.
    pub fn on_file_imported(&mut self, text: &str, options: ImportOptions) -> TallyResult<ImportOutcome> {
        let data = parse_grouped(text, options)?;
        let summary = ImportSummary {
            groups: data.len(),
            records: data.record_count(),
        };
        self.state.replace_all(data);
        Ok(ImportOutcome {
            summary,
            storage_error: self.persist().err(),
        })
    }

    /// Set a counter in the selected group
    pub fn on_counter_changed(&mut self, name: &str, value: u32) -> TallyResult<()> {
        let group = self.state.selected.clone().unwrap_or_default();
        self.set_counter(&group, name, value)
    }

    /// Set the counter of one row of the selected group
    pub fn on_row_counter_changed(&mut self, index: usize, name: &str, value: u32) -> TallyResult<()> {
        let group = self.state.selected.clone().unwrap_or_default();
        self.state.set_counter_at(&group, index, name, value)?;
        self.persist()?;
        Ok(())
    }

    /// Zero the selected group's counters
    pub fn on_clear_requested(&mut self) -> TallyResult<()> {
        let group = self.state.selected.clone();
        self.clear_counters(group.as_deref())
    }

    pub fn on_group_selected(&mut self, name: Option<&str>) -> TallyResult<()> {
        self.select(name)
    }

    pub fn current_groups(&self) -> &[GroupOption] {
        &self.state.options
    }

    pub fn current_selection(&self) -> Option<&str> {
        self.state.selected.as_deref()
    }

    pub fn current_records(&self) -> &[Record] {
        self.state.current_records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    /// Backend that rejects every read and write
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError("quota".to_string()))
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError("quota".to_string()))
        }
    }

    fn failing_board() -> CounterBoard<FailingStore> {
        let data = parse_csv("A,x\n,y\nB,z").unwrap();
        CounterBoard::new(FailingStore, BoardState::from_data(data))
    }

    fn board() -> CounterBoard<MemoryStore> {
        let mut board = CounterBoard::new(MemoryStore::new(), BoardState::default());
        board
            .on_file_imported("A,x\n,y\nB,z", ImportOptions::default())
            .unwrap();
        board
    }

    fn stored(board: &CounterBoard<MemoryStore>) -> BoardState {
        let raw = board.storage.load(STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_restore_without_saved_state_uses_sample() {
        let mut board = CounterBoard::new(MemoryStore::new(), BoardState::default());
        board.restore().unwrap();
        assert_eq!(board.state(), &BoardState::sample());
        assert_eq!(board.current_selection(), None);
        assert!(!board.current_groups().is_empty());
    }

    #[test]
    fn test_restore_corrupt_value_fails_and_keeps_state() {
        let storage = MemoryStore::new();
        storage.save(STORAGE_KEY, "{not json").unwrap();
        let mut board = CounterBoard::new(storage, BoardState::default());
        assert!(board.restore().is_err());
        assert_eq!(board.state(), &BoardState::default());
    }

    #[test]
    fn test_restore_rejects_duplicate_groups() {
        let storage = MemoryStore::new();
        let raw = r#"{"data":[{"name":"A","records":[]},{"name":"A","records":[]}],"options":[],"selected":null}"#;
        storage.save(STORAGE_KEY, raw).unwrap();
        let mut board = CounterBoard::new(storage, BoardState::default());
        let err = board.restore().unwrap_err();
        assert!(err.to_string().contains("'A'"));
    }

    #[test]
    fn test_replace_all_roundtrips_through_storage() {
        let mut board = board();
        board.on_group_selected(Some("A")).unwrap();
        board.on_counter_changed("y", 4).unwrap();

        let mut restored = CounterBoard::new(&board.storage, BoardState::default());
        restored.restore().unwrap();
        assert_eq!(restored.state(), board.state());
        assert_eq!(restored.state().data.names().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_set_counter_touches_only_target() {
        let mut board = board();
        let before = board.state().clone();
        board.set_counter("A", "y", 7).unwrap();

        let data = &board.state().data;
        assert_eq!(data.records("A").unwrap()[1].counter, 7);
        assert_eq!(data.records("A").unwrap()[0], before.data.records("A").unwrap()[0]);
        assert_eq!(data.records("B"), before.data.records("B"));
        assert_eq!(stored(&board).data, *data);
    }

    #[test]
    fn test_set_counter_missing_record_is_not_found() {
        let mut board = board();
        let before = board.state().clone();
        let err = board.set_counter("A", "nope", 1).unwrap_err();
        assert!(err.is_warning());
        assert!(board.set_counter("C", "x", 1).is_err());
        assert_eq!(board.state(), &before);
    }

    #[test]
    fn test_counter_change_without_selection_is_not_found() {
        let mut board = board();
        assert_eq!(
            board.on_counter_changed("x", 1),
            Err(TallyError::GroupNotFound(String::new()))
        );
    }

    #[test]
    fn test_select_unknown_group_names_only_the_group() {
        let mut board = board();
        let err = board.on_group_selected(Some("zzz")).unwrap_err();
        assert_eq!(err, TallyError::GroupNotFound("zzz".to_string()));
        assert_eq!(err.to_string(), "no group 'zzz'");
    }

    #[test]
    fn test_row_counter_keeps_duplicate_names_apart() {
        let mut board = board();
        board.on_file_imported("A,x\n,x\n,y", ImportOptions::default()).unwrap();
        board.on_group_selected(Some("A")).unwrap();

        board.on_row_counter_changed(1, "x", 3).unwrap();
        let counters: Vec<_> = board.current_records().iter().map(|r| r.counter).collect();
        assert_eq!(counters, vec![0, 3, 0]);
        assert_eq!(stored(&board).data, board.state().data);
    }

    #[test]
    fn test_row_counter_rejects_stale_row() {
        let mut board = board();
        board.on_group_selected(Some("A")).unwrap();
        let before = board.state().clone();

        let err = board.on_row_counter_changed(0, "y", 2).unwrap_err();
        assert!(matches!(err, TallyError::NotFound { .. }));
        assert!(board.on_row_counter_changed(9, "x", 2).is_err());
        assert_eq!(board.state(), &before);
    }

    #[test]
    fn test_clear_counters_idempotent() {
        let mut board = board();
        board.on_group_selected(Some("A")).unwrap();
        board.on_counter_changed("x", 2).unwrap();
        board.on_counter_changed("y", 3).unwrap();
        board.set_counter("B", "z", 5).unwrap();

        board.on_clear_requested().unwrap();
        let once = board.state().clone();
        board.on_clear_requested().unwrap();
        assert_eq!(board.state(), &once);

        let names: Vec<_> = board.current_records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
        assert!(board.current_records().iter().all(|r| r.counter == 0));
        assert_eq!(board.state().data.records("B").unwrap()[0].counter, 5);
    }

    #[test]
    fn test_clear_without_selection_is_noop() {
        let mut board = board();
        let before = board.state().clone();
        board.on_clear_requested().unwrap();
        board.clear_counters(Some("missing")).unwrap();
        assert_eq!(board.state(), &before);
    }

    #[test]
    fn test_options_follow_reimport() {
        let mut board = board();
        board
            .on_file_imported("C,1\nD,2\n,3", ImportOptions::default())
            .unwrap();
        let values: Vec<_> = board.current_groups().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["C", "D"]);
        assert!(board.current_groups().iter().all(|o| o.label == o.value));
    }

    #[test]
    fn test_reimport_keeps_valid_selection() {
        let mut board = board();
        board.on_group_selected(Some("B")).unwrap();
        board.on_file_imported("B,q\nC,r", ImportOptions::default()).unwrap();
        assert_eq!(board.current_selection(), Some("B"));
        assert_eq!(board.current_records(), &[Record::new("q")]);
    }

    #[test]
    fn test_reimport_clears_dangling_selection() {
        let mut board = board();
        board.on_group_selected(Some("A")).unwrap();
        let outcome = board
            .on_file_imported("C,1\n,2\n", ImportOptions::default())
            .unwrap();
        assert_eq!(outcome.summary, ImportSummary { groups: 1, records: 2 });
        assert_eq!(outcome.storage_error, None);
        assert_eq!(board.current_selection(), None);
        assert!(board.current_records().is_empty());
        assert_eq!(stored(&board).selected, None);
    }

    #[test]
    fn test_bad_import_leaves_board_intact() {
        let mut board = board();
        let before = board.state().clone();
        let err = board
            .on_file_imported(",orphan", ImportOptions::default())
            .unwrap_err();
        assert!(matches!(err, TallyError::Parse(_)));
        assert_eq!(board.state(), &before);
    }

    #[test]
    fn test_select_unknown_group_rejected() {
        let mut board = board();
        assert!(board.on_group_selected(Some("zzz")).is_err());
        assert_eq!(board.current_selection(), None);
        board.on_group_selected(Some("A")).unwrap();
        board.on_group_selected(None).unwrap();
        assert_eq!(board.current_selection(), None);
    }

    #[test]
    fn test_restore_read_failure_keeps_state() {
        let mut board = failing_board();
        let before = board.state().clone();
        let err = board.restore().unwrap_err();
        assert!(err.to_string().contains("quota"));
        assert_eq!(board.state(), &before);
    }

    #[test]
    fn test_write_failure_keeps_counter_change() {
        let mut board = failing_board();
        let err = board.set_counter("A", "y", 4).unwrap_err();
        assert!(matches!(err, TallyError::Storage(_)));
        assert_eq!(board.state().data.records("A").unwrap()[1].counter, 4);
    }

    #[test]
    fn test_write_failure_keeps_cleared_counters() {
        let mut board = failing_board();
        let _ = board.set_counter("A", "x", 2);
        let err = board.clear_counters(Some("A")).unwrap_err();
        assert!(matches!(err, TallyError::Storage(_)));
        assert!(board.state().data.records("A").unwrap().iter().all(|r| r.counter == 0));
    }

    #[test]
    fn test_write_failure_keeps_selection() {
        let mut board = failing_board();
        let err = board.select(Some("B")).unwrap_err();
        assert!(matches!(err, TallyError::Storage(_)));
        assert_eq!(board.current_selection(), Some("B"));
    }

    #[test]
    fn test_import_applied_when_save_fails() {
        let mut board = failing_board();
        let outcome = board
            .on_file_imported("C,1\n,2", ImportOptions::default())
            .unwrap();
        assert_eq!(outcome.summary, ImportSummary { groups: 1, records: 2 });
        assert_eq!(outcome.storage_error, Some(StorageError("quota".to_string())));
        assert_eq!(board.state().data.names().collect::<Vec<_>>(), vec!["C"]);
    }
}
