//! Data Model
//!
//! Records grouped by name, in source order.

use serde::{Deserialize, Serialize};

/// A single counted item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Item label
    pub name: String,
    /// Current count (never negative)
    pub counter: u32,
}

impl Record {
    /// Create a record with its counter at zero
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            counter: 0,
        }
    }
}

/// A named list of records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub records: Vec<Record>,
}

/// Dropdown entry derived from a group name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOption {
    pub label: String,
    pub value: String,
}

/// Ordered mapping from group name to its records
///
/// Groups keep first-appearance order. Stored as a list so the order
/// survives a JSON round trip.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupedData {
    groups: Vec<Group>,
}

impl GroupedData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of records across all groups
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Records of a group, if it exists
    pub fn records(&self, name: &str) -> Option<&[Record]> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.records.as_slice())
    }

    pub fn records_mut(&mut self, name: &str) -> Option<&mut Vec<Record>> {
        self.groups
            .iter_mut()
            .find(|g| g.name == name)
            .map(|g| &mut g.records)
    }

    /// Create a group, or empty an existing one in place.
    /// Returns true when an existing group was reset.
    pub fn start_group(&mut self, name: &str) -> bool {
        match self.records_mut(name) {
            Some(records) => {
                records.clear();
                true
            }
            None => {
                self.groups.push(Group {
                    name: name.to_string(),
                    records: Vec::new(),
                });
                false
            }
        }
    }

    /// One dropdown option per group, label == value == group name
    pub fn options(&self) -> Vec<GroupOption> {
        self.names()
            .map(|name| GroupOption {
                label: name.to_string(),
                value: name.to_string(),
            })
            .collect()
    }

    /// Name of the first group that appears more than once
    pub fn duplicate_name(&self) -> Option<&str> {
        self.groups
            .iter()
            .enumerate()
            .find(|(i, g)| self.groups[..*i].iter().any(|prev| prev.name == g.name))
            .map(|(_, g)| g.name.as_str())
    }
}
