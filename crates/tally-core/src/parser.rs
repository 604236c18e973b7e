//! CSV Grouping Parser
//!
//! Two columns per line: `parent,child`. A non-empty parent starts a group;
//! rows with an empty parent append to the most recent group.
//! No quoting or escaping of the separator is supported.

use crate::config::ImportOptions;
use crate::error::ParseError;
use crate::models::{GroupedData, Record};

/// Parse with the default options (comma separated)
pub fn parse_csv(text: &str) -> Result<GroupedData, ParseError> {
    parse_grouped(text, ImportOptions::default())
}

/// Parse grouped two-column text.
///
/// Blank lines are skipped. The first malformed line rejects the whole input.
/// A parent label seen twice empties its earlier list; the group keeps its
/// first position.
pub fn parse_grouped(text: &str, options: ImportOptions) -> Result<GroupedData, ParseError> {
    let separator = options.separator;
    let mut output = GroupedData::new();
    let mut current: Option<&str> = None;

    for (index, raw) in text.split('\n').enumerate() {
        let line_no = index + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(separator);
        let parent = fields.next().unwrap_or_default();
        let Some(element) = fields.next() else {
            return Err(ParseError::MissingSeparator {
                line: line_no,
                separator,
            });
        };

        if !parent.is_empty() {
            if output.start_group(parent) {
                log::warn!(
                    "[PARSE] line {}: group '{}' repeated, earlier items dropped",
                    line_no,
                    parent
                );
            }
            current = Some(parent);
        }

        let group = current.ok_or(ParseError::NoCurrentGroup { line: line_no })?;
        if let Some(records) = output.records_mut(group) {
            records.push(Record::new(element));
        }
    }

    if output.is_empty() {
        return Err(ParseError::Empty);
    }

    log::debug!(
        "[PARSE] {} groups, {} items",
        output.len(),
        output.record_count()
    );
    Ok(output)
}
