//! Editable find/replace rows and their collection into a rule mapping
//!
//! Rows live in an arena keyed by [`RowId`]. Nothing is validated while
//! editing; [`ReplacementSet::collect`] turns the rows into the mapping
//! sent with a submission.

use std::collections::BTreeMap;

/// Handle to a row in a [`ReplacementSet`]
///
/// Ids are allocated monotonically and never reused, so a stale handle
/// cannot address a newer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

/// One editable find/replace row, untrimmed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplacementRow {
    /// Exact text to find
    pub find: String,
    /// Text to put in its place
    pub replace: String,
}

/// Ordered collection of editable replacement rows
#[derive(Debug, Clone, Default)]
pub struct ReplacementSet {
    // Keyed by monotonically increasing ids, so map order is insertion order
    rows: BTreeMap<RowId, ReplacementRow>,
    next_id: u64,
}

impl ReplacementSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set with one row per pair, in order
    pub fn from_pairs<F, R>(pairs: impl IntoIterator<Item = (F, R)>) -> Self
    where
        F: Into<String>,
        R: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Parse a `FIND=REPLACE` argument into a pair
    ///
    /// Splits at the first `=`; without one the replacement is empty.
    pub fn parse_pair(arg: &str) -> (String, String) {
        arg.split_once('=').map_or_else(
            || (arg.to_string(), String::new()),
            |(find, replace)| (find.to_string(), replace.to_string()),
        )
    }

    /// Append a row
    pub fn add_row(&mut self, find: impl Into<String>, replace: impl Into<String>) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.insert(
            id,
            ReplacementRow {
                find: find.into(),
                replace: replace.into(),
            },
        );
        id
    }

    /// Remove a row; returns false if it was already gone
    pub fn remove_row(&mut self, row: RowId) -> bool {
        self.rows.remove(&row).is_some()
    }

    /// Overwrite both fields of a row; returns false if it was removed
    pub fn edit_row(
        &mut self,
        row: RowId,
        find: impl Into<String>,
        replace: impl Into<String>,
    ) -> bool {
        match self.rows.get_mut(&row) {
            Some(existing) => {
                existing.find = find.into();
                existing.replace = replace.into();
                true
            }
            None => false,
        }
    }

    /// Look up a row
    pub fn row(&self, row: RowId) -> Option<&ReplacementRow> {
        self.rows.get(&row)
    }

    /// Rows in insertion order
    pub fn rows(&self) -> impl Iterator<Item = (RowId, &ReplacementRow)> {
        self.rows.iter().map(|(id, row)| (*id, row))
    }

    /// Number of rows, blank ones included
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Collect rows into the `find -> replace` mapping
    ///
    /// Both fields are trimmed. Rows with a blank `find` are dropped and a
    /// later row overwrites an earlier one with the same `find`.
    pub fn collect(&self) -> BTreeMap<String, String> {
        let mut rules = BTreeMap::new();
        for row in self.rows.values() {
            let find = row.find.trim();
            if find.is_empty() {
                continue;
            }
            rules.insert(find.to_string(), row.replace.trim().to_string());
        }
        rules
    }
}

impl<F: Into<String>, R: Into<String>> FromIterator<(F, R)> for ReplacementSet {
    fn from_iter<I: IntoIterator<Item = (F, R)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (find, replace) in iter {
            set.add_row(find, replace);
        }
        set
    }
}
