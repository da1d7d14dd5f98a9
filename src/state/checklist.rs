//! Checked-ingredient set and its persisted JSON payload.
//!
//! The stored value is a JSON array of non-negative checkbox indexes,
//! rewritten whole on every change. Decoding distinguishes a missing entry
//! from a corrupt one so the caller can delete corrupt storage instead of
//! silently keeping it around.

#[cfg(test)]
#[path = "checklist_test.rs"]
mod checklist_test;

use std::collections::BTreeSet;

/// Result of decoding a persisted ingredient payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChecklistRestore {
    /// Valid payload; these indexes are checked.
    Applied(BTreeSet<usize>),
    /// No stored entry; checkboxes keep their markup defaults.
    Absent,
    /// Unparseable or non-array payload; the stored entry should be removed.
    Corrupt,
}

impl ChecklistRestore {
    /// Decode a raw stored value into a restore outcome.
    pub fn decode(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Absent;
        };
        match serde_json::from_str::<Vec<usize>>(raw) {
            Ok(indexes) => Self::Applied(indexes.into_iter().collect()),
            Err(_) => Self::Corrupt,
        }
    }
}

/// Flip one index in the checked set.
pub fn toggle(checked: &mut BTreeSet<usize>, index: usize) {
    if !checked.remove(&index) {
        checked.insert(index);
    }
}

/// Encode the full checked set as the persisted JSON array.
///
/// `BTreeSet` iteration keeps the payload ordered, so equal sets always
/// encode identically.
pub fn encode(checked: &BTreeSet<usize>) -> String {
    let indexes: Vec<usize> = checked.iter().copied().collect();
    serde_json::to_string(&indexes).unwrap_or_else(|_| "[]".to_owned())
}
