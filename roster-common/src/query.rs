//! Search and sort over the roster
//!
//! The visible table is always `sort(filter(roster, query), spec)`, recomputed
//! on demand. Neither step touches the stored order.

use crate::roster::{Roster, RosterEntry};
use crate::storage::KeyValueStorage;
use crate::student::StudentRecord;
use std::cmp::Reverse;

/// Sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Email,
    Phone,
    City,
    Gender,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Name,
        SortKey::Email,
        SortKey::Phone,
        SortKey::City,
        SortKey::Gender,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Email => "Email",
            SortKey::Phone => "Phone",
            SortKey::City => "City",
            SortKey::Gender => "Gender",
        }
    }

    /// Lowercased comparison string for a record. Strings compare by code point.
    pub fn extract(self, record: &StudentRecord) -> String {
        match self {
            SortKey::Name => record.full_name(),
            SortKey::Email => record.email.clone(),
            SortKey::Phone => record.phone.clone(),
            SortKey::City => record.city.clone(),
            SortKey::Gender => record.gender.as_str().to_string(),
        }
        .to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Active table sort. No key means store order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn by(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Header click: the active key flips ascending to descending, anything
    /// else sorts by `key` ascending.
    pub fn toggle(&mut self, key: SortKey) {
        self.direction =
            if self.key == Some(key) && self.direction == SortDirection::Ascending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
        self.key = Some(key);
    }

    /// Direction shown on a column header, if it is the active one
    pub fn direction_for(&self, key: SortKey) -> Option<SortDirection> {
        (self.key == Some(key)).then_some(self.direction)
    }
}

/// Case-insensitive substring match on name, contact fields, gender or any hobby.
pub fn matches(record: &StudentRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);

    hit(&record.full_name())
        || hit(&record.email)
        || hit(&record.phone)
        || hit(&record.city)
        || hit(record.gender.as_str())
        || record.hobbies.iter().any(|h| hit(h.as_str()))
}

/// Records matching `query`, in their original order.
pub fn filter<'a, T: AsRef<StudentRecord>>(records: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| matches((*r).as_ref(), query))
        .collect()
}

/// Stable sort by `spec`. Equal keys keep their incoming order in both directions.
pub fn sort<'a, T: AsRef<StudentRecord>>(mut records: Vec<&'a T>, spec: &SortSpec) -> Vec<&'a T> {
    let Some(key) = spec.key else {
        return records;
    };
    match spec.direction {
        SortDirection::Ascending => records.sort_by_cached_key(|r| key.extract((*r).as_ref())),
        SortDirection::Descending => {
            records.sort_by_cached_key(|r| Reverse(key.extract((*r).as_ref())))
        }
    }
    records
}

/// Rows to display for the current search and sort.
pub fn derive_view<'a, S: KeyValueStorage>(
    roster: &'a Roster<S>,
    query: &str,
    spec: &SortSpec,
) -> Vec<&'a RosterEntry> {
    sort(filter(roster.entries(), query), spec)
}
