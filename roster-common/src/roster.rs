//! Record store
//!
//! An ordered list of student records mirrored to key/value storage. Every
//! mutation rewrites the whole JSON array under one key.

use crate::config::RosterConfig;
use crate::storage::{KeyValueStorage, StorageError};
use crate::student::{RecordId, StudentRecord};
use tracing::{debug, info, warn};

/// A stored record with its session-local id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: RecordId,
    pub record: StudentRecord,
}

impl AsRef<StudentRecord> for RosterEntry {
    fn as_ref(&self) -> &StudentRecord {
        &self.record
    }
}

/// Parse the persisted JSON array.
pub fn decode_records(raw: &str) -> Result<Vec<StudentRecord>, serde_json::Error> {
    serde_json::from_str(raw)
}

pub fn encode_records<'a>(
    records: impl IntoIterator<Item = &'a StudentRecord>,
) -> Result<String, serde_json::Error> {
    let records: Vec<&StudentRecord> = records.into_iter().collect();
    serde_json::to_string(&records)
}

/// The authoritative, persisted list of students.
pub struct Roster<S> {
    entries: Vec<RosterEntry>,
    next_id: u64,
    storage: S,
    storage_key: String,
}

impl<S: KeyValueStorage> Roster<S> {
    /// Load the roster from storage.
    ///
    /// A missing, unreadable or malformed value yields an empty roster.
    pub fn load(storage: S, config: &RosterConfig) -> Self {
        let records = match storage.get_item(&config.storage_key) {
            Ok(Some(raw)) => match decode_records(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!(
                        "Ignoring malformed roster under '{}': {e}",
                        config.storage_key
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read roster from storage: {e}");
                Vec::new()
            }
        };

        info!("Loaded {} student(s)", records.len());

        let mut roster = Self {
            entries: Vec::with_capacity(records.len()),
            next_id: 0,
            storage,
            storage_key: config.storage_key.clone(),
        };
        for record in records {
            let id = roster.allocate_id();
            roster.entries.push(RosterEntry { id, record });
        }
        roster
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn records(&self) -> impl Iterator<Item = &StudentRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&StudentRecord> {
        self.position(id).map(|i| &self.entries[i].record)
    }

    /// Current store position of a record.
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a record and persist.
    pub fn append(&mut self, record: StudentRecord) -> RecordId {
        let id = self.allocate_id();
        self.entries.push(RosterEntry { id, record });
        debug!("Appended {id}");
        self.persist();
        id
    }

    /// Replace the record at `index`, keeping its id. Returns the old record.
    pub fn replace_at(&mut self, index: usize, record: StudentRecord) -> Option<StudentRecord> {
        let entry = self.entries.get_mut(index)?;
        let old = std::mem::replace(&mut entry.record, record);
        debug!("Replaced {} at position {index}", entry.id);
        self.persist();
        Some(old)
    }

    pub fn replace(&mut self, id: RecordId, record: StudentRecord) -> Option<StudentRecord> {
        let index = self.position(id)?;
        self.replace_at(index, record)
    }

    /// Remove the record at `index`, preserving the order of the rest.
    pub fn remove_at(&mut self, index: usize) -> Option<StudentRecord> {
        if index >= self.entries.len() {
            return None;
        }
        let entry = self.entries.remove(index);
        debug!("Removed {} from position {index}", entry.id);
        self.persist();
        Some(entry.record)
    }

    pub fn remove(&mut self, id: RecordId) -> Option<StudentRecord> {
        let index = self.position(id)?;
        self.remove_at(index)
    }

    /// Write the full roster to storage.
    ///
    /// The array is encoded before the single `set_item` call, so a failure
    /// never leaves a partial value behind.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let json = encode_records(self.records())?;
        self.storage.set_item(&self.storage_key, &json)
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            warn!("Failed to persist roster: {e}");
        }
    }

    fn allocate_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        id
    }
}
