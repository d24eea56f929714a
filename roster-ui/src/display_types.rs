//! Display types for the student table

use roster_common::{RecordId, RosterEntry};

/// One table row, already formatted for display
#[derive(Clone, Debug, PartialEq)]
pub struct StudentRow {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub gender: String,
    pub hobbies: String,
}

impl From<&RosterEntry> for StudentRow {
    fn from(entry: &RosterEntry) -> Self {
        let record = &entry.record;
        Self {
            id: entry.id,
            name: record.full_name(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            city: record.city.clone(),
            gender: record.gender.as_str().to_string(),
            hobbies: record.hobbies_display(),
        }
    }
}
