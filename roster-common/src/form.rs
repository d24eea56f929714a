//! Registration form controller
//!
//! Holds the draft record, the errors from the last submission attempt, and the
//! record being edited (if any). Validation only runs on submit.

use crate::roster::Roster;
use crate::storage::KeyValueStorage;
use crate::student::{Gender, Hobby, RecordId, StudentRecord};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Required scalar fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    City,
    Gender,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::City,
        Field::Gender,
    ];

    /// Persisted / form field name
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::City => "city",
            Field::Gender => "gender",
        }
    }

    pub fn required_message(self) -> &'static str {
        match self {
            Field::FirstName => "First Name is required.",
            Field::LastName => "Last Name is required.",
            Field::Email => "Email is required.",
            Field::Phone => "Phone number is required.",
            Field::City => "City is required.",
            Field::Gender => "Gender is required.",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// The record being filled in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub gender: Option<Gender>,
    pub hobbies: Vec<Hobby>,
}

impl StudentDraft {
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            city: record.city.clone(),
            gender: Some(record.gender),
            hobbies: record.hobbies.clone(),
        }
    }

    /// Current value of a field; an unset gender reads as "".
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => self.first_name.as_str(),
            Field::LastName => self.last_name.as_str(),
            Field::Email => self.email.as_str(),
            Field::Phone => self.phone.as_str(),
            Field::City => self.city.as_str(),
            Field::Gender => self.gender.map(Gender::as_str).unwrap_or(""),
        }
    }

    pub fn has_hobby(&self, hobby: Hobby) -> bool {
        self.hobbies.contains(&hobby)
    }

    /// The draft as a record, or `None` while no gender is chosen.
    fn to_record(&self) -> Option<StudentRecord> {
        Some(StudentRecord {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            gender: self.gender?,
            hobbies: self.hobbies.clone(),
        })
    }
}

/// Field -> message map from one submission attempt
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{} required field(s) missing", .0.len())]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Check every required field of a draft. Hobbies are optional.
pub fn validate(draft: &StudentDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in Field::ALL {
        if draft.value(field).trim().is_empty() {
            errors.insert(field, field.required_message());
        }
    }
    errors
}

/// Whether a submit creates a record or overwrites one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// Result of a successful submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Created(RecordId),
    Updated(RecordId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    draft: StudentDraft,
    errors: ValidationErrors,
    edit_target: Option<RecordId>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &StudentDraft {
        &self.draft
    }

    /// Errors from the last submission attempt
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn edit_target(&self) -> Option<RecordId> {
        self.edit_target
    }

    pub fn mode(&self) -> FormMode {
        match self.edit_target {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            FormMode::Create => "Register Now",
            FormMode::Edit(_) => "Update Student",
        }
    }

    /// Overwrite one field. Gender values outside the closed set clear the choice.
    pub fn set_field(&mut self, field: Field, value: &str) {
        let value = value.to_string();
        match field {
            Field::FirstName => self.draft.first_name = value,
            Field::LastName => self.draft.last_name = value,
            Field::Email => self.draft.email = value,
            Field::Phone => self.draft.phone = value,
            Field::City => self.draft.city = value,
            Field::Gender => self.draft.gender = Gender::parse(&value),
        }
    }

    /// Select or deselect a hobby. New selections go to the end.
    pub fn toggle_hobby(&mut self, hobby: Hobby, included: bool) {
        if included {
            if !self.draft.has_hobby(hobby) {
                self.draft.hobbies.push(hobby);
            }
        } else {
            self.draft.hobbies.retain(|h| *h != hobby);
        }
    }

    /// String form of [`toggle_hobby`](Self::toggle_hobby); unknown tags are ignored.
    pub fn toggle_hobby_tag(&mut self, tag: &str, included: bool) {
        if let Some(hobby) = Hobby::parse(tag) {
            self.toggle_hobby(hobby, included);
        }
    }

    /// Load a stored record into the draft and switch to edit mode.
    pub fn begin_edit<S: KeyValueStorage>(&mut self, id: RecordId, roster: &Roster<S>) -> bool {
        let Some(record) = roster.get(id) else {
            return false;
        };
        self.draft = StudentDraft::from_record(record);
        self.errors = ValidationErrors::default();
        self.edit_target = Some(id);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    /// Validate the draft and write it to the roster.
    ///
    /// An edit target that no longer exists in the roster falls back to append.
    pub fn submit<S: KeyValueStorage>(
        &mut self,
        roster: &mut Roster<S>,
    ) -> Result<Submitted, ValidationErrors> {
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            debug!("Submit rejected: {}", self.errors);
            return Err(self.errors.clone());
        }

        let Some(record) = self.draft.to_record() else {
            // validate() already reported a missing gender
            return Err(self.errors.clone());
        };

        let outcome = match self.edit_target.filter(|id| roster.position(*id).is_some()) {
            Some(id) => {
                roster.replace(id, record);
                Submitted::Updated(id)
            }
            None => Submitted::Created(roster.append(record)),
        };

        self.reset();
        Ok(outcome)
    }

    fn reset(&mut self) {
        self.draft = StudentDraft::default();
        self.errors = ValidationErrors::default();
        self.edit_target = None;
    }
}
