use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender choice on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Persisted form
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Parse the persisted form. Surrounding whitespace is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hobby tag from the fixed vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hobby {
    Reading,
    Gaming,
    Football,
}

impl Hobby {
    pub const ALL: [Hobby; 3] = [Hobby::Reading, Hobby::Gaming, Hobby::Football];

    pub fn as_str(self) -> &'static str {
        match self {
            Hobby::Reading => "reading",
            Hobby::Gaming => "gaming",
            Hobby::Football => "football",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Hobby::Reading => "Reading",
            Hobby::Gaming => "Gaming",
            Hobby::Football => "Football",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Hobby::ALL.into_iter().find(|h| h.as_str() == value)
    }
}

impl fmt::Display for Hobby {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered student, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub gender: Gender,
    /// Selection order, no duplicates
    pub hobbies: Vec<Hobby>,
}

impl StudentRecord {
    /// "first last", as shown in the Name column
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Hobbies joined for display
    pub fn hobbies_display(&self) -> String {
        self.hobbies
            .iter()
            .map(|h| h.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl AsRef<StudentRecord> for StudentRecord {
    fn as_ref(&self) -> &StudentRecord {
        self
    }
}

/// Session-local record identity, assigned by the roster.
///
/// Not persisted: ids are handed out again on every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub(crate) u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "student-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> StudentRecord {
        StudentRecord {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@x.com".to_string(),
            phone: "555-1212".to_string(),
            city: "Kingstown".to_string(),
            gender: Gender::Female,
            hobbies: vec![Hobby::Reading, Hobby::Football],
        }
    }

    #[test]
    fn serializes_with_persisted_field_names() {
        let json = serde_json::to_value(ann()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Ann",
                "lastName": "Lee",
                "email": "a@x.com",
                "phone": "555-1212",
                "city": "Kingstown",
                "gender": "female",
                "hobbies": ["reading", "football"],
            })
        );
    }

    #[test]
    fn unknown_gender_is_rejected() {
        let raw = r#"{"firstName":"A","lastName":"B","email":"e","phone":"p","city":"c","gender":"other","hobbies":[]}"#;
        assert!(serde_json::from_str::<StudentRecord>(raw).is_err());
    }

    #[test]
    fn display_helpers() {
        let record = ann();
        assert_eq!(record.full_name(), "Ann Lee");
        assert_eq!(record.hobbies_display(), "reading, football");
    }

    #[test]
    fn gender_parse_trims() {
        assert_eq!(Gender::parse(" male "), Some(Gender::Male));
        assert_eq!(Gender::parse("Male"), None);
        assert_eq!(Gender::parse(""), None);
    }

    #[test]
    fn hobby_parse_is_exact() {
        assert_eq!(Hobby::parse("gaming"), Some(Hobby::Gaming));
        assert_eq!(Hobby::parse("chess"), None);
    }
}
