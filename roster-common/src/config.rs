/// Local storage key the roster is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "students";

/// Roster configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterConfig {
    /// Key holding the JSON array of student records
    pub storage_key: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl RosterConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_is_students() {
        assert_eq!(RosterConfig::default().storage_key, "students");
    }

    #[test]
    fn storage_key_can_be_overridden() {
        let config = RosterConfig::default().with_storage_key("demo-students");
        assert_eq!(config.storage_key, "demo-students");
    }
}
