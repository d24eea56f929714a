//! Registration session
//!
//! The one owned state object behind the registration page. Every user action
//! goes through a method here; the table rows are derived fresh on each read.

use crate::config::RosterConfig;
use crate::form::{Field, FormController, Submitted, ValidationErrors};
use crate::query::{derive_view, SortKey, SortSpec};
use crate::roster::{Roster, RosterEntry};
use crate::storage::KeyValueStorage;
use crate::student::{Hobby, RecordId, StudentRecord};
use tracing::info;

pub struct RegistrationSession<S> {
    roster: Roster<S>,
    form: FormController,
    query: String,
    sort: SortSpec,
}

impl<S: KeyValueStorage> RegistrationSession<S> {
    pub fn load(storage: S, config: &RosterConfig) -> Self {
        Self {
            roster: Roster::load(storage, config),
            form: FormController::new(),
            query: String::new(),
            sort: SortSpec::default(),
        }
    }

    pub fn roster(&self) -> &Roster<S> {
        &self.roster
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        self.form.set_field(field, value);
    }

    pub fn toggle_hobby(&mut self, hobby: Hobby, included: bool) {
        self.form.toggle_hobby(hobby, included);
    }

    pub fn submit(&mut self) -> Result<Submitted, ValidationErrors> {
        let outcome = self.form.submit(&mut self.roster)?;
        match outcome {
            Submitted::Created(id) => info!("Registered {id}"),
            Submitted::Updated(id) => info!("Updated {id}"),
        }
        Ok(outcome)
    }

    /// Row edit button
    pub fn request_edit(&mut self, id: RecordId) -> bool {
        self.form.begin_edit(id, &self.roster)
    }

    pub fn cancel_edit(&mut self) {
        self.form.cancel_edit();
    }

    /// Row delete button. The form is left alone.
    pub fn delete(&mut self, id: RecordId) -> Option<StudentRecord> {
        let removed = self.roster.remove(id)?;
        info!("Deleted {id}");
        Some(removed)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Column header click
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
    }

    pub fn visible_rows(&self) -> Vec<&RosterEntry> {
        derive_view(&self.roster, &self.query, &self.sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormMode;
    use crate::query::SortDirection;
    use crate::storage::MemoryStorage;

    fn session() -> RegistrationSession<MemoryStorage> {
        RegistrationSession::load(MemoryStorage::new(), &RosterConfig::default())
    }

    fn register(
        session: &mut RegistrationSession<MemoryStorage>,
        first: &str,
        city: &str,
    ) -> RecordId {
        session.set_field(Field::FirstName, first);
        session.set_field(Field::LastName, "Doe");
        session.set_field(Field::Email, "doe@example.com");
        session.set_field(Field::Phone, "555");
        session.set_field(Field::City, city);
        session.set_field(Field::Gender, "male");
        match session.submit().unwrap() {
            Submitted::Created(id) => id,
            other => panic!("expected create, got {other:?}"),
        }
    }

    fn visible(session: &RegistrationSession<MemoryStorage>) -> Vec<&str> {
        session
            .visible_rows()
            .into_iter()
            .map(|e| e.record.first_name.as_str())
            .collect()
    }

    #[test]
    fn search_does_not_touch_store() {
        let mut session = session();
        register(&mut session, "Zed", "Kingstown");
        register(&mut session, "Amy", "Layou");
        let before = session.roster().storage().get("students").unwrap().to_string();

        session.set_query("layou");
        assert_eq!(visible(&session), vec!["Amy"]);
        assert_eq!(session.roster().len(), 2);
        assert_eq!(session.roster().storage().get("students").unwrap(), before);
    }

    #[test]
    fn sorted_view_edits_the_right_record() {
        let mut session = session();
        let zed = register(&mut session, "Zed", "Kingstown");
        register(&mut session, "Amy", "Layou");

        session.toggle_sort(SortKey::Name);
        assert_eq!(visible(&session), vec!["Amy", "Zed"]);

        // First visible row is Amy, but editing by id targets Zed
        assert!(session.request_edit(zed));
        session.set_field(Field::City, "Barrouallie");
        session.submit().unwrap();

        let zed_record = session.roster().get(zed).unwrap();
        assert_eq!(zed_record.first_name, "Zed");
        assert_eq!(zed_record.city, "Barrouallie");
        assert_eq!(session.roster().position(zed), Some(0));
    }

    #[test]
    fn delete_in_sorted_view_removes_by_id() {
        let mut session = session();
        let zed = register(&mut session, "Zed", "Kingstown");
        register(&mut session, "Amy", "Layou");
        session.toggle_sort(SortKey::Name);

        let removed = session.delete(zed).unwrap();
        assert_eq!(removed.first_name, "Zed");
        assert_eq!(visible(&session), vec!["Amy"]);
        assert!(session.delete(zed).is_none());
    }

    #[test]
    fn header_clicks_toggle_direction() {
        let mut session = session();
        register(&mut session, "Amy", "X");
        register(&mut session, "Zed", "X");

        session.toggle_sort(SortKey::Name);
        session.toggle_sort(SortKey::Name);
        assert_eq!(session.sort_spec().direction, SortDirection::Descending);
        assert_eq!(visible(&session), vec!["Zed", "Amy"]);
    }

    #[test]
    fn delete_leaves_edit_mode_alone() {
        let mut session = session();
        let amy = register(&mut session, "Amy", "X");
        session.request_edit(amy);
        session.delete(amy);
        assert_eq!(session.form().mode(), FormMode::Edit(amy));

        session.submit().unwrap();
        assert_eq!(session.roster().len(), 1);
        assert_eq!(session.form().mode(), FormMode::Create);
    }

    #[test]
    fn reload_restores_records() {
        let mut session = session();
        register(&mut session, "Amy", "X");
        register(&mut session, "Zed", "Y");
        let storage = session.roster().storage().clone();

        let reloaded = RegistrationSession::load(storage, &RosterConfig::default());
        let before: Vec<_> = session.roster().records().cloned().collect();
        let after: Vec<_> = reloaded.roster().records().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(reloaded.query(), "");
        assert_eq!(reloaded.sort_spec(), SortSpec::default());
    }
}
