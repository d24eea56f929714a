use roster_common::{
    derive_view, Field, FormController, Gender, Hobby, MemoryStorage, Roster, RosterConfig,
    SortSpec, StudentRecord, Submitted,
};

fn empty_roster() -> Roster<MemoryStorage> {
    Roster::load(MemoryStorage::new(), &RosterConfig::default())
}

fn fill_ann(form: &mut FormController) {
    form.set_field(Field::FirstName, "Ann");
    form.set_field(Field::LastName, "Lee");
    form.set_field(Field::Email, "a@x.com");
    form.set_field(Field::Phone, "555-1212");
    form.set_field(Field::City, "Kingstown");
    form.set_field(Field::Gender, "female");
    form.toggle_hobby(Hobby::Reading, true);
}

fn ann() -> StudentRecord {
    StudentRecord {
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        email: "a@x.com".to_string(),
        phone: "555-1212".to_string(),
        city: "Kingstown".to_string(),
        gender: Gender::Female,
        hobbies: vec![Hobby::Reading],
    }
}

fn search(roster: &Roster<MemoryStorage>, query: &str) -> usize {
    derive_view(roster, query, &SortSpec::default()).len()
}

#[test]
fn test_register_ann_and_search() {
    let mut roster = empty_roster();
    let mut form = FormController::new();
    fill_ann(&mut form);

    let outcome = form.submit(&mut roster).unwrap();
    assert!(matches!(outcome, Submitted::Created(_)));
    assert_eq!(roster.records().cloned().collect::<Vec<_>>(), vec![ann()]);

    assert_eq!(search(&roster, "ann"), 1);
    assert_eq!(search(&roster, "kingstown"), 1);
    assert_eq!(search(&roster, "reading"), 1);
    assert_eq!(search(&roster, "zzz"), 0);
}

#[test]
fn test_missing_any_required_field_is_rejected() {
    for missing in Field::ALL {
        let mut roster = empty_roster();
        let mut form = FormController::new();
        fill_ann(&mut form);
        form.set_field(missing, "  ");

        let errors = form.submit(&mut roster).unwrap_err();
        assert_eq!(errors.len(), 1, "only {missing} should fail");
        assert_eq!(errors.get(missing), Some(missing.required_message()));
        assert!(roster.is_empty());
    }
}

#[test]
fn test_round_trip_through_storage() {
    let mut roster = empty_roster();
    let mut form = FormController::new();
    for (first, gender) in [("Ann", "female"), ("Ben", "male"), ("Cai", "male")] {
        fill_ann(&mut form);
        form.set_field(Field::FirstName, first);
        form.set_field(Field::Gender, gender);
        form.submit(&mut roster).unwrap();
    }

    let reloaded = Roster::load(roster.storage().clone(), &RosterConfig::default());
    assert_eq!(
        reloaded.records().collect::<Vec<_>>(),
        roster.records().collect::<Vec<_>>()
    );
}

#[test]
fn test_loads_records_written_by_the_browser_app() {
    let raw = r#"[
        {"firstName":"Ann","lastName":"Lee","email":"a@x.com","phone":"555-1212",
         "city":"Kingstown","gender":"female","hobbies":["reading"]},
        {"firstName":"Ben","lastName":"Ng","email":"b@x.com","phone":"555-3434",
         "city":"Layou","gender":"male","hobbies":[]}
    ]"#;
    let roster = Roster::load(
        MemoryStorage::with_item("students", raw),
        &RosterConfig::default(),
    );

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.entries()[0].record, ann());
    assert!(roster.entries()[1].record.hobbies.is_empty());
}

#[test]
fn test_edit_then_remove_keeps_relative_order() {
    let mut roster = empty_roster();
    let mut form = FormController::new();
    let mut ids = Vec::new();
    for first in ["Ann", "Ben", "Cai", "Dee"] {
        fill_ann(&mut form);
        form.set_field(Field::FirstName, first);
        match form.submit(&mut roster).unwrap() {
            Submitted::Created(id) => ids.push(id),
            other => panic!("expected create, got {other:?}"),
        }
    }

    assert!(form.begin_edit(ids[2], &roster));
    form.set_field(Field::FirstName, "Cy");
    assert_eq!(form.submit(&mut roster).unwrap(), Submitted::Updated(ids[2]));
    assert_eq!(roster.len(), 4);

    roster.remove_at(0);
    let firsts: Vec<_> = roster.records().map(|r| r.first_name.as_str()).collect();
    assert_eq!(firsts, vec!["Ben", "Cy", "Dee"]);
}
