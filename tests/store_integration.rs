use student_directory::schema::demo_schema;
use student_directory::seed::seed_demo_data;
use student_directory::{Store, StoreError};
use tempfile::TempDir;

// Helper to create a seeded in-memory store for testing
fn create_test_store() -> Store {
    let store = Store::open_in_memory().unwrap();
    store.initialize(&demo_schema()).unwrap();
    store
}

#[test]
fn initialize_creates_all_three_tables() {
    let store = create_test_store();

    let country_id = store.insert_country("Japan").unwrap();
    let city_id = store.insert_city("Tokyo", 2194.0, Some(country_id)).unwrap();
    store.insert_student("Zhong", "Xina", Some(city_id)).unwrap();

    let cities = store.cities().unwrap();
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].title, "Tokyo");
}

#[test]
fn initialize_twice_is_not_fatal() {
    let store = create_test_store();
    seed_demo_data(&store).unwrap();

    // every table already exists on the second run; all are skipped
    store.initialize(&demo_schema()).unwrap();
    assert_eq!(store.cities().unwrap().len(), 7);
}

#[test]
fn seed_assigns_sequential_ids_in_insertion_order() {
    let store = create_test_store();
    let report = seed_demo_data(&store).unwrap();

    assert_eq!(report.countries.len(), 3);
    assert_eq!(report.cities.len(), 7);
    assert_eq!(report.students, 15);
    assert_eq!(report.countries["Japan"], 1);
    assert_eq!(report.countries["China"], 2);
    assert_eq!(report.countries["Korea"], 3);

    let cities = store.cities().unwrap();
    let titles: Vec<&str> = cities.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Tokyo", "Nagasaki", "Hiroshima", "Pekin", "Shanghai", "Hong Kong", "Seoul"]
    );
    let ids: Vec<i64> = cities.iter().map(|c| c.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn students_by_city_joins_country_and_city_fields() {
    let store = create_test_store();
    let report = seed_demo_data(&store).unwrap();

    let students = store.students_by_city(report.cities["Tokyo"]).unwrap();
    let names: Vec<(&str, &str)> = students
        .iter()
        .map(|s| (s.first_name.as_str(), s.last_name.as_str()))
        .collect();
    assert_eq!(
        names,
        [
            ("Zhong", "Xina"),
            ("Alexandr", "Zubarev"),
            ("Coral", "Grims"),
            ("Rick", "Grims"),
        ]
    );
    for student in &students {
        assert_eq!(student.city, "Tokyo");
        assert_eq!(student.country, "China");
        assert_eq!(student.area, 2194.0);
    }
}

#[test]
fn students_by_city_returns_empty_for_city_without_students() {
    let store = create_test_store();
    let report = seed_demo_data(&store).unwrap();

    let empty_city = store
        .insert_city("Kyoto", 827.8, Some(report.countries["Japan"]))
        .unwrap();
    assert!(store.students_by_city(empty_city).unwrap().is_empty());
}

#[test]
fn student_without_city_never_joins() {
    let store = create_test_store();
    let report = seed_demo_data(&store).unwrap();

    store.insert_student("No", "Where", None).unwrap();
    let total: usize = store
        .cities()
        .unwrap()
        .iter()
        .map(|c| store.students_by_city(c.id).unwrap().len())
        .sum();
    assert_eq!(total, report.students);
}

// Seeding has no duplicate prevention; a second run doubles every table.
#[test]
fn seeding_twice_duplicates_rows() {
    let store = create_test_store();
    seed_demo_data(&store).unwrap();
    let second = seed_demo_data(&store).unwrap();

    assert_eq!(store.cities().unwrap().len(), 14);
    // the second Tokyo gets a fresh id past the first batch
    assert_eq!(second.cities["Tokyo"], 8);
}

#[test]
fn empty_titles_are_rejected() {
    let store = create_test_store();

    let err = store.insert_country("  ").unwrap_err();
    assert!(matches!(err, StoreError::EmptyField { field: "title" }));
    // nothing was inserted, so the next country still gets the first id
    assert_eq!(store.insert_country("Japan").unwrap(), 1);

    let err = store.insert_student("", "Grims", None).unwrap_err();
    assert!(matches!(err, StoreError::EmptyField { field: "first_name" }));
}

#[test]
fn file_backed_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hw.db");

    let store = Store::open(&path).unwrap();
    store.initialize(&demo_schema()).unwrap();
    seed_demo_data(&store).unwrap();
    store.close().unwrap();

    let store = Store::open(&path).unwrap();
    // tables already exist on the second run; initialize skips them
    store.initialize(&demo_schema()).unwrap();
    assert_eq!(store.cities().unwrap().len(), 7);
    store.close().unwrap();
}

#[test]
fn open_fails_for_unreachable_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("hw.db");

    assert!(matches!(Store::open(&path), Err(StoreError::Open { .. })));
}
