//! Integration tests for demo-data seeding against a file-backed store.

use chrono::{TimeZone, Utc};
use jollibee_client::seed::{self, CUSTOMER_USERS_KEY, MENU_KEY, STAFF_USERS_KEY};
use jollibee_client::{FileStore, KeyValueStore, StoreError, ensure_defaults, ensure_defaults_at};
use jollibee_core::{Price, StaffRole};

#[test]
fn test_empty_store_is_fully_seeded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = FileStore::open(dir.path().join("store.json")).expect("open store");

    let report = ensure_defaults(&mut store).expect("seed");
    assert_eq!(report.written.len(), 3);

    let customers = seed::customer_users(&store).expect("customers");
    assert_eq!(customers.len(), 1);
    assert_eq!(
        customers.first().map(|c| c.email.as_str()),
        Some("customer@jollibee.com")
    );

    let staff = seed::staff_users(&store).expect("staff");
    let accounts: Vec<_> = staff.iter().map(|s| (s.username.as_str(), s.role)).collect();
    assert_eq!(
        accounts,
        vec![("staff1", StaffRole::Staff), ("admin", StaffRole::Admin)]
    );

    let menu = seed::menu(&store).expect("menu");
    assert_eq!(menu.len(), 8);
    let first = menu.first().expect("menu not empty");
    assert_eq!(first.name, "1-pc Chickenjoy w/ Rice");
    assert_eq!(first.price, Price::from_whole(82).expect("positive"));
}

#[test]
fn test_seeding_twice_leaves_file_byte_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("store.json");

    let first_run = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
    let mut store = FileStore::open(&path).expect("open store");
    ensure_defaults_at(&mut store, first_run).expect("first seed");
    let after_first = std::fs::read(&path).expect("read store");

    let second_run = Utc.with_ymd_and_hms(2024, 6, 2, 8, 0, 0).unwrap();
    let mut reopened = FileStore::open(&path).expect("reopen store");
    let report = ensure_defaults_at(&mut reopened, second_run).expect("second seed");
    let after_second = std::fs::read(&path).expect("read store");

    assert!(report.is_noop());
    assert_eq!(after_first, after_second);
}

#[test]
fn test_custom_menu_survives_seeding() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("store.json");
    let custom = r#"[{"id":1,"name":"Palabok Fiesta","price":99,"img":"https://example.com/p.jpg"}]"#;

    {
        let mut store = FileStore::open(&path).expect("open store");
        store.set(MENU_KEY, custom.to_string()).expect("write menu");
    }

    let mut store = FileStore::open(&path).expect("reopen store");
    let report = ensure_defaults(&mut store).expect("seed");

    assert_eq!(report.written, vec![CUSTOMER_USERS_KEY, STAFF_USERS_KEY]);
    assert_eq!(report.present, vec![MENU_KEY]);
    assert_eq!(store.get(MENU_KEY).expect("read").as_deref(), Some(custom));

    let menu = seed::menu(&store).expect("menu");
    assert_eq!(menu.len(), 1);
    assert_eq!(menu.first().map(|m| m.name.as_str()), Some("Palabok Fiesta"));
}

#[test]
fn test_corrupt_entry_is_reported_not_replaced() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("store.json");

    let mut store = FileStore::open(&path).expect("open store");
    store
        .set(STAFF_USERS_KEY, "[{\"id\": 1,".to_string())
        .expect("write");

    ensure_defaults(&mut store).expect("seed");

    let result = seed::staff_users(&store);
    assert!(matches!(result, Err(StoreError::Corrupt { ref key, .. }) if key == STAFF_USERS_KEY));
}
