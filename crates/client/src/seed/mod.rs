//! Demo-data seeding for the local store.
//!
//! [`ensure_defaults`] checks three keys independently and writes the literal
//! default array for each one that is missing. Present values are never
//! merged, updated or overwritten, so running it any number of times leaves
//! the store exactly as the first run did.
//!
//! | Key | Default |
//! |---|---|
//! | `customerUsers` | one demo customer (`customer@jollibee.com` / `pass123`) |
//! | `staffUsers` | `staff1` / `pass123` (staff), `admin` / `admin123` (admin) |
//! | `jollibeeMenu` | eight menu items |

mod defaults;

use chrono::{DateTime, Utc};
use jollibee_core::{Customer, MenuItem, StaffUser};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::store::{KeyValueStore, StoreError, read_json, write_json};

pub use defaults::{CUSTOMER_USERS_KEY, MENU_KEY, STAFF_USERS_KEY};

/// Outcome of a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Keys that were missing and have been written.
    pub written: Vec<&'static str>,
    /// Keys that already held a value and were left alone.
    pub present: Vec<&'static str>,
}

impl SeedReport {
    /// Whether this run changed the store.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.written.is_empty()
    }
}

/// Write the default records for every key that is missing.
///
/// # Errors
///
/// Returns error if the store cannot be read or written.
pub fn ensure_defaults<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<SeedReport, StoreError> {
    ensure_defaults_at(store, Utc::now())
}

/// Same as [`ensure_defaults`], stamping new accounts with `now`.
///
/// # Errors
///
/// Returns error if the store cannot be read or written.
#[instrument(skip(store))]
pub fn ensure_defaults_at<S: KeyValueStore + ?Sized>(
    store: &mut S,
    now: DateTime<Utc>,
) -> Result<SeedReport, StoreError> {
    let mut report = SeedReport::default();

    seed_key(store, CUSTOMER_USERS_KEY, || defaults::customers(now), &mut report)?;
    seed_key(store, STAFF_USERS_KEY, || defaults::staff_users(now), &mut report)?;
    seed_key(store, MENU_KEY, defaults::menu, &mut report)?;

    info!(
        written = ?report.written,
        present = report.present.len(),
        "Local defaults ensured"
    );

    Ok(report)
}

fn seed_key<S, F>(
    store: &mut S,
    key: &'static str,
    default: F,
    report: &mut SeedReport,
) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
    F: FnOnce() -> Value,
{
    if store.has(key)? {
        debug!(key, "Already present, skipping");
        report.present.push(key);
        return Ok(());
    }

    write_json(store, key, &default())?;
    report.written.push(key);
    Ok(())
}

/// Customer accounts in the store, or an empty list if none are stored.
///
/// # Errors
///
/// Returns [`StoreError::Corrupt`] if the stored value is not a customer array.
pub fn customer_users<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<Customer>, StoreError> {
    Ok(read_json(store, CUSTOMER_USERS_KEY)?.unwrap_or_default())
}

/// Staff accounts in the store, or an empty list if none are stored.
///
/// # Errors
///
/// Returns [`StoreError::Corrupt`] if the stored value is not a staff array.
pub fn staff_users<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<StaffUser>, StoreError> {
    Ok(read_json(store, STAFF_USERS_KEY)?.unwrap_or_default())
}

/// Menu items in the store, or an empty list if none are stored.
///
/// # Errors
///
/// Returns [`StoreError::Corrupt`] if the stored value is not a menu array.
pub fn menu<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<MenuItem>, StoreError> {
    Ok(read_json(store, MENU_KEY)?.unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::TimeZone;
    use jollibee_core::{Price, StaffRole};

    use super::*;
    use crate::store::MemoryStore;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_empty_store_gets_all_defaults() {
        let mut store = MemoryStore::new();
        let report = ensure_defaults_at(&mut store, fixed_now()).unwrap();

        assert_eq!(report.written, vec![CUSTOMER_USERS_KEY, STAFF_USERS_KEY, MENU_KEY]);
        assert!(report.present.is_empty());

        let customers = customer_users(&store).unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].email.as_str(), "customer@jollibee.com");
        assert_eq!(customers[0].password, "pass123");
        assert_eq!(customers[0].created_at, fixed_now());

        let staff = staff_users(&store).unwrap();
        let usernames: Vec<_> = staff.iter().map(|s| s.username.as_str()).collect();
        assert_eq!(usernames, vec!["staff1", "admin"]);
        assert_eq!(staff[0].role, StaffRole::Staff);
        assert_eq!(staff[1].role, StaffRole::Admin);
        assert_eq!(staff[1].password, "admin123");

        let items = menu(&store).unwrap();
        assert_eq!(items.len(), 8);
        assert_eq!(items[0].name, "1-pc Chickenjoy w/ Rice");
        assert_eq!(items[0].price, Price::from_whole(82).unwrap());
        assert_eq!(items[7].name, "Peach Mango Pie");
    }

    #[test]
    fn test_second_run_is_identical() {
        let mut store = MemoryStore::new();
        ensure_defaults_at(&mut store, fixed_now()).unwrap();
        let after_first = store.clone();

        let later = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let report = ensure_defaults_at(&mut store, later).unwrap();

        assert!(report.is_noop());
        assert_eq!(report.present.len(), 3);
        assert_eq!(store, after_first);
        assert_eq!(
            store.entries().keys().map(String::as_str).collect::<Vec<_>>(),
            vec![CUSTOMER_USERS_KEY, MENU_KEY, STAFF_USERS_KEY]
        );
    }

    #[test]
    fn test_existing_menu_is_left_alone() {
        let custom = r#"[{"id":99,"name":"Chicken Sandwich","price":120,"img":"x"}]"#;
        let mut store: MemoryStore = [(MENU_KEY, custom)].into_iter().collect();

        let report = ensure_defaults_at(&mut store, fixed_now()).unwrap();

        assert_eq!(report.present, vec![MENU_KEY]);
        assert_eq!(store.get(MENU_KEY).unwrap().as_deref(), Some(custom));
        assert_eq!(customer_users(&store).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_string_entry_is_reseeded() {
        let mut store: MemoryStore = [(STAFF_USERS_KEY, "")].into_iter().collect();
        ensure_defaults_at(&mut store, fixed_now()).unwrap();
        assert_eq!(staff_users(&store).unwrap().len(), 2);
    }

    #[test]
    fn test_corrupt_entry_is_not_overwritten_but_reported_on_read() {
        let mut store: MemoryStore = [(CUSTOMER_USERS_KEY, "oops")].into_iter().collect();

        let report = ensure_defaults_at(&mut store, fixed_now()).unwrap();
        assert!(report.present.contains(&CUSTOMER_USERS_KEY));

        assert!(matches!(
            customer_users(&store),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_readers_on_empty_store() {
        let store = MemoryStore::new();
        assert!(customer_users(&store).unwrap().is_empty());
        assert!(menu(&store).unwrap().is_empty());
    }
}
