//! Local store commands.
//!
//! ```bash
//! # Write demo data where missing
//! jb-cli seed
//!
//! # Print a record
//! jb-cli store show staff
//! ```

use jollibee_client::seed::{self, CUSTOMER_USERS_KEY, MENU_KEY, STAFF_USERS_KEY};
use jollibee_client::{ClientConfig, FileStore};
use tracing::info;

use super::{CommandError, print_json};
use crate::Record;

/// Seed the configured store file.
///
/// # Errors
///
/// Returns an error if the store file cannot be read or written.
pub fn run(config: &ClientConfig) -> Result<(), CommandError> {
    let mut store = FileStore::open(&config.store_path)?;

    info!(path = %store.path().display(), "Seeding local store");
    let report = seed::ensure_defaults(&mut store)?;

    if report.is_noop() {
        info!("Nothing to do, all records already present");
    } else {
        for key in &report.written {
            info!("  Wrote {key}");
        }
    }

    Ok(())
}

/// Print one record from the store.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the record is corrupt.
pub fn show(config: &ClientConfig, record: Record) -> Result<(), CommandError> {
    let store = FileStore::open(&config.store_path)?;

    let (key, value) = match record {
        Record::Customers => (
            CUSTOMER_USERS_KEY,
            serde_json::to_value(seed::customer_users(&store)?)?,
        ),
        Record::Staff => (
            STAFF_USERS_KEY,
            serde_json::to_value(seed::staff_users(&store)?)?,
        ),
        Record::Menu => (MENU_KEY, serde_json::to_value(seed::menu(&store)?)?),
    };
    info!(key, "Read record");

    print_json(&value)
}
