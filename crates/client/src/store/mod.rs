//! String-keyed persistent storage for locally seeded records.
//!
//! [`KeyValueStore`] is the seam between the seeder and wherever records are
//! kept. Values are JSON-serialized strings, one per key.
//!
//! - [`MemoryStore`] - in-process map, for tests and throwaway runs
//! - [`FileStore`] - a JSON object on disk, written through on every `set`

mod error;
mod file;
mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A string-keyed store of string values.
///
/// Reads take `&self` and writes take `&mut self`: a store has a single
/// writer and needs no locking.
pub trait KeyValueStore {
    /// Get the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Whether a usable value is stored under `key`.
    ///
    /// An empty string counts as absent.
    ///
    /// # Errors
    ///
    /// Returns error if the backing storage cannot be read.
    fn has(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some_and(|value| !value.is_empty()))
    }
}

/// Read and deserialize the JSON value stored under `key`.
///
/// Returns `Ok(None)` when nothing usable is stored.
///
/// # Errors
///
/// Returns [`StoreError::Corrupt`] if the stored value does not deserialize
/// as `T`.
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) if !raw.is_empty() => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            }),
        _ => Ok(None),
    }
}

/// Serialize `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns error if serialization or the write fails.
pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, raw)
}
