//! Browser-local key/value persistence.
//!
//! Components never touch `localStorage` directly; they receive a
//! [`KeyValueStore`] at construction. The browser implementation
//! ([`LocalStore`], `hydrate` only) wraps `web_sys::Storage`, while
//! [`MemoryStore`] backs tests and pages where storage is disabled.
//!
//! Lists (subscribers, contact messages) are stored as JSON arrays and only
//! ever grow through [`append_record`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error returned by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage backend rejected the operation (quota, privacy mode, ...).
    #[error("storage backend error: {0}")]
    Backend(String),
    /// The value under `key` is not a JSON list of the expected records.
    #[error("stored value under {key:?} is not a valid record list: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// A record could not be encoded.
    #[error("failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value storage with `localStorage` semantics.
pub trait KeyValueStore {
    /// Read the raw value for `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store. Values live as long as the store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Load the record list stored under `key`.
///
/// An absent key or an empty string is an empty list.
///
/// # Errors
///
/// Returns [`StoreError::Corrupt`] if the stored value is not a JSON array of `T`.
pub fn load_records<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Vec<T>, StoreError> {
    match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => {
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt { key: key.to_owned(), source })
        }
        _ => Ok(Vec::new()),
    }
}

/// Append `record` to the list under `key` and return the new list length.
///
/// A corrupt list is left untouched so no earlier records are lost.
///
/// # Errors
///
/// Propagates read, decode, encode, and write failures.
pub fn append_record<T>(store: &impl KeyValueStore, key: &str, record: T) -> Result<usize, StoreError>
where
    T: Serialize + DeserializeOwned,
{
    let mut records: Vec<T> = load_records(store, key)?;
    records.push(record);
    let raw = serde_json::to_string(&records)?;
    store.set(key, &raw)?;
    Ok(records.len())
}

/// `localStorage`-backed store.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Open the window's `localStorage`, `None` when it is unavailable
    /// (no window, storage disabled, or access denied).
    #[must_use]
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(err) => {
                log::warn!("localStorage access denied: {err:?}");
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|err| StoreError::Backend(format!("{err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StoreError::Backend(format!("{err:?}")))
    }
}
