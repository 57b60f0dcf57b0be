use super::backend::{StorageBackend, StoreKey};
use crate::error::{AbsensiError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since absensi is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` without a lock.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<StoreKey, String>>,
    simulate_read_error: RefCell<bool>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key with a raw value, e.g. to test malformed data on load.
    pub fn with_value(self, key: StoreKey, raw: impl Into<String>) -> Self {
        self.values.borrow_mut().insert(key, raw.into());
        self
    }

    /// Enable read error simulation for testing load fallbacks.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// The raw value currently held for `key`.
    pub fn raw(&self, key: StoreKey) -> Option<String> {
        self.values.borrow().get(&key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: StoreKey) -> Result<Option<String>> {
        if *self.simulate_read_error.borrow() {
            return Err(AbsensiError::StorageUnavailable(
                "Simulated read error".to_string(),
            ));
        }
        Ok(self.values.borrow().get(&key).cloned())
    }

    fn write(&self, key: StoreKey, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(AbsensiError::StorageUnavailable(
                "Simulated write error".to_string(),
            ));
        }
        self.values.borrow_mut().insert(key, value.to_string());
        Ok(())
    }

    fn location(&self, key: StoreKey) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}
