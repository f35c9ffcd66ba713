use super::SlotStorage;
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;

/// In-memory slots. Writes can be switched off to simulate a full or
/// unavailable medium.
#[derive(Debug, Default, Clone)]
pub struct MemorySlots {
    slots: BTreeMap<String, String>,
    fail_writes: bool,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded slots, e.g. to simulate a previous session.
    pub fn with_slots<I, K, V>(slots: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            slots: slots.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            fail_writes: false,
        }
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl SlotStorage for MemorySlots {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Storage(format!("slot '{}' rejected the write", key)));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Storage(format!("slot '{}' rejected the removal", key)));
        }
        self.slots.remove(key);
        Ok(())
    }
}
