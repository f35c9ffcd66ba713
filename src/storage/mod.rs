//! Flat key-value persistence slots backing the habit store.
//!
//! The store serializes each collection into its own named slot. Backends
//! only move strings around; they know nothing about habits or records.

mod memory;
mod sqlite;

pub use memory::MemorySlots;
pub use sqlite::SqliteSlots;

use crate::errors::AppResult;

pub const HABITS_KEY: &str = "habits";
pub const RECORDS_KEY: &str = "records";
pub const VERSION_KEY: &str = "version";

pub trait SlotStorage {
    /// Read a slot. An absent slot is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Durably write a slot before returning.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&mut self, key: &str) -> AppResult<()>;
}
