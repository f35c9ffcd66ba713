pub mod backup;
pub mod calendar;
pub mod config;
pub mod day;
pub mod db;
pub mod export;
pub mod habit;
pub mod init;
pub mod insights;
pub mod log;
pub mod mark;
pub mod reset;
pub mod stats;

use crate::config::Config;
use crate::core::store::{HabitMatch, HabitStore};
use crate::errors::{AppError, AppResult};
use crate::models::habit::Habit;
use crate::models::habit_type::HabitType;
use crate::storage::SqliteSlots;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;

pub(crate) type Store = HabitStore<SqliteSlots>;

/// Open the configured database and load both collections.
pub(crate) fn open_store(cfg: &Config) -> AppResult<Store> {
    let slots = SqliteSlots::open(&cfg.database)?;
    let store = HabitStore::open(slots, &cfg.storage_version)?;

    if store.was_reset_by_version() {
        warning(format!(
            "Stored data belonged to another storage version and was discarded (now {}).",
            cfg.storage_version
        ));
    }
    Ok(store)
}

/// Resolve a user-typed habit reference to an owned habit.
pub(crate) fn resolve_habit(store: &Store, query: &str) -> AppResult<Habit> {
    match store.find_habit(query) {
        HabitMatch::One(h) => Ok(h.clone()),
        HabitMatch::NotFound => Err(AppError::HabitNotFound(query.to_string())),
        HabitMatch::Ambiguous => Err(AppError::AmbiguousHabit(query.to_string())),
    }
}

/// Optional `YYYY-MM-DD` argument, today when absent.
pub(crate) fn parse_day_arg(input: Option<&String>) -> AppResult<NaiveDate> {
    match input {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(date::today()),
    }
}

pub(crate) fn parse_kind_arg(input: Option<&String>) -> AppResult<Option<HabitType>> {
    input
        .map(|s| HabitType::from_code(s).ok_or_else(|| AppError::InvalidHabitType(s.to_string())))
        .transpose()
}
