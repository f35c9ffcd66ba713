//! Record store: the single source of truth for habits and records.
//!
//! Memory is updated first, then the touched collections are written to the
//! injected slot storage before the call returns. A failed write is handed
//! back to the caller while the in-memory state stays as the new truth.

use crate::errors::AppResult;
use crate::models::habit::{Habit, HabitPatch};
use crate::models::record::{CellState, HabitRecord};
use crate::storage::{HABITS_KEY, RECORDS_KEY, SlotStorage, VERSION_KEY};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// Outcome of resolving a user-typed habit reference.
#[derive(Debug, PartialEq)]
pub enum HabitMatch<'a> {
    One(&'a Habit),
    NotFound,
    Ambiguous,
}

pub struct HabitStore<S: SlotStorage> {
    storage: S,
    habits: Vec<Habit>,
    records: Vec<HabitRecord>,
    discarded: bool,
}

/// Absent or unreadable slots load as an empty collection.
fn load_slot<T: DeserializeOwned, S: SlotStorage>(storage: &S, key: &str) -> AppResult<Vec<T>> {
    Ok(storage
        .get(key)?
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default())
}

impl<S: SlotStorage> HabitStore<S> {
    /// Load both collections. A version marker different from `version`
    /// discards whatever was persisted before.
    pub fn open(mut storage: S, version: &str) -> AppResult<Self> {
        let saved = storage.get(VERSION_KEY)?;
        let discarded = saved.as_deref() != Some(version);

        if discarded {
            storage.remove(HABITS_KEY)?;
            storage.remove(RECORDS_KEY)?;
            storage.set(VERSION_KEY, version)?;
        }

        let habits = load_slot(&storage, HABITS_KEY)?;
        let records = load_slot(&storage, RECORDS_KEY)?;

        Ok(Self {
            storage,
            habits,
            records,
            discarded: discarded && saved.is_some(),
        })
    }

    /// True when opening dropped data persisted under another version.
    pub fn was_reset_by_version(&self) -> bool {
        self.discarded
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn records(&self) -> &[HabitRecord] {
        &self.records
    }

    fn persist_habits(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.habits)?;
        self.storage.set(HABITS_KEY, &json)
    }

    fn persist_records(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.records)?;
        self.storage.set(RECORDS_KEY, &json)
    }

    /// Write both collections; the first failure is reported after both
    /// writes were attempted.
    fn persist_all(&mut self) -> AppResult<()> {
        let habits = self.persist_habits();
        let records = self.persist_records();
        habits.and(records)
    }

    // ---------------------------
    // Habits
    // ---------------------------

    pub fn add_habit(&mut self, habit: Habit) -> AppResult<()> {
        self.habits.push(habit);
        self.persist_habits()
    }

    pub fn get_habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Partial edit. Returns false when no habit has this id.
    pub fn update_habit(&mut self, id: &str, patch: HabitPatch) -> AppResult<bool> {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            return Ok(false);
        };
        habit.apply(patch);
        self.persist_habits()?;
        Ok(true)
    }

    /// Full edit: the habit with the same id is replaced as a whole.
    pub fn replace_habit(&mut self, habit: Habit) -> AppResult<bool> {
        let Some(slot) = self.habits.iter_mut().find(|h| h.id == habit.id) else {
            return Ok(false);
        };
        *slot = habit;
        self.persist_habits()?;
        Ok(true)
    }

    /// Remove the habit together with every record referencing it.
    pub fn delete_habit(&mut self, id: &str) -> AppResult<bool> {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);
        let removed = self.habits.len() != before;

        let records_before = self.records.len();
        self.records.retain(|r| r.habit_id != id);
        let orphans = self.records.len() != records_before;

        if removed || orphans {
            self.persist_all()?;
        }
        Ok(removed)
    }

    /// Resolve an exact id, a unique id prefix, or an exact name
    /// (case-insensitive).
    pub fn find_habit(&self, query: &str) -> HabitMatch<'_> {
        let q = query.trim();
        if q.is_empty() {
            return HabitMatch::NotFound;
        }

        if let Some(h) = self.get_habit(q) {
            return HabitMatch::One(h);
        }

        let by_prefix: Vec<&Habit> = self.habits.iter().filter(|h| h.id.starts_with(q)).collect();
        match by_prefix.as_slice() {
            [one] => return HabitMatch::One(one),
            [] => {}
            _ => return HabitMatch::Ambiguous,
        }

        let lower = q.to_lowercase();
        let by_name: Vec<&Habit> = self
            .habits
            .iter()
            .filter(|h| h.name.to_lowercase() == lower)
            .collect();
        match by_name.as_slice() {
            [one] => HabitMatch::One(one),
            [] => HabitMatch::NotFound,
            _ => HabitMatch::Ambiguous,
        }
    }

    // ---------------------------
    // Records
    // ---------------------------

    /// Insert, or fully replace the record with the same (habit, date).
    pub fn upsert_record(&mut self, record: HabitRecord) -> AppResult<()> {
        match self
            .records
            .iter_mut()
            .find(|r| r.is_key(&record.habit_id, record.date))
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
        self.persist_records()
    }

    /// Remove the record for (habit, date). Absent is a no-op.
    pub fn delete_record(&mut self, habit_id: &str, date: NaiveDate) -> AppResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| !r.is_key(habit_id, date));
        if self.records.len() == before {
            return Ok(false);
        }
        self.persist_records()?;
        Ok(true)
    }

    pub fn get_record(&self, habit_id: &str, date: NaiveDate) -> Option<&HabitRecord> {
        self.records.iter().find(|r| r.is_key(habit_id, date))
    }

    pub fn cell_state(&self, habit_id: &str, date: NaiveDate) -> CellState {
        CellState::of(self.get_record(habit_id, date))
    }

    pub fn records_for<'a>(&'a self, habit_id: &'a str) -> impl Iterator<Item = &'a HabitRecord> + 'a {
        self.records.iter().filter(move |r| r.habit_id == habit_id)
    }

    /// Clear both collections unconditionally.
    pub fn reset_all(&mut self) -> AppResult<()> {
        self.habits.clear();
        self.records.clear();
        self.persist_all()
    }
}
