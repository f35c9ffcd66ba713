use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Success,
    Fail,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Success => "success",
            RecordStatus::Fail => "fail",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RecordStatus::Success)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, RecordStatus::Fail)
    }

    /// Explicit status flip (success <-> fail).
    pub fn flipped(&self) -> Self {
        match self {
            RecordStatus::Success => RecordStatus::Fail,
            RecordStatus::Fail => RecordStatus::Success,
        }
    }
}

/// Quantities attached to a record of a measurable habit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RecordMeasurement {
    #[default]
    Unmeasured,
    Measured {
        value: f64,
        /// Secondary measurement: elapsed time in seconds.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seconds: Option<u64>,
    },
}

impl RecordMeasurement {
    pub fn is_unmeasured(&self) -> bool {
        matches!(self, RecordMeasurement::Unmeasured)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            RecordMeasurement::Measured { value, .. } => Some(*value),
            RecordMeasurement::Unmeasured => None,
        }
    }

    pub fn seconds(&self) -> Option<u64> {
        match self {
            RecordMeasurement::Measured { seconds, .. } => *seconds,
            RecordMeasurement::Unmeasured => None,
        }
    }
}

/// One outcome for one habit on one calendar day.
/// Natural key: (habit_id, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitRecord {
    pub habit_id: String,
    pub date: NaiveDate, // "YYYY-MM-DD"
    pub status: RecordStatus,
    #[serde(default, skip_serializing_if = "RecordMeasurement::is_unmeasured")]
    pub measurement: RecordMeasurement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl HabitRecord {
    pub fn new(habit_id: &str, date: NaiveDate, status: RecordStatus) -> Self {
        Self {
            habit_id: habit_id.to_string(),
            date,
            status,
            measurement: RecordMeasurement::Unmeasured,
            note: None,
        }
    }

    pub fn success(habit_id: &str, date: NaiveDate) -> Self {
        Self::new(habit_id, date, RecordStatus::Success)
    }

    pub fn fail(habit_id: &str, date: NaiveDate) -> Self {
        Self::new(habit_id, date, RecordStatus::Fail)
    }

    pub fn with_measurement(mut self, value: f64, seconds: Option<u64>) -> Self {
        self.measurement = RecordMeasurement::Measured { value, seconds };
        self
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    pub fn is_key(&self, habit_id: &str, date: NaiveDate) -> bool {
        self.habit_id == habit_id && self.date == date
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// State of a single (habit, date) cell. `Pending` means "no record".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Pending,
    Success,
    Fail,
}

impl CellState {
    pub fn of(record: Option<&HabitRecord>) -> Self {
        match record.map(|r| r.status) {
            None => CellState::Pending,
            Some(RecordStatus::Success) => CellState::Success,
            Some(RecordStatus::Fail) => CellState::Fail,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CellState::Pending => "·",
            CellState::Success => "✔",
            CellState::Fail => "✘",
        }
    }
}
