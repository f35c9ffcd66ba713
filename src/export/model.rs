use crate::models::habit::Habit;
use crate::models::record::HabitRecord;
use serde::Serialize;

/// Flat CSV row: one record joined with its habit.
#[derive(Debug, Serialize)]
pub struct RecordExport {
    pub date: String,
    pub habit_id: String,
    pub habit: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub value: Option<f64>,
    pub unit: String,
    pub seconds: Option<u64>,
    pub note: String,
}

impl RecordExport {
    /// `habit` is `None` for records whose habit no longer exists.
    pub fn from_record(record: &HabitRecord, habit: Option<&Habit>) -> Self {
        Self {
            date: record.date_str(),
            habit_id: record.habit_id.clone(),
            habit: habit.map(|h| h.name.clone()).unwrap_or_default(),
            kind: habit.map(|h| h.kind.as_str().to_string()).unwrap_or_default(),
            status: record.status.as_str().to_string(),
            value: record.measurement.value(),
            unit: habit.map(|h| h.tracking.unit_label()).unwrap_or_default(),
            seconds: record.measurement.seconds(),
            note: record.note.clone().unwrap_or_default(),
        }
    }
}

/// Both collections as written by the JSON export.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub exported_at: String,
    pub storage_version: &'a str,
    pub habits: &'a [Habit],
    pub records: &'a [HabitRecord],
}
