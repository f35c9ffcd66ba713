use chrono::NaiveDate;
use serde::Serialize;

/// Per-day counts derived from habits + records. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayData {
    pub date: NaiveDate,
    pub good_success: u32,
    pub bad_avoided: u32,
    pub fail: u32,
}

impl DayData {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            good_success: 0,
            bad_avoided: 0,
            fail: 0,
        }
    }

    /// Good successes plus avoided bad habits.
    pub fn successes(&self) -> u32 {
        self.good_success + self.bad_avoided
    }

    pub fn total(&self) -> u32 {
        self.successes() + self.fail
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
