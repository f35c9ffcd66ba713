use super::{habit_type::HabitType, unit::MeasurementUnit};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Secondary "track time" setting of a measurable habit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeTracking {
    /// Daily goal in elapsed seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_seconds: Option<u64>,
}

/// Measurement configuration. A simple habit carries no measurement
/// fields at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Tracking {
    #[default]
    Simple,
    Measurable {
        unit: MeasurementUnit,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        goal: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<TimeTracking>,
    },
}

impl Tracking {
    pub fn is_measurable(&self) -> bool {
        matches!(self, Tracking::Measurable { .. })
    }

    pub fn tracks_time(&self) -> bool {
        matches!(self, Tracking::Measurable { time: Some(_), .. })
    }

    pub fn unit(&self) -> Option<MeasurementUnit> {
        match self {
            Tracking::Measurable { unit, .. } => Some(*unit),
            Tracking::Simple => None,
        }
    }

    pub fn goal(&self) -> Option<f64> {
        match self {
            Tracking::Measurable { goal, .. } => *goal,
            Tracking::Simple => None,
        }
    }

    pub fn time_goal(&self) -> Option<u64> {
        match self {
            Tracking::Measurable {
                time: Some(t), ..
            } => t.goal_seconds,
            _ => None,
        }
    }

    /// Display label for values: the custom label wins over the unit label.
    pub fn unit_label(&self) -> String {
        match self {
            Tracking::Measurable {
                label: Some(l), ..
            } if !l.trim().is_empty() => l.clone(),
            Tracking::Measurable { unit, .. } => unit.label().to_string(),
            Tracking::Simple => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HabitType,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Local>,
    #[serde(default)]
    pub tracking: Tracking,
}

impl Habit {
    /// Build a new habit with a fresh id and `created_at = now()`.
    pub fn new(name: &str, kind: HabitType, icon: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            kind,
            icon: icon.to_string(),
            note: None,
            tags: Vec::new(),
            created_at: Local::now(),
            tracking: Tracking::Simple,
        }
    }

    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((end, _)) => &self.id[..end],
            None => &self.id,
        }
    }

    /// Case-insensitive match against name and tags.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&q) || self.tags.iter().any(|t| t.to_lowercase().contains(&q))
    }

    /// Apply a partial edit. Fields left as `None` keep their value.
    pub fn apply(&mut self, patch: HabitPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(note) = patch.note {
            self.note = note;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(tracking) = patch.tracking {
            self.tracking = tracking;
        }
    }
}

/// Partial update of a habit. `note: Some(None)` clears the note.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HabitPatch {
    pub name: Option<String>,
    pub kind: Option<HabitType>,
    pub icon: Option<String>,
    pub note: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub tracking: Option<Tracking>,
}

impl HabitPatch {
    pub fn is_empty(&self) -> bool {
        *self == HabitPatch::default()
    }
}
