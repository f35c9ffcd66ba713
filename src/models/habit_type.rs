use serde::{Deserialize, Serialize};

/// Whether success means doing the behavior (good) or avoiding it (bad).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitType {
    Good,
    Bad,
}

impl HabitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitType::Good => "good",
            HabitType::Bad => "bad",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "good" | "g" => Some(HabitType::Good),
            "bad" | "b" => Some(HabitType::Bad),
            _ => None,
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, HabitType::Good)
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, HabitType::Bad)
    }
}
