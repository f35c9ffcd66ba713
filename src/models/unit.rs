use serde::{Deserialize, Serialize};

/// Predefined measurement units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    Km,
    M,
    Min,
    H,
    Kg,
    G,
    L,
    Ml,
    Kcal,
    Reps,
    Sets,
    Pages,
    Pcs,
    Custom,
}

impl MeasurementUnit {
    pub const ALL: [MeasurementUnit; 14] = [
        MeasurementUnit::Km,
        MeasurementUnit::M,
        MeasurementUnit::Min,
        MeasurementUnit::H,
        MeasurementUnit::Kg,
        MeasurementUnit::G,
        MeasurementUnit::L,
        MeasurementUnit::Ml,
        MeasurementUnit::Kcal,
        MeasurementUnit::Reps,
        MeasurementUnit::Sets,
        MeasurementUnit::Pages,
        MeasurementUnit::Pcs,
        MeasurementUnit::Custom,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MeasurementUnit::Km => "km",
            MeasurementUnit::M => "m",
            MeasurementUnit::Min => "min",
            MeasurementUnit::H => "h",
            MeasurementUnit::Kg => "kg",
            MeasurementUnit::G => "g",
            MeasurementUnit::L => "l",
            MeasurementUnit::Ml => "ml",
            MeasurementUnit::Kcal => "kcal",
            MeasurementUnit::Reps => "reps",
            MeasurementUnit::Sets => "sets",
            MeasurementUnit::Pages => "pages",
            MeasurementUnit::Pcs => "pcs",
            MeasurementUnit::Custom => "custom",
        }
    }

    /// Short label shown next to values. `Custom` has none of its own,
    /// the habit label is used instead.
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementUnit::H => "hod",
            MeasurementUnit::Reps => "opak.",
            MeasurementUnit::Sets => "série",
            MeasurementUnit::Pages => "strán",
            MeasurementUnit::Pcs => "ks",
            MeasurementUnit::Custom => "",
            other => other.code(),
        }
    }

    /// Units for which a time measurement yields a meaningful pace.
    pub fn is_distance(&self) -> bool {
        matches!(self, MeasurementUnit::Km | MeasurementUnit::M)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let c = code.trim().to_lowercase();
        Self::ALL.iter().copied().find(|u| u.code() == c)
    }
}
