use serde::{Deserialize, Serialize};

use crate::models::results::DimensionScores;

/// Z-scores beyond this many standard deviations either side of the mean
/// count as high or low.
pub const Z_CATEGORY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZCategory {
    High,
    Average,
    Low,
}

impl ZCategory {
    pub fn of(z: f64) -> Self {
        if z > Z_CATEGORY_THRESHOLD {
            ZCategory::High
        } else if z >= -Z_CATEGORY_THRESHOLD {
            ZCategory::Average
        } else {
            ZCategory::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadershipType {
    #[serde(rename = "Low Global Authentic")]
    LowGlobalAuthentic,
    #[serde(rename = "Normative")]
    Normative,
    #[serde(rename = "Low Specific Self-Awareness")]
    LowSpecificSelfAwareness,
    #[serde(rename = "High Specific Balanced Processing")]
    HighSpecificBalancedProcessing,
}

impl LeadershipType {
    pub fn label(&self) -> &'static str {
        match self {
            LeadershipType::LowGlobalAuthentic => "Low Global Authentic",
            LeadershipType::Normative => "Normative",
            LeadershipType::LowSpecificSelfAwareness => "Low Specific Self-Awareness",
            LeadershipType::HighSpecificBalancedProcessing => "High Specific Balanced Processing",
        }
    }
}

/// Category of each rated dimension: transparency (q1), moral/ethical (q2),
/// balanced processing (q3) and self-awareness (q4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionLevels {
    pub transparency: ZCategory,
    pub moral: ZCategory,
    pub balanced_processing: ZCategory,
    pub self_awareness: ZCategory,
}

impl DimensionLevels {
    pub fn from_z_scores(z: &DimensionScores) -> Self {
        Self {
            transparency: ZCategory::of(z.q1),
            moral: ZCategory::of(z.q2),
            balanced_processing: ZCategory::of(z.q3),
            self_awareness: ZCategory::of(z.q4),
        }
    }
}

pub fn classify(z: &DimensionScores) -> LeadershipType {
    use ZCategory::*;

    let levels = DimensionLevels::from_z_scores(z);

    // Rules are checked in priority order; the first match wins.
    match (
        levels.self_awareness,
        levels.balanced_processing,
        levels.transparency,
        levels.moral,
    ) {
        (Average, Low, Average, Average) => LeadershipType::LowGlobalAuthentic,
        (Low, High, Average, Average) => LeadershipType::LowSpecificSelfAwareness,
        (High, High, Low, Average) => LeadershipType::HighSpecificBalancedProcessing,
        _ => LeadershipType::Normative,
    }
}
