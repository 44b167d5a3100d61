use serde::{Deserialize, Serialize};

use crate::{models::profile::ProfileSummary, survey::classify::LeadershipType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
    pub q5: f64,
}

impl DimensionScores {
    pub fn from_array(values: [f64; 5]) -> Self {
        let [q1, q2, q3, q4, q5] = values;
        Self { q1, q2, q3, q4, q5 }
    }

    pub fn to_array(self) -> [f64; 5] {
        [self.q1, self.q2, self.q3, self.q4, self.q5]
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResult {
    pub profile: ProfileSummary,
    pub aggregated_scores: DimensionScores,
    pub global_authentic_leadership: f64,
    pub rater_count: usize,
    pub z_scores: DimensionScores,
    pub leadership_type: Option<LeadershipType>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsStatistics {
    pub overall_means: DimensionScores,
    pub standard_deviations: DimensionScores,
    pub sample_size: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsReport {
    pub results: Vec<ProfileResult>,
    pub statistics: ResultsStatistics,
}
