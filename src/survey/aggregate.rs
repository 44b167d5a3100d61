use crate::{
    models::{
        profile::{Profile, ProfileSummary},
        rating::Rating,
        results::{DimensionScores, ProfileResult, ResultsReport, ResultsStatistics},
    },
    survey::classify::classify,
};

#[derive(Debug, Clone)]
pub struct ProfileWithRatings {
    pub profile: Profile,
    pub ratings: Vec<Rating>,
}

/// Arithmetic mean, or 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by n), or 0 for an empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// A zero standard deviation yields 0 rather than NaN or infinity.
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        0.0
    } else {
        (value - mean) / std_dev
    }
}

fn average_scores(ratings: &[Rating]) -> DimensionScores {
    let columns: [Vec<f64>; 5] = [
        ratings.iter().map(|r| r.q1).collect(),
        ratings.iter().map(|r| r.q2).collect(),
        ratings.iter().map(|r| r.q3).collect(),
        ratings.iter().map(|r| r.q4).collect(),
        ratings.iter().map(|r| r.q5).collect(),
    ];
    DimensionScores::from_array(columns.map(|column| mean(&column)))
}

fn population_statistics(rated: &[DimensionScores]) -> ResultsStatistics {
    let columns: [Vec<f64>; 5] =
        std::array::from_fn(|i| rated.iter().map(|scores| scores.to_array()[i]).collect());

    ResultsStatistics {
        overall_means: DimensionScores::from_array(columns.each_ref().map(|c| mean(c))),
        standard_deviations: DimensionScores::from_array(
            columns.each_ref().map(|c| population_std_dev(c)),
        ),
        sample_size: rated.len(),
    }
}

/// Summarises every profile and places the rated ones against the
/// population of rated profiles. Unrated profiles keep all-zero scores and
/// carry no leadership type.
pub fn build_report(entries: &[ProfileWithRatings]) -> ResultsReport {
    let averages: Vec<Option<DimensionScores>> = entries
        .iter()
        .map(|entry| (!entry.ratings.is_empty()).then(|| average_scores(&entry.ratings)))
        .collect();

    let rated: Vec<DimensionScores> = averages.iter().flatten().copied().collect();
    let statistics = population_statistics(&rated);

    let results = entries
        .iter()
        .zip(&averages)
        .map(|(entry, scores)| match scores {
            Some(scores) => {
                let values = scores.to_array();
                let means = statistics.overall_means.to_array();
                let std_devs = statistics.standard_deviations.to_array();
                let z_scores = DimensionScores::from_array(std::array::from_fn(|i| {
                    z_score(values[i], means[i], std_devs[i])
                }));

                ProfileResult {
                    profile: ProfileSummary::from(&entry.profile),
                    aggregated_scores: *scores,
                    global_authentic_leadership: mean(&scores.to_array()[..4]),
                    rater_count: entry.ratings.len(),
                    z_scores,
                    leadership_type: Some(classify(&z_scores)),
                }
            }
            None => ProfileResult {
                profile: ProfileSummary::from(&entry.profile),
                aggregated_scores: DimensionScores::default(),
                global_authentic_leadership: 0.0,
                rater_count: 0,
                z_scores: DimensionScores::default(),
                leadership_type: None,
            },
        })
        .collect();

    ResultsReport {
        results,
        statistics,
    }
}
