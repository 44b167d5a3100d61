use leadership_survey_be::{
    models::results::DimensionScores,
    survey::{
        LeadershipType,
        classify::{DimensionLevels, Z_CATEGORY_THRESHOLD, ZCategory, classify},
    },
};

fn z(transparency: f64, moral: f64, balanced: f64, self_aware: f64) -> DimensionScores {
    DimensionScores {
        q1: transparency,
        q2: moral,
        q3: balanced,
        q4: self_aware,
        q5: 0.0,
    }
}

#[test]
fn test_category_thresholds() {
    assert_eq!(Z_CATEGORY_THRESHOLD, 0.5);

    assert_eq!(ZCategory::of(0.51), ZCategory::High);
    assert_eq!(ZCategory::of(2.0), ZCategory::High);

    // Both boundaries are inclusive of "average".
    assert_eq!(ZCategory::of(0.5), ZCategory::Average);
    assert_eq!(ZCategory::of(-0.5), ZCategory::Average);
    assert_eq!(ZCategory::of(0.0), ZCategory::Average);

    assert_eq!(ZCategory::of(-0.51), ZCategory::Low);
    assert_eq!(ZCategory::of(-3.0), ZCategory::Low);
}

#[test]
fn test_all_average_is_normative() {
    assert_eq!(classify(&z(0.0, 0.0, 0.0, 0.0)), LeadershipType::Normative);
}

#[test]
fn test_low_balanced_processing_is_low_global_authentic() {
    assert_eq!(
        classify(&z(0.0, 0.0, -0.6, 0.0)),
        LeadershipType::LowGlobalAuthentic
    );
    assert_eq!(
        classify(&z(0.4, -0.4, -1.5, 0.2)),
        LeadershipType::LowGlobalAuthentic
    );
}

#[test]
fn test_low_self_awareness_high_balanced_processing() {
    assert_eq!(
        classify(&z(0.0, 0.0, 0.8, -0.9)),
        LeadershipType::LowSpecificSelfAwareness
    );
}

#[test]
fn test_high_specific_balanced_processing() {
    assert_eq!(
        classify(&z(-0.7, 0.1, 1.2, 0.9)),
        LeadershipType::HighSpecificBalancedProcessing
    );
}

#[test]
fn test_unmatched_combinations_fall_back_to_normative() {
    // Low balanced processing but non-average transparency.
    assert_eq!(classify(&z(0.9, 0.0, -0.6, 0.0)), LeadershipType::Normative);
    // High/high/low pattern broken by a high moral score.
    assert_eq!(classify(&z(-0.7, 0.8, 1.2, 0.9)), LeadershipType::Normative);
    // Everything high.
    assert_eq!(classify(&z(1.0, 1.0, 1.0, 1.0)), LeadershipType::Normative);
    // Everything low.
    assert_eq!(
        classify(&z(-1.0, -1.0, -1.0, -1.0)),
        LeadershipType::Normative
    );
}

#[test]
fn test_global_z_score_is_ignored() {
    let mut scores = z(0.0, 0.0, -0.6, 0.0);
    scores.q5 = 5.0;
    assert_eq!(classify(&scores), LeadershipType::LowGlobalAuthentic);
}

#[test]
fn test_dimension_levels_map_q1_to_q4() {
    let levels = DimensionLevels::from_z_scores(&z(1.0, -1.0, 0.0, 0.6));

    assert_eq!(levels.transparency, ZCategory::High);
    assert_eq!(levels.moral, ZCategory::Low);
    assert_eq!(levels.balanced_processing, ZCategory::Average);
    assert_eq!(levels.self_awareness, ZCategory::High);
}

#[test]
fn test_leadership_type_labels_match_serialized_names() {
    for kind in [
        LeadershipType::LowGlobalAuthentic,
        LeadershipType::Normative,
        LeadershipType::LowSpecificSelfAwareness,
        LeadershipType::HighSpecificBalancedProcessing,
    ] {
        assert_eq!(serde_json::to_value(kind).unwrap(), kind.label());
    }
}
