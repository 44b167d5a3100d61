use leadership_survey_be::{
    errors::AppError,
    models::rating::RatingScores,
    survey::questionnaire::{ANSWER_COUNT, Dimension, questionnaire, scores_from_answers},
};
use serde_json::json;

#[test]
fn test_questionnaire_has_sixteen_grouped_items() {
    let q = questionnaire();

    assert_eq!(q.items.len(), ANSWER_COUNT);
    assert_eq!(q.min_answer, 0.0);
    assert_eq!(q.max_answer, 4.0);

    let numbers: Vec<usize> = q.items.iter().map(|i| i.number).collect();
    assert_eq!(numbers, (1..=16).collect::<Vec<_>>());

    let count = |d: Dimension| q.items.iter().filter(|i| i.dimension == d).count();
    assert_eq!(count(Dimension::Transparency), 5);
    assert_eq!(count(Dimension::MoralEthical), 4);
    assert_eq!(count(Dimension::BalancedProcessing), 3);
    assert_eq!(count(Dimension::SelfAwareness), 4);

    assert_eq!(q.items[0].text, "Says exactly what he or she means");
    assert_eq!(q.items[9].dimension, Dimension::BalancedProcessing);
    assert_eq!(q.items[15].dimension_label, "Self-Awareness");
}

#[test]
fn test_scores_from_answers_averages_each_dimension() {
    let answers = [
        4.0, 4.0, 4.0, 4.0, 4.0, // transparency
        2.0, 2.0, 2.0, 2.0, // moral/ethical
        0.0, 3.0, 3.0, // balanced processing
        1.0, 1.0, 1.0, 1.0, // self-awareness
    ];

    let [q1, q2, q3, q4, q5] = scores_from_answers(&answers).unwrap();
    assert_eq!(q1, 4.0);
    assert_eq!(q2, 2.0);
    assert_eq!(q3, 2.0);
    assert_eq!(q4, 1.0);
    assert_eq!(q5, 2.25);
}

#[test]
fn test_scores_from_answers_rejects_wrong_length() {
    assert!(matches!(
        scores_from_answers(&[1.0; 15]),
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        scores_from_answers(&[1.0; 17]),
        Err(AppError::BadRequest(_))
    ));
}

#[test]
fn test_scores_from_answers_rejects_out_of_range() {
    let mut answers = [2.0; 16];
    answers[3] = 4.5;
    assert!(scores_from_answers(&answers).is_err());

    answers[3] = -1.0;
    assert!(scores_from_answers(&answers).is_err());

    answers[3] = 0.0;
    assert!(scores_from_answers(&answers).is_ok());
}

#[test]
fn test_rating_scores_keep_positions() {
    let values = vec![json!(1.2), json!(2), json!(3.5), json!(0), json!(1.675)];
    let scores = RatingScores::parse(&values).unwrap();

    assert_eq!(scores.0, [1.2, 2.0, 3.5, 0.0, 1.675]);
}

#[test]
fn test_rating_scores_require_exactly_five() {
    let four = vec![json!(1), json!(2), json!(3), json!(4)];
    let six = vec![json!(1); 6];

    for values in [four, six, vec![]] {
        match RatingScores::parse(&values) {
            Err(AppError::BadRequest(msg)) => {
                assert_eq!(msg, "Scores must be an array of 5 numbers (Q1–Q5 averages)")
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }
}

#[test]
fn test_rating_scores_reject_non_numeric_entries() {
    for bad in [json!("3"), json!(null), json!(true), json!([1])] {
        let values = vec![json!(1), json!(2), bad, json!(3), json!(4)];
        match RatingScores::parse(&values) {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "All scores must be valid numbers"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }
}
