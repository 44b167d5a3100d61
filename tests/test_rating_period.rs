use chrono::{Duration, TimeZone, Utc};
use leadership_survey_be::{
    errors::AppError,
    models::rating_period::{PeriodChanges, RatingPeriod, parse_new_period, parse_period_date},
    survey::check_submission_window,
};

fn period(start_hour: u32, end_hour: u32, is_active: bool) -> RatingPeriod {
    let start = Utc.with_ymd_and_hms(2025, 3, 1, start_hour, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 3, 1, end_hour, 0, 0).unwrap();
    RatingPeriod {
        id: 1,
        start_date: start,
        end_date: end,
        is_active,
        created_at: start,
        updated_at: start,
    }
}

fn assert_bad_request(result: Result<impl std::fmt::Debug, AppError>, expected: &str) {
    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, expected),
        other => panic!("expected BadRequest({expected}), got {other:?}"),
    }
}

#[test]
fn test_parse_period_date_formats() {
    let expected = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();

    assert_eq!(parse_period_date("2025-03-01T09:30:00Z"), Some(expected));
    assert_eq!(parse_period_date("2025-03-01T09:30:00.000Z"), Some(expected));
    assert_eq!(
        parse_period_date("2025-03-01T11:30:00+02:00"),
        Some(expected)
    );
    assert_eq!(parse_period_date("2025-03-01T09:30"), Some(expected));
    assert_eq!(parse_period_date("2025-03-01 09:30:00"), Some(expected));
    assert_eq!(
        parse_period_date("2025-03-01"),
        Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_parse_period_date_rejects_garbage() {
    assert_eq!(parse_period_date(""), None);
    assert_eq!(parse_period_date("   "), None);
    assert_eq!(parse_period_date("not a date"), None);
    assert_eq!(parse_period_date("2025-13-01"), None);
    assert_eq!(parse_period_date("2025-02-30T10:00"), None);
}

#[test]
fn test_new_period_requires_both_dates() {
    assert_bad_request(
        parse_new_period(None, Some("2025-03-02")),
        "Start date and end date are required.",
    );
    assert_bad_request(
        parse_new_period(Some("2025-03-01"), Some("")),
        "Start date and end date are required.",
    );
}

#[test]
fn test_new_period_rejects_invalid_dates() {
    assert_bad_request(
        parse_new_period(Some("yesterday"), Some("2025-03-02")),
        "Invalid date format.",
    );
}

#[test]
fn test_new_period_requires_start_before_end() {
    assert_bad_request(
        parse_new_period(Some("2025-03-02T10:00"), Some("2025-03-01T10:00")),
        "End date must be after start date.",
    );
    assert_bad_request(
        parse_new_period(Some("2025-03-01T10:00"), Some("2025-03-01T10:00")),
        "End date must be after start date.",
    );

    let (start, end) = parse_new_period(Some("2025-03-01T10:00"), Some("2025-03-01T12:00"))
        .expect("valid period");
    assert_eq!(end - start, Duration::hours(2));
}

#[test]
fn test_changes_reject_invalid_formats() {
    assert_bad_request(
        PeriodChanges::parse(Some("nope"), None, None),
        "Invalid start date format.",
    );
    assert_bad_request(
        PeriodChanges::parse(None, Some("nope"), None),
        "Invalid end date format.",
    );
}

#[test]
fn test_changes_with_both_bounds_must_be_ordered() {
    let existing = period(9, 17, true);
    let changes = PeriodChanges::parse(
        Some("2025-03-05T10:00"),
        Some("2025-03-04T10:00"),
        None,
    )
    .unwrap();

    assert_bad_request(
        changes.validate_against(&existing),
        "End date must be after start date.",
    );
}

#[test]
fn test_start_only_change_is_checked_against_stored_end() {
    let existing = period(9, 17, true);

    let past_end = PeriodChanges::parse(Some("2025-03-01T17:00:00Z"), None, None).unwrap();
    assert_bad_request(
        past_end.validate_against(&existing),
        "Start date must be before existing end date.",
    );

    let fine = PeriodChanges::parse(Some("2025-03-01T16:59:00Z"), None, None).unwrap();
    assert!(fine.validate_against(&existing).is_ok());
}

#[test]
fn test_end_only_change_is_checked_against_stored_start() {
    let existing = period(9, 17, true);

    let before_start = PeriodChanges::parse(None, Some("2025-03-01T08:00:00Z"), None).unwrap();
    assert_bad_request(
        before_start.validate_against(&existing),
        "End date must be after existing start date.",
    );

    let fine = PeriodChanges::parse(None, Some("2025-03-02T08:00:00Z"), None).unwrap();
    assert!(fine.validate_against(&existing).is_ok());
}

#[test]
fn test_activation_only_change_is_valid() {
    let changes = PeriodChanges::parse(None, None, Some(false)).unwrap();
    assert!(!changes.is_empty());
    assert!(changes.validate_against(&period(9, 17, true)).is_ok());
    assert!(PeriodChanges::default().is_empty());
}

#[test]
fn test_window_without_active_period_is_forbidden() {
    let now = Utc::now();

    assert!(matches!(
        check_submission_window(None, now),
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        check_submission_window(Some(&period(0, 23, false)), now),
        Err(AppError::Forbidden(_))
    ));
}

#[test]
fn test_window_bounds_are_inclusive() {
    let p = period(9, 17, true);

    assert!(check_submission_window(Some(&p), p.start_date).is_ok());
    assert!(check_submission_window(Some(&p), p.end_date).is_ok());
    assert!(check_submission_window(Some(&p), p.start_date + Duration::hours(3)).is_ok());
}

#[test]
fn test_window_violation_reports_period_bounds() {
    let p = period(9, 17, true);
    let now = p.end_date + Duration::seconds(1);

    let Err(err) = check_submission_window(Some(&p), now) else {
        panic!("submission after the window must be rejected");
    };

    let AppError::OutsideRatingPeriod(info) = &err else {
        panic!("expected OutsideRatingPeriod, got {err:?}");
    };
    assert_eq!(info.start, "2025-03-01T09:00:00.000Z");
    assert_eq!(info.end, "2025-03-01T17:00:00.000Z");
    assert_eq!(info.current, "2025-03-01T17:00:01.000Z");

    let (status, body) = err.to_response();
    assert_eq!(status.as_u16(), 403);
    let json = serde_json::to_value(&body.0).unwrap();
    assert_eq!(json["error"], "Rating submission is not available at this time.");
    assert_eq!(json["periodInfo"]["start"], "2025-03-01T09:00:00.000Z");
    assert_eq!(json["periodInfo"]["end"], "2025-03-01T17:00:00.000Z");
}

#[test]
fn test_window_rejects_before_start() {
    let p = period(9, 17, true);
    assert!(matches!(
        check_submission_window(Some(&p), p.start_date - Duration::minutes(1)),
        Err(AppError::OutsideRatingPeriod(_))
    ));
}
