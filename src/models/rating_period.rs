use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RatingPeriod {
    pub id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RatingPeriod {
    /// Inclusive on both bounds.
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now && now <= self.end_date
    }

    pub fn info_at(&self, now: DateTime<Utc>) -> PeriodInfo {
        PeriodInfo {
            start: to_iso(self.start_date),
            end: to_iso(self.end_date),
            current: to_iso(now),
        }
    }
}

/// Window bounds reported to a caller whose submission was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodInfo {
    pub start: String,
    pub end: String,
    pub current: String,
}

fn to_iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Accepts RFC 3339, HTML `datetime-local` values and plain dates. Values
/// without an offset are read as UTC.
pub fn parse_period_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(at) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(at.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
}

pub fn parse_new_period(
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let (Some(start_raw), Some(end_raw)) = (
        start_date.filter(|s| !s.trim().is_empty()),
        end_date.filter(|s| !s.trim().is_empty()),
    ) else {
        return Err(AppError::BadRequest(
            "Start date and end date are required.".into(),
        ));
    };

    let (Some(start), Some(end)) = (parse_period_date(start_raw), parse_period_date(end_raw))
    else {
        return Err(AppError::BadRequest("Invalid date format.".into()));
    };

    if start >= end {
        return Err(AppError::BadRequest(
            "End date must be after start date.".into(),
        ));
    }

    Ok((start, end))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodChanges {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

impl PeriodChanges {
    pub fn parse(
        start_date: Option<&str>,
        end_date: Option<&str>,
        is_active: Option<bool>,
    ) -> Result<Self, AppError> {
        let start_date = start_date
            .map(|raw| {
                parse_period_date(raw)
                    .ok_or_else(|| AppError::BadRequest("Invalid start date format.".into()))
            })
            .transpose()?;

        let end_date = end_date
            .map(|raw| {
                parse_period_date(raw)
                    .ok_or_else(|| AppError::BadRequest("Invalid end date format.".into()))
            })
            .transpose()?;

        Ok(Self {
            start_date,
            end_date,
            is_active,
        })
    }

    /// Checks the bounds the period would have after applying these changes.
    pub fn validate_against(&self, existing: &RatingPeriod) -> Result<(), AppError> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if start >= end => Err(AppError::BadRequest(
                "End date must be after start date.".into(),
            )),
            (Some(start), None) if start >= existing.end_date => Err(AppError::BadRequest(
                "Start date must be before existing end date.".into(),
            )),
            (None, Some(end)) if existing.start_date >= end => Err(AppError::BadRequest(
                "End date must be after existing start date.".into(),
            )),
            _ => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.is_active.is_none()
    }
}
