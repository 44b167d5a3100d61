use chrono::{DateTime, Utc};

use crate::{errors::AppError, models::rating_period::RatingPeriod};

pub const NO_ACTIVE_PERIOD: &str =
    "Rating submission is not available at this time. No active rating period has been set.";

/// Decides whether a rating may be created at `now` given the currently
/// active period, if any.
pub fn check_submission_window(
    active_period: Option<&RatingPeriod>,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let Some(period) = active_period else {
        return Err(AppError::Forbidden(NO_ACTIVE_PERIOD.into()));
    };

    if !period.is_active {
        return Err(AppError::Forbidden(NO_ACTIVE_PERIOD.into()));
    }

    if !period.contains(now) {
        return Err(AppError::OutsideRatingPeriod(period.info_at(now)));
    }

    Ok(())
}
