//! Temporal bound validators.
//!
//! Three calendar models are kept apart, each with its own [`Value`] variant:
//!
//! | Model | Payload | Rendered as |
//! |---|---|---|
//! | instant | `DateTime<Utc>` | `2019-01-02 00:00:00 UTC` |
//! | date | `NaiveDate` | `2019-01-02` |
//! | date-time | `NaiveDateTime` | `2019-01-02T00:00:00` |
//!
//! A date bound rejects a date-time input and vice versa. None of these
//! validators read the clock; a "not in the future" check takes `Utc::now()`
//! from the caller at construction time.
//!
//! [`Value`]: crate::foundation::Value

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::range::{Max, Min, MinMax};

// ============================================================================
// INSTANT
// ============================================================================

/// Instant must be at or after `min`.
#[must_use]
pub fn min_time(min: DateTime<Utc>) -> Min<DateTime<Utc>> {
    Min::new(min)
}

/// Instant must be at or before `max`.
#[must_use]
pub fn max_time(max: DateTime<Utc>) -> Max<DateTime<Utc>> {
    Max::new(max)
}

/// Instant must be within `[min, max]`.
#[must_use]
pub fn min_max_time(min: DateTime<Utc>, max: DateTime<Utc>) -> MinMax<DateTime<Utc>> {
    MinMax::new(min, max)
}

// ============================================================================
// DATE
// ============================================================================

/// Date must be on or after `min`.
///
/// ```
/// use chrono::NaiveDate;
/// use rqp_validator::prelude::*;
///
/// let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
/// assert!(min_date(start).validate_any(start).is_ok());
/// ```
#[must_use]
pub fn min_date(min: NaiveDate) -> Min<NaiveDate> {
    Min::new(min)
}

/// Date must be on or before `max`.
#[must_use]
pub fn max_date(max: NaiveDate) -> Max<NaiveDate> {
    Max::new(max)
}

/// Date must be within `[min, max]`.
#[must_use]
pub fn min_max_date(min: NaiveDate, max: NaiveDate) -> MinMax<NaiveDate> {
    MinMax::new(min, max)
}

// ============================================================================
// DATE-TIME
// ============================================================================

/// Date-time must be at or after `min`.
#[must_use]
pub fn min_date_time(min: NaiveDateTime) -> Min<NaiveDateTime> {
    Min::new(min)
}

/// Date-time must be at or before `max`.
#[must_use]
pub fn max_date_time(max: NaiveDateTime) -> Max<NaiveDateTime> {
    Max::new(max)
}

/// Date-time must be within `[min, max]`.
#[must_use]
pub fn min_max_date_time(min: NaiveDateTime, max: NaiveDateTime) -> MinMax<NaiveDateTime> {
    MinMax::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================
