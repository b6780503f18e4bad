//! Project-hours allocation functionality.
//!
//! This module resolves how many hours a resource works on the active
//! project. An explicit allocation is honored as-is (including an explicit
//! zero); a missing allocation assumes full-time engagement for the project
//! duration under the standard work schedule.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::WorkSchedule;
use crate::models::Resource;

/// Calculates the standard full-time hours for a project duration.
///
/// ```text
/// hours = round(weekly_hours * weeks_per_month * duration_months)
/// ```
///
/// With the default schedule this is `round(40 * 4.33 * months)`: a 40-hour
/// week over an average 4.33 weeks per month. The result is rounded to a
/// whole number of hours, with midpoints rounding up (216.5 becomes 217,
/// not 216).
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::full_time_hours;
/// use quote_engine::config::WorkSchedule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hours = full_time_hours(Decimal::ONE, &WorkSchedule::default());
/// assert_eq!(hours, Decimal::from_str("173").unwrap());
/// ```
pub fn full_time_hours(duration_months: Decimal, schedule: &WorkSchedule) -> Decimal {
    (schedule.weekly_hours * schedule.weeks_per_month * duration_months)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Resolves the project hours for a resource.
///
/// Returns the explicit allocation when present, the full-time default
/// otherwise. An explicit `0` means the resource contributes no hours; only
/// a missing allocation triggers the default.
pub fn resolve_project_hours(
    resource: &Resource,
    duration_months: Decimal,
    schedule: &WorkSchedule,
) -> Decimal {
    resource
        .project_hours
        .unwrap_or_else(|| full_time_hours(duration_months, schedule))
}
