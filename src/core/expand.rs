use crate::errors::{AppError, AppResult};
use crate::models::Day;
use chrono::NaiveDate;

/// Expand `[start, end]` into one unpersisted `Day` per calendar day.
///
/// Both endpoints are included and the days come out in ascending order.
/// Stepping uses `succ_opt`, so month ends, leap days and year boundaries
/// need no special casing. An inverted range is rejected instead of
/// silently yielding nothing.
pub fn expand_days(trip_id: i64, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Day>> {
    if start > end {
        return Err(AppError::InvalidDateRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let mut out = Vec::with_capacity(((end - start).num_days() + 1) as usize);
    let mut d = start;

    while d <= end {
        out.push(Day::new(trip_id, d));
        d = match d.succ_opt() {
            Some(next) => next,
            None => break, // NaiveDate::MAX
        };
    }

    Ok(out)
}
