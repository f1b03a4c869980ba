//! Calendar arithmetic and formatting for date tokens.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::token::{Direction, Offset};

/// `strftime` pattern for resolved dates: two-digit month and day, four-digit
/// year (`MM/DD/YYYY`).
pub const DATE_FORMAT: &str = "%m/%d/%Y";

const MIN_FORMATTED_YEAR: i32 = 0;
const MAX_FORMATTED_YEAR: i32 = 9999;
const MONTHS_PER_YEAR: u64 = 12;

/// Shifts `date` by whole calendar days, rolling across month and year ends.
///
/// Returns `None` when the result falls outside chrono's calendar.
pub(crate) fn shift_days(date: NaiveDate, offset: Offset) -> Option<NaiveDate> {
    let days = Days::new(offset.amount);
    match offset.direction {
        Direction::Forward => date.checked_add_days(days),
        Direction::Backward => date.checked_sub_days(days),
    }
}

/// Shifts `date` by whole calendar years.
///
/// 29 February clamps to 28 February when the target year is not a leap
/// year.
pub(crate) fn shift_years(date: NaiveDate, offset: Offset) -> Option<NaiveDate> {
    let months = offset
        .amount
        .checked_mul(MONTHS_PER_YEAR)
        .and_then(|total| u32::try_from(total).ok())
        .map(Months::new)?;
    match offset.direction {
        Direction::Forward => date.checked_add_months(months),
        Direction::Backward => date.checked_sub_months(months),
    }
}

/// Formats `date` as `MM/DD/YYYY`.
///
/// Returns `None` for years that cannot be written with exactly four digits.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use data_tokens::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
/// assert_eq!(format_date(date).as_deref(), Some("01/01/2025"));
/// ```
#[must_use]
pub fn format_date(date: NaiveDate) -> Option<String> {
    (MIN_FORMATTED_YEAR..=MAX_FORMATTED_YEAR)
        .contains(&date.year())
        .then(|| date.format(DATE_FORMAT).to_string())
}
