//! Pinned clock for reproducible runs.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use mockable::Clock;

/// Hour of the pinned instant. Midday keeps the local date stable even where
/// a daylight-saving transition skips or repeats an hour.
const PINNED_HOUR: u32 = 12;

/// A [`Clock`] that always reports midday local time on a fixed date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use data_tokens::FixedDateClock;
/// use mockable::Clock;
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 30).expect("valid date");
/// let clock = FixedDateClock::new(date);
///
/// assert_eq!(clock.local().date_naive(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDateClock {
    date: NaiveDate,
}

impl FixedDateClock {
    /// Pins the clock to `date`.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Returns the pinned date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Clock for FixedDateClock {
    fn local(&self) -> DateTime<Local> {
        let midday = self
            .date
            .and_hms_opt(PINNED_HOUR, 0, 0)
            .unwrap_or_else(|| self.date.and_time(NaiveTime::MIN));
        Local
            .from_local_datetime(&midday)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&midday))
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local().with_timezone(&Utc)
    }
}
