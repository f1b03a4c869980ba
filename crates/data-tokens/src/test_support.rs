//! Shared test doubles for unit tests.

use chrono::NaiveDate;

use crate::clock::FixedDateClock;
use crate::random::RandomSource;

/// Random source returning fixed, recognisable values.
pub(crate) struct StubRandomSource;

impl StubRandomSource {
    pub(crate) const FIRST_NAME: &'static str = "Ada";
    pub(crate) const LAST_NAME: &'static str = "Lovelace";
}

impl RandomSource for StubRandomSource {
    fn unique_id(&self, length: usize) -> String {
        "x".repeat(length)
    }

    fn first_name(&self) -> String {
        Self::FIRST_NAME.to_owned()
    }

    fn last_name(&self) -> String {
        Self::LAST_NAME.to_owned()
    }
}

pub(crate) fn fixed_clock(year: i32, month: u32, day: u32) -> FixedDateClock {
    let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date");
    FixedDateClock::new(date)
}
