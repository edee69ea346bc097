// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Calendar date as shown on the lamp display.
//!
//! The lamp formats dates as `month-day-year` without zero padding, e.g.
//! `3-7-2020`. [`Date`] stores the three components as given; use
//! [`Date::to_naive_date`] when calendar validity matters.
//!
//! # Examples
//!
//! ```
//! use corona_lamp::types::Date;
//!
//! let date = Date::new(2020, 3, 7);
//! assert_eq!(date.to_string(), "3-7-2020");
//!
//! let parsed: Date = "3-7-2020".parse().unwrap();
//! assert_eq!(parsed, date);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::DateParseError;

/// A year, month and day triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date {
    /// Calendar year.
    pub year: i32,
    /// Month of the year, 1-12.
    pub month: u32,
    /// Day of the month, 1-31.
    pub day: u32,
}

impl Date {
    /// Creates a new date without checking it against the calendar.
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Returns the equivalent chrono date, or `None` if the date does not
    /// exist (e.g. February 30th).
    ///
    /// ```
    /// use corona_lamp::types::Date;
    ///
    /// assert!(Date::new(2020, 2, 29).to_naive_date().is_some());
    /// assert!(Date::new(2021, 2, 29).to_naive_date().is_none());
    /// ```
    #[must_use]
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.month, self.day, self.year)
    }
}

impl FromStr for Date {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut parts = trimmed.splitn(3, '-');

        let (Some(month), Some(day), Some(year)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(DateParseError::new(s));
        };

        let month = month.parse().map_err(|_| DateParseError::new(s))?;
        let day = day.parse().map_err(|_| DateParseError::new(s))?;
        let year = year.parse().map_err(|_| DateParseError::new(s))?;

        Ok(Self::new(year, month, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_padding() {
        assert_eq!(Date::new(2020, 3, 7).to_string(), "3-7-2020");
        assert_eq!(Date::new(2021, 12, 25).to_string(), "12-25-2021");
    }

    #[test]
    fn parse_round_trips_display() {
        let date = Date::new(2020, 11, 2);
        assert_eq!(date.to_string().parse::<Date>().unwrap(), date);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(" 1-2-2003\n".parse::<Date>().unwrap(), Date::new(2003, 1, 2));
    }

    #[test]
    fn parse_invalid() {
        for input in ["", "3-7", "2020/03/07", "a-b-c", "3-7-2020-1", "-3-7-2020"] {
            let err = input.parse::<Date>().unwrap_err();
            assert_eq!(err.input(), input);
        }
    }

    #[test]
    fn parse_keeps_impossible_dates() {
        let date: Date = "2-30-2021".parse().unwrap();
        assert_eq!(date, Date::new(2021, 2, 30));
        assert!(date.to_naive_date().is_none());
    }

    #[test]
    fn chrono_interop() {
        let naive = NaiveDate::from_ymd_opt(2020, 3, 7).unwrap();
        let date = Date::from(naive);
        assert_eq!(date, Date::new(2020, 3, 7));
        assert_eq!(date.to_naive_date(), Some(naive));
    }

    #[test]
    fn ordering_follows_calendar() {
        assert!(Date::new(2020, 12, 31) < Date::new(2021, 1, 1));
        assert!(Date::new(2021, 1, 2) > Date::new(2021, 1, 1));
    }
}
