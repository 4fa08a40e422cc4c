//! Calendar conversion engine.
//!
//! Every calendar maps a (day, month, year) triple onto a shared absolute day
//! count, the Rata Die [`Ordinal`] (day 1 is Gregorian 0001-01-01). Comparing
//! and sorting dates across calendars goes through that ordinal.

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_lossless)]

pub mod french;
pub mod gregorian;
pub mod hebrew;
pub mod islamic;
pub mod julian;
pub mod persian;
pub mod swedish;

use crate::consts::{
    FRENCH_MONTHS, HEBREW_MONTHS, ISLAMIC_MONTHS, JANUARY, MARCH, MAX_MONTH,
    MAX_MONTH_INTERCALARY, MIN_DAY, NEWYEAR_SEPARATOR, PERSIAN_MONTHS, SEPTEMBER, UNKNOWN,
};
use crate::error::DateError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Absolute day number shared by all calendars.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Ordinal(i64);

impl Ordinal {
    /// Ordinal of the empty and the textual date.
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

/// The calendars a date can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calendar {
    #[default]
    Gregorian,
    Julian,
    Hebrew,
    #[display(fmt = "French Republican")]
    FrenchRepublican,
    Persian,
    Islamic,
    Swedish,
}

impl Calendar {
    pub const ALL: [Self; 7] = [
        Self::Gregorian,
        Self::Julian,
        Self::Hebrew,
        Self::FrenchRepublican,
        Self::Persian,
        Self::Islamic,
        Self::Swedish,
    ];

    /// Highest month number of the calendar.
    pub const fn max_month(self) -> u8 {
        match self {
            Self::Hebrew | Self::FrenchRepublican => MAX_MONTH_INTERCALARY,
            _ => MAX_MONTH,
        }
    }

    /// Days in `month` of `year`; 0 when the month does not exist that year.
    pub fn days_in_month(self, year: i32, month: u8) -> u8 {
        let year = i64::from(year);
        match self {
            Self::Gregorian => gregorian::days_in_month(year, month),
            Self::Julian => julian::days_in_month(year, month),
            Self::Hebrew => hebrew::days_in_month(year, month),
            Self::FrenchRepublican => french::days_in_month(year, month),
            Self::Persian => persian::days_in_month(year, month),
            Self::Islamic => islamic::days_in_month(year, month),
            Self::Swedish => swedish::days_in_month(year, month),
        }
    }

    /// Fixed month names for calendars whose names are not localized.
    ///
    /// Gregorian, Julian and Swedish dates use the locale's month names and
    /// return `None`.
    pub const fn month_names(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Hebrew => Some(&HEBREW_MONTHS),
            Self::FrenchRepublican => Some(&FRENCH_MONTHS),
            Self::Persian => Some(&PERSIAN_MONTHS),
            Self::Islamic => Some(&ISLAMIC_MONTHS),
            Self::Gregorian | Self::Julian | Self::Swedish => None,
        }
    }

    fn fixed(self, year: i64, month: u8, day: u8) -> i64 {
        match self {
            Self::Gregorian => gregorian::to_fixed(year, month, day),
            Self::Julian => julian::to_fixed(year, month, day),
            Self::Hebrew => hebrew::to_fixed(year, month, day),
            Self::FrenchRepublican => french::to_fixed(year, month, day),
            Self::Persian => persian::to_fixed(year, month, day),
            Self::Islamic => islamic::to_fixed(year, month, day),
            Self::Swedish => swedish::to_fixed(year, month, day),
        }
    }

    fn civil(self, fixed: i64) -> (i64, u8, u8) {
        match self {
            Self::Gregorian => gregorian::from_fixed(fixed),
            Self::Julian => julian::from_fixed(fixed),
            Self::Hebrew => hebrew::from_fixed(fixed),
            Self::FrenchRepublican => french::from_fixed(fixed),
            Self::Persian => persian::from_fixed(fixed),
            Self::Islamic => islamic::from_fixed(fixed),
            Self::Swedish => swedish::from_fixed(fixed),
        }
    }

    /// Whether the calendar counts its year from 1 January and therefore
    /// honors a [`NewYear`] convention. The other calendars have their own
    /// fixed year start.
    pub const fn uses_new_year(self) -> bool {
        matches!(self, Self::Gregorian | Self::Julian | Self::Swedish)
    }

    const fn year_start(self, newyear: NewYear) -> (u8, u8) {
        if self.uses_new_year() { newyear.start() } else { (JANUARY, MIN_DAY) }
    }

    /// The January-based year a written `(day, month, year)` falls in.
    ///
    /// A day before the new-year start belongs to the following year, so
    /// 10 February 1745 under a 25 March start is in 1746.
    pub const fn civil_year(self, newyear: NewYear, day: u8, month: u8, year: i32) -> i32 {
        let day = if day == UNKNOWN { MIN_DAY } else { day };
        if month != UNKNOWN && precedes(month, day, self.year_start(newyear)) {
            year + 1
        } else {
            year
        }
    }

    /// Converts a date of this calendar to its ordinal.
    ///
    /// `year` is numbered under `newyear` (see [`Self::civil_year`]). An
    /// unknown day counts as the first of the month; an unknown month as the
    /// first day of the year. The all-zero empty date maps to
    /// [`Ordinal::EMPTY`].
    pub fn to_ordinal(self, newyear: NewYear, day: u8, month: u8, year: i32) -> Ordinal {
        if day == UNKNOWN && month == UNKNOWN && year == 0 {
            return Ordinal::EMPTY;
        }

        let fixed = if month == UNKNOWN {
            let (start_month, start_day) = self.year_start(newyear);
            self.fixed(i64::from(year), start_month, start_day)
        } else {
            let civil = self.civil_year(newyear, day, month, year);
            self.fixed(i64::from(civil), month, day.max(MIN_DAY))
        };
        Ordinal(fixed)
    }

    /// Converts an ordinal back to `(day, month, year)` of this calendar,
    /// numbering the year under `newyear`.
    pub fn from_ordinal(self, newyear: NewYear, ordinal: Ordinal) -> (u8, u8, i32) {
        let (year, month, day) = self.civil(ordinal.get());
        let year = if precedes(month, day, self.year_start(newyear)) { year - 1 } else { year };
        (day, month, year as i32)
    }
}

const fn precedes(month: u8, day: u8, start: (u8, u8)) -> bool {
    month < start.0 || (month == start.0 && day < start.1)
}

/// When the civil year starts.
///
/// Before a nationwide switch to 1 January, many places counted the year from
/// 25 March (Lady Day), 1 March or 1 September. Dates between 1 January and
/// that start are written with the previous year number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewYear {
    #[default]
    Jan1,
    Mar1,
    Mar25,
    Sep1,
    Custom { month: u8, day: u8 },
}

impl NewYear {
    /// A custom new-year start, validated against a leap year of twelve months.
    ///
    /// # Errors
    /// Returns `DateError::InvalidNewYear` if `(month, day)` is not a day of the year.
    pub fn custom(month: u8, day: u8) -> Result<Self, DateError> {
        let value = Self::Custom { month, day };
        value.validate()?;
        Ok(value)
    }

    pub(crate) fn validate(self) -> Result<(), DateError> {
        let (month, day) = self.start();
        let max_day = gregorian::days_in_month(4, month);
        if day < MIN_DAY || day > max_day {
            return Err(DateError::InvalidNewYear { month, day });
        }
        Ok(())
    }

    /// `(month, day)` on which the year starts.
    pub const fn start(self) -> (u8, u8) {
        match self {
            Self::Jan1 => (JANUARY, MIN_DAY),
            Self::Mar1 => (MARCH, MIN_DAY),
            Self::Mar25 => (MARCH, 25),
            Self::Sep1 => (SEPTEMBER, MIN_DAY),
            Self::Custom { month, day } => (month, day),
        }
    }

    pub const fn is_default(self) -> bool {
        matches!(self, Self::Jan1)
    }
}

impl std::fmt::Display for NewYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jan1 => write!(f, "Jan1"),
            Self::Mar1 => write!(f, "Mar1"),
            Self::Mar25 => write!(f, "Mar25"),
            Self::Sep1 => write!(f, "Sep1"),
            Self::Custom { month, day } => write!(f, "{month}{NEWYEAR_SEPARATOR}{day}"),
        }
    }
}

impl FromStr for NewYear {
    type Err = DateError;

    /// Parses the codes produced by `Display`: `Jan1`, `Mar1`, `Mar25`,
    /// `Sep1` or `month-day`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Jan1" => Ok(Self::Jan1),
            "Mar1" => Ok(Self::Mar1),
            "Mar25" => Ok(Self::Mar25),
            "Sep1" => Ok(Self::Sep1),
            other => {
                let invalid = || DateError::UnparseableText(other.to_owned());
                let (month, day) = other.split_once(NEWYEAR_SEPARATOR).ok_or_else(invalid)?;
                let month = month.parse::<u8>().map_err(|_| invalid())?;
                let day = day.parse::<u8>().map_err(|_| invalid())?;
                Self::custom(month, day)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_julian_gregorian_offset() {
        let julian = Calendar::Julian.to_ordinal(NewYear::Jan1, 5, 10, 1582);
        let gregorian = Calendar::Gregorian.to_ordinal(NewYear::Jan1, 15, 10, 1582);
        assert_eq!(julian, gregorian);
    }

    #[test]
    fn test_invertibility_gregorian_and_julian() {
        for calendar in [Calendar::Gregorian, Calendar::Julian] {
            for year in [1, 1582, 1700, 1745, 1789, 1876, 1900, 2000] {
                for month in 1..=12u8 {
                    for day in 1..=calendar.days_in_month(year, month) {
                        let ordinal = calendar.to_ordinal(NewYear::Jan1, day, month, year);
                        assert_eq!(
                            calendar.from_ordinal(NewYear::Jan1, ordinal),
                            (day, month, year),
                            "{calendar} {year}-{month}-{day}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_invertibility_under_new_year_conventions() {
        let conventions = [NewYear::Mar25, NewYear::Sep1, NewYear::Custom { month: 5, day: 5 }];
        for calendar in Calendar::ALL {
            for newyear in conventions {
                for month in 1..=calendar.max_month() {
                    for day in [1, 5, 27] {
                        if day > calendar.days_in_month(1789, month) {
                            continue;
                        }
                        let ordinal = calendar.to_ordinal(newyear, day, month, 1789);
                        assert_eq!(
                            calendar.from_ordinal(newyear, ordinal),
                            (day, month, 1789),
                            "{calendar} {newyear} 1789-{month}-{day}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_lady_day_year_numbering() {
        // 10 February 1745 old style is 10 February 1746 new style
        let old_style = Calendar::Julian.to_ordinal(NewYear::Mar25, 10, 2, 1745);
        let new_style = Calendar::Julian.to_ordinal(NewYear::Jan1, 10, 2, 1746);
        assert_eq!(old_style, new_style);

        // 25 March starts the year in both numberings
        let old_style = Calendar::Julian.to_ordinal(NewYear::Mar25, 25, 3, 1745);
        let new_style = Calendar::Julian.to_ordinal(NewYear::Jan1, 25, 3, 1745);
        assert_eq!(old_style, new_style);
    }

    #[test]
    fn test_partial_dates_map_to_first_day() {
        let cal = Calendar::Gregorian;
        assert_eq!(cal.to_ordinal(NewYear::Jan1, 0, 0, 1789), cal.to_ordinal(NewYear::Jan1, 1, 1, 1789));
        assert_eq!(cal.to_ordinal(NewYear::Jan1, 0, 7, 1789), cal.to_ordinal(NewYear::Jan1, 1, 7, 1789));
        assert_eq!(cal.to_ordinal(NewYear::Mar25, 0, 0, 1745), cal.to_ordinal(NewYear::Jan1, 25, 3, 1745));
        assert_eq!(cal.to_ordinal(NewYear::Jan1, 0, 0, 0), Ordinal::EMPTY);
    }

    #[test]
    fn test_hebrew_new_year_5785() {
        let hebrew = Calendar::Hebrew.to_ordinal(NewYear::Jan1, 1, 1, 5785);
        let gregorian = Calendar::Gregorian.to_ordinal(NewYear::Jan1, 3, 10, 2024);
        assert_eq!(hebrew, gregorian);
    }

    #[test]
    fn test_calendar_display() {
        let names: Vec<String> = Calendar::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            ["Gregorian", "Julian", "Hebrew", "French Republican", "Persian", "Islamic", "Swedish"]
        );
    }

    #[test]
    fn test_new_year_codes() {
        struct TestCase {
            input:    &'static str,
            expected: Option<NewYear>,
        }

        let cases = [
            TestCase {
                input:    "Jan1",
                expected: Some(NewYear::Jan1),
            },
            TestCase {
                input:    "Mar25",
                expected: Some(NewYear::Mar25),
            },
            TestCase {
                input:    "5-5",
                expected: Some(NewYear::Custom { month: 5, day: 5 }),
            },
            TestCase {
                input:    "2-30",
                expected: None,
            },
            TestCase {
                input:    "13-1",
                expected: None,
            },
            TestCase {
                input:    "Julian",
                expected: None,
            },
        ];

        for case in &cases {
            assert_eq!(case.input.parse::<NewYear>().ok(), case.expected, "Input: {}", case.input);
            if let Some(newyear) = case.expected {
                assert_eq!(newyear.to_string(), case.input);
            }
        }
    }

    #[test]
    fn test_ordinal_serde() {
        let ordinal = Calendar::Gregorian.to_ordinal(NewYear::Jan1, 1, 1, 1970);
        assert_eq!(serde_json::to_string(&ordinal).unwrap(), "719163");
    }
}
