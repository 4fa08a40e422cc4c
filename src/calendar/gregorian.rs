use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LEAP_YEAR_CYCLE, MARCH, MAX_MONTH, MIN_DAY,
};

const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_100_YEARS: i64 = 36_524;
const DAYS_PER_4_YEARS: i64 = 1_461;
const DAYS_PER_YEAR: i64 = 365;

pub const fn is_leap_year(year: i64) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

/// Days in `month` of `year`, or 0 when the month does not exist.
pub const fn days_in_month(year: i64, month: u8) -> u8 {
    if month == 0 || month > MAX_MONTH {
        0
    } else if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days from the start of the year to the first of `month` in the shared
/// 12-month solar layout (Gregorian and Julian differ only in `leap`).
pub(crate) const fn days_before_month(month: u8, leap: bool) -> i64 {
    let m = month as i64;
    let correction = if month <= FEBRUARY {
        0
    } else if leap {
        -1
    } else {
        -2
    };
    (367 * m - 362).div_euclid(12) + correction
}

/// Rata Die of a proleptic Gregorian date (1 = 0001-01-01).
pub(crate) const fn to_fixed(year: i64, month: u8, day: u8) -> i64 {
    let y = year - 1;
    DAYS_PER_YEAR * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + days_before_month(month, is_leap_year(year))
        + day as i64
}

pub(crate) const fn year_from_fixed(fixed: i64) -> i64 {
    let d0 = fixed - 1;
    let n400 = d0.div_euclid(DAYS_PER_400_YEARS);
    let d1 = d0.rem_euclid(DAYS_PER_400_YEARS);
    let n100 = d1.div_euclid(DAYS_PER_100_YEARS);
    let d2 = d1.rem_euclid(DAYS_PER_100_YEARS);
    let n4 = d2.div_euclid(DAYS_PER_4_YEARS);
    let d3 = d2.rem_euclid(DAYS_PER_4_YEARS);
    let n1 = d3.div_euclid(DAYS_PER_YEAR);
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    // Dec 31 of a leap year closes a 4- or 400-year cycle
    if n100 == 4 || n1 == 4 { year } else { year + 1 }
}

pub(crate) const fn from_fixed(fixed: i64) -> (i64, u8, u8) {
    let year = year_from_fixed(fixed);
    let prior_days = fixed - to_fixed(year, JANUARY, MIN_DAY);
    let correction = if fixed < to_fixed(year, MARCH, MIN_DAY) {
        0
    } else if is_leap_year(year) {
        1
    } else {
        2
    };
    let month = (12 * (prior_days + correction) + 373).div_euclid(367) as u8;
    let day = (fixed - to_fixed(year, month, MIN_DAY) + 1) as u8;
    (year, month, day)
}
