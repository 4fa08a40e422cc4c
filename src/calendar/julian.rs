use super::gregorian::days_before_month;
use crate::consts::{DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, JANUARY, LEAP_YEAR_CYCLE, MARCH, MAX_MONTH, MIN_DAY};

/// Rata Die of Julian 0001-01-01 (Gregorian 0000-12-30).
const EPOCH: i64 = -1;

pub const fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    if month == 0 || month > MAX_MONTH {
        0
    } else if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Rata Die of a proleptic Julian date, astronomical year numbering.
pub(crate) const fn to_fixed(year: i64, month: u8, day: u8) -> i64 {
    let y = year - 1;
    EPOCH - 1 + 365 * y + y.div_euclid(4) + days_before_month(month, is_leap_year(year)) + day as i64
}

pub(crate) const fn from_fixed(fixed: i64) -> (i64, u8, u8) {
    let year = (4 * (fixed - EPOCH) + 1464).div_euclid(1461);
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
