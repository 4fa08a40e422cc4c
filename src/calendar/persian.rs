//! Arithmetic Persian calendar (2820-year cycle).

/// 1 Farvardin 1 AP, Julian 622-03-19.
const EPOCH: i64 = 226_896;
const CYCLE_YEARS: i64 = 2_820;
const CYCLE_DAYS: i64 = 1_029_983;
const CYCLE_BASE: i64 = 474;
const ESFAND: u8 = 12;

const fn cycle_year(year: i64) -> (i64, i64) {
    let y0 = year - CYCLE_BASE;
    (y0.div_euclid(CYCLE_YEARS), y0.rem_euclid(CYCLE_YEARS) + CYCLE_BASE)
}

pub const fn is_leap_year(year: i64) -> bool {
    let (_, y) = cycle_year(year);
    ((y + 38) * 31).rem_euclid(128) < 31
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        ESFAND if is_leap_year(year) => 30,
        ESFAND => 29,
        _ => 0,
    }
}

pub(crate) const fn to_fixed(year: i64, month: u8, day: u8) -> i64 {
    let (cycles, y) = cycle_year(year);
    let m = month as i64;
    let month_days = if m <= 7 { 31 * (m - 1) } else { 30 * (m - 1) + 6 };
    EPOCH - 1 + CYCLE_DAYS * cycles + 365 * (y - 1) + (31 * y - 5).div_euclid(128) + month_days + day as i64
}

const fn year_from_fixed(fixed: i64) -> i64 {
    let d0 = fixed - to_fixed(CYCLE_BASE + 1, 1, 1);
    let cycles = d0.div_euclid(CYCLE_DAYS);
    let d1 = d0.rem_euclid(CYCLE_DAYS);
    let y = if d1 == CYCLE_DAYS - 1 {
        CYCLE_YEARS
    } else {
        (128 * d1 + 46_878).div_euclid(46_751)
    };
    CYCLE_BASE + CYCLE_YEARS * cycles + y
}

pub(crate) const fn from_fixed(fixed: i64) -> (i64, u8, u8) {
    let year = year_from_fixed(fixed);
    let day_of_year = fixed - to_fixed(year, 1, 1) + 1;
    let month = if day_of_year <= 186 {
        (day_of_year + 30).div_euclid(31)
    } else {
        (day_of_year - 6 + 29).div_euclid(30)
    } as u8;
    let day = (fixed - to_fixed(year, month, 1) + 1) as u8;
    (year, month, day)
}
