//! Arithmetic Hebrew calendar. Months are numbered from Tishri (1) to
//! Elul (13); AdarII (7) only exists in leap years.

const EPOCH: i64 = -1_373_427;
const MONTHS_PER_CYCLE: i64 = 235;
const YEARS_PER_CYCLE: i64 = 19;
const PARTS_PER_DAY: i64 = 25_920;

const TISHRI: u8 = 1;
const HESHVAN: u8 = 2;
const KISLEV: u8 = 3;
const ADAR_I: u8 = 6;
const ADAR_II: u8 = 7;
const NISAN: u8 = 8;
const ELUL: u8 = 13;

pub const fn is_leap_year(year: i64) -> bool {
    (7 * year + 1).rem_euclid(YEARS_PER_CYCLE) < 7
}

const fn months_elapsed(year: i64) -> i64 {
    (MONTHS_PER_CYCLE * year - 234).div_euclid(YEARS_PER_CYCLE)
}

const fn calendar_elapsed_days(year: i64) -> i64 {
    let months = months_elapsed(year);
    let parts = 12_084 + 13_753 * months;
    let days = 29 * months + parts.div_euclid(PARTS_PER_DAY);
    if (3 * (days + 1)).rem_euclid(7) < 3 { days + 1 } else { days }
}

const fn year_length_correction(year: i64) -> i64 {
    let ny0 = calendar_elapsed_days(year - 1);
    let ny1 = calendar_elapsed_days(year);
    let ny2 = calendar_elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

const fn new_year(year: i64) -> i64 {
    EPOCH + calendar_elapsed_days(year) + year_length_correction(year)
}

const fn days_in_year(year: i64) -> i64 {
    new_year(year + 1) - new_year(year)
}

const fn long_heshvan(year: i64) -> bool {
    days_in_year(year).rem_euclid(10) == 5
}

const fn short_kislev(year: i64) -> bool {
    days_in_year(year).rem_euclid(10) == 3
}

/// Days in `month` (Tishri-based numbering), or 0 when the month does not
/// exist in `year`.
pub const fn days_in_month(year: i64, month: u8) -> u8 {
    match month {
        HESHVAN => {
            if long_heshvan(year) { 30 } else { 29 }
        }
        KISLEV => {
            if short_kislev(year) { 29 } else { 30 }
        }
        ADAR_I => {
            if is_leap_year(year) { 30 } else { 29 }
        }
        ADAR_II => {
            if is_leap_year(year) { 29 } else { 0 }
        }
        // Tevet, Iyyar, Tammuz, Elul
        4 | 9 | 11 | ELUL => 29,
        TISHRI | 5 | NISAN | 10 | 12 => 30,
        _ => 0,
    }
}

/// Days from 1 Tishri to the first of `month`.
const fn days_before_month(year: i64, month: u8) -> i64 {
    let mut days = 0;
    let mut m = TISHRI;
    while m < month {
        days += days_in_month(year, m) as i64;
        m += 1;
    }
    days
}

pub(crate) const fn to_fixed(year: i64, month: u8, day: u8) -> i64 {
    new_year(year) + days_before_month(year, month) + day as i64 - 1
}

pub(crate) const fn from_fixed(fixed: i64) -> (i64, u8, u8) {
    // The mean-year estimate can land on either side of the true year,
    // since 1 Tishri is postponed up to two days past the molad.
    let approx = (98_496 * (fixed - EPOCH)).div_euclid(35_975_351) + 1;
    let mut year = approx - 1;
    while new_year(year + 1) <= fixed {
        year += 1;
    }
    let mut month = TISHRI;
    while month < ELUL && to_fixed(year, month + 1, 1) <= fixed {
        month += 1;
        // skip the missing AdarII
        if days_in_month(year, month) == 0 {
            month += 1;
        }
    }
    let day = (fixed - to_fixed(year, month, 1) + 1) as u8;
    (year, month, day)
}
