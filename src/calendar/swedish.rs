//! The Swedish calendar: Julian, except for the 1700–1712 attempt at a
//! gradual reform (one day ahead of Julian, with a 30 February 1712 to
//! get back) and the switch to Gregorian on 1 March 1753.

use super::{gregorian, julian};
use crate::consts::{FEBRUARY, MARCH, MIN_DAY};

const REFORM_START: (i64, u8, u8) = (1700, MARCH, MIN_DAY);
const REFORM_END: (i64, u8, u8) = (1712, FEBRUARY, 30);
const GREGORIAN_START: (i64, u8, u8) = (1753, MARCH, MIN_DAY);
const LAST_JULIAN_DAY_1753: u8 = 17;

pub fn days_in_month(year: i64, month: u8) -> u8 {
    match (year, month) {
        // the leap day of 1700 was skipped
        (1700, FEBRUARY) => 28,
        (1712, FEBRUARY) => 30,
        (1753, FEBRUARY) => LAST_JULIAN_DAY_1753,
        _ if year >= GREGORIAN_START.0 => gregorian::days_in_month(year, month),
        _ => julian::days_in_month(year, month),
    }
}

pub(crate) fn to_fixed(year: i64, month: u8, day: u8) -> i64 {
    let date = (year, month, day);
    if (REFORM_START..=REFORM_END).contains(&date) {
        julian::to_fixed(year, month, day) - 1
    } else if date >= GREGORIAN_START {
        gregorian::to_fixed(year, month, day)
    } else {
        julian::to_fixed(year, month, day)
    }
}

pub(crate) fn from_fixed(fixed: i64) -> (i64, u8, u8) {
    let (sy, sm, sd) = REFORM_START;
    let (ey, em, ed) = REFORM_END;
    let reform = to_fixed(sy, sm, sd)..=to_fixed(ey, em, ed);

    if reform.contains(&fixed) {
        match julian::from_fixed(fixed + 1) {
            (1712, MARCH, MIN_DAY) => REFORM_END,
            date => date,
        }
    } else if fixed >= gregorian::to_fixed(GREGORIAN_START.0, GREGORIAN_START.1, GREGORIAN_START.2) {
        gregorian::from_fixed(fixed)
    } else {
        julian::from_fixed(fixed)
    }
}
