//! Arithmetic (tabular) Islamic calendar, 30-year cycle.

/// 1 Muharram 1 AH, Julian 622-07-16.
const EPOCH: i64 = 227_015;
const DHU_AL_HIJJA: u8 = 12;

pub const fn is_leap_year(year: i64) -> bool {
    (14 + 11 * year).rem_euclid(30) < 11
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    match month {
        DHU_AL_HIJJA if is_leap_year(year) => 30,
        1..=DHU_AL_HIJJA if month % 2 == 1 => 30,
        1..=DHU_AL_HIJJA => 29,
        _ => 0,
    }
}

pub(crate) const fn to_fixed(year: i64, month: u8, day: u8) -> i64 {
    let m = month as i64;
    EPOCH - 1
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + 29 * (m - 1)
        + (6 * m - 1).div_euclid(11)
        + day as i64
}

pub(crate) const fn from_fixed(fixed: i64) -> (i64, u8, u8) {
    let year = (30 * (fixed - EPOCH) + 10_646).div_euclid(10_631);
    let prior_days = fixed - to_fixed(year, 1, 1);
    let month = (11 * prior_days + 330).div_euclid(325) as u8;
    let day = (fixed - to_fixed(year, month, 1) + 1) as u8;
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::julian;

    #[test]
    fn test_epoch() {
        assert_eq!(to_fixed(1, 1, 1), julian::to_fixed(622, 7, 16));
        assert_eq!(from_fixed(EPOCH), (1, 1, 1));
    }

    #[test]
    fn test_cycle_has_eleven_leap_years() {
        let leaps = (1..=30).filter(|y| is_leap_year(*y)).count();
        assert_eq!(leaps, 11);
        assert_eq!(to_fixed(31, 1, 1) - to_fixed(1, 1, 1), 10_631);
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(days_in_month(1445, 1), 30);
        assert_eq!(days_in_month(1445, 2), 29);
        assert_eq!(days_in_month(2, 12), 30);
        assert_eq!(days_in_month(1, 12), 29);
        assert_eq!(days_in_month(1, 13), 0);
    }

    #[test]
    fn test_from_fixed_inverts_to_fixed() {
        for year in [1, 2, 29, 30, 1200, 1445, 1446] {
            for month in 1..=12u8 {
                for day in 1..=days_in_month(year, month) {
                    let fixed = to_fixed(year, month, day);
                    assert_eq!(from_fixed(fixed), (year, month, day), "{year}-{month}-{day}");
                }
            }
        }
    }
}
