//! French Republican calendar, Romme's arithmetic rule. Twelve months of
//! thirty days plus the complementary days as month 13.

/// 1 Vendémiaire I, Gregorian 1792-09-22.
const EPOCH: i64 = 654_415;
const DAYS_PER_MONTH: u8 = 30;
const COMPLEMENTARY: u8 = 13;

pub const fn is_leap_year(year: i64) -> bool {
    let century = year.rem_euclid(400);
    year.rem_euclid(4) == 0
        && century != 100
        && century != 200
        && century != 300
        && year.rem_euclid(4000) != 0
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    match month {
        1..=12 => DAYS_PER_MONTH,
        COMPLEMENTARY if is_leap_year(year) => 6,
        COMPLEMENTARY => 5,
        _ => 0,
    }
}

pub(crate) const fn to_fixed(year: i64, month: u8, day: u8) -> i64 {
    let y = year - 1;
    EPOCH - 1 + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) - y.div_euclid(4000)
        + 30 * (month as i64 - 1)
        + day as i64
}

pub(crate) const fn from_fixed(fixed: i64) -> (i64, u8, u8) {
    let approx = (4000 * (fixed - EPOCH + 2)).div_euclid(1_460_969) + 1;
    let year = if fixed < to_fixed(approx, 1, 1) { approx - 1 } else { approx };
    let month = ((fixed - to_fixed(year, 1, 1)).div_euclid(30) + 1) as u8;
    let day = (fixed - to_fixed(year, month, 1) + 1) as u8;
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::gregorian;

    #[test]
    fn test_epoch() {
        assert_eq!(to_fixed(1, 1, 1), gregorian::to_fixed(1792, 9, 22));
        assert_eq!(from_fixed(EPOCH), (1, 1, 1));
    }

    #[test]
    fn test_complementary_days() {
        assert_eq!(days_in_month(4, COMPLEMENTARY), 6);
        assert_eq!(days_in_month(5, COMPLEMENTARY), 5);
        assert_eq!(to_fixed(4, COMPLEMENTARY, 6) + 1, to_fixed(5, 1, 1));
        assert_eq!(to_fixed(5, COMPLEMENTARY, 5) + 1, to_fixed(6, 1, 1));
    }

    #[test]
    fn test_from_fixed_inverts_to_fixed() {
        for year in [1, 2, 3, 4, 8, 12, 14, 100, 400] {
            for month in 1..=13u8 {
                for day in 1..=days_in_month(year, month) {
                    let fixed = to_fixed(year, month, day);
                    assert_eq!(from_fixed(fixed), (year, month, day), "{year}-{month}-{day}");
                }
            }
        }
    }
}
