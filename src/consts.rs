/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Minimum valid year for a dated component; 0 only appears in the empty date
pub const MIN_YEAR: u16 = 1;

/// Maximum month number for twelve-month calendars
pub const MAX_MONTH: u8 = 12;

/// Maximum month number for calendars with an intercalary or complementary month
pub const MAX_MONTH_INTERCALARY: u8 = 13;

/// Marker for an unknown day or month
pub const UNKNOWN: u8 = 0;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for September
pub const SEPTEMBER: u8 = 9;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Number of flat fields in one date component: day, month, year, slash
pub const FIELDS_PER_COMPONENT: usize = 4;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Separator between the two years of a dual-dated year ("1745/6")
pub const DUAL_YEAR_SEPARATOR: char = '/';
/// Separator between calendar name and new-year code in the extras suffix
pub const EXTRAS_SEPARATOR: char = ',';
/// Separator inside a custom new-year code ("5-5")
pub const NEWYEAR_SEPARATOR: char = '-';
/// Placeholder for a rendered component inside a phrase template
pub const SLOT: &str = "{}";

/// Month names of the Hebrew calendar, Tishri first; `AdarII` only exists in leap years
pub const HEBREW_MONTHS: [&str; 13] = [
    "Tishri", "Heshvan", "Kislev", "Tevet", "Shevat", "AdarI", "AdarII", "Nisan", "Iyyar",
    "Sivan", "Tammuz", "Av", "Elul",
];

/// Month names of the French Republican calendar; the thirteenth holds the complementary days
pub const FRENCH_MONTHS: [&str; 13] = [
    "Vendémiaire", "Brumaire", "Frimaire", "Nivôse", "Pluviôse", "Ventôse", "Germinal",
    "Floréal", "Prairial", "Messidor", "Thermidor", "Fructidor", "Extra",
];

/// Month names of the Persian calendar
pub const PERSIAN_MONTHS: [&str; 12] = [
    "Farvardin", "Ordibehesht", "Khordad", "Tir", "Mordad", "Shahrivar", "Mehr", "Aban",
    "Azar", "Dey", "Bahman", "Esfand",
];

/// Month names of the Islamic calendar
pub const ISLAMIC_MONTHS: [&str; 12] = [
    "Muharram", "Safar", "Rabi`al-Awwal", "Rabi`ath-Thani", "Jumada l-Ula", "Jumada t-Tania",
    "Rajab", "Sha`ban", "Ramadan", "Shawwal", "Dhu l-Qa`da", "Dhu l-Hijja",
];
