//! Builders shared by the unit tests.

use crate::calendar::{Calendar, NewYear};
use crate::types::{DateComponent, Field, Modifier, Quality};
use crate::Date;

pub const TEXT: &str = "Text comment";

pub const fn component(day: u8, month: u8, year: u16) -> DateComponent {
    DateComponent::new(day, month, year, false)
}

/// Flat field list from `(day, month, year, slash)` tuples, unvalidated.
pub fn fields(values: &[(i32, i32, i32, bool)]) -> Vec<Field> {
    values
        .iter()
        .flat_map(|&(day, month, year, slash)| [day.into(), month.into(), year.into(), slash.into()])
        .collect()
}

/// A one-component date with the standard comment and a January new year.
pub fn simple(
    quality: Quality,
    modifier: Modifier,
    calendar: Calendar,
    value: (u8, u8, u16, bool),
) -> Date {
    simple_with_new_year(quality, modifier, calendar, value, NewYear::Jan1)
}

pub fn simple_with_new_year(
    quality: Quality,
    modifier: Modifier,
    calendar: Calendar,
    value: (u8, u8, u16, bool),
    newyear: NewYear,
) -> Date {
    Date::new(quality, modifier, calendar, DateComponent::from(value), TEXT, newyear).unwrap()
}

/// A Gregorian range or span with the standard comment.
pub fn span(
    quality: Quality,
    modifier: Modifier,
    start: (u8, u8, u16, bool),
    stop: (u8, u8, u16, bool),
) -> Date {
    Date::new(
        quality,
        modifier,
        Calendar::Gregorian,
        (DateComponent::from(start), DateComponent::from(stop)),
        TEXT,
        NewYear::Jan1,
    )
    .unwrap()
}
