use crate::calendar::{Calendar, NewYear};
use crate::consts::{FIELDS_PER_COMPONENT, MAX_YEAR, MIN_YEAR, UNKNOWN};
use crate::error::{DateError, DateField};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// How reliable a date is. Metadata only; it never affects ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    #[default]
    #[display(fmt = "none")]
    None,
    #[display(fmt = "estimated")]
    Estimated,
    #[display(fmt = "calculated")]
    Calculated,
}

impl Quality {
    pub const ALL: [Self; 3] = [Self::None, Self::Estimated, Self::Calculated];
}

/// How the components of a date combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// A single (possibly partial) date
    #[default]
    #[display(fmt = "none")]
    None,
    #[display(fmt = "before")]
    Before,
    #[display(fmt = "after")]
    After,
    #[display(fmt = "about")]
    About,
    /// Start of an open-ended period
    #[display(fmt = "from")]
    From,
    /// End of an open-ended period
    #[display(fmt = "to")]
    To,
    /// Somewhere between two dates
    #[display(fmt = "range")]
    Range,
    /// Lasting from one date to another
    #[display(fmt = "span")]
    Span,
    /// Free text only, no components
    #[display(fmt = "textonly")]
    TextOnly,
}

impl Modifier {
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::Before,
        Self::After,
        Self::About,
        Self::From,
        Self::To,
        Self::Range,
        Self::Span,
        Self::TextOnly,
    ];

    /// Number of date components the modifier takes.
    pub const fn component_count(self) -> usize {
        match self {
            Self::TextOnly => 0,
            Self::Range | Self::Span => 2,
            _ => 1,
        }
    }

    /// Number of flat fields (`day, month, year, slash` per component).
    pub const fn field_count(self) -> usize {
        self.component_count() * FIELDS_PER_COMPONENT
    }

    pub const fn is_compound(self) -> bool {
        matches!(self, Self::Range | Self::Span)
    }
}

/// One flat date field, as stored in a column list `[day, month, year, slash, ...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Number(i32),
    Flag(bool),
}

impl Field {
    fn number(self, position: usize) -> Result<i32, DateError> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Flag(_) => Err(DateError::FieldType {
                position,
                expected: "number",
            }),
        }
    }

    fn flag(self, position: usize) -> Result<bool, DateError> {
        match self {
            Self::Flag(value) => Ok(value),
            Self::Number(_) => Err(DateError::FieldType {
                position,
                expected: "flag",
            }),
        }
    }
}

/// One (day, month, year, slash) tuple. Day and month may be 0 for unknown.
///
/// Values are only range-checked by [`DateComponent::validate`], which needs
/// the calendar; `Date` runs it on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DateComponent {
    day:   u8,
    month: u8,
    year:  u16,
    slash: bool,
}

impl DateComponent {
    /// The all-zero component of the empty date.
    pub const EMPTY: Self = Self::new(0, 0, 0, false);

    pub const fn new(day: u8, month: u8, year: u16, slash: bool) -> Self {
        Self {
            day,
            month,
            year,
            slash,
        }
    }

    pub const fn year_only(year: u16) -> Self {
        Self::new(UNKNOWN, UNKNOWN, year, false)
    }

    pub const fn month_year(month: u8, year: u16) -> Self {
        Self::new(UNKNOWN, month, year, false)
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Whether the year is written in dual-dating notation ("1745/6").
    #[inline]
    pub const fn slash(&self) -> bool {
        self.slash
    }

    pub const fn is_empty(&self) -> bool {
        self.day == UNKNOWN && self.month == UNKNOWN && self.year == 0
    }

    /// Checks the fields against `calendar`.
    ///
    /// Day ranges use the year the day actually falls in under `newyear`,
    /// so 29 February 1747 is legal under a 25 March start.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for a month or day outside the
    /// calendar, or a year outside `MIN_YEAR..=MAX_YEAR`, and
    /// `DateError::DayWithoutMonth` for a day with an unknown month.
    pub fn validate(&self, calendar: Calendar, newyear: NewYear) -> Result<(), DateError> {
        let out_of_range = |field, value: i64| DateError::OutOfRange {
            field,
            value,
            calendar,
        };

        if self.month > calendar.max_month() {
            return Err(out_of_range(DateField::Month, i64::from(self.month)));
        }
        if self.month == UNKNOWN && self.day != UNKNOWN {
            return Err(DateError::DayWithoutMonth(self.day));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(out_of_range(DateField::Year, i64::from(self.year)));
        }
        if self.month != UNKNOWN {
            let year = calendar.civil_year(newyear, self.day, self.month, i32::from(self.year));
            let max_day = calendar.days_in_month(year, self.month);
            if max_day == 0 {
                return Err(out_of_range(DateField::Month, i64::from(self.month)));
            }
            if self.day > max_day {
                return Err(out_of_range(DateField::Day, i64::from(self.day)));
            }
        }
        Ok(())
    }

    /// Reads one component from four flat fields starting at `offset`.
    ///
    /// # Errors
    /// Returns `DateError::FieldType` for a flag where a number belongs (or
    /// the reverse) and `DateError::OutOfRange` for numbers that do not fit
    /// the field at all (negative, or too large for any calendar).
    pub(crate) fn from_fields(
        fields: &[Field],
        offset: usize,
        calendar: Calendar,
    ) -> Result<Self, DateError> {
        let out_of_range = |field, value: i64| DateError::OutOfRange {
            field,
            value,
            calendar,
        };
        let number = |index: usize, field: DateField| -> Result<i64, DateError> {
            let value = i64::from(fields[offset + index].number(offset + index)?);
            if value < 0 {
                return Err(out_of_range(field, value));
            }
            Ok(value)
        };

        let day = number(0, DateField::Day)?;
        let month = number(1, DateField::Month)?;
        let year = number(2, DateField::Year)?;
        let slash = fields[offset + 3].flag(offset + 3)?;

        Ok(Self {
            day: u8::try_from(day).map_err(|_| out_of_range(DateField::Day, day))?,
            month: u8::try_from(month).map_err(|_| out_of_range(DateField::Month, month))?,
            year: u16::try_from(year).map_err(|_| out_of_range(DateField::Year, year))?,
            slash,
        })
    }

    /// The four flat fields of this component.
    pub fn to_fields(&self) -> [Field; FIELDS_PER_COMPONENT] {
        [
            Field::Number(i32::from(self.day)),
            Field::Number(i32::from(self.month)),
            Field::Number(i32::from(self.year)),
            Field::Flag(self.slash),
        ]
    }
}

impl From<(u8, u8, u16, bool)> for DateComponent {
    fn from((day, month, year, slash): (u8, u8, u16, bool)) -> Self {
        Self::new(day, month, year, slash)
    }
}
