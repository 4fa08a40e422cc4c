use crate::calendar::Calendar;
use crate::prelude::*;
use crate::types::Modifier;

/// The component field a range violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateField {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

/// Error type for building a [`crate::Date`] and for parsing date text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The number of date fields does not match what the modifier needs.
    #[error("Modifier '{modifier}' takes {expected} date fields, found {found}")]
    MalformedComponents {
        modifier: Modifier,
        expected: usize,
        found:    usize,
    },

    /// A flat date field holds a number where a flag belongs, or the reverse.
    #[error("Date field {position} must be a {expected}")]
    FieldType { position: usize, expected: &'static str },

    /// Day, month or year outside the legal range of the calendar.
    #[error("Invalid {field}: {value} is out of range for the {calendar} calendar")]
    OutOfRange {
        field:    DateField,
        value:    i64,
        calendar: Calendar,
    },

    /// A day was given for an unknown month.
    #[error("Cannot have day {0} without month")]
    DayWithoutMonth(u8),

    /// A custom new-year start that is not a day of the year.
    #[error("Invalid new year start: month {month}, day {day}")]
    InvalidNewYear { month: u8, day: u8 },

    /// Text that no grammar of the locale recognises, under the rejecting policy.
    #[error("Unrecognised date text: {0:?}")]
    UnparseableText(String),
}

impl DateError {
    /// True for the errors raised by date construction, as opposed to text recognition.
    pub const fn is_construction_error(&self) -> bool {
        !matches!(self, Self::UnparseableText(_))
    }

    /// True when the field list itself is malformed (wrong arity or field type).
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedComponents { .. } | Self::FieldType { .. })
    }

    /// True when a field value is outside its legal range.
    pub const fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::DayWithoutMonth(_) | Self::InvalidNewYear { .. }
        )
    }
}

/// Error type for locale resolution.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// Neither the code, its language nor the fallback has a date handler.
    #[error("No date handler for locale '{0}'")]
    Unavailable(String),

    /// A phrase template with no slot, or more slots than a date has components.
    #[error("Locale '{locale}': template {template:?} must hold one or two slots")]
    BadTemplate {
        locale:   &'static str,
        template: &'static str,
    },

    /// A locale vocabulary could not be compiled into a grammar.
    #[error(transparent)]
    Grammar(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DateError::MalformedComponents {
            modifier: Modifier::Span,
            expected: 8,
            found:    3,
        };
        assert_eq!(err.to_string(), "Modifier 'span' takes 8 date fields, found 3");

        let err = DateError::OutOfRange {
            field:    DateField::Day,
            value:    44,
            calendar: Calendar::Gregorian,
        };
        assert_eq!(err.to_string(), "Invalid day: 44 is out of range for the Gregorian calendar");

        let err = DateError::DayWithoutMonth(5);
        assert_eq!(err.to_string(), "Cannot have day 5 without month");
    }

    #[test]
    fn test_error_categories() {
        let malformed = DateError::FieldType {
            position: 3,
            expected: "flag",
        };
        assert!(malformed.is_malformed());
        assert!(malformed.is_construction_error());
        assert!(!malformed.is_out_of_range());

        let range = DateError::InvalidNewYear { month: 2, day: 30 };
        assert!(range.is_out_of_range());
        assert!(!range.is_malformed());

        let text = DateError::UnparseableText("gibberish".to_owned());
        assert!(!text.is_construction_error());
    }
}
