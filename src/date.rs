use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::{Calendar, NewYear};
use crate::components::{Components, SortValue};
use crate::consts::UNKNOWN;
use crate::error::{DateError, DateField};
use crate::locale::{self, Displayer};
use crate::types::{DateComponent, Field, Modifier, Quality};

/// A genealogical date.
///
/// A date has a quality, a modifier, a calendar, a new-year convention, zero
/// to two components and free text. It is validated on construction and
/// immutable afterwards; its chronological sort key is derived then.
///
/// `PartialEq` is structural. `Date` has no `Ord`: two dates
/// that are not equal may sort together (a Julian date and its Gregorian
/// equivalent). The total chronological order is the one of its
/// [`SortValue`], available as [`Date::sortval`] and [`Date::chronological_cmp`]:
///
/// ```
/// use genealogy_date::Date;
///
/// let mut dates: Vec<Date> = ["1876", "between 1789 and 1790", "5 May 1789", "1789"]
///     .iter()
///     .map(|text| text.parse().unwrap())
///     .collect();
/// dates.sort_by_key(Date::sortval);
///
/// let sorted: Vec<String> = dates.iter().map(Date::to_string).collect();
/// assert_eq!(sorted, ["1789", "between 1789 and 1790", "5 May 1789", "1876"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDate", into = "RawDate")]
pub struct Date {
    quality:    Quality,
    modifier:   Modifier,
    calendar:   Calendar,
    newyear:    NewYear,
    components: Components,
    text:       String,
    sortval:    SortValue,
}

impl Default for Date {
    /// The empty date: no quality or modifier and an all-zero component.
    fn default() -> Self {
        Self {
            quality:    Quality::None,
            modifier:   Modifier::None,
            calendar:   Calendar::Gregorian,
            newyear:    NewYear::Jan1,
            components: Components::Single(DateComponent::EMPTY),
            text:       String::new(),
            sortval:    SortValue::default(),
        }
    }
}

impl Date {
    /// Builds and validates a date.
    ///
    /// # Errors
    /// Returns `DateError::MalformedComponents` if `components` does not have
    /// the shape `modifier` needs, `DateError::InvalidNewYear` for a bad
    /// custom new year, and the range errors of [`DateComponent::validate`].
    /// The all-zero component is accepted only for the empty date (no
    /// quality, no modifier).
    pub fn new(
        quality: Quality,
        modifier: Modifier,
        calendar: Calendar,
        components: impl Into<Components>,
        text: impl Into<String>,
        newyear: NewYear,
    ) -> Result<Self, DateError> {
        let components = components.into();
        if components.count() != modifier.component_count() {
            return Err(DateError::MalformedComponents {
                modifier,
                expected: modifier.field_count(),
                found: components.to_fields().len(),
            });
        }
        newyear.validate()?;

        let empty_allowed = modifier == Modifier::None && quality == Quality::None;
        for component in components.iter() {
            if !(empty_allowed && component.is_empty()) {
                component.validate(calendar, newyear)?;
            }
        }

        Ok(Self {
            quality,
            modifier,
            calendar,
            newyear,
            components,
            text: text.into(),
            sortval: components.sortval(calendar, newyear),
        })
    }

    /// Builds a date from the flat field list `[day, month, year, slash, ...]`.
    ///
    /// # Errors
    /// Returns `DateError::MalformedComponents` when the list length does not
    /// match `modifier` (4, 8 or 0 fields), `DateError::FieldType` for a
    /// misplaced flag or number, and the errors of [`Date::new`].
    pub fn from_fields(
        quality: Quality,
        modifier: Modifier,
        calendar: Calendar,
        fields: &[Field],
        text: impl Into<String>,
        newyear: NewYear,
    ) -> Result<Self, DateError> {
        let components = Components::from_fields(modifier, calendar, fields)?;
        Self::new(quality, modifier, calendar, components, text, newyear)
    }

    /// A textual date holding only `text`.
    pub fn textual(text: impl Into<String>) -> Self {
        Self {
            modifier: Modifier::TextOnly,
            components: Components::Absent,
            text: text.into(),
            ..Self::default()
        }
    }

    /// Replaces every field of the date, re-validating from scratch.
    ///
    /// On error the date is left unchanged.
    ///
    /// # Errors
    /// See [`Date::from_fields`].
    pub fn set(
        &mut self,
        quality: Quality,
        modifier: Modifier,
        calendar: Calendar,
        fields: &[Field],
        text: impl Into<String>,
        newyear: NewYear,
    ) -> Result<(), DateError> {
        *self = Self::from_fields(quality, modifier, calendar, fields, text, newyear)?;
        Ok(())
    }

    /// Same date with different free text.
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self
        }
    }

    pub const fn quality(&self) -> Quality {
        self.quality
    }

    pub const fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    pub const fn newyear(&self) -> NewYear {
        self.newyear
    }

    pub const fn components(&self) -> Components {
        self.components
    }

    /// The first (or only) component.
    pub const fn start(&self) -> Option<DateComponent> {
        self.components.start()
    }

    /// The second component of a range or span.
    pub const fn stop(&self) -> Option<DateComponent> {
        self.components.stop()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Flat field list of the components.
    pub fn fields(&self) -> Vec<Field> {
        self.components.to_fields()
    }

    pub const fn sortval(&self) -> SortValue {
        self.sortval
    }

    pub fn is_textual(&self) -> bool {
        self.modifier == Modifier::TextOnly
    }

    /// Whether this is the empty date (nothing known).
    pub fn is_empty(&self) -> bool {
        self.modifier == Modifier::None
            && self.quality == Quality::None
            && self.components.start().is_some_and(|c| c.is_empty())
    }

    pub const fn is_compound(&self) -> bool {
        self.modifier.is_compound()
    }

    /// Structural equality.
    ///
    /// Every field takes part, except that two textual dates compare on their
    /// text alone.
    pub fn is_equal(&self, other: &Self) -> bool {
        if self.is_textual() && other.is_textual() {
            return self.text == other.text;
        }
        self == other
    }

    /// Chronological order: start ordinal, then stop ordinal.
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        self.sortval.cmp(&other.sortval)
    }

    /// The same date expressed in `calendar`.
    ///
    /// Full dates convert exactly. Partial dates convert their first day and
    /// keep their precision (a month-year stays a month-year). Dual dating
    /// does not survive the conversion, and the new-year convention is only
    /// kept when the target calendar honors one.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` when the converted year falls outside
    /// the supported range (e.g. a 1700 Gregorian date as French Republican).
    pub fn convert(&self, calendar: Calendar) -> Result<Self, DateError> {
        if calendar == self.calendar {
            return Ok(self.clone());
        }
        let newyear = if calendar.uses_new_year() { self.newyear } else { NewYear::Jan1 };
        let convert = |component: DateComponent| -> Result<DateComponent, DateError> {
            if component.is_empty() {
                return Ok(component);
            }
            let ordinal = self.calendar.to_ordinal(
                self.newyear,
                component.day(),
                component.month(),
                i32::from(component.year()),
            );
            let (day, month, year) = calendar.from_ordinal(newyear, ordinal);
            let year = u16::try_from(year).map_err(|_| DateError::OutOfRange {
                field: DateField::Year,
                value: i64::from(year),
                calendar,
            })?;
            Ok(match (component.day(), component.month()) {
                (_, UNKNOWN) => DateComponent::year_only(year),
                (UNKNOWN, _) => DateComponent::month_year(month, year),
                _ => DateComponent::new(day, month, year, false),
            })
        };

        let components = match self.components {
            Components::Absent => Components::Absent,
            Components::Single(component) => Components::Single(convert(component)?),
            Components::Compound { start, stop } => Components::Compound {
                start: convert(start)?,
                stop:  convert(stop)?,
            },
        };
        Self::new(self.quality, self.modifier, calendar, components, self.text.clone(), newyear)
    }
}

/// Renders the date with the reference (English) locale.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&locale::reference_displayer().display(self))
    }
}

/// Parses text in the reference (English) locale.
impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        locale::reference_parse(s)
    }
}

/// Persisted form of a [`Date`]; every field of the value model, validated
/// on the way back in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDate {
    #[serde(default)]
    quality:  Quality,
    #[serde(default)]
    modifier: Modifier,
    #[serde(default)]
    calendar: Calendar,
    #[serde(default)]
    newyear:  NewYear,
    fields:   Vec<Field>,
    #[serde(default)]
    text:     String,
}

impl TryFrom<RawDate> for Date {
    type Error = DateError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::from_fields(raw.quality, raw.modifier, raw.calendar, &raw.fields, raw.text, raw.newyear)
    }
}

impl From<Date> for RawDate {
    fn from(date: Date) -> Self {
        Self {
            quality:  date.quality,
            modifier: date.modifier,
            calendar: date.calendar,
            newyear:  date.newyear,
            fields:   date.fields(),
            text:     date.text,
        }
    }
}
