use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::calendar::{Calendar, NewYear, Ordinal};
use crate::consts::FIELDS_PER_COMPONENT;
use crate::error::DateError;
use crate::prelude::*;
use crate::types::{DateComponent, Field, Modifier};

/// The date components of a [`crate::Date`], shaped by its modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Components {
    /// Textual dates carry no components
    #[default]
    Absent,
    /// Simple modifiers: one component
    Single(DateComponent),
    /// Range and span: a start and a stop component
    Compound {
        start: DateComponent,
        stop:  DateComponent,
    },
}

impl Components {
    /// Number of components held.
    pub const fn count(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Single(_) => 1,
            Self::Compound { .. } => 2,
        }
    }

    /// The first (or only) component.
    pub const fn start(&self) -> Option<DateComponent> {
        match *self {
            Self::Absent => None,
            Self::Single(component) | Self::Compound { start: component, .. } => Some(component),
        }
    }

    /// The second component of a range or span.
    pub const fn stop(&self) -> Option<DateComponent> {
        match *self {
            Self::Compound { stop, .. } => Some(stop),
            Self::Absent | Self::Single(_) => None,
        }
    }

    /// Components in display order.
    pub fn iter(&self) -> impl Iterator<Item = DateComponent> {
        self.start().into_iter().chain(self.stop())
    }

    /// Reads the components of `modifier` from a flat field list.
    ///
    /// # Errors
    /// Returns `DateError::MalformedComponents` when the list length is not
    /// what `modifier` takes, otherwise the errors of
    /// [`DateComponent::from_fields`].
    pub fn from_fields(
        modifier: Modifier,
        calendar: Calendar,
        fields: &[Field],
    ) -> Result<Self, DateError> {
        let expected = modifier.field_count();
        if fields.len() != expected {
            return Err(DateError::MalformedComponents {
                modifier,
                expected,
                found: fields.len(),
            });
        }

        Ok(match modifier.component_count() {
            0 => Self::Absent,
            1 => Self::Single(DateComponent::from_fields(fields, 0, calendar)?),
            _ => Self::Compound {
                start: DateComponent::from_fields(fields, 0, calendar)?,
                stop:  DateComponent::from_fields(fields, FIELDS_PER_COMPONENT, calendar)?,
            },
        })
    }

    /// The flat field list, `[day, month, year, slash, ...]`.
    pub fn to_fields(&self) -> Vec<Field> {
        self.iter().flat_map(|component| component.to_fields()).collect()
    }

    /// Sort key of these components under `calendar` and `newyear`.
    pub fn sortval(&self, calendar: Calendar, newyear: NewYear) -> SortValue {
        let ordinal = |component: DateComponent| {
            calendar.to_ordinal(
                newyear,
                component.day(),
                component.month(),
                i32::from(component.year()),
            )
        };

        match *self {
            Self::Absent => SortValue::default(),
            Self::Single(component) => SortValue::at(ordinal(component)),
            Self::Compound { start, stop } => SortValue::new(ordinal(start), ordinal(stop)),
        }
    }
}

impl From<DateComponent> for Components {
    fn from(component: DateComponent) -> Self {
        Self::Single(component)
    }
}

impl From<(DateComponent, DateComponent)> for Components {
    fn from((start, stop): (DateComponent, DateComponent)) -> Self {
        Self::Compound { start, stop }
    }
}

/// Chronological sort key of a date: the start ordinal, and the stop ordinal
/// of a range or span (equal to start for simple dates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[display(fmt = "{start}..{stop}")]
pub struct SortValue {
    start: Ordinal,
    stop:  Ordinal,
}

impl SortValue {
    pub const fn new(start: Ordinal, stop: Ordinal) -> Self {
        Self { start, stop }
    }

    /// Key of a simple date.
    pub const fn at(ordinal: Ordinal) -> Self {
        Self::new(ordinal, ordinal)
    }

    pub const fn start(&self) -> Ordinal {
        self.start
    }

    pub const fn stop(&self) -> Ordinal {
        self.stop
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then stop dates
        self.start.cmp(&other.start).then_with(|| self.stop.cmp(&other.stop))
    }
}
