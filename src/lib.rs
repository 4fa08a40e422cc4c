//! Genealogical dates.
//!
//! A [`Date`] records what a source says about when something happened:
//! an exact day, a month or a year, "before"/"after"/"about" a date, a range
//! or span between two dates, or free text when nothing better is known. It
//! may be written in a historical calendar and under a historical new-year
//! convention, and it sorts chronologically across all of them.
//!
//! Dates are displayed and parsed per locale through a [`LocaleRegistry`];
//! every built-in displayer/parser pair round-trips.
//!
//! ```
//! use genealogy_date::{Calendar, Date, DateComponent, LocaleRegistry, Modifier, NewYear, Quality};
//!
//! let date = Date::new(
//!     Quality::Estimated,
//!     Modifier::Before,
//!     Calendar::Julian,
//!     DateComponent::new(10, 2, 1745, true),
//!     "",
//!     NewYear::Mar25,
//! )
//! .unwrap();
//! assert_eq!(date.to_string(), "estimated before 10 February 1745/6 (Julian,Mar25)");
//!
//! let de = LocaleRegistry::default().resolve("de_DE.UTF-8").unwrap();
//! let text = de.display(&date);
//! assert_eq!(text, "geschätzt vor 10. Februar 1745/6 (julianisch,Mar25)");
//! assert!(de.parse(&text).unwrap().is_equal(&date));
//! ```

pub mod calendar;
mod components;
mod config;
mod consts;
mod date;
mod error;
pub mod locale;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::{Calendar, NewYear, Ordinal};
pub use components::{Components, SortValue};
pub use config::{DisplayConfig, ParserConfig, RegistryConfig, UnparsedPolicy, REFERENCE_LOCALE};
pub use consts::*;
pub use date::Date;
pub use error::{DateError, DateField, LocaleError};
pub use locale::{Displayer, DualYearStyle, LocaleHandle, LocaleRegistry, Parser};
pub use types::{DateComponent, Field, Modifier, Quality};
