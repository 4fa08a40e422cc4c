//! Localized display and parsing of dates.
//!
//! Every locale is served by a [`LocaleHandle`]: one [`Displayer`] and one
//! [`Parser`] that are each other's inverse, so for any valid date `d`
//!
//! ```text
//! handle.parse(&handle.display(&d))?.is_equal(&d)
//! ```
//!
//! The built-in pairs are [`FormattedDisplayer`] and [`GrammarParser`],
//! both driven by the same language tables. [`LocaleRegistry`] maps locale
//! codes to handles and accepts custom pairs.

pub mod display;
pub mod languages;
pub mod parse;
pub mod pattern;
pub mod registry;
pub mod vocabulary;

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::error;

use crate::config::{DisplayConfig, ParserConfig};
use crate::date::Date;
use crate::error::{DateError, LocaleError};

pub use display::FormattedDisplayer;
pub use parse::GrammarParser;
pub use registry::{normalize, LocaleRegistry};
pub use vocabulary::{DualYearStyle, Hooks, Language, MonthForm};

/// Renders dates as text in one locale.
pub trait Displayer: Send + Sync + fmt::Debug {
    fn display(&self, date: &Date) -> String;
}

/// Reads the text produced by the matching [`Displayer`] back into a date.
pub trait Parser: Send + Sync + fmt::Debug {
    /// # Errors
    /// Returns the validation errors of [`Date::new`] for text that matches
    /// the grammar with out-of-range numbers, and
    /// `DateError::UnparseableText` for unrecognised text when the parser is
    /// configured to reject it.
    fn parse(&self, text: &str) -> Result<Date, DateError>;
}

/// A locale's displayer/parser pair.
#[derive(Debug, Clone)]
pub struct LocaleHandle {
    code:      String,
    displayer: Arc<dyn Displayer>,
    parser:    Arc<dyn Parser>,
}

impl LocaleHandle {
    pub fn new(code: impl Into<String>, displayer: Arc<dyn Displayer>, parser: Arc<dyn Parser>) -> Self {
        Self {
            code: code.into(),
            displayer,
            parser,
        }
    }

    /// Code of the locale whose tables serve this handle.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn displayer(&self) -> &Arc<dyn Displayer> {
        &self.displayer
    }

    pub fn parser(&self) -> &Arc<dyn Parser> {
        &self.parser
    }

    pub fn display(&self, date: &Date) -> String {
        self.displayer.display(date)
    }

    /// # Errors
    /// See [`Parser::parse`].
    pub fn parse(&self, text: &str) -> Result<Date, DateError> {
        self.parser.parse(text)
    }
}

static REFERENCE_DISPLAYER: Lazy<FormattedDisplayer> =
    Lazy::new(|| FormattedDisplayer::new(languages::reference(), &DisplayConfig::default()));

static REFERENCE_PARSER: Lazy<Result<GrammarParser, LocaleError>> =
    Lazy::new(|| GrammarParser::new(languages::reference(), &ParserConfig::default()));

/// The English displayer behind `Date`'s `Display`.
pub fn reference_displayer() -> &'static FormattedDisplayer {
    &REFERENCE_DISPLAYER
}

/// Parses with the English grammar, as `Date`'s `FromStr` does.
pub(crate) fn reference_parse(text: &str) -> Result<Date, DateError> {
    match &*REFERENCE_PARSER {
        Ok(parser) => parser.parse(text),
        Err(err) => {
            error!(%err, "reference date grammar failed to compile");
            Err(DateError::UnparseableText(text.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Calendar, NewYear};
    use crate::components::Components;
    use crate::test_utils::{simple, simple_with_new_year, span, TEXT};
    use crate::types::{DateComponent, Modifier, Quality};

    const LOCALES: [&str; 37] = [
        "ar", "bg", "ca", "cs", "da", "de", "de_AT", "el", "en_US", "en_GB", "es", "fi", "fr", "hr",
        "hu", "is", "it", "ja", "lt", "nb", "nl", "nn", "pl", "pt_BR", "pt_PT", "ru", "sk", "sl",
        "sq", "sr", "sv", "ta", "tr", "uk", "zh_CN", "zh_HK", "zh_TW",
    ];

    const SIMPLE_MODIFIERS: [Modifier; 6] = [
        Modifier::None,
        Modifier::Before,
        Modifier::After,
        Modifier::About,
        Modifier::From,
        Modifier::To,
    ];

    fn handles() -> Vec<LocaleHandle> {
        let registry = LocaleRegistry::default();
        LOCALES
            .iter()
            .map(|code| registry.resolve(code).unwrap())
            .collect()
    }

    fn assert_round_trip(handle: &LocaleHandle, date: &Date) {
        let text = handle.display(date);
        let parsed = handle
            .parse(&text)
            .unwrap_or_else(|err| panic!("{}: {text:?} failed: {err}", handle.code()));
        assert!(
            parsed.is_equal(date),
            "{}: {text:?} parsed as {parsed:?}, expected {date:?}",
            handle.code()
        );
    }

    #[test]
    fn test_round_trip_simple_dates() {
        let settings = [
            (Calendar::Gregorian, NewYear::Jan1),
            (Calendar::Julian, NewYear::Jan1),
            (Calendar::Julian, NewYear::Mar25),
            (Calendar::Gregorian, NewYear::Custom { month: 5, day: 5 }),
        ];
        for handle in handles() {
            for (calendar, newyear) in settings {
                for quality in Quality::ALL {
                    for modifier in SIMPLE_MODIFIERS {
                        for slash in [false, true] {
                            for month in 1..=12 {
                                for day in [5, 27] {
                                    let date = simple_with_new_year(
                                        quality,
                                        modifier,
                                        calendar,
                                        (day, month, 1789, slash),
                                        newyear,
                                    );
                                    assert_round_trip(&handle, &date);
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_trip_partial_dates() {
        for handle in handles() {
            for quality in Quality::ALL {
                for modifier in SIMPLE_MODIFIERS {
                    for month in 0..=12 {
                        for slash in [false, true] {
                            let date = simple(quality, modifier, Calendar::Gregorian, (0, month, 1789, slash));
                            assert_round_trip(&handle, &date);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_trip_compound_dates() {
        let slashes = [(false, false), (false, true), (true, false), (true, true)];
        for handle in handles() {
            for quality in Quality::ALL {
                for modifier in [Modifier::Range, Modifier::Span] {
                    for (slash1, slash2) in slashes {
                        for month in 1..=12u8 {
                            for day in [5u8, 27] {
                                let start = (day, month, 1789, slash1);
                                for stop in [(day, 13 - month, 1876, slash2), (32 - day, month, 1876, slash2)] {
                                    assert_round_trip(&handle, &span(quality, modifier, start, stop));
                                }
                                let stop = (0, 0, 1876, slash2);
                                assert_round_trip(&handle, &span(quality, modifier, start, stop));
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_trip_textual_dates() {
        for handle in handles() {
            for quality in Quality::ALL {
                let date = Date::new(
                    quality,
                    Modifier::TextOnly,
                    Calendar::Gregorian,
                    Components::Absent,
                    "This is a textual date",
                    NewYear::Jan1,
                )
                .unwrap();
                assert_round_trip(&handle, &date);
            }
        }
    }

    #[test]
    fn test_round_trip_quoted_and_bare_notes() {
        let dates = [
            Date::textual("\"quoted\""),
            Date::textual("\"born at sea\" \"per the log\""),
            Date::default().with_text("no date known"),
            Date::new(
                Quality::None,
                Modifier::None,
                Calendar::Julian,
                DateComponent::EMPTY,
                "no date known",
                NewYear::Mar25,
            )
            .unwrap(),
        ];
        for handle in handles() {
            for date in &dates {
                assert_round_trip(&handle, date);
            }
        }
    }

    #[test]
    fn test_round_trip_other_calendars() {
        let dates = [
            simple(Quality::None, Modifier::None, Calendar::Hebrew, (14, 7, 5784, false)),
            simple(Quality::Estimated, Modifier::About, Calendar::Hebrew, (0, 13, 5785, false)),
            simple(Quality::None, Modifier::Before, Calendar::FrenchRepublican, (12, 7, 8, false)),
            simple(Quality::None, Modifier::None, Calendar::FrenchRepublican, (5, 13, 4, false)),
            simple(Quality::Calculated, Modifier::After, Calendar::Islamic, (1, 9, 1445, false)),
            simple(Quality::None, Modifier::From, Calendar::Islamic, (0, 3, 1200, false)),
            simple(Quality::None, Modifier::To, Calendar::Persian, (1, 1, 1403, false)),
            simple(Quality::None, Modifier::None, Calendar::Swedish, (30, 2, 1712, false)),
            simple(Quality::None, Modifier::None, Calendar::Gregorian, (1, 1, 1, true)),
            simple(Quality::Estimated, Modifier::After, Calendar::Julian, (5, 2, 9999, true)),
            simple(Quality::None, Modifier::Before, Calendar::Gregorian, (31, 12, 9999, true)),
            simple(Quality::None, Modifier::About, Calendar::Gregorian, (0, 0, 9999, true)),
            simple(Quality::None, Modifier::None, Calendar::Hebrew, (1, 1, 1, false)),
            simple(Quality::None, Modifier::None, Calendar::Islamic, (1, 1, 1, false)),
            simple(Quality::None, Modifier::None, Calendar::Persian, (1, 1, 1, false)),
            simple(Quality::None, Modifier::None, Calendar::FrenchRepublican, (1, 1, 1, false)),
            span(Quality::None, Modifier::Range, (1, 1, 1, true), (31, 12, 9999, true)),
        ];
        for handle in handles() {
            for date in &dates {
                assert_round_trip(&handle, date);
            }
            assert_round_trip(&handle, &Date::default());
        }
    }

    #[test]
    fn test_cross_locale_consistency() {
        let date = span(Quality::Estimated, Modifier::Span, (5, 5, 1789, true), (0, 8, 1876, false));
        let reference = reference_displayer().display(&date);
        for handle in handles() {
            let parsed = handle.parse(&handle.display(&date)).unwrap();
            assert_eq!(reference_displayer().display(&parsed), reference, "{}", handle.code());
            assert_eq!(parsed.sortval(), date.sortval(), "{}", handle.code());
        }
    }

    #[test]
    fn test_locale_scenarios() {
        let registry = LocaleRegistry::default();

        let fr = registry.resolve("fr_FR").unwrap();
        let date = simple(Quality::Estimated, Modifier::About, Calendar::Julian, (5, 8, 1789, true));
        assert_eq!(fr.display(&date), format!("estimé vers 5 août 1789/90 (julien) \"{TEXT}\""));

        let date = span(Quality::None, Modifier::Span, (0, 4, 1789, false), (0, 10, 1790, false));
        assert_eq!(fr.display(&date), format!("d'avril 1789 à octobre 1790 \"{TEXT}\""));

        let de_at = registry.resolve("de_AT").unwrap();
        let date = simple(Quality::None, Modifier::Before, Calendar::Gregorian, (5, 1, 1789, false));
        assert_eq!(de_at.display(&date), format!("vor 5. Jänner 1789 \"{TEXT}\""));
        let de = registry.resolve("de").unwrap();
        assert_eq!(de.display(&date), format!("vor 5. Januar 1789 \"{TEXT}\""));
        assert!(de_at.parse(&de_at.display(&date)).unwrap().is_equal(&date));
    }

    #[test]
    fn test_date_display_and_from_str() {
        let date = span(Quality::Calculated, Modifier::Range, (5, 5, 1789, true), (27, 8, 1876, false));
        let text = date.to_string();
        assert_eq!(text, format!("calculated between 5 May 1789/90 and 27 August 1876 \"{TEXT}\""));
        assert_eq!(text.parse::<Date>().unwrap(), date);
    }
}
