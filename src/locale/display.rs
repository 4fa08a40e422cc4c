use crate::calendar::Calendar;
use crate::config::DisplayConfig;
use crate::consts::{EXTRAS_SEPARATOR, UNKNOWN};
use crate::date::Date;
use crate::types::DateComponent;

use super::pattern::{segments, Segment};
use super::vocabulary::{DualYearStyle, Language, MonthForm};
use super::Displayer;

/// The default displayer: assembles text from a [`Language`]'s fragments.
///
/// Output shape: `quality modifier-phrase (Calendar,NewYear) "text"`, where
/// the extras and the quoted text only appear when they carry information.
/// Textual dates render as their text alone.
#[derive(Debug, Clone)]
pub struct FormattedDisplayer {
    language:  &'static Language,
    dual_year: DualYearStyle,
}

impl FormattedDisplayer {
    pub fn new(language: &'static Language, config: &DisplayConfig) -> Self {
        Self {
            language,
            dual_year: config.dual_year.unwrap_or(language.dual_year),
        }
    }

    pub const fn language(&self) -> &'static Language {
        self.language
    }

    fn component(&self, calendar: Calendar, component: DateComponent) -> String {
        if component.is_empty() {
            return String::new();
        }

        let patterns = &self.language.patterns;
        let (pattern, form) = match (component.day(), component.month()) {
            (_, UNKNOWN) => (patterns.year, MonthForm::Standalone),
            (UNKNOWN, _) => (patterns.month_year, MonthForm::Standalone),
            _ => (patterns.full, MonthForm::WithDay),
        };
        let year = if component.slash() {
            self.dual_year.format(component.year())
        } else {
            component.year().to_string()
        };

        let mut out = String::new();
        for segment in segments(pattern) {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Day => out.push_str(&component.day().to_string()),
                Segment::Month => {
                    out.push_str(self.language.month_name(calendar, component.month(), form));
                }
                Segment::Year => out.push_str(&year),
            }
        }
        out
    }

    /// `(Julian,Mar25)`: the calendar unless Gregorian, the new year unless 1 January.
    ///
    /// An empty date with text always shows its new year, so that it cannot
    /// read as a textual date in quotes.
    fn extras(&self, date: &Date) -> Option<String> {
        let calendar = self.language.calendars.get(date.calendar());
        let bare_note = calendar.is_none() && date.is_empty() && !date.text().is_empty();
        let calendar = calendar.map(str::to_owned);
        let newyear = (!date.newyear().is_default() || bare_note).then(|| date.newyear().to_string());
        let parts: Vec<String> = calendar.into_iter().chain(newyear).collect();
        if parts.is_empty() {
            return None;
        }
        let separator = EXTRAS_SEPARATOR.to_string();
        Some(format!("({})", parts.join(separator.as_str())))
    }
}

impl Displayer for FormattedDisplayer {
    fn display(&self, date: &Date) -> String {
        if date.is_textual() {
            return date.text().to_owned();
        }

        let language = self.language;
        let slots: Vec<String> = date
            .components()
            .iter()
            .map(|component| self.component(date.calendar(), component))
            .collect();
        let phrase = language.phrase(language.modifiers.get(date.modifier()), &slots);
        let phrase = language.phrase(language.qualities.get(date.quality()), &[phrase]);

        let mut parts = vec![phrase];
        parts.extend(self.extras(date));
        if !date.text().is_empty() {
            parts.push(format!("\"{}\"", date.text()));
        }
        parts.retain(|part| !part.is_empty());
        parts.join(" ")
    }
}
