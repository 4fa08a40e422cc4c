use std::cmp::Reverse;
use std::collections::HashMap;

use regex::Regex;
use tracing::{debug, trace};

use crate::calendar::{Calendar, NewYear};
use crate::components::Components;
use crate::config::{ParserConfig, UnparsedPolicy};
use crate::consts::{EXTRAS_SEPARATOR, SLOT, UNKNOWN};
use crate::date::Date;
use crate::error::{DateError, LocaleError};
use crate::types::{DateComponent, Modifier, Quality};

use super::languages;
use super::pattern::{literal_regex, segments, Segment};
use super::vocabulary::{ends_with_word, Language};
use super::Parser;

/// Qualities in matching order; the bare template last.
const QUALITIES: [Quality; 3] = [Quality::Estimated, Quality::Calculated, Quality::None];

/// Modifiers in matching order. Two-slot phrases come first because their
/// prefix is often a one-slot phrase of its own ("from {}" / "from {} to {}").
const MODIFIERS: [Modifier; 8] = [
    Modifier::Range,
    Modifier::Span,
    Modifier::Before,
    Modifier::After,
    Modifier::About,
    Modifier::From,
    Modifier::To,
    Modifier::None,
];

const DAY_GROUP: &str = "(?P<d>[0-9]{1,2})";
/// The second year of a dual date may carry a fifth digit (`9999/10000`).
const YEAR_GROUP: &str = "(?P<y>[0-9]{1,4})(?:/(?P<ys>[0-9]{1,5}))?";

/// A phrase template compiled for matching.
#[derive(Debug)]
struct Template {
    /// Prefix and suffix around the slots, capturing everything between
    outer: Regex,
    /// Text between the two slots of a compound phrase
    mid:   Option<Regex>,
}

impl Template {
    fn compile(language: &'static Language, template: &'static str) -> Result<Self, LocaleError> {
        let pieces: Vec<&str> = template.split(SLOT).collect();
        let bad = || LocaleError::BadTemplate {
            locale: language.code,
            template,
        };
        let (prefix, mid, suffix) = match pieces.as_slice() {
            [prefix, suffix] => (*prefix, None, *suffix),
            [prefix, mid, suffix] => (*prefix, Some(*mid), *suffix),
            _ => return Err(bad()),
        };

        let outer = Regex::new(&format!(
            "(?is)^{}(?P<body>.+){}$",
            phrase_literal(language, prefix),
            phrase_literal(language, suffix)
        ))?;
        let mid = mid
            .map(|mid| Regex::new(&format!("(?i){}", phrase_literal(language, mid))))
            .transpose()?;
        Ok(Self { outer, mid })
    }

    /// Every way of reading `text` as this phrase, as slot texts in order.
    fn candidates<'t>(&self, text: &'t str) -> Vec<Vec<&'t str>> {
        let Some(body) = self.outer.captures(text).and_then(|caps| caps.name("body")) else {
            return Vec::new();
        };
        let body = body.as_str();
        match &self.mid {
            None => vec![vec![body.trim()]],
            Some(mid) => mid
                .find_iter(body)
                .map(|found| vec![body[..found.start()].trim(), body[found.end()..].trim()])
                .collect(),
        }
    }
}

/// Literal phrase text as a regex; a trailing elidable word also matches its
/// contracted form.
fn phrase_literal(language: &Language, literal: &str) -> String {
    for elision in language.elisions {
        if ends_with_word(literal, elision.full) {
            let head = &literal[..literal.len() - elision.full.len()];
            return format!(
                "{}(?:{}|{})",
                literal_regex(head),
                literal_regex(elision.full),
                regex::escape(elision.elided)
            );
        }
    }
    literal_regex(literal)
}

/// Lookup key for a month name: lowercase with single spaces.
fn month_key(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Recognizes one date component of a calendar, at any precision.
#[derive(Debug)]
struct ComponentGrammar {
    full:       Regex,
    month_year: Regex,
    year:       Regex,
    months:     HashMap<String, u8>,
}

impl ComponentGrammar {
    fn compile(language: &Language, calendar: Calendar) -> Result<Self, LocaleError> {
        let mut forms = language.month_forms(calendar);
        forms.sort_by_key(|(name, _)| Reverse(name.chars().count()));
        let alternation = forms
            .iter()
            .map(|(name, _)| literal_regex(name))
            .collect::<Vec<_>>()
            .join("|");
        let months = forms
            .iter()
            .map(|(name, month)| (month_key(name), *month))
            .collect();

        let patterns = &language.patterns;
        Ok(Self {
            full: component_regex(patterns.full, &alternation)?,
            month_year: component_regex(patterns.month_year, &alternation)?,
            year: component_regex(patterns.year, &alternation)?,
            months,
        })
    }

    /// The most precise reading of `text`, unvalidated.
    fn component(&self, text: &str) -> Option<DateComponent> {
        [&self.full, &self.month_year, &self.year]
            .into_iter()
            .find_map(|regex| {
                let caps = regex.captures(text)?;
                let day = match caps.name("d") {
                    Some(day) => day.as_str().parse().ok()?,
                    None => UNKNOWN,
                };
                let month = match caps.name("m") {
                    Some(month) => *self.months.get(&month_key(month.as_str()))?,
                    None => UNKNOWN,
                };
                let year = caps.name("y")?.as_str().parse().ok()?;
                Some(DateComponent::new(day, month, year, caps.name("ys").is_some()))
            })
    }
}

fn component_regex(pattern: &str, months: &str) -> Result<Regex, regex::Error> {
    let mut source = String::from("(?i)^");
    for segment in segments(pattern) {
        match segment {
            Segment::Literal(text) => source.push_str(&literal_regex(text)),
            Segment::Day => source.push_str(DAY_GROUP),
            Segment::Month => {
                source.push_str("(?P<m>");
                source.push_str(months);
                source.push(')');
            }
            Segment::Year => source.push_str(YEAR_GROUP),
        }
    }
    source.push('$');
    Regex::new(&source)
}

/// Splits off a trailing `"annotation"`. Text that is nothing but a quoted
/// string has no date before it and is kept whole.
fn split_annotation(text: &str) -> (&str, &str) {
    text.strip_suffix('"')
        .and_then(|rest| rest.find('"').map(|open| (rest[..open].trim_end(), &rest[open + 1..])))
        .filter(|(body, _)| !body.is_empty())
        .unwrap_or((text, ""))
}

/// The default parser: the inverse of
/// [`FormattedDisplayer`](super::FormattedDisplayer), compiled from the same
/// [`Language`] into regular expressions.
///
/// Input is read right to left: the quoted annotation, then the
/// `(Calendar,NewYear)` extras, then the quality phrase, the modifier phrase
/// and finally each component. Text no grammar recognizes is handled by the
/// configured [`UnparsedPolicy`].
#[derive(Debug)]
pub struct GrammarParser {
    language:       &'static Language,
    policy:         UnparsedPolicy,
    qualities:      Vec<(Quality, Template)>,
    modifiers:      Vec<(Modifier, Template)>,
    grammars:       HashMap<Calendar, ComponentGrammar>,
    calendar_names: HashMap<String, Calendar>,
}

impl GrammarParser {
    /// Compiles the grammar of `language`.
    ///
    /// # Errors
    /// Returns `LocaleError::BadTemplate` for a phrase with the wrong number
    /// of slots and `LocaleError::Grammar` if a generated regex is rejected.
    pub fn new(language: &'static Language, config: &ParserConfig) -> Result<Self, LocaleError> {
        let mut qualities = Vec::with_capacity(QUALITIES.len());
        for quality in QUALITIES {
            qualities.push((quality, Template::compile(language, language.qualities.get(quality))?));
        }
        let mut modifiers = Vec::with_capacity(MODIFIERS.len());
        for modifier in MODIFIERS {
            modifiers.push((modifier, Template::compile(language, language.modifiers.get(modifier))?));
        }
        let mut grammars = HashMap::new();
        for calendar in Calendar::ALL {
            grammars.insert(calendar, ComponentGrammar::compile(language, calendar)?);
        }

        let reference = languages::reference();
        let mut calendar_names = HashMap::new();
        for calendar in Calendar::ALL {
            calendar_names.insert(calendar.to_string().to_lowercase(), calendar);
            for names in [&reference.calendars, &language.calendars] {
                if let Some(name) = names.get(calendar) {
                    calendar_names.insert(name.to_lowercase(), calendar);
                }
            }
        }

        trace!(locale = language.code, "compiled date grammar");
        Ok(Self {
            language,
            policy: config.unparsed,
            qualities,
            modifiers,
            grammars,
            calendar_names,
        })
    }

    pub const fn language(&self) -> &'static Language {
        self.language
    }

    /// Splits off a trailing `(Calendar,NewYear)` group when every part of it
    /// is a known calendar name or new-year code.
    fn split_extras<'t>(&self, text: &'t str) -> (&'t str, Option<(Calendar, NewYear)>) {
        let Some((body, inner)) = text
            .strip_suffix(')')
            .and_then(|rest| rest.rfind('(').map(|open| (rest[..open].trim_end(), &rest[open + 1..])))
        else {
            return (text, None);
        };

        let mut calendar = Calendar::Gregorian;
        let mut newyear = NewYear::Jan1;
        for part in inner.split(EXTRAS_SEPARATOR).map(str::trim) {
            if let Some(found) = self.calendar_names.get(&part.to_lowercase()) {
                calendar = *found;
            } else if let Ok(found) = part.parse::<NewYear>() {
                newyear = found;
            } else {
                return (text, None);
            }
        }
        (body, Some((calendar, newyear)))
    }

    fn components(&self, calendar: Calendar, slots: &[&str]) -> Option<Components> {
        let grammar = self.grammars.get(&calendar)?;
        match slots {
            [single] => Some(grammar.component(single)?.into()),
            [start, stop] => Some((grammar.component(start)?, grammar.component(stop)?).into()),
            _ => None,
        }
    }

    fn unparsed(&self, text: &str) -> Result<Date, DateError> {
        match self.policy {
            UnparsedPolicy::TextOnly => {
                debug!(locale = self.language.code, text, "unrecognised date kept as text");
                Ok(Date::textual(text))
            }
            UnparsedPolicy::Reject => Err(DateError::UnparseableText(text.to_owned())),
        }
    }
}

impl Parser for GrammarParser {
    fn parse(&self, text: &str) -> Result<Date, DateError> {
        let (body, note) = split_annotation(text.trim());
        let (body, extras) = self.split_extras(body);
        let (calendar, newyear) = extras.unwrap_or_default();

        if body.is_empty() {
            return Date::new(
                Quality::None,
                Modifier::None,
                calendar,
                DateComponent::EMPTY,
                note,
                newyear,
            );
        }

        let mut invalid = None;
        for (quality, quality_template) in &self.qualities {
            for quality_slots in quality_template.candidates(body) {
                let [phrase] = quality_slots.as_slice() else {
                    continue;
                };
                for (modifier, modifier_template) in &self.modifiers {
                    for slots in modifier_template.candidates(phrase) {
                        let Some(components) = self.components(calendar, &slots) else {
                            continue;
                        };
                        match Date::new(*quality, *modifier, calendar, components, note, newyear) {
                            Ok(date) => return Ok(date),
                            Err(err) => {
                                invalid.get_or_insert(err);
                            }
                        }
                    }
                }
            }
        }

        match invalid {
            Some(err) => Err(err),
            None => self.unparsed(text),
        }
    }
}
