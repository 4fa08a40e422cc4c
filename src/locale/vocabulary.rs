//! Localizable fragments a displayer/parser pair is built from.
//!
//! A [`Language`] is plain data plus a small [`Hooks`] table. The defaults
//! cover most languages; a language with irregular grammar swaps in its own
//! hook instead of getting its own displayer type.

use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::consts::{DUAL_YEAR_SEPARATOR, SLOT};
use crate::types::{Modifier, Quality};

/// How the second year of a dual-dated year is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DualYearStyle {
    /// Only the digits that change: `1745/6`, `1789/90`, `1799/800`
    #[default]
    Abbreviated,
    /// Both years in full: `1745/1746`
    Full,
}

impl DualYearStyle {
    pub fn format(self, year: u16) -> String {
        let current = year.to_string();
        let next = (u32::from(year) + 1).to_string();
        let suffix = match self {
            Self::Full => next.as_str(),
            Self::Abbreviated if current.len() != next.len() => next.as_str(),
            Self::Abbreviated => {
                let common = current
                    .bytes()
                    .zip(next.bytes())
                    .take_while(|(a, b)| a == b)
                    .count();
                &next[common..]
            }
        };
        format!("{current}{DUAL_YEAR_SEPARATOR}{suffix}")
    }
}

/// Which grammatical form of a month name a component needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthForm {
    /// Month and year only
    Standalone,
    /// Month accompanied by a day (genitive or partitive in many languages)
    WithDay,
}

/// Component layouts using `{d}`, `{m}` and `{y}` tokens.
#[derive(Debug, Clone, Copy)]
pub struct Patterns {
    pub full:       &'static str,
    pub month_year: &'static str,
    pub year:       &'static str,
}

/// Sentence templates per modifier; `{}` marks a rendered component.
#[derive(Debug, Clone, Copy)]
pub struct ModifierPhrases {
    pub before: &'static str,
    pub after:  &'static str,
    pub about:  &'static str,
    pub from:   &'static str,
    pub to:     &'static str,
    pub range:  &'static str,
    pub span:   &'static str,
}

impl ModifierPhrases {
    /// The template of `modifier`; plain and textual dates use a bare slot.
    pub const fn get(&self, modifier: Modifier) -> &'static str {
        match modifier {
            Modifier::Before => self.before,
            Modifier::After => self.after,
            Modifier::About => self.about,
            Modifier::From => self.from,
            Modifier::To => self.to,
            Modifier::Range => self.range,
            Modifier::Span => self.span,
            Modifier::None | Modifier::TextOnly => SLOT,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QualityPhrases {
    pub estimated:  &'static str,
    pub calculated: &'static str,
}

impl QualityPhrases {
    pub const fn get(&self, quality: Quality) -> &'static str {
        match quality {
            Quality::None => SLOT,
            Quality::Estimated => self.estimated,
            Quality::Calculated => self.calculated,
        }
    }
}

/// Localized calendar names, shown in the extras suffix.
#[derive(Debug, Clone, Copy)]
pub struct CalendarNames {
    pub julian:  &'static str,
    pub hebrew:  &'static str,
    pub french:  &'static str,
    pub persian: &'static str,
    pub islamic: &'static str,
    pub swedish: &'static str,
}

impl CalendarNames {
    /// Name of `calendar`; Gregorian dates carry no suffix.
    pub const fn get(&self, calendar: Calendar) -> Option<&'static str> {
        match calendar {
            Calendar::Gregorian => None,
            Calendar::Julian => Some(self.julian),
            Calendar::Hebrew => Some(self.hebrew),
            Calendar::FrenchRepublican => Some(self.french),
            Calendar::Persian => Some(self.persian),
            Calendar::Islamic => Some(self.islamic),
            Calendar::Swedish => Some(self.swedish),
        }
    }
}

/// A word that contracts before a vowel, e.g. French "de " → "d'".
#[derive(Debug, Clone, Copy)]
pub struct Elision {
    pub full:   &'static str,
    pub elided: &'static str,
}

pub type MonthNameHook = fn(&Language, Calendar, u8, MonthForm) -> &'static str;
pub type PhraseHook = fn(&Language, &str, &[String]) -> String;

/// Per-language overrides of the formatting steps.
#[derive(Debug, Clone, Copy)]
pub struct Hooks {
    pub month_name: MonthNameHook,
    pub phrase:     PhraseHook,
}

impl Hooks {
    pub const DEFAULT: Self = Self {
        month_name: default_month_name,
        phrase:     fill_phrase,
    };

    /// Contracts the word before a slot when the slot starts with a vowel.
    pub const ELIDING: Self = Self {
        month_name: default_month_name,
        phrase:     elide_phrase,
    };
}

/// Everything a language contributes to date display and parsing.
#[derive(Debug)]
pub struct Language {
    pub code:            &'static str,
    pub months:          [&'static str; 12],
    pub months_with_day: Option<[&'static str; 12]>,
    pub patterns:        Patterns,
    pub modifiers:       ModifierPhrases,
    pub qualities:       QualityPhrases,
    pub calendars:       CalendarNames,
    pub dual_year:       DualYearStyle,
    pub elisions:        &'static [Elision],
    pub hooks:           Hooks,
}

impl Language {
    pub fn month_name(&self, calendar: Calendar, month: u8, form: MonthForm) -> &'static str {
        (self.hooks.month_name)(self, calendar, month, form)
    }

    pub fn phrase(&self, template: &str, slots: &[String]) -> String {
        (self.hooks.phrase)(self, template, slots)
    }

    /// Every month name the language can emit for `calendar`, with its number.
    pub fn month_forms(&self, calendar: Calendar) -> Vec<(&'static str, u8)> {
        let mut forms = Vec::new();
        for month in 1..=calendar.max_month() {
            for form in [MonthForm::Standalone, MonthForm::WithDay] {
                let name = self.month_name(calendar, month, form);
                if !name.is_empty() && !forms.contains(&(name, month)) {
                    forms.push((name, month));
                }
            }
        }
        forms
    }
}

/// Month names from the language tables; non-localized calendars use their
/// fixed transliterated names.
pub fn default_month_name(
    language: &Language,
    calendar: Calendar,
    month: u8,
    form: MonthForm,
) -> &'static str {
    let Some(index) = usize::from(month).checked_sub(1) else {
        return "";
    };
    if let Some(names) = calendar.month_names() {
        return names.get(index).copied().unwrap_or_default();
    }
    let names = match (form, &language.months_with_day) {
        (MonthForm::WithDay, Some(inflected)) => inflected,
        _ => &language.months,
    };
    names.get(index).copied().unwrap_or_default()
}

/// Substitutes `slots` for the `{}` markers of `template`, in order.
pub fn fill_phrase(_language: &Language, template: &str, slots: &[String]) -> String {
    let mut pieces = template.split(SLOT);
    let mut out = pieces.next().unwrap_or_default().to_owned();
    for (slot, piece) in slots.iter().zip(pieces) {
        out.push_str(slot);
        out.push_str(piece);
    }
    out
}

/// [`fill_phrase`] with the language's elisions applied before vowel-initial slots.
pub fn elide_phrase(language: &Language, template: &str, slots: &[String]) -> String {
    let mut pieces = template.split(SLOT);
    let mut out = pieces.next().unwrap_or_default().to_owned();
    for (slot, piece) in slots.iter().zip(pieces) {
        if starts_with_vowel(slot) {
            if let Some(elision) = language
                .elisions
                .iter()
                .find(|elision| ends_with_word(&out, elision.full))
            {
                out.truncate(out.len() - elision.full.len());
                out.push_str(elision.elided);
            }
        }
        out.push_str(slot);
        out.push_str(piece);
    }
    out
}

fn starts_with_vowel(text: &str) -> bool {
    text.chars()
        .next()
        .is_some_and(|c| "aeiouyàâäéèêëîïíóôöòúùûüAEIOUYÀÂÄÉÈÊËÎÏÍÓÔÖÒÚÙÛÜ".contains(c))
}

/// Whether `text` ends with `word` starting at a word boundary.
pub(crate) fn ends_with_word(text: &str, word: &str) -> bool {
    text.strip_suffix(word)
        .is_some_and(|rest| rest.is_empty() || rest.ends_with(char::is_whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::languages;

    #[test]
    fn test_dual_year_styles() {
        struct TestCase {
            year:        u16,
            abbreviated: &'static str,
            full:        &'static str,
        }

        let cases = [
            TestCase {
                year:        1745,
                abbreviated: "1745/6",
                full:        "1745/1746",
            },
            TestCase {
                year:        1789,
                abbreviated: "1789/90",
                full:        "1789/1790",
            },
            TestCase {
                year:        1799,
                abbreviated: "1799/800",
                full:        "1799/1800",
            },
            TestCase {
                year:        999,
                abbreviated: "999/1000",
                full:        "999/1000",
            },
        ];

        for case in &cases {
            assert_eq!(DualYearStyle::Abbreviated.format(case.year), case.abbreviated);
            assert_eq!(DualYearStyle::Full.format(case.year), case.full);
        }
    }

    #[test]
    fn test_fill_phrase() {
        let en = languages::find("en").unwrap();
        let slots = ["5 May 1789".to_owned(), "27 August 1876".to_owned()];
        assert_eq!(fill_phrase(en, "between {} and {}", &slots), "between 5 May 1789 and 27 August 1876");
        assert_eq!(fill_phrase(en, "{}", &slots[..1]), "5 May 1789");
        assert_eq!(fill_phrase(en, "{} jälkeen", &slots[..1]), "5 May 1789 jälkeen");
    }

    #[test]
    fn test_elide_phrase() {
        let fr = languages::find("fr").unwrap();
        let slots = ["avril 1789".to_owned(), "mai 1790".to_owned()];
        assert_eq!(fr.phrase("de {} à {}", &slots), "d'avril 1789 à mai 1790");
        assert_eq!(fr.phrase("de {}", &["5 avril 1789".to_owned()]), "de 5 avril 1789");
        assert_eq!(fr.phrase("vers {}", &slots[..1]), "vers avril 1789");
    }

    #[test]
    fn test_month_names_follow_form_and_calendar() {
        let ru = languages::find("ru").unwrap();
        assert_eq!(ru.month_name(Calendar::Gregorian, 5, MonthForm::Standalone), "май");
        assert_eq!(ru.month_name(Calendar::Gregorian, 5, MonthForm::WithDay), "мая");
        assert_eq!(ru.month_name(Calendar::Hebrew, 1, MonthForm::WithDay), "Tishri");
        assert_eq!(ru.month_name(Calendar::Julian, 0, MonthForm::WithDay), "");
    }

    #[test]
    fn test_month_forms_are_deduplicated() {
        let cs = languages::find("cs").unwrap();
        let forms = cs.month_forms(Calendar::Gregorian);
        assert_eq!(forms.iter().filter(|(name, _)| *name == "září").count(), 1);
        assert_eq!(forms.len(), 23);
    }
}
