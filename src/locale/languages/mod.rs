//! Built-in language tables.

mod east_asian;
mod english;
mod germanic;
mod misc;
mod nordic;
mod romance;
mod slavic;

use super::vocabulary::{Elision, Language, Patterns};

/// `5 May 1789`
pub(super) const SPACED: Patterns = Patterns {
    full:       "{d} {m} {y}",
    month_year: "{m} {y}",
    year:       "{y}",
};

/// `5. Mai 1789`
pub(super) const DOTTED: Patterns = Patterns {
    full:       "{d}. {m} {y}",
    month_year: "{m} {y}",
    year:       "{y}",
};

pub(super) const DE_ELISION: &[Elision] = &[Elision {
    full:   "de ",
    elided: "d'",
}];

/// Every language with its own tables.
pub static BUILTIN: &[&Language] = &[
    &english::EN,
    &english::EN_US,
    &germanic::DE,
    &germanic::DE_AT,
    &germanic::NL,
    &nordic::DA,
    &nordic::NB,
    &nordic::NN,
    &nordic::SV,
    &nordic::IS,
    &nordic::FI,
    &romance::FR,
    &romance::CA,
    &romance::ES,
    &romance::IT,
    &romance::PT,
    &slavic::RU,
    &slavic::UK,
    &slavic::BG,
    &slavic::SR,
    &slavic::SR_LATN,
    &slavic::PL,
    &slavic::CS,
    &slavic::SK,
    &slavic::SL,
    &slavic::HR,
    &east_asian::JA,
    &east_asian::ZH_CN,
    &east_asian::ZH_TW,
    &misc::AR,
    &misc::EL,
    &misc::HU,
    &misc::LT,
];

/// Locale codes served by another code's tables.
pub const ALIASES: &[(&str, &str)] = &[
    ("en_GB", "en"),
    ("zh", "zh_CN"),
    ("zh_HK", "zh_TW"),
    ("zh_SG", "zh_CN"),
    ("pt_BR", "pt"),
    ("pt_PT", "pt"),
    ("no", "nb"),
    ("sr_Cyrl", "sr"),
    ("sr_RS", "sr"),
];

/// The reference language, English.
pub fn reference() -> &'static Language {
    &english::EN
}

/// The built-in language registered under exactly `code`.
pub fn find(code: &str) -> Option<&'static Language> {
    BUILTIN.iter().copied().find(|language| language.code == code)
}

/// The alias target of `code`, if it has one.
pub fn alias(code: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == code)
        .map(|(_, target)| *target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::consts::SLOT;
    use crate::locale::pattern::{segments, Segment};
    use crate::types::Modifier;

    #[test]
    fn test_codes_are_unique() {
        for (i, language) in BUILTIN.iter().enumerate() {
            assert!(
                BUILTIN[i + 1..].iter().all(|other| other.code != language.code),
                "duplicate {}",
                language.code
            );
        }
    }

    #[test]
    fn test_aliases_point_at_builtins() {
        for (code, target) in ALIASES {
            assert!(find(code).is_none(), "{code} shadows a builtin");
            assert!(find(target).is_some(), "{code} -> {target}");
        }
    }

    #[test]
    fn test_patterns_carry_their_fields() {
        let count = |pattern: &str, wanted: Segment| {
            segments(pattern).iter().filter(|segment| **segment == wanted).count()
        };
        for language in BUILTIN {
            let patterns = &language.patterns;
            for segment in [Segment::Day, Segment::Month, Segment::Year] {
                assert_eq!(count(patterns.full, segment), 1, "{}", language.code);
            }
            assert_eq!(count(patterns.month_year, Segment::Day), 0, "{}", language.code);
            assert_eq!(count(patterns.month_year, Segment::Month), 1, "{}", language.code);
            assert_eq!(count(patterns.year, Segment::Year), 1, "{}", language.code);
            assert_eq!(count(patterns.year, Segment::Month), 0, "{}", language.code);
        }
    }

    #[test]
    fn test_phrases_have_one_slot_per_component() {
        for language in BUILTIN {
            for modifier in Modifier::ALL {
                let template = language.modifiers.get(modifier);
                let expected = modifier.component_count().max(1);
                assert_eq!(template.matches(SLOT).count(), expected, "{} {modifier}", language.code);
            }
        }
    }

    #[test]
    fn test_month_names_are_distinct() {
        for language in BUILTIN {
            let forms = language.month_forms(Calendar::Gregorian);
            for (i, (name, month)) in forms.iter().enumerate() {
                let lower = name.to_lowercase();
                assert!(
                    forms[i + 1..]
                        .iter()
                        .all(|(other, other_month)| other_month == month || other.to_lowercase() != lower),
                    "{} {name}",
                    language.code
                );
            }
        }
    }
}
