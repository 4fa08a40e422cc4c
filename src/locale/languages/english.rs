use super::SPACED;
use crate::locale::vocabulary::{
    CalendarNames, DualYearStyle, Hooks, Language, ModifierPhrases, Patterns, QualityPhrases,
};

const ENGLISH: Language = Language {
    code:            "en",
    months:          [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    months_with_day: None,
    patterns:        SPACED,
    modifiers:       ModifierPhrases {
        before: "before {}",
        after:  "after {}",
        about:  "about {}",
        from:   "from {}",
        to:     "to {}",
        range:  "between {} and {}",
        span:   "from {} to {}",
    },
    qualities:       QualityPhrases {
        estimated:  "estimated {}",
        calculated: "calculated {}",
    },
    calendars:       CalendarNames {
        julian:  "Julian",
        hebrew:  "Hebrew",
        french:  "French Republican",
        persian: "Persian",
        islamic: "Islamic",
        swedish: "Swedish",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static EN: Language = ENGLISH;

pub static EN_US: Language = Language {
    code: "en_US",
    patterns: Patterns {
        full: "{m} {d}, {y}",
        ..SPACED
    },
    ..ENGLISH
};
