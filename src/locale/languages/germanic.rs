use super::{DOTTED, SPACED};
use crate::locale::vocabulary::{
    CalendarNames, DualYearStyle, Hooks, Language, ModifierPhrases, QualityPhrases,
};

const GERMAN: Language = Language {
    code:            "de",
    months:          [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    months_with_day: None,
    patterns:        DOTTED,
    modifiers:       ModifierPhrases {
        before: "vor {}",
        after:  "nach {}",
        about:  "um {}",
        from:   "ab {}",
        to:     "bis {}",
        range:  "zwischen {} und {}",
        span:   "von {} bis {}",
    },
    qualities:       QualityPhrases {
        estimated:  "geschätzt {}",
        calculated: "errechnet {}",
    },
    calendars:       CalendarNames {
        julian:  "julianisch",
        hebrew:  "hebräisch",
        french:  "französisch republikanisch",
        persian: "persisch",
        islamic: "islamisch",
        swedish: "schwedisch",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static DE: Language = GERMAN;

/// Austrian German: "Jänner" for January.
pub static DE_AT: Language = Language {
    code: "de_AT",
    months: [
        "Jänner", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    ..GERMAN
};

pub static NL: Language = Language {
    code:            "nl",
    months:          [
        "januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus", "september",
        "oktober", "november", "december",
    ],
    months_with_day: None,
    patterns:        SPACED,
    modifiers:       ModifierPhrases {
        before: "voor {}",
        after:  "na {}",
        about:  "omstreeks {}",
        from:   "vanaf {}",
        to:     "tot {}",
        range:  "tussen {} en {}",
        span:   "van {} tot {}",
    },
    qualities:       QualityPhrases {
        estimated:  "geschat {}",
        calculated: "berekend {}",
    },
    calendars:       CalendarNames {
        julian:  "juliaans",
        hebrew:  "hebreeuws",
        french:  "Franse republiek",
        persian: "persisch",
        islamic: "islamitisch",
        swedish: "zweeds",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};
