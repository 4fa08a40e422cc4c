use super::SPACED;
use crate::locale::vocabulary::{
    CalendarNames, DualYearStyle, Hooks, Language, ModifierPhrases, Patterns, QualityPhrases,
};

pub static AR: Language = Language {
    code:            "ar",
    months:          [
        "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر", "أكتوبر",
        "نوفمبر", "ديسمبر",
    ],
    months_with_day: None,
    patterns:        SPACED,
    modifiers:       ModifierPhrases {
        before: "قبل {}",
        after:  "بعد {}",
        about:  "حوالي {}",
        from:   "من {}",
        to:     "إلى {}",
        range:  "بين {} و {}",
        span:   "من {} إلى {}",
    },
    qualities:       QualityPhrases {
        estimated:  "تقديري {}",
        calculated: "محسوب {}",
    },
    calendars:       CalendarNames {
        julian:  "يولياني",
        hebrew:  "عبري",
        french:  "جمهوري فرنسي",
        persian: "فارسي",
        islamic: "إسلامي",
        swedish: "سويدي",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static EL: Language = Language {
    code:            "el",
    months:          [
        "Ιανουάριος", "Φεβρουάριος", "Μάρτιος", "Απρίλιος", "Μάιος", "Ιούνιος", "Ιούλιος",
        "Αύγουστος", "Σεπτέμβριος", "Οκτώβριος", "Νοέμβριος", "Δεκέμβριος",
    ],
    months_with_day: Some([
        "Ιανουαρίου", "Φεβρουαρίου", "Μαρτίου", "Απριλίου", "Μαΐου", "Ιουνίου", "Ιουλίου",
        "Αυγούστου", "Σεπτεμβρίου", "Οκτωβρίου", "Νοεμβρίου", "Δεκεμβρίου",
    ]),
    patterns:        SPACED,
    modifiers:       ModifierPhrases {
        before: "πριν από {}",
        after:  "μετά από {}",
        about:  "περίπου {}",
        from:   "από {}",
        to:     "έως {}",
        range:  "μεταξύ {} και {}",
        span:   "από {} έως {}",
    },
    qualities:       QualityPhrases {
        estimated:  "εκτιμώμενη {}",
        calculated: "υπολογισμένη {}",
    },
    calendars:       CalendarNames {
        julian:  "Ιουλιανό",
        hebrew:  "Εβραϊκό",
        french:  "Γαλλικό Δημοκρατικό",
        persian: "Περσικό",
        islamic: "Ισλαμικό",
        swedish: "Σουηδικό",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

/// Hungarian writes the year first and attaches most modifiers as suffixes.
pub static HU: Language = Language {
    code:            "hu",
    months:          [
        "január", "február", "március", "április", "május", "június", "július", "augusztus",
        "szeptember", "október", "november", "december",
    ],
    months_with_day: None,
    patterns:        Patterns {
        full:       "{y}. {m} {d}.",
        month_year: "{y}. {m}",
        year:       "{y}",
    },
    modifiers:       ModifierPhrases {
        before: "{} előtt",
        after:  "{} után",
        about:  "{} körül",
        from:   "{}-tól",
        to:     "{}-ig",
        range:  "{} és {} között",
        span:   "{}-tól {}-ig",
    },
    qualities:       QualityPhrases {
        estimated:  "becsült {}",
        calculated: "számított {}",
    },
    calendars:       CalendarNames {
        julian:  "Julián",
        hebrew:  "Héber",
        french:  "Francia köztársasági",
        persian: "Perzsa",
        islamic: "Iszlám",
        swedish: "Svéd",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

/// Lithuanian: `1789 m. gegužės 5 d.`
pub static LT: Language = Language {
    code:            "lt",
    months:          [
        "sausis", "vasaris", "kovas", "balandis", "gegužė", "birželis", "liepa", "rugpjūtis",
        "rugsėjis", "spalis", "lapkritis", "gruodis",
    ],
    months_with_day: Some([
        "sausio", "vasario", "kovo", "balandžio", "gegužės", "birželio", "liepos", "rugpjūčio",
        "rugsėjo", "spalio", "lapkričio", "gruodžio",
    ]),
    patterns:        Patterns {
        full:       "{y} m. {m} {d} d.",
        month_year: "{y} m. {m}",
        year:       "{y} m.",
    },
    modifiers:       ModifierPhrases {
        before: "prieš {}",
        after:  "po {}",
        about:  "apie {}",
        from:   "nuo {}",
        to:     "iki {}",
        range:  "tarp {} ir {}",
        span:   "nuo {} iki {}",
    },
    qualities:       QualityPhrases {
        estimated:  "apytikriai {}",
        calculated: "apskaičiuota {}",
    },
    calendars:       CalendarNames {
        julian:  "julijaus",
        hebrew:  "hebrajų",
        french:  "prancūzų respublikos",
        persian: "persų",
        islamic: "islamo",
        swedish: "švedų",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};
