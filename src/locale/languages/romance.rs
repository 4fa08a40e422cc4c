use super::{DE_ELISION, SPACED};
use crate::locale::vocabulary::{
    CalendarNames, DualYearStyle, Hooks, Language, ModifierPhrases, Patterns, QualityPhrases,
};

/// `5 de mayo de 1789`
const DE_LINKED: Patterns = Patterns {
    full:       "{d} de {m} de {y}",
    month_year: "{m} de {y}",
    year:       "{y}",
};

/// French contracts "de" before a vowel: "d'avril 1789".
pub static FR: Language = Language {
    code:            "fr",
    months:          [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    months_with_day: None,
    patterns:        SPACED,
    modifiers:       ModifierPhrases {
        before: "avant {}",
        after:  "après {}",
        about:  "vers {}",
        from:   "de {}",
        to:     "à {}",
        range:  "entre {} et {}",
        span:   "de {} à {}",
    },
    qualities:       QualityPhrases {
        estimated:  "estimé {}",
        calculated: "calculé {}",
    },
    calendars:       CalendarNames {
        julian:  "julien",
        hebrew:  "hébreu",
        french:  "républicain",
        persian: "persan",
        islamic: "islamique",
        swedish: "suédois",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        DE_ELISION,
    hooks:           Hooks::ELIDING,
};

/// Catalan links day and month with "de", elided before a vowel.
pub static CA: Language = Language {
    code:            "ca",
    months:          [
        "gener", "febrer", "març", "abril", "maig", "juny", "juliol", "agost", "setembre",
        "octubre", "novembre", "desembre",
    ],
    months_with_day: Some([
        "de gener", "de febrer", "de març", "d'abril", "de maig", "de juny", "de juliol",
        "d'agost", "de setembre", "d'octubre", "de novembre", "de desembre",
    ]),
    patterns:        Patterns {
        full:       "{d} {m} de {y}",
        month_year: "{m} de {y}",
        year:       "{y}",
    },
    modifiers:       ModifierPhrases {
        before: "abans de {}",
        after:  "després de {}",
        about:  "cap a {}",
        from:   "des de {}",
        to:     "fins a {}",
        range:  "entre {} i {}",
        span:   "des de {} fins a {}",
    },
    qualities:       QualityPhrases {
        estimated:  "estimat {}",
        calculated: "calculat {}",
    },
    calendars:       CalendarNames {
        julian:  "julià",
        hebrew:  "hebreu",
        french:  "republicà francès",
        persian: "persa",
        islamic: "islàmic",
        swedish: "suec",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        DE_ELISION,
    hooks:           Hooks::ELIDING,
};

pub static ES: Language = Language {
    code:            "es",
    months:          [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ],
    months_with_day: None,
    patterns:        DE_LINKED,
    modifiers:       ModifierPhrases {
        before: "antes de {}",
        after:  "después de {}",
        about:  "hacia {}",
        from:   "desde {}",
        to:     "hasta {}",
        range:  "entre {} y {}",
        span:   "desde {} hasta {}",
    },
    qualities:       QualityPhrases {
        estimated:  "estimado {}",
        calculated: "calculado {}",
    },
    calendars:       CalendarNames {
        julian:  "juliano",
        hebrew:  "hebreo",
        french:  "republicano francés",
        persian: "persa",
        islamic: "islámico",
        swedish: "sueco",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static IT: Language = Language {
    code:            "it",
    months:          [
        "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
        "settembre", "ottobre", "novembre", "dicembre",
    ],
    months_with_day: None,
    patterns:        SPACED,
    modifiers:       ModifierPhrases {
        before: "prima del {}",
        after:  "dopo il {}",
        about:  "circa il {}",
        from:   "dal {}",
        to:     "al {}",
        range:  "tra il {} e il {}",
        span:   "dal {} al {}",
    },
    qualities:       QualityPhrases {
        estimated:  "stimato {}",
        calculated: "calcolato {}",
    },
    calendars:       CalendarNames {
        julian:  "giuliano",
        hebrew:  "ebraico",
        french:  "repubblicano francese",
        persian: "persiano",
        islamic: "islamico",
        swedish: "svedese",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static PT: Language = Language {
    code:            "pt",
    months:          [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
        "outubro", "novembro", "dezembro",
    ],
    months_with_day: None,
    patterns:        DE_LINKED,
    modifiers:       ModifierPhrases {
        before: "antes de {}",
        after:  "depois de {}",
        about:  "por volta de {}",
        from:   "desde {}",
        to:     "até {}",
        range:  "entre {} e {}",
        span:   "de {} a {}",
    },
    qualities:       QualityPhrases {
        estimated:  "estimado {}",
        calculated: "calculado {}",
    },
    calendars:       CalendarNames {
        julian:  "juliano",
        hebrew:  "hebreu",
        french:  "republicano francês",
        persian: "persa",
        islamic: "islâmico",
        swedish: "sueco",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};
