use super::{DOTTED, SPACED};
use crate::locale::vocabulary::{
    CalendarNames, DualYearStyle, Hooks, Language, ModifierPhrases, Patterns, QualityPhrases,
};

/// `5 мая 1789 г.`
const GODA: Patterns = Patterns {
    full:       "{d} {m} {y} г.",
    month_year: "{m} {y} г.",
    year:       "{y} г.",
};

/// `5. мај 1789.`
const TRAILING_DOT: Patterns = Patterns {
    full:       "{d}. {m} {y}.",
    month_year: "{m} {y}.",
    year:       "{y}.",
};

pub static RU: Language = Language {
    code:            "ru",
    months:          [
        "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
        "октябрь", "ноябрь", "декабрь",
    ],
    months_with_day: Some([
        "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
        "октября", "ноября", "декабря",
    ]),
    patterns:        GODA,
    modifiers:       ModifierPhrases {
        before: "до {}",
        after:  "после {}",
        about:  "около {}",
        from:   "с {}",
        to:     "по {}",
        range:  "между {} и {}",
        span:   "с {} по {}",
    },
    qualities:       QualityPhrases {
        estimated:  "оценено {}",
        calculated: "вычислено {}",
    },
    calendars:       CalendarNames {
        julian:  "юлианский",
        hebrew:  "еврейский",
        french:  "республиканский",
        persian: "персидский",
        islamic: "исламский",
        swedish: "шведский",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static UK: Language = Language {
    code:            "uk",
    months:          [
        "січень", "лютий", "березень", "квітень", "травень", "червень", "липень", "серпень",
        "вересень", "жовтень", "листопад", "грудень",
    ],
    months_with_day: Some([
        "січня", "лютого", "березня", "квітня", "травня", "червня", "липня", "серпня",
        "вересня", "жовтня", "листопада", "грудня",
    ]),
    patterns:        SPACED,
    modifiers:       ModifierPhrases {
        before: "до {}",
        after:  "після {}",
        about:  "близько {}",
        from:   "з {}",
        to:     "по {}",
        range:  "між {} і {}",
        span:   "з {} по {}",
    },
    qualities:       QualityPhrases {
        estimated:  "оцінено {}",
        calculated: "обчислено {}",
    },
    calendars:       CalendarNames {
        julian:  "юліанський",
        hebrew:  "єврейський",
        french:  "французький республіканський",
        persian: "перський",
        islamic: "ісламський",
        swedish: "шведський",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static BG: Language = Language {
    code:            "bg",
    months:          [
        "януари", "февруари", "март", "април", "май", "юни", "юли", "август", "септември",
        "октомври", "ноември", "декември",
    ],
    months_with_day: None,
    patterns:        SPACED,
    modifiers:       ModifierPhrases {
        before: "преди {}",
        after:  "след {}",
        about:  "около {}",
        from:   "от {}",
        to:     "до {}",
        range:  "между {} и {}",
        span:   "от {} до {}",
    },
    qualities:       QualityPhrases {
        estimated:  "приблизително {}",
        calculated: "изчислено {}",
    },
    calendars:       CalendarNames {
        julian:  "юлиански",
        hebrew:  "еврейски",
        french:  "републикански",
        persian: "персийски",
        islamic: "ислямски",
        swedish: "шведски",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static SR: Language = Language {
    code:            "sr",
    months:          [
        "јануар", "фебруар", "март", "април", "мај", "јун", "јул", "август", "септембар",
        "октобар", "новембар", "децембар",
    ],
    months_with_day: None,
    patterns:        TRAILING_DOT,
    modifiers:       ModifierPhrases {
        before: "пре {}",
        after:  "после {}",
        about:  "око {}",
        from:   "од {}",
        to:     "до {}",
        range:  "између {} и {}",
        span:   "од {} до {}",
    },
    qualities:       QualityPhrases {
        estimated:  "процењено {}",
        calculated: "израчунато {}",
    },
    calendars:       CalendarNames {
        julian:  "јулијански",
        hebrew:  "хебрејски",
        french:  "француски републикански",
        persian: "персијски",
        islamic: "исламски",
        swedish: "шведски",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static SR_LATN: Language = Language {
    code:            "sr_Latn",
    months:          [
        "januar", "februar", "mart", "april", "maj", "jun", "jul", "avgust", "septembar",
        "oktobar", "novembar", "decembar",
    ],
    months_with_day: None,
    patterns:        TRAILING_DOT,
    modifiers:       ModifierPhrases {
        before: "pre {}",
        after:  "posle {}",
        about:  "oko {}",
        from:   "od {}",
        to:     "do {}",
        range:  "između {} i {}",
        span:   "od {} do {}",
    },
    qualities:       QualityPhrases {
        estimated:  "procenjeno {}",
        calculated: "izračunato {}",
    },
    calendars:       CalendarNames {
        julian:  "julijanski",
        hebrew:  "hebrejski",
        french:  "francuski republikanski",
        persian: "persijski",
        islamic: "islamski",
        swedish: "švedski",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static PL: Language = Language {
    code:            "pl",
    months:          [
        "styczeń", "luty", "marzec", "kwiecień", "maj", "czerwiec", "lipiec", "sierpień",
        "wrzesień", "październik", "listopad", "grudzień",
    ],
    months_with_day: Some([
        "stycznia", "lutego", "marca", "kwietnia", "maja", "czerwca", "lipca", "sierpnia",
        "września", "października", "listopada", "grudnia",
    ]),
    patterns:        SPACED,
    modifiers:       ModifierPhrases {
        before: "przed {}",
        after:  "po {}",
        about:  "około {}",
        from:   "od {}",
        to:     "do {}",
        range:  "między {} a {}",
        span:   "od {} do {}",
    },
    qualities:       QualityPhrases {
        estimated:  "szacowany {}",
        calculated: "obliczony {}",
    },
    calendars:       CalendarNames {
        julian:  "juliański",
        hebrew:  "hebrajski",
        french:  "francuski republikański",
        persian: "perski",
        islamic: "islamski",
        swedish: "szwedzki",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static CS: Language = Language {
    code:            "cs",
    months:          [
        "leden", "únor", "březen", "duben", "květen", "červen", "červenec", "srpen", "září",
        "říjen", "listopad", "prosinec",
    ],
    months_with_day: Some([
        "ledna", "února", "března", "dubna", "května", "června", "července", "srpna", "září",
        "října", "listopadu", "prosince",
    ]),
    patterns:        DOTTED,
    modifiers:       ModifierPhrases {
        before: "před {}",
        after:  "po {}",
        about:  "kolem {}",
        from:   "od {}",
        to:     "do {}",
        range:  "mezi {} a {}",
        span:   "od {} do {}",
    },
    qualities:       QualityPhrases {
        estimated:  "odhadováno {}",
        calculated: "vypočteno {}",
    },
    calendars:       CalendarNames {
        julian:  "juliánský",
        hebrew:  "hebrejský",
        french:  "republikánský",
        persian: "perský",
        islamic: "islámský",
        swedish: "švédský",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static SK: Language = Language {
    code:            "sk",
    months:          [
        "január", "február", "marec", "apríl", "máj", "jún", "júl", "august", "september",
        "október", "november", "december",
    ],
    months_with_day: Some([
        "januára", "februára", "marca", "apríla", "mája", "júna", "júla", "augusta",
        "septembra", "októbra", "novembra", "decembra",
    ]),
    patterns:        DOTTED,
    modifiers:       ModifierPhrases {
        before: "pred {}",
        after:  "po {}",
        about:  "okolo {}",
        from:   "od {}",
        to:     "do {}",
        range:  "medzi {} a {}",
        span:   "od {} do {}",
    },
    qualities:       QualityPhrases {
        estimated:  "odhadované {}",
        calculated: "vypočítané {}",
    },
    calendars:       CalendarNames {
        julian:  "juliánsky",
        hebrew:  "hebrejský",
        french:  "francúzsky republikánsky",
        persian: "perzský",
        islamic: "islamský",
        swedish: "švédsky",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static SL: Language = Language {
    code:            "sl",
    months:          [
        "januar", "februar", "marec", "april", "maj", "junij", "julij", "avgust", "september",
        "oktober", "november", "december",
    ],
    months_with_day: None,
    patterns:        DOTTED,
    modifiers:       ModifierPhrases {
        before: "pred {}",
        after:  "po {}",
        about:  "okoli {}",
        from:   "od {}",
        to:     "do {}",
        range:  "med {} in {}",
        span:   "od {} do {}",
    },
    qualities:       QualityPhrases {
        estimated:  "ocenjeno {}",
        calculated: "izračunano {}",
    },
    calendars:       CalendarNames {
        julian:  "julijanski",
        hebrew:  "hebrejski",
        french:  "francoski republikanski",
        persian: "perzijski",
        islamic: "islamski",
        swedish: "švedski",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static HR: Language = Language {
    code:            "hr",
    months:          [
        "siječanj", "veljača", "ožujak", "travanj", "svibanj", "lipanj", "srpanj", "kolovoz",
        "rujan", "listopad", "studeni", "prosinac",
    ],
    months_with_day: Some([
        "siječnja", "veljače", "ožujka", "travnja", "svibnja", "lipnja", "srpnja", "kolovoza",
        "rujna", "listopada", "studenoga", "prosinca",
    ]),
    patterns:        TRAILING_DOT,
    modifiers:       ModifierPhrases {
        before: "prije {}",
        after:  "poslije {}",
        about:  "oko {}",
        from:   "od {}",
        to:     "do {}",
        range:  "između {} i {}",
        span:   "od {} do {}",
    },
    qualities:       QualityPhrases {
        estimated:  "procijenjeno {}",
        calculated: "izračunato {}",
    },
    calendars:       CalendarNames {
        julian:  "julijanski",
        hebrew:  "hebrejski",
        french:  "francuski republikanski",
        persian: "perzijski",
        islamic: "islamski",
        swedish: "švedski",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};
