use super::{DOTTED, SPACED};
use crate::locale::vocabulary::{
    CalendarNames, DualYearStyle, Hooks, Language, ModifierPhrases, QualityPhrases,
};

pub static DA: Language = Language {
    code:            "da",
    months:          [
        "januar", "februar", "marts", "april", "maj", "juni", "juli", "august", "september",
        "oktober", "november", "december",
    ],
    months_with_day: None,
    patterns:        DOTTED,
    modifiers:       ModifierPhrases {
        before: "før {}",
        after:  "efter {}",
        about:  "omkring {}",
        from:   "fra {}",
        to:     "til {}",
        range:  "mellem {} og {}",
        span:   "fra {} til {}",
    },
    qualities:       QualityPhrases {
        estimated:  "anslået {}",
        calculated: "beregnet {}",
    },
    calendars:       CalendarNames {
        julian:  "juliansk",
        hebrew:  "hebraisk",
        french:  "fransk republikansk",
        persian: "persisk",
        islamic: "islamisk",
        swedish: "svensk",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

const BOKMAL: Language = Language {
    code:            "nb",
    months:          [
        "januar", "februar", "mars", "april", "mai", "juni", "juli", "august", "september",
        "oktober", "november", "desember",
    ],
    months_with_day: None,
    patterns:        DOTTED,
    modifiers:       ModifierPhrases {
        before: "før {}",
        after:  "etter {}",
        about:  "omkring {}",
        from:   "fra {}",
        to:     "til {}",
        range:  "mellom {} og {}",
        span:   "fra {} til {}",
    },
    qualities:       QualityPhrases {
        estimated:  "anslått {}",
        calculated: "beregnet {}",
    },
    calendars:       CalendarNames {
        julian:  "juliansk",
        hebrew:  "hebraisk",
        french:  "fransk republikansk",
        persian: "persisk",
        islamic: "islamsk",
        swedish: "svensk",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static NB: Language = BOKMAL;

pub static NN: Language = Language {
    code: "nn",
    modifiers: ModifierPhrases {
        from: "frå {}",
        span: "frå {} til {}",
        ..BOKMAL.modifiers
    },
    qualities: QualityPhrases {
        calculated: "rekna {}",
        ..BOKMAL.qualities
    },
    ..BOKMAL
};

pub static SV: Language = Language {
    code:            "sv",
    months:          [
        "januari", "februari", "mars", "april", "maj", "juni", "juli", "augusti", "september",
        "oktober", "november", "december",
    ],
    months_with_day: None,
    patterns:        SPACED,
    modifiers:       ModifierPhrases {
        before: "före {}",
        after:  "efter {}",
        about:  "omkring {}",
        from:   "från {}",
        to:     "till {}",
        range:  "mellan {} och {}",
        span:   "från {} till {}",
    },
    qualities:       QualityPhrases {
        estimated:  "uppskattat {}",
        calculated: "beräknat {}",
    },
    calendars:       CalendarNames {
        julian:  "juliansk",
        hebrew:  "hebreisk",
        french:  "fransk republikansk",
        persian: "persisk",
        islamic: "islamisk",
        swedish: "svensk",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static IS: Language = Language {
    code:            "is",
    months:          [
        "janúar", "febrúar", "mars", "apríl", "maí", "júní", "júlí", "ágúst", "september",
        "október", "nóvember", "desember",
    ],
    months_with_day: None,
    patterns:        DOTTED,
    modifiers:       ModifierPhrases {
        before: "fyrir {}",
        after:  "eftir {}",
        about:  "um {}",
        from:   "frá {}",
        to:     "til {}",
        range:  "milli {} og {}",
        span:   "frá {} til {}",
    },
    qualities:       QualityPhrases {
        estimated:  "áætlað {}",
        calculated: "reiknað {}",
    },
    calendars:       CalendarNames {
        julian:  "júlíanskt",
        hebrew:  "hebreskt",
        french:  "franskt lýðveldis",
        persian: "persneskt",
        islamic: "íslamskt",
        swedish: "sænskt",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

/// Finnish puts most modifiers after the date and uses the partitive month
/// name ("5. toukokuuta 1789") when a day is given.
pub static FI: Language = Language {
    code:            "fi",
    months:          [
        "tammikuu", "helmikuu", "maaliskuu", "huhtikuu", "toukokuu", "kesäkuu", "heinäkuu",
        "elokuu", "syyskuu", "lokakuu", "marraskuu", "joulukuu",
    ],
    months_with_day: Some([
        "tammikuuta", "helmikuuta", "maaliskuuta", "huhtikuuta", "toukokuuta", "kesäkuuta",
        "heinäkuuta", "elokuuta", "syyskuuta", "lokakuuta", "marraskuuta", "joulukuuta",
    ]),
    patterns:        DOTTED,
    modifiers:       ModifierPhrases {
        before: "ennen {}",
        after:  "{} jälkeen",
        about:  "noin {}",
        from:   "{} alkaen",
        to:     "{} asti",
        range:  "{} ja {} välillä",
        span:   "{} – {}",
    },
    qualities:       QualityPhrases {
        estimated:  "arviolta {}",
        calculated: "laskettuna {}",
    },
    calendars:       CalendarNames {
        julian:  "juliaaninen",
        hebrew:  "heprealainen",
        french:  "Ranskan tasavallan",
        persian: "persialainen",
        islamic: "islamilainen",
        swedish: "ruotsalainen",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};
