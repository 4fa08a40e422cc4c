use crate::locale::vocabulary::{
    CalendarNames, DualYearStyle, Hooks, Language, ModifierPhrases, Patterns, QualityPhrases,
};

const NUMBERED_MONTHS: [&str; 12] = [
    "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];

/// `1789年5月5日`
const YEAR_FIRST: Patterns = Patterns {
    full:       "{y}年{m}{d}日",
    month_year: "{y}年{m}",
    year:       "{y}年",
};

pub static JA: Language = Language {
    code:            "ja",
    months:          NUMBERED_MONTHS,
    months_with_day: None,
    patterns:        YEAR_FIRST,
    modifiers:       ModifierPhrases {
        before: "{}以前",
        after:  "{}以降",
        about:  "{}頃",
        from:   "{}から",
        to:     "{}まで",
        range:  "{}から{}の間",
        span:   "{}から{}まで",
    },
    qualities:       QualityPhrases {
        estimated:  "推定 {}",
        calculated: "計算 {}",
    },
    calendars:       CalendarNames {
        julian:  "ユリウス暦",
        hebrew:  "ユダヤ暦",
        french:  "フランス革命暦",
        persian: "ペルシャ暦",
        islamic: "イスラム暦",
        swedish: "スウェーデン暦",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

const SIMPLIFIED: Language = Language {
    code:            "zh_CN",
    months:          NUMBERED_MONTHS,
    months_with_day: None,
    patterns:        YEAR_FIRST,
    modifiers:       ModifierPhrases {
        before: "{}之前",
        after:  "{}之后",
        about:  "约{}",
        from:   "自{}",
        to:     "至{}",
        range:  "介于{}与{}之间",
        span:   "从{}到{}",
    },
    qualities:       QualityPhrases {
        estimated:  "估计{}",
        calculated: "计算{}",
    },
    calendars:       CalendarNames {
        julian:  "儒略历",
        hebrew:  "希伯来历",
        french:  "法国共和历",
        persian: "波斯历",
        islamic: "伊斯兰历",
        swedish: "瑞典历",
    },
    dual_year:       DualYearStyle::Abbreviated,
    elisions:        &[],
    hooks:           Hooks::DEFAULT,
};

pub static ZH_CN: Language = SIMPLIFIED;

pub static ZH_TW: Language = Language {
    code: "zh_TW",
    modifiers: ModifierPhrases {
        before: "{}之前",
        after:  "{}之後",
        about:  "約{}",
        from:   "自{}",
        to:     "至{}",
        range:  "介於{}與{}之間",
        span:   "從{}到{}",
    },
    qualities: QualityPhrases {
        estimated:  "估計{}",
        calculated: "計算{}",
    },
    calendars: CalendarNames {
        julian:  "儒略曆",
        hebrew:  "希伯來曆",
        french:  "法國共和曆",
        persian: "波斯曆",
        islamic: "伊斯蘭曆",
        swedish: "瑞典曆",
    },
    ..SIMPLIFIED
};
