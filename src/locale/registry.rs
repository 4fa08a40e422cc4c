use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, trace, warn};

use crate::config::RegistryConfig;
use crate::error::LocaleError;

use super::display::FormattedDisplayer;
use super::languages::{self, BUILTIN};
use super::parse::GrammarParser;
use super::vocabulary::Language;
use super::LocaleHandle;

/// Binds locale codes to displayer/parser pairs.
///
/// Resolution tries, in order: the normalized code, its alias, each shorter
/// prefix of it (`sr_Latn_RS` → `sr_Latn` → `sr`) and their aliases, and
/// finally the configured fallback locale. Custom registrations win over
/// built-in tables at every step.
///
/// Built-in grammars are compiled on first use and shared by every later
/// `resolve` of the same language.
#[derive(Debug, Default)]
pub struct LocaleRegistry {
    config:   RegistryConfig,
    custom:   HashMap<String, LocaleHandle>,
    compiled: DashMap<&'static str, LocaleHandle>,
}

impl LocaleRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            custom: HashMap::new(),
            compiled: DashMap::new(),
        }
    }

    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Installs `handle` for `code`, replacing the built-in pair if any.
    /// Returns the handle previously registered under that code.
    pub fn register(&mut self, code: &str, handle: LocaleHandle) -> Option<LocaleHandle> {
        let code = normalize(code);
        debug!(locale = %code, "registered custom date handler");
        self.custom.insert(code, handle)
    }

    /// The displayer/parser pair serving `code`.
    ///
    /// # Errors
    /// Returns `LocaleError::Unavailable` when neither the code, its
    /// language nor the fallback locale has a handler, and the compilation
    /// errors of [`GrammarParser::new`].
    pub fn resolve(&self, code: &str) -> Result<LocaleHandle, LocaleError> {
        let normalized = normalize(code);
        if let Some(handle) = self.lookup(&normalized)? {
            debug!(requested = code, locale = handle.code(), "resolved date handler");
            return Ok(handle);
        }

        if let Some(fallback) = &self.config.fallback_locale {
            if let Some(handle) = self.lookup(&normalize(fallback))? {
                warn!(
                    requested = code,
                    fallback = handle.code(),
                    "no date handler for locale, using fallback"
                );
                return Ok(handle);
            }
        }
        Err(LocaleError::Unavailable(code.to_owned()))
    }

    /// Codes with a handler of their own, built-in and custom, sorted.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = BUILTIN
            .iter()
            .map(|language| language.code.to_owned())
            .chain(self.custom.keys().cloned())
            .collect();
        codes.sort();
        codes.dedup();
        codes
    }

    fn lookup(&self, code: &str) -> Result<Option<LocaleHandle>, LocaleError> {
        for candidate in candidates(code) {
            if let Some(handle) = self.custom.get(candidate) {
                return Ok(Some(handle.clone()));
            }
            if let Some(language) = languages::find(candidate) {
                return self.builtin(language).map(Some);
            }
        }
        Ok(None)
    }

    fn builtin(&self, language: &'static Language) -> Result<LocaleHandle, LocaleError> {
        if let Some(handle) = self.compiled.get(language.code) {
            return Ok(handle.value().clone());
        }

        let handle = LocaleHandle::new(
            language.code,
            Arc::new(FormattedDisplayer::new(language, &self.config.display)),
            Arc::new(GrammarParser::new(language, &self.config.parser)?),
        );
        trace!(locale = language.code, "cached date handler");
        Ok(self.compiled.entry(language.code).or_insert(handle).value().clone())
    }
}

/// `code`, then its shorter prefixes, each followed by its alias target.
fn candidates(code: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut current = code;
    loop {
        out.push(current);
        out.extend(languages::alias(current));
        match current.rfind('_') {
            Some(at) => current = &current[..at],
            None => return out,
        }
    }
}

/// Canonical form of a locale code: `de-at.UTF-8` → `de_AT`,
/// `sr-latn` → `sr_Latn`.
pub fn normalize(code: &str) -> String {
    let code = code.split(['.', '@']).next().unwrap_or_default().trim();
    let mut parts = code.split(['_', '-']).filter(|part| !part.is_empty());
    let mut out = parts.next().unwrap_or_default().to_lowercase();
    for part in parts {
        out.push('_');
        if part.chars().count() == 4 {
            let mut chars = part.chars();
            out.extend(chars.next().map(|first| first.to_ascii_uppercase()));
            out.push_str(&chars.as_str().to_lowercase());
        } else {
            out.push_str(&part.to_uppercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::config::{ParserConfig, UnparsedPolicy};
    use crate::date::Date;
    use crate::error::DateError;
    use crate::locale::{Displayer, Parser};
    use crate::test_utils::simple;
    use crate::types::{Modifier, Quality};

    #[test]
    fn test_normalize() {
        struct TestCase {
            input:    &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                input:    "de_AT",
                expected: "de_AT",
            },
            TestCase {
                input:    "de-at",
                expected: "de_AT",
            },
            TestCase {
                input:    "de_AT.UTF-8",
                expected: "de_AT",
            },
            TestCase {
                input:    "sr-latn",
                expected: "sr_Latn",
            },
            TestCase {
                input:    "ca_ES@valencia",
                expected: "ca_ES",
            },
            TestCase {
                input:    "EN",
                expected: "en",
            },
            TestCase {
                input:    "",
                expected: "",
            },
        ];

        for case in &cases {
            assert_eq!(normalize(case.input), case.expected, "{}", case.input);
        }
    }

    #[test]
    fn test_resolution_order() {
        struct TestCase {
            requested: &'static str,
            served_by: &'static str,
        }

        let cases = [
            TestCase {
                requested: "de_AT",
                served_by: "de_AT",
            },
            TestCase {
                requested: "de_CH",
                served_by: "de",
            },
            TestCase {
                requested: "en_GB",
                served_by: "en",
            },
            TestCase {
                requested: "en-US",
                served_by: "en_US",
            },
            TestCase {
                requested: "zh_HK",
                served_by: "zh_TW",
            },
            TestCase {
                requested: "zh",
                served_by: "zh_CN",
            },
            TestCase {
                requested: "pt_BR",
                served_by: "pt",
            },
            TestCase {
                requested: "no_NO",
                served_by: "nb",
            },
            TestCase {
                requested: "sr_Latn_RS",
                served_by: "sr_Latn",
            },
            TestCase {
                requested: "fr_FR.UTF-8",
                served_by: "fr",
            },
            TestCase {
                requested: "tr",
                served_by: "en",
            },
            TestCase {
                requested: "sq_AL",
                served_by: "en",
            },
        ];

        let registry = LocaleRegistry::default();
        for case in &cases {
            let handle = registry.resolve(case.requested).unwrap();
            assert_eq!(handle.code(), case.served_by, "{}", case.requested);
        }
    }

    #[test]
    fn test_no_fallback() {
        let registry = LocaleRegistry::new(RegistryConfig {
            fallback_locale: None,
            ..RegistryConfig::default()
        });
        assert!(matches!(
            registry.resolve("tr"),
            Err(LocaleError::Unavailable(code)) if code == "tr"
        ));
        assert!(registry.resolve("de").is_ok());
    }

    #[test]
    fn test_custom_fallback() {
        let registry = LocaleRegistry::new(RegistryConfig {
            fallback_locale: Some("de".to_owned()),
            ..RegistryConfig::default()
        });
        assert_eq!(registry.resolve("tr").unwrap().code(), "de");
    }

    #[derive(Debug)]
    struct Shouting;

    impl Displayer for Shouting {
        fn display(&self, date: &Date) -> String {
            crate::locale::reference_displayer().display(date).to_uppercase()
        }
    }

    impl Parser for Shouting {
        fn parse(&self, text: &str) -> Result<Date, DateError> {
            text.to_lowercase().parse()
        }
    }

    #[test]
    fn test_register_custom_pair() {
        let mut registry = LocaleRegistry::default();
        let shouting = Arc::new(Shouting);
        let previous = registry.register("de-CH", LocaleHandle::new("de_CH", shouting.clone(), shouting));
        assert!(previous.is_none());

        let handle = registry.resolve("de_CH.UTF-8").unwrap();
        assert_eq!(handle.code(), "de_CH");

        let date = simple(Quality::None, Modifier::Before, Calendar::Gregorian, (5, 5, 1789, false));
        let text = handle.display(&date);
        assert_eq!(text, "BEFORE 5 MAY 1789 \"TEXT COMMENT\"");
        assert!(handle.parse(&text).unwrap().is_equal(&date.with_text("text comment")));

        assert_eq!(registry.resolve("de").unwrap().code(), "de");
        assert!(registry.codes().contains(&"de_CH".to_owned()));
    }

    #[test]
    fn test_parser_policy_reaches_handles() {
        let registry = LocaleRegistry::new(RegistryConfig {
            parser: ParserConfig {
                unparsed: UnparsedPolicy::Reject,
            },
            ..RegistryConfig::default()
        });
        let handle = registry.resolve("fr").unwrap();
        assert_eq!(
            handle.parse("un jour"),
            Err(DateError::UnparseableText("un jour".to_owned()))
        );
    }

    #[test]
    fn test_builtin_handles_are_compiled_once() {
        let registry = LocaleRegistry::default();
        let first = registry.resolve("de_DE").unwrap();
        let second = registry.resolve("de-CH.UTF-8").unwrap();
        assert!(Arc::ptr_eq(first.parser(), second.parser()));
        assert!(Arc::ptr_eq(first.displayer(), second.displayer()));

        let fallback = registry.resolve("tr").unwrap();
        let english = registry.resolve("en").unwrap();
        assert!(Arc::ptr_eq(fallback.parser(), english.parser()));

        let other = LocaleRegistry::new(RegistryConfig {
            parser: ParserConfig {
                unparsed: UnparsedPolicy::Reject,
            },
            ..RegistryConfig::default()
        });
        assert!(!Arc::ptr_eq(other.resolve("de").unwrap().parser(), first.parser()));
    }

    #[test]
    fn test_codes() {
        let codes = LocaleRegistry::default().codes();
        assert_eq!(codes.len(), BUILTIN.len());
        assert!(codes.contains(&"sr_Latn".to_owned()));
        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
