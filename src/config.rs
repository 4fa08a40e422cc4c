//! Settings for the locale registry and the displayer/parser pairs it builds.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```
//! use genealogy_date::RegistryConfig;
//!
//! let config: RegistryConfig = serde_json::from_str("{}").unwrap();
//! assert_eq!(config, RegistryConfig::default());
//! ```

use serde::{Deserialize, Serialize};

use crate::locale::DualYearStyle;

/// Locale code of the reference language.
pub const REFERENCE_LOCALE: &str = "en";

/// What a parser returns for text it does not recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnparsedPolicy {
    /// Keep the input verbatim as a textual date
    #[default]
    TextOnly,
    /// Fail with `DateError::UnparseableText`
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub unparsed: UnparsedPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Overrides the language's dual-year style when set.
    pub dual_year: Option<DualYearStyle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Locale served when a code has no handler of its own; `None` makes
    /// such lookups fail.
    pub fallback_locale: Option<String>,
    pub parser:          ParserConfig,
    pub display:         DisplayConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            fallback_locale: Some(REFERENCE_LOCALE.to_owned()),
            parser:          ParserConfig::default(),
            display:         DisplayConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::default();
        assert_eq!(config.fallback_locale.as_deref(), Some("en"));
        assert_eq!(config.parser.unparsed, UnparsedPolicy::TextOnly);
        assert_eq!(config.display.dual_year, None);
    }

    #[test]
    fn test_partial_document() {
        let json = r#"{"parser":{"unparsed":"reject"},"display":{"dual_year":"full"}}"#;
        let config: RegistryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.fallback_locale.as_deref(), Some("en"));
        assert_eq!(config.parser.unparsed, UnparsedPolicy::Reject);
        assert_eq!(config.display.dual_year, Some(DualYearStyle::Full));
    }

    #[test]
    fn test_no_fallback() {
        let config: RegistryConfig = serde_json::from_str(r#"{"fallback_locale":null}"#).unwrap();
        assert_eq!(config.fallback_locale, None);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = RegistryConfig {
            fallback_locale: Some("de".to_owned()),
            parser:          ParserConfig {
                unparsed: UnparsedPolicy::Reject,
            },
            display:         DisplayConfig {
                dual_year: Some(DualYearStyle::Abbreviated),
            },
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: RegistryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
