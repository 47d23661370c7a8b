//! The subset of a locale that matters when rendering a plain decimal number:
//! the symbol separating the integer part from the fraction.
//!
//! Digit grouping is never used for coordinates and the minus sign is
//! always overridden by the formatter, so nothing else is stored.

use std::{collections::HashSet, convert::TryFrom, fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ParseLocaleError;

const DOT: char = '.';
const COMMA: char = ',';

lazy_static! {
    static ref RE_TAG: Regex = Regex::new(
        r"(?x)
        ^
        (?P<lang>[A-Za-z]{2,3})                     # ISO 639 language
        (?:[_-](?P<region>[A-Za-z]{2}|[0-9]{3}))?   # ISO 3166 region or UN M.49 area
        (?:[_-](?P<variant>[A-Za-z0-9]{4,8}))?      # variant, e.g. POSIX
        $
        "
    )
    .expect("Locale regex is valid");

    static ref DECIMAL_COMMA_LANGUAGES: HashSet<&'static str> = [
        "az", "be", "bg", "ca", "cs", "da", "de", "el", "es", "et", "eu", "fi", "fr", "gl", "hr",
        "hu", "id", "it", "kk", "lt", "lv", "nb", "nl", "nn", "no", "pl", "pt", "ro", "ru", "sk",
        "sl", "sq", "sr", "sv", "tr", "uk", "vi",
    ]
    .into_iter()
    .collect();
}

/// Locale identifier like `en_US_POSIX`, `de-DE` or just `fr`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Locale {
    language: String,
    region: Option<String>,
    variant: Option<String>,
}

impl Locale {
    /// The locale-independent convention:
    /// decimal dot and ASCII digits.
    pub fn posix() -> Self {
        Self {
            language: "en".into(),
            region: Some("US".into()),
            variant: Some("POSIX".into()),
        }
    }

    /// Lowercase ISO 639 language code
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase region code, if any
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Uppercase variant, if any
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// The symbol between the integer and fractional parts
    pub fn decimal_separator(&self) -> char {
        if self.variant.as_deref() == Some("POSIX") {
            return DOT;
        }

        let language = self.language.as_str();
        if let Some(separator) = self
            .region
            .as_deref()
            .and_then(|region| region_separator(language, region))
        {
            return separator;
        }

        if DECIMAL_COMMA_LANGUAGES.contains(language) {
            COMMA
        } else {
            DOT
        }
    }
}

// regions which do not follow the language's convention
fn region_separator(language: &str, region: &str) -> Option<char> {
    match (language, region) {
        ("de", "CH" | "LI") | ("it", "CH") | ("es", "MX" | "US" | "PR" | "GT") => Some(DOT),
        ("en", "ZA" | "DK" | "DE") => Some(COMMA),
        _ => None,
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::posix()
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseLocaleError::Empty);
        }

        let capture = RE_TAG
            .captures(s)
            .ok_or_else(|| ParseLocaleError::Malformed(s.to_string()))?;
        let language = capture
            .name("lang")
            .ok_or_else(|| ParseLocaleError::Malformed(s.to_string()))?
            .as_str()
            .to_ascii_lowercase();
        let region = capture
            .name("region")
            .map(|m| m.as_str().to_ascii_uppercase());
        let variant = capture
            .name("variant")
            .map(|m| m.as_str().to_ascii_uppercase());

        Ok(Self {
            language,
            region,
            variant,
        })
    }
}

impl TryFrom<String> for Locale {
    type Error = ParseLocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(region) = &self.region {
            write!(f, "_{region}")?;
        }
        if let Some(variant) = &self.variant {
            write!(f, "_{variant}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_posix() {
        let locale = Locale::default();
        assert_eq!(locale.to_string(), "en_US_POSIX");
        assert_eq!(locale.decimal_separator(), '.');
    }

    #[test]
    fn parse_full_tag() {
        let locale: Locale = "en_US_POSIX".parse().unwrap();
        assert_eq!(locale, Locale::posix());
    }

    #[test]
    fn parse_dashed_tag() {
        let locale: Locale = "de-DE".parse().unwrap();
        assert_eq!(locale.language(), "de");
        assert_eq!(locale.region(), Some("DE"));
        assert_eq!(locale.variant(), None);
        assert_eq!(locale.to_string(), "de_DE");
    }

    #[test]
    fn parse_language_only() {
        let locale: Locale = "FR".parse().unwrap();
        assert_eq!(locale.language(), "fr");
        assert_eq!(locale.region(), None);
    }

    #[test]
    fn parse_numeric_area() {
        let locale: Locale = "es_419".parse().unwrap();
        assert_eq!(locale.region(), Some("419"));
        assert_eq!(locale.decimal_separator(), ',');
    }

    #[test]
    fn empty_tag() {
        assert_eq!("  ".parse::<Locale>(), Err(ParseLocaleError::Empty));
    }

    #[test]
    #[should_panic(expected = "Malformed")]
    fn bad_tag() {
        let _locale: Locale = "english/US".parse().unwrap();
    }

    #[test]
    fn decimal_comma() {
        for tag in ["de_DE", "fr_FR", "ru", "pt_BR", "en_ZA"] {
            let locale: Locale = tag.parse().unwrap();
            assert_eq!(locale.decimal_separator(), ',', "{tag}");
        }
    }

    #[test]
    fn decimal_dot() {
        for tag in ["en_US", "en_GB", "ja_JP", "de_CH", "es_MX", "de_DE_POSIX"] {
            let locale: Locale = tag.parse().unwrap();
            assert_eq!(locale.decimal_separator(), '.', "{tag}");
        }
    }
}
