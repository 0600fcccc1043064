//! Display language

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language for labels and geocoder results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English
    #[default]
    #[serde(rename = "en", alias = "english")]
    English,
    /// Japanese
    #[serde(rename = "ja", alias = "japanese")]
    Japanese,
}

impl Language {
    /// ISO 639-1 code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Japanese => "ja",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Japanese.code(), "ja");
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn deserializes_from_code_and_name() {
        let ja: Language = serde_json::from_str(r#""ja""#).expect("code");
        let en: Language = serde_json::from_str(r#""english""#).expect("alias");
        assert_eq!(ja, Language::Japanese);
        assert_eq!(en, Language::English);
    }
}
