// Target language identifiers

use std::fmt;
use std::str::FromStr;

/// A language that numbers can be spelled in.
///
/// Languages are identified by their ISO 639-3 code on every outer
/// surface (CLI arguments, FFI, WASM).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Basque (`eus`).
    Basque,
}

impl Language {
    /// Every supported language, in code order.
    pub const ALL: &'static [Language] = &[Language::Basque];

    /// ISO 639-3 code of this language.
    pub fn code(self) -> &'static str {
        match self {
            Language::Basque => "eus",
        }
    }

    /// Look up a language by its ISO 639-3 code.
    ///
    /// Matching is exact: codes are lowercase three-letter strings and no
    /// aliases (such as the two-letter `eu`) are accepted.
    pub fn from_code(code: &str) -> Option<Language> {
        Self::ALL.iter().copied().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
