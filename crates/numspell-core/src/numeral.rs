// Spelling results and errors

use std::fmt;

/// Error produced while spelling a single number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpellError {
    /// The number lies outside the range a speller supports, or one of
    /// its magnitude bands indexed past the end of a word table.
    #[error("number out of range: {value} (supported: 0..{limit})")]
    OutOfRange { value: i64, limit: u64 },
}

impl SpellError {
    /// The number that could not be spelled.
    pub fn value(&self) -> i64 {
        match *self {
            SpellError::OutOfRange { value, .. } => value,
        }
    }
}

/// One converted input line: the digits as read and their spelled form.
///
/// Displays as `digits = words`, the output line format of the converter
/// (without the trailing newline).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberLine {
    /// The number in digit form, as it is echoed to the output.
    pub digits: String,

    /// The number spelled out in words.
    pub words: String,
}

impl NumberLine {
    /// Create a new line.
    pub fn new(digits: impl Into<String>, words: impl Into<String>) -> Self {
        Self {
            digits: digits.into(),
            words: words.into(),
        }
    }
}

impl fmt::Display for NumberLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.digits, self.words)
    }
}
