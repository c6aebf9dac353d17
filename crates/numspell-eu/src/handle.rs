// NumspellHandle: top-level entry point for numeral spelling.
//
// Selects the speller for a language code and carries the conversion
// options. The CLI, FFI and WASM crates all go through this type.

use std::io::{BufRead, Write};

use numspell_core::language::{Language, UnknownLanguage};
use numspell_core::numeral::{NumberLine, SpellError};

use crate::convert::{self, ConvertError, ConvertOptions, ConvertStats};
use crate::speller::NumeralSpeller;
use crate::speller::basque::BasqueSpeller;

/// Error type for NumspellHandle operations.
#[derive(Debug, thiserror::Error)]
pub enum NumspellError {
    /// The requested language code is not supported.
    #[error(transparent)]
    UnsupportedLanguage(#[from] UnknownLanguage),

    /// A number could not be spelled.
    #[error(transparent)]
    Spell(#[from] SpellError),

    /// Line conversion failed.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Spells numbers and converts digit input for one language.
pub struct NumspellHandle {
    speller: Box<dyn NumeralSpeller>,
    convert_options: ConvertOptions,
}

impl NumspellHandle {
    /// Create a handle for an ISO 639-3 language code.
    ///
    /// Only `"eus"` (Basque) is supported.
    pub fn new(language: &str) -> Result<Self, NumspellError> {
        let language: Language = language.parse()?;
        Ok(Self::for_language(language))
    }

    /// Create a handle for a known language.
    pub fn for_language(language: Language) -> Self {
        let speller: Box<dyn NumeralSpeller> = match language {
            Language::Basque => Box::new(BasqueSpeller::new()),
        };
        Self {
            speller,
            convert_options: ConvertOptions::default(),
        }
    }

    /// The language this handle spells in.
    pub fn language(&self) -> Language {
        self.speller.language()
    }

    /// Exclusive upper bound of the numbers that can be spelled.
    pub fn limit(&self) -> u64 {
        self.speller.limit()
    }

    // =========================================================================
    // Spelling
    // =========================================================================

    /// Spell a number in words.
    pub fn spell(&self, n: u64) -> Result<String, NumspellError> {
        Ok(self.speller.spell(n)?)
    }

    /// Parse and spell a single line of digit text.
    ///
    /// Unlike [`convert`](Self::convert), a blank line is always an error
    /// here, whatever `skip_blank_lines` is set to.
    pub fn spell_line(&self, text: &str) -> Result<NumberLine, NumspellError> {
        let options = ConvertOptions {
            skip_blank_lines: false,
            ..self.convert_options
        };
        match convert::convert_line(&*self.speller, 1, text, options)? {
            Some(line) => Ok(line),
            None => Err(ConvertError::Parse {
                line: 1,
                text: text.to_string(),
            }
            .into()),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Convert every line of `input` into `digits = words` lines on `output`.
    ///
    /// Halts at the first invalid line; earlier lines stay written.
    pub fn convert<R: BufRead, W: Write + ?Sized>(
        &self,
        input: R,
        output: &mut W,
    ) -> Result<ConvertStats, NumspellError> {
        Ok(convert::convert_lines(
            &*self.speller,
            input,
            output,
            self.convert_options,
        )?)
    }

    /// Convert text held in memory and return the output text.
    pub fn convert_str(&self, text: &str) -> Result<String, NumspellError> {
        let mut out = Vec::new();
        self.convert(text.as_bytes(), &mut out)?;
        // Output is built from the input text and the word tables, both UTF-8.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Convert text held in memory into structured lines.
    pub fn lines(&self, text: &str) -> Result<Vec<NumberLine>, NumspellError> {
        let mut lines = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if let Some(number) =
                convert::convert_line(&*self.speller, index + 1, line, self.convert_options)?
            {
                lines.push(number);
            }
        }
        Ok(lines)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Current conversion options.
    pub fn convert_options(&self) -> ConvertOptions {
        self.convert_options
    }

    /// Skip blank input lines instead of halting on them. Default: false.
    pub fn set_skip_blank_lines(&mut self, value: bool) {
        self.convert_options.skip_blank_lines = value;
    }

    /// Echo parsed numbers instead of the digits as written. Default: false.
    pub fn set_normalize_digits(&mut self, value: bool) {
        self.convert_options.normalize_digits = value;
    }
}

impl std::fmt::Debug for NumspellHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumspellHandle")
            .field("language", &self.language())
            .field("convert_options", &self.convert_options)
            .finish()
    }
}
