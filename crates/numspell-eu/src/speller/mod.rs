// Numeral spelling module

pub mod basque;

use numspell_core::language::Language;
use numspell_core::numeral::SpellError;

/// Trait for numeral spellers.
///
/// A speller is a pure function from a number to its written form in one
/// language. Implementations hold no mutable state and can be shared
/// freely between threads.
pub trait NumeralSpeller: Send + Sync {
    /// The language this speller writes.
    fn language(&self) -> Language;

    /// Exclusive upper bound of the numbers this speller accepts.
    fn limit(&self) -> u64;

    /// Spell `n` in words.
    ///
    /// Fails with [`SpellError::OutOfRange`] when `n >= self.limit()`.
    /// There is no partial result: either the whole number is spelled or
    /// an error is returned.
    fn spell(&self, n: u64) -> Result<String, SpellError>;
}
