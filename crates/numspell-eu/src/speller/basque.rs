// Basque numeral speller.
//
// Numbers are spelled by magnitude band:
// - below 20: direct lookup in UNITS
// - below 100: a multiple of twenty, optionally joined with "ta " to units
// - below 1000: a whole hundred, optionally followed by "eta" and the rest
// - below 1000000: thousands count, "mila", then the rest
//
// Every table access goes through `lookup`, so a number that escapes its
// band produces `SpellError::OutOfRange` instead of a panic.

use numspell_core::language::Language;
use numspell_core::numeral::SpellError;

use super::NumeralSpeller;
use crate::basque::constants::{
    CONNECTOR, HUNDREDS, LIMIT, THOUSAND, TWENTIES, TWENTIES_JOINER, UNITS,
};

/// Speller for Basque (`eus`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasqueSpeller;

impl BasqueSpeller {
    /// Create a new Basque speller.
    pub const fn new() -> Self {
        Self
    }
}

impl NumeralSpeller for BasqueSpeller {
    fn language(&self) -> Language {
        Language::Basque
    }

    fn limit(&self) -> u64 {
        LIMIT
    }

    fn spell(&self, n: u64) -> Result<String, SpellError> {
        if n >= LIMIT {
            return Err(out_of_range(n));
        }
        spell_number(n)
    }
}

fn out_of_range(n: u64) -> SpellError {
    SpellError::OutOfRange {
        value: i64::try_from(n).unwrap_or(i64::MAX),
        limit: LIMIT,
    }
}

/// Bounds-checked table access. `n` is the number being spelled and is
/// only used for the error.
fn lookup(table: &[&'static str], index: u64, n: u64) -> Result<&'static str, SpellError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i))
        .copied()
        .ok_or_else(|| out_of_range(n))
}

fn spell_number(n: u64) -> Result<String, SpellError> {
    if n < 1000 {
        below_thousand(n)
    } else {
        thousands(n)
    }
}

/// Spell 0..100. Numbers below 20 fall straight through to UNITS.
fn below_hundred(n: u64) -> Result<String, SpellError> {
    if n < 20 {
        return lookup(&UNITS, n, n).map(str::to_string);
    }

    let twenties = lookup(&TWENTIES, n / 20 - 1, n)?;
    let rest = n % 20;
    if rest == 0 {
        Ok(twenties.to_string())
    } else {
        let units = lookup(&UNITS, rest, n)?;
        Ok(format!("{twenties}{TWENTIES_JOINER}{units}"))
    }
}

fn below_thousand(n: u64) -> Result<String, SpellError> {
    if n < 100 {
        return below_hundred(n);
    }

    let hundreds = lookup(&HUNDREDS, n / 100, n)?;
    let rest = n % 100;
    if rest == 0 {
        Ok(hundreds.to_string())
    } else {
        Ok(format!("{hundreds} {CONNECTOR} {}", below_hundred(rest)?))
    }
}

fn thousands(n: u64) -> Result<String, SpellError> {
    let count = n / 1000;
    let rest = n % 1000;

    match count {
        0 => spell_number(rest),
        // Exactly one thousand is the bare "mila", never "bat mila".
        1 => {
            if rest == 0 {
                Ok(THOUSAND.to_string())
            } else {
                Ok(format!("{THOUSAND} {CONNECTOR} {}", spell_number(rest)?))
            }
        }
        _ => {
            let count = spell_number(count)?;
            if rest == 0 {
                Ok(format!("{count} {THOUSAND}"))
            } else if rest < 100 {
                Ok(format!("{count} {THOUSAND} {CONNECTOR} {}", spell_number(rest)?))
            } else {
                // The hundreds band carries its own connector.
                Ok(format!("{count} {THOUSAND} {}", spell_number(rest)?))
            }
        }
    }
}
