//! Basque language module for numspell.
//!
//! Spells non-negative integers below one million as Basque words and
//! converts line-oriented digit input into `digits = words` output.
//!
//! # Architecture
//!
//! - [`basque`] -- Irregular word tables and connector words
//! - [`speller`] -- The `NumeralSpeller` trait and the Basque speller
//! - [`convert`] -- Line parsing and the input-to-output conversion loop
//! - [`handle`] -- `NumspellHandle`, the single entry point used by the
//!   CLI, FFI and WASM crates

pub mod basque;

#[cfg(feature = "spell")]
pub mod speller;

#[cfg(feature = "convert")]
pub mod convert;

#[cfg(feature = "handle")]
pub mod handle;
