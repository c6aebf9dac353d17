//! Shared types for numspell.
//!
//! Language modules (`numspell-eu`) and the outer surfaces (CLI, FFI, WASM)
//! all speak in terms of the types defined here.
//!
//! - [`language`] -- Supported target languages and their ISO 639-3 codes
//! - [`numeral`] -- Spelling errors and the `digits = words` output line

pub mod language;
pub mod numeral;
