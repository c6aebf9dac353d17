// WASM bindings for numspell.
//
// Provides a `WasmNumspell` class exported via wasm-bindgen that wraps
// the `NumspellHandle` from numspell-eu. Structured results are
// serialized to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const numspell = new WasmNumspell("eus");
//   numspell.spell(345);             // => "hirurehun eta berrogeita bost"
//   numspell.convert("21\n2000\n");  // => "21 = hogeita bat\n2000 = bi mila\n"
//   numspell.lines("21\n");          // => [{ digits: "21", words: "hogeita bat" }]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use numspell_core::numeral::NumberLine;
use numspell_eu::handle::{NumspellError, NumspellHandle};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of one converted line.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsNumberLine {
    digits: String,
    words: String,
}

impl From<NumberLine> for JsNumberLine {
    fn from(line: NumberLine) -> Self {
        Self {
            digits: line.digits,
            words: line.words,
        }
    }
}

fn numspell_error_to_js(e: NumspellError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmNumspell
// ============================================================================

/// Numeral speller for WebAssembly.
#[wasm_bindgen]
pub struct WasmNumspell {
    handle: NumspellHandle,
}

#[wasm_bindgen]
impl WasmNumspell {
    /// Create a new instance for an ISO 639-3 language code (`"eus"`).
    #[wasm_bindgen(constructor)]
    pub fn new(language: &str) -> Result<WasmNumspell, JsError> {
        let handle = NumspellHandle::new(language).map_err(numspell_error_to_js)?;
        Ok(WasmNumspell { handle })
    }

    /// ISO 639-3 code of the language this instance spells in.
    pub fn language(&self) -> String {
        self.handle.language().code().to_string()
    }

    /// Spell a number in words.
    pub fn spell(&self, number: u32) -> Result<String, JsError> {
        self.handle
            .spell(u64::from(number))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Convert text holding one number per line into `number = words` lines.
    pub fn convert(&self, text: &str) -> Result<String, JsError> {
        self.handle.convert_str(text).map_err(numspell_error_to_js)
    }

    /// Convert text into a JavaScript array of `{ digits, words }` objects.
    pub fn lines(&self, text: &str) -> Result<JsValue, JsError> {
        let lines: Vec<JsNumberLine> = self
            .handle
            .lines(text)
            .map_err(numspell_error_to_js)?
            .into_iter()
            .map(JsNumberLine::from)
            .collect();
        serde_wasm_bindgen::to_value(&lines).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Release resources held by this instance.
    pub fn terminate(self) {
        // Drop self, releasing all resources.
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set whether blank lines are skipped instead of failing conversion.
    #[wasm_bindgen(js_name = "setSkipBlankLines")]
    pub fn set_skip_blank_lines(&mut self, value: bool) {
        self.handle.set_skip_blank_lines(value);
    }

    /// Set whether parsed numbers are echoed instead of the digits as written.
    #[wasm_bindgen(js_name = "setNormalizeDigits")]
    pub fn set_normalize_digits(&mut self, value: bool) {
        self.handle.set_normalize_digits(value);
    }
}
