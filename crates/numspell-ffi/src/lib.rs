// Every exported function takes raw pointers from C callers; the pointer
// requirements are listed in each function's doc comment.
#![allow(clippy::missing_safety_doc)]

// numspell-ffi: C-compatible FFI layer for NumspellHandle.
//
// Memory management rules:
// - Opaque `NumspellHandle` pointer: created by `numspell_new`, freed by `numspell_free`.
// - Returned strings (results and error messages): caller must free with
//   `numspell_free_str`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use numspell_core::language::Language;
use numspell_eu::handle::NumspellHandle;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new handle for an ISO 639-3 language code (`"eus"`).
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `numspell_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numspell_new(
    language: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut NumspellHandle {
    let Some(language) = cstr_to_str(language) else {
        set_error(error_out, "language is null or not UTF-8");
        return ptr::null_mut();
    };

    match NumspellHandle::new(language) {
        Ok(handle) => Box::into_raw(Box::new(handle)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a NumspellHandle created by `numspell_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numspell_free(handle: *mut NumspellHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Spelling ────────────────────────────────────────────────────

/// Spell a number in words.
///
/// Returns a heap-allocated string (free with `numspell_free_str`), or NULL
/// when the number is out of range or `handle` is NULL. On failure the
/// error message is stored in `error_out` if it is non-NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numspell_spell(
    handle: *const NumspellHandle,
    number: u64,
    error_out: *mut *mut c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return ptr::null_mut();
    };
    match handle.spell(number) {
        Ok(words) => str_to_c(&words),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Convert text holding one number per line into `number = words` lines.
///
/// Returns a heap-allocated string (free with `numspell_free_str`), or NULL
/// on the first invalid line. On failure the error message is stored in
/// `error_out` if it is non-NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numspell_convert(
    handle: *const NumspellHandle,
    text: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return ptr::null_mut();
    };
    let Some(text) = cstr_to_str(text) else {
        set_error(error_out, "text is null or not UTF-8");
        return ptr::null_mut();
    };
    match handle.convert_str(text) {
        Ok(out) => str_to_c(&out),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Exclusive upper bound of the numbers the handle can spell.
/// Returns 0 if `handle` is NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numspell_limit(handle: *const NumspellHandle) -> u64 {
    match unsafe { handle.as_ref() } {
        Some(handle) => handle.limit(),
        None => 0,
    }
}

// ── Option setters ──────────────────────────────────────────────

#[unsafe(no_mangle)]
pub unsafe extern "C" fn numspell_set_skip_blank_lines(handle: *mut NumspellHandle, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_skip_blank_lines(value != 0);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn numspell_set_normalize_digits(handle: *mut NumspellHandle, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_normalize_digits(value != 0);
    }
}

// ── Utility functions ───────────────────────────────────────────

/// Return 1 if the language code is supported, 0 otherwise.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numspell_language_supported(language: *const c_char) -> c_int {
    match cstr_to_str(language).and_then(Language::from_code) {
        Some(_) => 1,
        None => 0,
    }
}

/// Free a string returned by this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn numspell_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}
