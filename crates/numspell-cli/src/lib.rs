// numspell-cli: shared utilities for CLI tools.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process;

use numspell_core::language::Language;
use numspell_eu::handle::{NumspellError, NumspellHandle};

/// Environment variable holding the default language code.
pub const LANG_ENV: &str = "NUMSPELL_LANG";

/// Environment variable holding the log filter (`tracing_subscriber::EnvFilter` syntax).
pub const LOG_ENV: &str = "NUMSPELL_LOG";

/// Language used when neither `--lang` nor `NUMSPELL_LANG` is given.
pub const DEFAULT_LANG: &str = "eus";

/// Path argument selecting stdin or stdout instead of a file.
const STDIO_PATH: &str = "-";

/// Install the stderr log subscriber.
///
/// The filter is read from `NUMSPELL_LOG`; without it only warnings and
/// errors are shown so that stdout stays clean for converted output.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Create a NumspellHandle for a language code.
pub fn load_handle(lang: &str) -> Result<NumspellHandle, String> {
    NumspellHandle::new(lang).map_err(|e: NumspellError| {
        let supported: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        format!("{e} (supported: {})", supported.join(", "))
    })
}

/// Open an input path for line reading. `-` reads stdin.
pub fn open_input(path: &str) -> Result<Box<dyn BufRead>, String> {
    if path == STDIO_PATH {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).map_err(|e| format!("failed to open {path}: {e}"))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Create (or truncate) an output path. `-` writes stdout.
pub fn create_output(path: &str) -> Result<Box<dyn Write>, String> {
    if path == STDIO_PATH {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(path).map_err(|e| format!("failed to create {path}: {e}"))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Parse a `--lang=CODE` or `-l CODE` argument from command line args.
///
/// Falls back to `NUMSPELL_LANG`, then to `eus`.
/// Returns `(lang, remaining_args)`.
pub fn parse_lang(args: &[String]) -> (String, Vec<String>) {
    let mut lang = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--lang=") {
            lang = Some(val.to_string());
        } else if arg == "--lang" || arg == "-l" {
            if i + 1 < args.len() {
                lang = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    let lang = lang
        .or_else(|| std::env::var(LANG_ENV).ok())
        .unwrap_or_else(|| DEFAULT_LANG.to_string());
    (lang, remaining)
}

/// Remove a boolean flag from the args, returning whether it was present.
pub fn take_flag(args: &mut Vec<String>, names: &[&str]) -> bool {
    let before = args.len();
    args.retain(|a| !names.contains(&a.as_str()));
    args.len() != before
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
