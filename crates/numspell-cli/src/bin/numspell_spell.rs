// numspell-spell: Spell out numbers given on the command line or stdin.
//
// Prints the spelled form of each number, one per line. Numbers are taken
// from the arguments, or read from stdin (one per line) when no numbers
// are given.
//
// Usage:
//   numspell-spell [-l LANG] [N...]
//
// Options:
//   -l, --lang CODE   ISO 639-3 language code (default: $NUMSPELL_LANG, then eus)
//   -h, --help        Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lang, numbers) = numspell_cli::parse_lang(&args);

    if numspell_cli::wants_help(&numbers) {
        println!("numspell-spell: Spell out numbers given on the command line or stdin.");
        println!();
        println!("Usage: numspell-spell [-l LANG] [N...]");
        println!();
        println!("Prints one line of words per number. Without N, reads numbers");
        println!("from stdin, one per line.");
        println!();
        println!("Options:");
        println!("  -l, --lang CODE   ISO 639-3 language code (default: $NUMSPELL_LANG, then eus)");
        println!("  -h, --help        Print this help");
        return;
    }

    numspell_cli::init_tracing();

    let handle = numspell_cli::load_handle(&lang).unwrap_or_else(|e| numspell_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut spell = |text: &str| match handle.spell_line(text) {
        Ok(line) => {
            let _ = writeln!(out, "{}", line.words);
        }
        Err(e) => {
            let _ = out.flush();
            numspell_cli::fatal(&format!("{text:?}: {e}"));
        }
    };

    if numbers.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    let _ = out.flush();
                    numspell_cli::fatal(&format!("error reading stdin: {e}"));
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            spell(&line);
        }
    } else {
        for number in &numbers {
            spell(number);
        }
    }

    let _ = out.flush();
}
