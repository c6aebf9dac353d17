// numspell: Convert a file of numbers into words.
//
// Reads one number per line from INPUT and writes one line per number to
// OUTPUT in the form:
//   345 = hirurehun eta berrogeita bost
//
// Conversion stops at the first line that is not a number in the supported
// range; the lines converted before it are kept in OUTPUT.
//
// Usage:
//   numspell [OPTIONS] LANG INPUT OUTPUT
//
// Options:
//   -s, --skip-blank   Skip blank lines instead of stopping on them
//   -n, --normalize    Write numbers as parsed (007 -> 7)
//   -h, --help         Print help

use tracing::info;

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if numspell_cli::wants_help(&args) {
        println!("numspell: Convert a file of numbers into words.");
        println!();
        println!("Usage: numspell [OPTIONS] LANG INPUT OUTPUT");
        println!();
        println!("  LANG     ISO 639-3 language code (supported: eus)");
        println!("  INPUT    File with one number per line (- for stdin)");
        println!("  OUTPUT   File to write \"number = words\" lines to (- for stdout)");
        println!();
        println!("Options:");
        println!("  -s, --skip-blank   Skip blank lines instead of stopping on them");
        println!("  -n, --normalize    Write numbers as parsed (007 -> 7)");
        println!("  -h, --help         Print this help");
        println!();
        println!("Set NUMSPELL_LOG (e.g. NUMSPELL_LOG=debug) to control logging on stderr.");
        return;
    }

    numspell_cli::init_tracing();

    let skip_blank = numspell_cli::take_flag(&mut args, &["-s", "--skip-blank"]);
    let normalize = numspell_cli::take_flag(&mut args, &["-n", "--normalize"]);

    if let Some(unknown) = args.iter().find(|a| a.starts_with('-') && a.len() > 1) {
        numspell_cli::fatal(&format!("unknown option: {unknown}"));
    }
    let [lang, input_path, output_path] = args.as_slice() else {
        numspell_cli::fatal("expected LANG INPUT OUTPUT (see --help)");
    };

    let mut handle =
        numspell_cli::load_handle(lang).unwrap_or_else(|e| numspell_cli::fatal(&e));
    handle.set_skip_blank_lines(skip_blank);
    handle.set_normalize_digits(normalize);

    let input = numspell_cli::open_input(input_path).unwrap_or_else(|e| numspell_cli::fatal(&e));
    let mut output =
        numspell_cli::create_output(output_path).unwrap_or_else(|e| numspell_cli::fatal(&e));

    match handle.convert(input, &mut output) {
        Ok(stats) => info!(
            input = %input_path,
            output = %output_path,
            converted = stats.converted,
            skipped = stats.skipped,
            "done"
        ),
        Err(e) => numspell_cli::fatal(&e.to_string()),
    }
}
