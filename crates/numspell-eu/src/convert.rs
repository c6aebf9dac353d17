// Line-oriented conversion: digits in, `digits = words` out.
//
// The input holds one number per line. Each line is trimmed, parsed and
// spelled, and one output line is written per input line, in input order.
// Conversion halts at the first line that cannot be parsed or spelled;
// lines before it have already been written.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use numspell_core::numeral::{NumberLine, SpellError};
use tracing::{debug, trace, warn};

use crate::speller::NumeralSpeller;

/// Error type for line conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The line does not hold an integer.
    #[error("line {line}: not an integer: {text:?}")]
    Parse { line: usize, text: String },

    /// The line holds an integer the speller cannot spell.
    #[error("line {line}: {source}")]
    Spell {
        line: usize,
        #[source]
        source: SpellError,
    },

    /// The line holds an integer too large to represent, echoed as written.
    #[error("line {line}: number out of range: {text} (supported: 0..{limit})")]
    Overflow { line: usize, text: String, limit: u64 },

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// The 1-based input line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConvertError::Parse { line, .. }
            | ConvertError::Spell { line, .. }
            | ConvertError::Overflow { line, .. } => Some(*line),
            ConvertError::Io(_) => None,
        }
    }
}

/// Options controlling line conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Skip lines that are empty after trimming instead of failing on them.
    /// Default: false.
    pub skip_blank_lines: bool,

    /// Echo the parsed number (`7`) instead of the digits as written
    /// (`007`, `+7`). Default: false.
    pub normalize_digits: bool,
}

/// Counters reported after a successful conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Lines converted and written.
    pub converted: usize,
    /// Blank lines skipped (only with `skip_blank_lines`).
    pub skipped: usize,
}

/// Parse trimmed line text as a non-negative number.
///
/// Accepts an optional leading `+`. Negative numbers and numbers too large
/// for `i64` are integers, so they fail as out of range (reported against
/// `limit`) rather than as parse errors. Values at or above `limit` are
/// left for the speller to reject.
pub fn parse_number(line: usize, digits: &str, limit: u64) -> Result<u64, ConvertError> {
    match digits.parse::<i64>() {
        Ok(value) => u64::try_from(value).map_err(|_| ConvertError::Spell {
            line,
            source: SpellError::OutOfRange { value, limit },
        }),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(ConvertError::Overflow {
                line,
                text: digits.to_string(),
                limit,
            }),
            _ => Err(ConvertError::Parse {
                line,
                text: digits.to_string(),
            }),
        },
    }
}

/// Convert a single input line.
///
/// `line` is the 1-based line number used in errors. Returns `Ok(None)`
/// for a blank line when `options.skip_blank_lines` is set.
pub fn convert_line<S: NumeralSpeller + ?Sized>(
    speller: &S,
    line: usize,
    text: &str,
    options: ConvertOptions,
) -> Result<Option<NumberLine>, ConvertError> {
    let digits = text.trim();
    if digits.is_empty() && options.skip_blank_lines {
        return Ok(None);
    }

    let value = parse_number(line, digits, speller.limit())?;
    let words = speller
        .spell(value)
        .map_err(|source| ConvertError::Spell { line, source })?;

    let digits = if options.normalize_digits {
        value.to_string()
    } else {
        digits.to_string()
    };
    Ok(Some(NumberLine::new(digits, words)))
}

/// Convert every line of `input`, writing one `digits = words` line per
/// number to `output`.
///
/// A line that is not valid UTF-8 is a parse error for that line. The
/// output is flushed before returning, also when conversion halts on an
/// invalid line.
pub fn convert_lines<S, R, W>(
    speller: &S,
    mut input: R,
    output: &mut W,
    options: ConvertOptions,
) -> Result<ConvertStats, ConvertError>
where
    S: NumeralSpeller + ?Sized,
    R: BufRead,
    W: Write + ?Sized,
{
    let mut stats = ConvertStats::default();

    let result = (|| -> Result<(), ConvertError> {
        let mut buf = Vec::new();
        let mut line = 0;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line += 1;
            let text = std::str::from_utf8(&buf).map_err(|_| ConvertError::Parse {
                line,
                text: String::from_utf8_lossy(&buf).trim().to_string(),
            })?;
            match convert_line(speller, line, text, options)? {
                Some(number) => {
                    trace!(line, digits = %number.digits, words = %number.words, "converted");
                    writeln!(output, "{number}")?;
                    stats.converted += 1;
                }
                None => {
                    trace!(line, "skipped blank line");
                    stats.skipped += 1;
                }
            }
        }
        Ok(())
    })();

    output.flush()?;

    match result {
        Ok(()) => {
            debug!(
                language = %speller.language(),
                converted = stats.converted,
                skipped = stats.skipped,
                "conversion finished"
            );
            Ok(stats)
        }
        Err(e) => {
            warn!(line = ?e.line(), converted = stats.converted, error = %e, "conversion halted");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speller::basque::BasqueSpeller;

    const LIMIT: u64 = 1_000_000;

    fn run(input: &str, options: ConvertOptions) -> (Result<ConvertStats, ConvertError>, String) {
        let mut out = Vec::new();
        let result = convert_lines(&BasqueSpeller::new(), input.as_bytes(), &mut out, options);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_plain_digits() {
        assert_eq!(parse_number(1, "345", LIMIT).unwrap(), 345);
        assert_eq!(parse_number(1, "0", LIMIT).unwrap(), 0);
    }

    #[test]
    fn parse_accepts_leading_plus_and_zeros() {
        assert_eq!(parse_number(1, "+7", LIMIT).unwrap(), 7);
        assert_eq!(parse_number(1, "007", LIMIT).unwrap(), 7);
    }

    #[test]
    fn parse_rejects_non_integers() {
        for text in ["", "abc", "1.5", "1_000", "12a", " 1"] {
            match parse_number(3, text, LIMIT) {
                Err(ConvertError::Parse { line, text: t }) => {
                    assert_eq!(line, 3);
                    assert_eq!(t, text);
                }
                other => panic!("{text:?}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn parse_negative_is_out_of_range() {
        match parse_number(2, "-5", LIMIT) {
            Err(ConvertError::Spell { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source.value(), -5);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parse_overflow_reports_digits_as_written() {
        for text in ["99999999999999999999", "-99999999999999999999"] {
            match parse_number(4, text, LIMIT) {
                Err(ConvertError::Overflow { line, text: t, limit }) => {
                    assert_eq!(line, 4);
                    assert_eq!(t, text);
                    assert_eq!(limit, LIMIT);
                }
                other => panic!("{text:?}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn overflowing_line_message_names_the_input() {
        let (result, _) = run("99999999999999999999\n", ConvertOptions::default());
        assert_eq!(
            result.unwrap_err().to_string(),
            "line 1: number out of range: 99999999999999999999 (supported: 0..1000000)"
        );
    }

    #[test]
    fn invalid_utf8_line_is_a_parse_error_with_line_number() {
        let mut out = Vec::new();
        let input: &[u8] = b"1\n\xff\xfe\n3\n";
        let err = convert_lines(&BasqueSpeller::new(), input, &mut out, ConvertOptions::default())
            .unwrap_err();
        match err {
            ConvertError::Parse { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "\u{FFFD}\u{FFFD}");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(out, b"1 = bat\n");
    }

    #[test]
    fn converts_lines_in_order() {
        let (result, out) = run("0\n19\n21\n100\n345\n2000\n", ConvertOptions::default());
        assert_eq!(
            result.unwrap(),
            ConvertStats {
                converted: 6,
                skipped: 0
            }
        );
        assert_eq!(
            out,
            "0 = zero\n\
             19 = hemeretzi\n\
             21 = hogeita bat\n\
             100 = ehun\n\
             345 = hirurehun eta berrogeita bost\n\
             2000 = bi mila\n"
        );
    }

    #[test]
    fn trims_surrounding_whitespace_and_crlf() {
        let (result, out) = run("  21 \r\n\t5\n", ConvertOptions::default());
        assert!(result.is_ok());
        assert_eq!(out, "21 = hogeita bat\n5 = bost\n");
    }

    #[test]
    fn missing_final_newline_is_fine() {
        let (result, out) = run("1\n2", ConvertOptions::default());
        assert_eq!(result.unwrap().converted, 2);
        assert_eq!(out, "1 = bat\n2 = bi\n");
    }

    #[test]
    fn original_digits_are_echoed_by_default() {
        let (_, out) = run("007\n+3\n", ConvertOptions::default());
        assert_eq!(out, "007 = zazpi\n+3 = hiru\n");
    }

    #[test]
    fn normalize_digits_echoes_parsed_value() {
        let options = ConvertOptions {
            normalize_digits: true,
            ..ConvertOptions::default()
        };
        let (_, out) = run("007\n+3\n", options);
        assert_eq!(out, "7 = zazpi\n3 = hiru\n");
    }

    #[test]
    fn blank_line_halts_by_default() {
        let (result, out) = run("1\n\n2\n", ConvertOptions::default());
        match result {
            Err(ConvertError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(out, "1 = bat\n");
    }

    #[test]
    fn blank_lines_can_be_skipped() {
        let options = ConvertOptions {
            skip_blank_lines: true,
            ..ConvertOptions::default()
        };
        let (result, out) = run("1\n\n   \n2\n", options);
        assert_eq!(
            result.unwrap(),
            ConvertStats {
                converted: 2,
                skipped: 2
            }
        );
        assert_eq!(out, "1 = bat\n2 = bi\n");
    }

    #[test]
    fn halts_on_first_invalid_line() {
        let (result, out) = run("3\nhiru\n4\n", ConvertOptions::default());
        let err = result.unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.to_string(), "line 2: not an integer: \"hiru\"");
        assert_eq!(out, "3 = hiru\n");
    }

    #[test]
    fn halts_on_out_of_range_line() {
        let (result, out) = run("999999\n1000000\n", ConvertOptions::default());
        let err = result.unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert!(matches!(
            err,
            ConvertError::Spell {
                source: SpellError::OutOfRange { value: 1_000_000, .. },
                ..
            }
        ));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn empty_input_converts_nothing() {
        let (result, out) = run("", ConvertOptions::default());
        assert_eq!(result.unwrap(), ConvertStats::default());
        assert!(out.is_empty());
    }

    #[test]
    fn convert_line_skips_blank_only_when_asked() {
        let speller = BasqueSpeller::new();
        let skip = ConvertOptions {
            skip_blank_lines: true,
            ..ConvertOptions::default()
        };
        assert_eq!(convert_line(&speller, 1, "  ", skip).unwrap(), None);
        assert!(convert_line(&speller, 1, "  ", ConvertOptions::default()).is_err());
        assert_eq!(
            convert_line(&speller, 1, "40", ConvertOptions::default()).unwrap(),
            Some(NumberLine::new("40", "berrogei"))
        );
    }
}
