//! Command-line surface: argument definitions and the run pipeline.

use clap::Parser;

use crate::convert::{FormatStyle, convert};
use crate::{ParseError, ParsedDate};

/// Convert a date between the Gregorian calendar and the Japanese era
/// calendar.
///
/// The direction is chosen from the input itself: a date carrying an era
/// marker converts to Gregorian, a plain Gregorian date converts to
/// era-relative form.
#[derive(Parser, Debug)]
#[command(name = "wareki", version, about)]
pub struct Cli {
    /// The date string to convert. Era markers, full-width characters and
    /// 元 (inaugural year) are recognized:
    ///
    ///   "2023/3/1", "R5.3.1", "令和元年5月1日", "Ｈ１０年４月２５日"
    #[arg(verbatim_doc_comment)]
    pub date: String,

    /// Long-form output with kanji unit suffixes (2023年3月1日, 令和元年5月1日)
    #[arg(short, long)]
    pub kanji: bool,

    /// Numeric output (2023/3/1, R5.3.1); this is the default
    #[arg(short, long)]
    pub numeric: bool,
}

/// Errors surfaced by the CLI on top of extraction failures.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Both style flags set; the styles are mutually exclusive.
    #[error("--kanji and --numeric are mutually exclusive")]
    ConflictingStyles,

    /// The date string did not extract.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Runs one conversion: picks the style, extracts, converts.
///
/// # Errors
/// Returns `CliError::ConflictingStyles` when both style flags are set, or
/// the extraction error for an unusable date string.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    if cli.kanji && cli.numeric {
        return Err(CliError::ConflictingStyles);
    }
    let style = if cli.kanji {
        FormatStyle::Kanji
    } else {
        FormatStyle::Numeric
    };
    let date: ParsedDate = cli.date.parse()?;
    Ok(convert(&date, style))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_default_style_is_numeric() {
        let cli = parse_args(&["wareki", "2023/3/1"]);
        assert_eq!(run(&cli).unwrap(), "R5.3.1");
    }

    #[test]
    fn test_kanji_flag() {
        let cli = parse_args(&["wareki", "-k", "2019/5/1"]);
        assert_eq!(run(&cli).unwrap(), "令和元年5月1日");

        let cli = parse_args(&["wareki", "--kanji", "R5.3.1"]);
        assert_eq!(run(&cli).unwrap(), "2023年3月1日");
    }

    #[test]
    fn test_explicit_numeric_flag() {
        let cli = parse_args(&["wareki", "--numeric", "令和元年5月1日"]);
        assert_eq!(run(&cli).unwrap(), "2019/5/1");
    }

    #[test]
    fn test_conflicting_styles() {
        let cli = parse_args(&["wareki", "-k", "-n", "2023/3/1"]);
        assert!(matches!(run(&cli), Err(CliError::ConflictingStyles)));
    }

    #[test]
    fn test_extraction_error_propagates() {
        let cli = parse_args(&["wareki", "2023年"]);
        assert!(matches!(
            run(&cli),
            Err(CliError::Parse(ParseError::TokenCount(1)))
        ));
    }

    #[test]
    fn test_positional_argument_count() {
        assert!(Cli::try_parse_from(["wareki"]).is_err());
        assert!(Cli::try_parse_from(["wareki", "2023/3/1", "extra"]).is_err());
    }
}
