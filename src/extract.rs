//! Tokenizer: pulls year/month/day digit runs and an era marker out of a
//! loosely formatted date string.

use crate::consts::{DATE_FIELDS, FULLWIDTH_GAP, GANNEN, IDEOGRAPHIC_SPACE, SENTINEL};
use crate::era::Era;
use crate::{ParseError, ParsedDate};

/// Folds full-width ASCII to half-width so "２０２３" scans like "2023".
pub(crate) fn fold_width(c: char) -> char {
    match c {
        '！'..='～' => char::from_u32(c as u32 - FULLWIDTH_GAP).unwrap_or(c),
        IDEOGRAPHIC_SPACE => ' ',
        _ => c,
    }
}

/// Collects maximal runs of ASCII digits, in order of appearance.
///
/// A [`GANNEN`] character outside a run opens the token "1"; inside a run it
/// only closes the run. Every other non-digit is a separator.
fn digit_tokens(normalized: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // the sentinel forces the trailing run to flush
    for c in normalized.chars().chain(std::iter::once(SENTINEL)) {
        if c.is_ascii_digit() {
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        } else if c == GANNEN {
            current.push('1');
        }
    }
    tokens
}

/// Extracts a [`ParsedDate`] from a raw input string.
///
/// Era markers are matched against the untouched input (the alias sets carry
/// both widths); digits are scanned after width folding. Exactly three
/// numeric fields must result, in year, month, day order.
pub(crate) fn extract(raw: &str) -> Result<ParsedDate, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let era = Era::detect(trimmed);

    let normalized: String = trimmed.chars().map(fold_width).collect();
    let tokens = digit_tokens(&normalized);
    if tokens.len() != DATE_FIELDS {
        return Err(ParseError::TokenCount(tokens.len()));
    }

    let year = parse_u16(&tokens[0])?;
    let month = parse_u8(&tokens[1])?;
    let day = parse_u8(&tokens[2])?;
    ParsedDate::from_fields(year, month, day, era)
}

fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}
