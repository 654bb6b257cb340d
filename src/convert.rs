//! Formatting of converted dates, in both directions.

use crate::ParsedDate;
use crate::consts::{ERA_SEPARATOR, GREGORIAN_SEPARATOR};
use crate::era::Era;

/// Output style, orthogonal to the conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatStyle {
    /// "2023/3/1" or "R5.3.1"
    #[default]
    Numeric,
    /// "2023年3月1日" or "令和5年3月1日" (元年 for year 1)
    Kanji,
}

/// Converts an extracted date to the other calendar and formats it.
///
/// A date carrying an era marker converts to Gregorian; a plain Gregorian
/// date converts to era-relative form. Extraction validated every component,
/// so conversion cannot fail.
///
/// Relative year 1 renders as 元年 only in the kanji style; the numeric
/// style always prints the literal integer.
pub fn convert(date: &ParsedDate, style: FormatStyle) -> String {
    let (month, day) = (date.month(), date.day());
    match date.era() {
        Some(_) => {
            let year = date.gregorian_year();
            match style {
                FormatStyle::Numeric => {
                    format!("{year}{sep}{month}{sep}{day}", sep = GREGORIAN_SEPARATOR)
                }
                FormatStyle::Kanji => format!("{year}年{month}月{day}日"),
            }
        }
        None => {
            let era = Era::for_date(date.year(), month, day);
            let relative = date.year() - era.offset();
            match style {
                FormatStyle::Numeric => format!(
                    "{initial}{relative}{sep}{month}{sep}{day}",
                    initial = era.initial(),
                    sep = ERA_SEPARATOR
                ),
                FormatStyle::Kanji if relative == 1 => format!("{era}元年{month}月{day}日"),
                FormatStyle::Kanji => format!("{era}{relative}年{month}月{day}日"),
            }
        }
    }
}
