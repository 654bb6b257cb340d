//! Convert dates between the Gregorian calendar and the Japanese era
//! calendar.
//!
//! A date string is tokenized into year/month/day fields plus an optional
//! era marker, then converted in whichever direction the marker implies:
//!
//! ```
//! use wareki::{FormatStyle, ParsedDate, convert};
//!
//! // era-relative input converts to Gregorian
//! let date: ParsedDate = "令和5年3月1日".parse().unwrap();
//! assert_eq!(convert(&date, FormatStyle::Numeric), "2023/3/1");
//!
//! // plain Gregorian input converts to era-relative form
//! let date: ParsedDate = "1989/1/8".parse().unwrap();
//! assert_eq!(convert(&date, FormatStyle::Kanji), "平成元年1月8日");
//! ```
//!
//! Input is forgiving: full-width digits and Latin letters, kanji unit
//! suffixes, and the inaugural-year marker 元 are all understood.

pub mod cli;
mod consts;
mod convert;
mod era;
mod extract;
mod prelude;
mod types;

pub use consts::*;
pub use convert::{FormatStyle, convert};
pub use era::{ERAS, Era, EraBoundary};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::fmt;
use std::str::FromStr;

/// A date extracted from an input string: year, month, day, and the era
/// marker that was found, if any. `era == None` means the year is Gregorian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedDate {
    year: Year,
    month: Month,
    day: Day,
    era: Option<Era>,
}

/// Why a date string failed to extract.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Expected 3 date fields (year, month, day), found {_0}")]
    TokenCount(usize),
    #[display(fmt = "Invalid number: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Date {_0}-{_1}-{_2} predates the Meiji era")]
    PreMeiji(u16, u8, u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl ParsedDate {
    /// Builds a date from raw extracted fields, validating every component.
    ///
    /// The day is checked against the resolved Gregorian year, so "R2.2.29"
    /// (Reiwa 2 = 2020, a leap year) is valid while "2019/2/29" is not.
    /// Gregorian input earlier than the start of Meiji is rejected; it has
    /// no era-relative form.
    ///
    /// # Errors
    /// Returns the corresponding `ParseError` for any out-of-range field.
    pub fn from_fields(
        year: u16,
        month: u8,
        day: u8,
        era: Option<Era>,
    ) -> Result<Self, ParseError> {
        let year_checked = Year::new(year)?;
        let gregorian = match era {
            Some(e) => {
                let resolved = year + e.offset();
                if resolved > MAX_YEAR {
                    return Err(ParseError::InvalidYear(resolved));
                }
                resolved
            }
            None => year,
        };
        let month_checked = Month::new(month)?;
        let day_checked = Day::new(day, gregorian, month)?;
        if era.is_none() && (year, month, day) < Era::Meiji.start() {
            return Err(ParseError::PreMeiji(year, month, day));
        }
        Ok(Self {
            year: year_checked,
            month: month_checked,
            day: day_checked,
            era,
        })
    }

    /// Year as written: era-relative when a marker was present, Gregorian
    /// otherwise.
    pub fn year(&self) -> u16 {
        self.year.get()
    }

    /// Month component (1..=12)
    pub fn month(&self) -> u8 {
        self.month.get()
    }

    /// Day component
    pub fn day(&self) -> u8 {
        self.day.get()
    }

    /// Era marker found in the input, if any.
    pub fn era(&self) -> Option<Era> {
        self.era
    }

    /// The Gregorian year, resolving the era offset when one was given.
    pub fn gregorian_year(&self) -> u16 {
        match self.era {
            Some(era) => self.year.get() + era.offset(),
            None => self.year.get(),
        }
    }
}

impl FromStr for ParsedDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        extract::extract(s)
    }
}

/// Renders the canonical numeric form of what was parsed ("R5.3.1",
/// "2023/5/1"), so `parse → to_string → parse` is lossless.
impl fmt::Display for ParsedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.era {
            Some(era) => write!(
                f,
                "{}{}{sep}{}{sep}{}",
                era.initial(),
                self.year,
                self.month,
                self.day,
                sep = ERA_SEPARATOR
            ),
            None => write!(
                f,
                "{}{sep}{}{sep}{}",
                self.year,
                self.month,
                self.day,
                sep = GREGORIAN_SEPARATOR
            ),
        }
    }
}

impl serde::Serialize for ParsedDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ParsedDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
