//! The five modern Japanese eras and their Gregorian boundary dates.

use std::fmt;

/// A named imperial reign period, used as a calendar epoch.
///
/// Ordered chronologically: `Era::Meiji < Era::Reiwa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Era {
    Meiji,
    Taisho,
    Showa,
    Heisei,
    Reiwa,
}

/// One row of the era table: when an era begins and how it is written.
#[derive(Debug, Clone, Copy)]
pub struct EraBoundary {
    pub era: Era,
    /// First Gregorian (year, month, day) on which the era is in effect.
    pub start: (u16, u8, u8),
    /// Characters that mark this era in input, half- and full-width.
    pub aliases: &'static str,
    /// Single Latin letter used in era-relative numeric output.
    pub initial: char,
    /// Era name used in long-form output.
    pub kanji: &'static str,
    /// Gregorian year minus era-relative year.
    pub offset: u16,
}

/// Era boundaries in chronological order.
///
/// Starts strictly increase and partition the timeline; lookup treats the
/// first entry as unbounded below. `offset` is always the start year minus
/// one, so era year 1 lands on the start year in both directions.
pub const ERAS: [EraBoundary; 5] = [
    EraBoundary {
        era: Era::Meiji,
        start: (1868, 1, 25),
        aliases: "明MmＭｍ",
        initial: 'M',
        kanji: "明治",
        offset: 1867,
    },
    EraBoundary {
        era: Era::Taisho,
        start: (1912, 7, 30),
        aliases: "大TtＴｔ",
        initial: 'T',
        kanji: "大正",
        offset: 1911,
    },
    EraBoundary {
        era: Era::Showa,
        start: (1926, 12, 25),
        aliases: "昭SsＳｓ",
        initial: 'S',
        kanji: "昭和",
        offset: 1925,
    },
    EraBoundary {
        era: Era::Heisei,
        start: (1989, 1, 8),
        aliases: "平HhＨｈ",
        initial: 'H',
        kanji: "平成",
        offset: 1988,
    },
    EraBoundary {
        era: Era::Reiwa,
        start: (2019, 5, 1),
        aliases: "令RrＲｒ",
        initial: 'R',
        kanji: "令和",
        offset: 2018,
    },
];

impl Era {
    #[inline]
    fn boundary(self) -> &'static EraBoundary {
        // enum discriminants mirror the table order
        &ERAS[self as usize]
    }

    /// First Gregorian (year, month, day) of the era.
    pub fn start(self) -> (u16, u8, u8) {
        self.boundary().start
    }

    /// Offset between the Gregorian year and the era-relative year.
    pub fn offset(self) -> u16 {
        self.boundary().offset
    }

    /// Single Latin letter for era-relative numeric output ("R5.3.1").
    pub fn initial(self) -> char {
        self.boundary().initial
    }

    /// Era name for long-form output ("令和5年…").
    pub fn kanji(self) -> &'static str {
        self.boundary().kanji
    }

    /// Detects an era marker in `raw`, checking eras oldest first; the first
    /// era with any alias character present anywhere in the string wins.
    ///
    /// This is a presence test, not an anchored match, so a stray alias
    /// letter elsewhere in the input selects that era. Callers passing
    /// free-form text should keep era letters out of the surrounding noise.
    pub fn detect(raw: &str) -> Option<Era> {
        ERAS.iter()
            .find(|b| raw.chars().any(|c| b.aliases.contains(c)))
            .map(|b| b.era)
    }

    /// Era in effect on a Gregorian date: the latest boundary whose start is
    /// not after it. Dates before the table fall back to Meiji.
    pub fn for_date(year: u16, month: u8, day: u8) -> Era {
        let date = (year, month, day);
        let mut current = &ERAS[0];
        for boundary in &ERAS {
            if boundary.start <= date {
                current = boundary;
            }
        }
        current.era
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kanji())
    }
}
