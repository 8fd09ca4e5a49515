//! Glyph classes

use std::fmt;

/// Number of glyph classes, including [`GlyphClass::Unclassified`].
pub const CLASS_COUNT: usize = 34;

/// A recognised glyph.
///
/// The discriminant is the class index in the classifier's score array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum GlyphClass {
    Unclassified = 0,
    Alef = 1,
    Bet = 2,
    Gimel = 3,
    Dalet = 4,
    He = 5,
    Vav = 6,
    Zayin = 7,
    Het = 8,
    Tet = 9,
    Yod = 10,
    Kaf = 11,
    FinalKaf = 12,
    Lamed = 13,
    Mem = 14,
    FinalMem = 15,
    Nun = 16,
    FinalNun = 17,
    Samekh = 18,
    Ayin = 19,
    Pe = 20,
    FinalPe = 21,
    Tsadi = 22,
    FinalTsadi = 23,
    Qof = 24,
    Resh = 25,
    Shin = 26,
    Tav = 27,
    Dot = 28,
    Comma = 29,
    Geresh = 30,
    Question = 31,
    Exclamation = 32,
    Colon = 33,
}

impl GlyphClass {
    /// Every class in index order.
    pub const ALL: [GlyphClass; CLASS_COUNT] = [
        GlyphClass::Unclassified,
        GlyphClass::Alef,
        GlyphClass::Bet,
        GlyphClass::Gimel,
        GlyphClass::Dalet,
        GlyphClass::He,
        GlyphClass::Vav,
        GlyphClass::Zayin,
        GlyphClass::Het,
        GlyphClass::Tet,
        GlyphClass::Yod,
        GlyphClass::Kaf,
        GlyphClass::FinalKaf,
        GlyphClass::Lamed,
        GlyphClass::Mem,
        GlyphClass::FinalMem,
        GlyphClass::Nun,
        GlyphClass::FinalNun,
        GlyphClass::Samekh,
        GlyphClass::Ayin,
        GlyphClass::Pe,
        GlyphClass::FinalPe,
        GlyphClass::Tsadi,
        GlyphClass::FinalTsadi,
        GlyphClass::Qof,
        GlyphClass::Resh,
        GlyphClass::Shin,
        GlyphClass::Tav,
        GlyphClass::Dot,
        GlyphClass::Comma,
        GlyphClass::Geresh,
        GlyphClass::Question,
        GlyphClass::Exclamation,
        GlyphClass::Colon,
    ];

    /// Position in the score array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The class at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display text: the Hebrew letter or punctuation mark, empty for
    /// [`GlyphClass::Unclassified`].
    pub fn label(self) -> &'static str {
        match self {
            GlyphClass::Unclassified => "",
            GlyphClass::Alef => "\u{5d0}",
            GlyphClass::Bet => "\u{5d1}",
            GlyphClass::Gimel => "\u{5d2}",
            GlyphClass::Dalet => "\u{5d3}",
            GlyphClass::He => "\u{5d4}",
            GlyphClass::Vav => "\u{5d5}",
            GlyphClass::Zayin => "\u{5d6}",
            GlyphClass::Het => "\u{5d7}",
            GlyphClass::Tet => "\u{5d8}",
            GlyphClass::Yod => "\u{5d9}",
            GlyphClass::FinalKaf => "\u{5da}",
            GlyphClass::Kaf => "\u{5db}",
            GlyphClass::Lamed => "\u{5dc}",
            GlyphClass::FinalMem => "\u{5dd}",
            GlyphClass::Mem => "\u{5de}",
            GlyphClass::FinalNun => "\u{5df}",
            GlyphClass::Nun => "\u{5e0}",
            GlyphClass::Samekh => "\u{5e1}",
            GlyphClass::Ayin => "\u{5e2}",
            GlyphClass::FinalPe => "\u{5e3}",
            GlyphClass::Pe => "\u{5e4}",
            GlyphClass::FinalTsadi => "\u{5e5}",
            GlyphClass::Tsadi => "\u{5e6}",
            GlyphClass::Qof => "\u{5e7}",
            GlyphClass::Resh => "\u{5e8}",
            GlyphClass::Shin => "\u{5e9}",
            GlyphClass::Tav => "\u{5ea}",
            GlyphClass::Dot => ".",
            GlyphClass::Comma => ",",
            GlyphClass::Geresh => "'",
            GlyphClass::Question => "?",
            GlyphClass::Exclamation => "!",
            GlyphClass::Colon => ":",
        }
    }

    /// Whether the class is a letter rather than punctuation.
    pub fn is_letter(self) -> bool {
        (1..=27).contains(&self.index())
    }
}

impl fmt::Display for GlyphClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, class) in GlyphClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
            assert_eq!(GlyphClass::from_index(i), Some(*class));
        }
        assert_eq!(GlyphClass::from_index(CLASS_COUNT), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(GlyphClass::Unclassified.label(), "");
        assert_eq!(GlyphClass::Alef.label(), "א");
        assert_eq!(GlyphClass::FinalKaf.label(), "ך");
        assert_eq!(GlyphClass::Tav.to_string(), "ת");
        assert_eq!(GlyphClass::Colon.label(), ":");
        assert!(GlyphClass::Shin.is_letter());
        assert!(!GlyphClass::Dot.is_letter());
        assert!(!GlyphClass::Unclassified.is_letter());
    }
}
