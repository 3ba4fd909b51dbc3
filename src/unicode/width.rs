//! East Asian Width lookup and the Hangul script test.

use std::cmp::Ordering;

use super::tables::EAST_ASIAN_WIDTH;

/// Unicode East Asian Width property (UAX #11).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EastAsianWidth {
    /// `F`: compatibility fullwidth forms.
    Fullwidth,
    /// `W`: ideographs, kana, wide emoji.
    Wide,
    /// `H`: compatibility halfwidth forms.
    Halfwidth,
    /// `Na`: ASCII and a few narrow symbols.
    Narrow,
    /// `N`: everything outside East Asian typography.
    Neutral,
    /// `A`: width depends on the surrounding context.
    Ambiguous,
}

impl EastAsianWidth {
    /// Whether this width renders across two columns in East Asian text.
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::Fullwidth | Self::Wide)
    }
}

/// Look up the East Asian Width of a codepoint.
///
/// Binary search over the UCD range table; codepoints outside every range
/// are `N`.
#[must_use]
pub fn east_asian_width(c: char) -> EastAsianWidth {
    let cp = c as u32;
    EAST_ASIAN_WIDTH
        .binary_search_by(|&(lo, hi, _)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .map_or(EastAsianWidth::Neutral, |i| EAST_ASIAN_WIDTH[i].2)
}

/// Check if a character belongs to the Hangul script.
#[must_use]
pub fn is_hangul(c: char) -> bool {
    matches!(c as u32,
        0x1100..=0x11FF | // Jamo
        0x302E..=0x302F | // Tone marks
        0x3131..=0x318E | // Compatibility Jamo
        0x3200..=0x321E | // Parenthesized
        0x3260..=0x327E | // Circled
        0xA960..=0xA97C | // Jamo Ext A
        0xAC00..=0xD7A3 | // Syllables
        0xD7B0..=0xD7C6 | // Jamo Ext B
        0xD7CB..=0xD7FB |
        0xFFA0..=0xFFBE | // Halfwidth Jamo
        0xFFC2..=0xFFC7 |
        0xFFCA..=0xFFCF |
        0xFFD2..=0xFFD7 |
        0xFFDA..=0xFFDC
    )
}
