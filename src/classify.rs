//! Per-grapheme width classification.

use crate::quote::{QuoteWidth, parse_quote};
use crate::unicode::{EastAsianWidth, east_asian_width, is_hangul};

/// Width judgment for a single grapheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidthVerdict {
    Fullwidth,
    Halfwidth,
    /// No verdict: the grapheme says nothing about its context.
    Ambiguous,
}

impl WidthVerdict {
    /// `Some(true)` for fullwidth, `Some(false)` for halfwidth, `None` when ambiguous.
    #[must_use]
    pub const fn as_fullwidth(self) -> Option<bool> {
        match self {
            Self::Fullwidth => Some(true),
            Self::Halfwidth => Some(false),
            Self::Ambiguous => None,
        }
    }

    #[must_use]
    pub const fn is_decisive(self) -> bool {
        !matches!(self, Self::Ambiguous)
    }
}

impl From<QuoteWidth> for WidthVerdict {
    fn from(width: QuoteWidth) -> Self {
        match width {
            QuoteWidth::Fullwidth => Self::Fullwidth,
            QuoteWidth::Halfwidth => Self::Halfwidth,
        }
    }
}

/// Classify the display width of one grapheme.
///
/// | Input                         | Verdict   |
/// |-------------------------------|-----------|
/// | quote + VS2                   | Fullwidth |
/// | quote + VS1                   | Halfwidth |
/// | Hangul                        | Halfwidth |
/// | empty string                  | Ambiguous |
/// | East Asian Width F / W        | Fullwidth |
/// | East Asian Width H / Na / N   | Halfwidth |
/// | East Asian Width A            | Ambiguous |
///
/// Hangul is wide, but Korean typesetting uses halfwidth punctuation.
#[must_use]
pub fn classify(grapheme: &str) -> WidthVerdict {
    if let Some(width) = explicit_quote_width(grapheme) {
        return width.into();
    }
    let Some(first) = grapheme.chars().next() else {
        return WidthVerdict::Ambiguous;
    };
    if is_hangul(first) {
        return WidthVerdict::Halfwidth;
    }
    match east_asian_width(first) {
        EastAsianWidth::Fullwidth | EastAsianWidth::Wide => WidthVerdict::Fullwidth,
        EastAsianWidth::Halfwidth | EastAsianWidth::Narrow | EastAsianWidth::Neutral => {
            WidthVerdict::Halfwidth
        }
        EastAsianWidth::Ambiguous => WidthVerdict::Ambiguous,
    }
}

/// Shorthand for `classify(grapheme).as_fullwidth()`.
#[must_use]
pub fn is_fullwidth(grapheme: &str) -> Option<bool> {
    classify(grapheme).as_fullwidth()
}

/// Width requested by an exact explicit quote sequence.
fn explicit_quote_width(grapheme: &str) -> Option<QuoteWidth> {
    let quote = parse_quote(grapheme)?;
    QuoteWidth::ALL
        .into_iter()
        .find(|&width| quote.kind.tagged(width) == grapheme)
}
