//! Quotation marks and their variation-sequence tags.
//!
//! The four neutral quotes (U+201C, U+201D, U+2018, U+2019) have East Asian
//! Width `A`, so their rendered width depends on the font. Unicode registers
//! two standardized variation sequences for each of them:
//!
//! | Sequence         | Form      |
//! |------------------|-----------|
//! | quote + U+FE00   | halfwidth |
//! | quote + U+FE01   | fullwidth |

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::unicode::graphemes;

/// VS1, selects the halfwidth form of a quote.
pub const HALFWIDTH_VS: char = '\u{FE00}';
/// VS2, selects the fullwidth form of a quote.
pub const FULLWIDTH_VS: char = '\u{FE01}';

/// Check if a codepoint is a variation selector.
///
/// Covers the Mongolian free variation selectors, VS1-VS16 and the
/// supplementary VS17-VS256.
#[must_use]
pub fn is_variation_selector(c: char) -> bool {
    matches!(c as u32,
        0x180B..=0x180D |
        0xFE00..=0xFE0F |
        0xE0100..=0xE01EF
    )
}

/// Which quotation mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuoteKind {
    /// U+201C “
    LeftDouble,
    /// U+201D ”
    RightDouble,
    /// U+2018 ‘
    LeftSingle,
    /// U+2019 ’
    RightSingle,
}

impl QuoteKind {
    pub const ALL: [Self; 4] = [
        Self::LeftDouble,
        Self::RightDouble,
        Self::LeftSingle,
        Self::RightSingle,
    ];

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '\u{201C}' => Some(Self::LeftDouble),
            '\u{201D}' => Some(Self::RightDouble),
            '\u{2018}' => Some(Self::LeftSingle),
            '\u{2019}' => Some(Self::RightSingle),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::LeftDouble => '\u{201C}',
            Self::RightDouble => '\u{201D}',
            Self::LeftSingle => '\u{2018}',
            Self::RightSingle => '\u{2019}',
        }
    }

    /// Opening quote.
    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::LeftDouble | Self::LeftSingle)
    }

    /// Closing quote.
    #[must_use]
    pub const fn is_right(self) -> bool {
        !self.is_left()
    }

    /// The explicit variation sequence for this quote at `width`.
    #[must_use]
    pub const fn tagged(self, width: QuoteWidth) -> &'static str {
        match (self, width) {
            (Self::LeftDouble, QuoteWidth::Fullwidth) => "\u{201C}\u{FE01}",
            (Self::RightDouble, QuoteWidth::Fullwidth) => "\u{201D}\u{FE01}",
            (Self::LeftSingle, QuoteWidth::Fullwidth) => "\u{2018}\u{FE01}",
            (Self::RightSingle, QuoteWidth::Fullwidth) => "\u{2019}\u{FE01}",
            (Self::LeftDouble, QuoteWidth::Halfwidth) => "\u{201C}\u{FE00}",
            (Self::RightDouble, QuoteWidth::Halfwidth) => "\u{201D}\u{FE00}",
            (Self::LeftSingle, QuoteWidth::Halfwidth) => "\u{2018}\u{FE00}",
            (Self::RightSingle, QuoteWidth::Halfwidth) => "\u{2019}\u{FE00}",
        }
    }
}

/// Target width of a tagged quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuoteWidth {
    Fullwidth,
    Halfwidth,
}

impl QuoteWidth {
    pub const ALL: [Self; 2] = [Self::Fullwidth, Self::Halfwidth];

    /// Map a resolver verdict to a width.
    #[must_use]
    pub const fn from_fullwidth(fullwidth: bool) -> Self {
        if fullwidth {
            Self::Fullwidth
        } else {
            Self::Halfwidth
        }
    }

    /// The variation selector that requests this width.
    #[must_use]
    pub const fn selector(self) -> char {
        match self {
            Self::Fullwidth => FULLWIDTH_VS,
            Self::Halfwidth => HALFWIDTH_VS,
        }
    }

    #[must_use]
    pub const fn is_fullwidth(self) -> bool {
        matches!(self, Self::Fullwidth)
    }
}

impl fmt::Display for QuoteWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fullwidth => "fullwidth",
            Self::Halfwidth => "halfwidth",
        })
    }
}

impl FromStr for QuoteWidth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fullwidth" | "full" => Ok(Self::Fullwidth),
            "halfwidth" | "half" => Ok(Self::Halfwidth),
            _ => Err(Error::InvalidWidth(s.to_string())),
        }
    }
}

/// Current surface form of a quote grapheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuoteForm {
    /// Bare quote, width left to the font.
    Neutral,
    /// Quote + VS2.
    Fullwidth,
    /// Quote + VS1.
    Halfwidth,
    /// Quote followed by something other than a single VS1/VS2.
    Other,
}

/// A grapheme whose base character is a quotation mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuoteGrapheme<'a> {
    pub kind: QuoteKind,
    /// Everything in the cluster after the base quote.
    pub tail: &'a str,
}

impl QuoteGrapheme<'_> {
    /// Whether anything is attached to the base quote.
    #[must_use]
    pub fn is_tagged(&self) -> bool {
        !self.tail.is_empty()
    }

    #[must_use]
    pub fn form(&self) -> QuoteForm {
        let mut chars = self.tail.chars();
        match (chars.next(), chars.next()) {
            (None, _) => QuoteForm::Neutral,
            (Some(FULLWIDTH_VS), None) => QuoteForm::Fullwidth,
            (Some(HALFWIDTH_VS), None) => QuoteForm::Halfwidth,
            _ => QuoteForm::Other,
        }
    }
}

/// Parse a grapheme whose leading codepoint is a quotation mark.
#[must_use]
pub fn parse_quote(grapheme: &str) -> Option<QuoteGrapheme<'_>> {
    let first = grapheme.chars().next()?;
    let kind = QuoteKind::from_char(first)?;
    Some(QuoteGrapheme {
        kind,
        tail: &grapheme[first.len_utf8()..],
    })
}

/// A quote found by [`scan_quotes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuoteInfo {
    /// Grapheme index within the scanned text.
    pub index: usize,
    pub kind: QuoteKind,
    pub form: QuoteForm,
}

/// Report every quote grapheme in `text` with its current form.
#[must_use]
pub fn scan_quotes(text: &str) -> Vec<QuoteInfo> {
    graphemes(text)
        .enumerate()
        .filter_map(|(index, g)| {
            parse_quote(g).map(|q| QuoteInfo {
                index,
                kind: q.kind,
                form: q.form(),
            })
        })
        .collect()
}
