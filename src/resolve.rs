//! Directional width resolution over a run of graphemes.
//!
//! A quote takes the width of the nearest decisive character it touches:
//! look at the first (or last) grapheme, move inward past ambiguous ones, and
//! fall back to halfwidth when nothing in the run decides.

use std::fmt;
use std::str::FromStr;

use crate::classify::{WidthVerdict, classify};
use crate::error::{Error, Result};
use crate::unicode::segment;

/// Which end(s) of a run to scan from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    /// Forward from the first grapheme.
    Start,
    /// Backward from the last grapheme.
    End,
    /// Forward first, then backward down to where the forward scan stopped.
    #[default]
    Both,
}

impl Side {
    #[must_use]
    pub const fn includes_start(self) -> bool {
        matches!(self, Self::Start | Self::Both)
    }

    #[must_use]
    pub const fn includes_end(self) -> bool {
        matches!(self, Self::End | Self::Both)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Both => "both",
        })
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            "both" => Ok(Self::Both),
            _ => Err(Error::InvalidSide(s.to_string())),
        }
    }
}

/// Whether `text` should be enclosed in fullwidth quotation marks.
#[must_use]
pub fn should_fullwidth(text: &str) -> bool {
    should_fullwidth_with_side(text, Side::Both)
}

/// [`should_fullwidth`] restricted to one end of `text`.
#[must_use]
pub fn should_fullwidth_with_side(text: &str, side: Side) -> bool {
    resolve_run(&segment(text), side)
}

/// Resolve a segmented run to "should be fullwidth".
///
/// The backward scan never revisits the grapheme the forward scan stopped
/// on, and an exhausted forward scan leaves nothing for the backward one.
#[must_use]
pub fn resolve_run<S: AsRef<str>>(run: &[S], side: Side) -> bool {
    let mut verdict = WidthVerdict::Ambiguous;
    let mut lower = 0;

    if side.includes_start() {
        lower = run.len();
        if let Some((index, found)) = run
            .iter()
            .map(|g| classify(g.as_ref()))
            .enumerate()
            .find(|(_, v)| v.is_decisive())
        {
            verdict = found;
            lower = index + 1;
        }
        if verdict == WidthVerdict::Fullwidth {
            return true;
        }
    }

    if side.includes_end() {
        if let Some(found) = run[lower..]
            .iter()
            .rev()
            .map(|g| classify(g.as_ref()))
            .find(|v| v.is_decisive())
        {
            verdict = found;
        }
    }

    verdict == WidthVerdict::Fullwidth
}

#[cfg(test)]
mod tests {
    use super::*;

    const AMBIGUOUS: &str = "\u{2460}"; // ①
    const HAN: &str = "\u{4F60}"; // 你

    #[test]
    fn test_empty_run_is_halfwidth() {
        let run: [&str; 0] = [];
        assert!(!resolve_run(&run, Side::Both));
        assert!(!resolve_run(&run, Side::Start));
        assert!(!resolve_run(&run, Side::End));
        assert!(!should_fullwidth(""));
    }

    #[test]
    fn test_all_ambiguous_is_halfwidth() {
        let run = [AMBIGUOUS, "\u{2026}", "\u{03B1}"];
        for side in [Side::Start, Side::End, Side::Both] {
            assert!(!resolve_run(&run, side), "{side}");
        }
    }

    #[test]
    fn test_single_grapheme() {
        assert!(resolve_run(&[HAN], Side::Both));
        assert!(resolve_run(&[HAN], Side::Start));
        assert!(resolve_run(&[HAN], Side::End));
        assert!(!resolve_run(&["a"], Side::Both));
    }

    #[test]
    fn test_two_graphemes() {
        // Forward scan stops on "a"; backward scan still sees the Han.
        assert!(resolve_run(&["a", HAN], Side::Both));
        // Forward scan short-circuits.
        assert!(resolve_run(&[HAN, "a"], Side::Both));
        // Forward scan stops on the last grapheme; nothing left for backward.
        assert!(!resolve_run(&[AMBIGUOUS, "a"], Side::Both));
        assert!(!resolve_run(&["a", "b"], Side::Both));
    }

    #[test]
    fn test_moves_inward_past_ambiguous() {
        assert!(should_fullwidth("\u{2460}\u{2026}\u{4F60}abc"));
        assert!(should_fullwidth("abc\u{4F60}\u{2026}"));
        assert!(!should_fullwidth("\u{2026}abc\u{2026}"));
    }

    #[test]
    fn test_accented_and_greek_letters_are_skipped() {
        // é, Ж and α are ambiguous, so the scans look past them.
        assert!(should_fullwidth_with_side("\u{4F60}\u{00E9}", Side::End));
        assert!(should_fullwidth_with_side("\u{00E9}\u{4F60}", Side::Start));
        assert!(should_fullwidth("\u{0416}\u{4F60}a"));
        assert!(!should_fullwidth("\u{03B1}\u{0416}\u{00E9}"));
    }

    #[test]
    fn test_only_ends_are_consulted() {
        // Han in the middle is never reached.
        assert!(!should_fullwidth("a\u{4F60}b"));
    }

    #[test]
    fn test_side_restriction() {
        let text = "abc\u{4F60}";
        assert!(!should_fullwidth_with_side(text, Side::Start));
        assert!(should_fullwidth_with_side(text, Side::End));

        let text = "\u{4F60}abc";
        assert!(should_fullwidth_with_side(text, Side::Start));
        assert!(!should_fullwidth_with_side(text, Side::End));
    }

    #[test]
    fn test_end_only_scans_whole_run() {
        assert!(should_fullwidth_with_side("\u{4F60}\u{2026}\u{2026}", Side::End));
    }

    #[test]
    fn test_explicit_quote_decides() {
        assert!(should_fullwidth("\u{201C}\u{FE01}abc"));
        assert!(!should_fullwidth("\u{201C}\u{FE00}\u{4F60}a"));
        assert!(should_fullwidth("\u{201C}\u{4F60}"));
    }

    #[test]
    fn test_hangul_decides_halfwidth() {
        assert!(!should_fullwidth("\u{C548}\u{B155}")); // 안녕
    }

    #[test]
    fn test_side_parse() {
        assert_eq!("start".parse::<Side>(), Ok(Side::Start));
        assert_eq!("END".parse::<Side>(), Ok(Side::End));
        assert_eq!(Side::default(), Side::Both);
        assert!(matches!("middle".parse::<Side>(), Err(Error::InvalidSide(_))));
    }
}
