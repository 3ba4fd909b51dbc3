//! Context-free bulk conversion of quotation marks.
//!
//! These ignore the surrounding text entirely. Prefer
//! [`tag_quotes`](crate::tag_quotes) unless every quote in the input is
//! known to belong to one script.

use crate::quote::{QuoteKind, QuoteWidth, is_variation_selector};

/// Tag every quote in `text` as fullwidth.
///
/// With `includes_explicit`, quotes that already carry variation selectors
/// are retagged too; otherwise they are left as they are.
#[must_use]
pub fn force_fullwidth(text: &str, includes_explicit: bool) -> String {
    force_width(text, QuoteWidth::Fullwidth, includes_explicit)
}

/// Tag every quote in `text` as halfwidth.
///
/// See [`force_fullwidth`] for `includes_explicit`.
#[must_use]
pub fn force_halfwidth(text: &str, includes_explicit: bool) -> String {
    force_width(text, QuoteWidth::Halfwidth, includes_explicit)
}

/// Tag every quote in `text` with `width`.
#[must_use]
pub fn force_width(text: &str, width: QuoteWidth, includes_explicit: bool) -> String {
    rewrite_quotes(text, Some(width.selector()), includes_explicit)
}

/// Remove the variation selectors following every quote, restoring neutral quotes.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    rewrite_quotes(text, None, true)
}

/// Replace the selector run after each quote with `selector`.
///
/// Operates on codepoints: a quote followed by a run of variation selectors
/// is one match, and matches never overlap.
fn rewrite_quotes(text: &str, selector: Option<char>, includes_explicit: bool) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        out.push(c);
        if QuoteKind::from_char(c).is_none() {
            continue;
        }
        let tagged = chars.peek().is_some_and(|&next| is_variation_selector(next));
        if tagged && !includes_explicit {
            // The existing selectors are copied through unchanged.
            continue;
        }
        while chars.next_if(|&next| is_variation_selector(next)).is_some() {}
        if let Some(selector) = selector {
            out.push(selector);
        }
    }

    out
}
