//! Context-aware quote tagging.
//!
//! Quotes are paired like brackets: every right quote closes the most recent
//! open left quote. A pair takes its width from the text it encloses and both
//! members get the same selector. Quotes without a partner look outward
//! instead: an orphan right quote at the text before it, a leftover left
//! quote at the text after it.

use crate::event::{LogLevel, emit_log_with};
use crate::quote::{QuoteKind, QuoteWidth, parse_quote};
use crate::resolve::{Side, resolve_run};
use crate::unicode::segment;

/// Options for [`tag_quotes_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TagOptions {
    /// Recompute quotes that already carry a selector.
    ///
    /// When false (the default) tagged quotes are left as they are, which
    /// makes tagging idempotent.
    pub overwrite_explicit: bool,
}

/// A left quote waiting for its right partner.
#[derive(Clone, Copy, Debug)]
struct PendingQuote {
    index: usize,
    kind: QuoteKind,
}

/// Tag every neutral quote in `text` as fullwidth or halfwidth by context.
///
/// Quotes enclosing Chinese or Japanese become fullwidth; quotes around
/// Korean, Latin and everything else become halfwidth.
#[must_use]
pub fn tag_quotes(text: &str) -> String {
    tag_quotes_with(text, &TagOptions::default())
}

/// [`tag_quotes`] with explicit options.
#[must_use]
pub fn tag_quotes_with(text: &str, options: &TagOptions) -> String {
    let mut sequence = segment(text);
    tag_sequence(&mut sequence, options);
    sequence.concat()
}

/// Tag quotes in an already segmented sequence, in place.
///
/// Only quote graphemes are rewritten; the length never changes.
pub fn tag_sequence(sequence: &mut [&str], options: &TagOptions) {
    let mut stack: Vec<PendingQuote> = Vec::new();

    for index in 0..sequence.len() {
        let Some(quote) = parse_quote(sequence[index]) else {
            continue;
        };
        if quote.kind.is_left() {
            stack.push(PendingQuote {
                index,
                kind: quote.kind,
            });
            continue;
        }

        if let Some(left) = stack.pop() {
            let agreed = !options.overwrite_explicit
                && quote.is_tagged()
                && parse_quote(sequence[left.index]).is_some_and(|l| l.tail == quote.tail);
            if agreed {
                emit_log_with(LogLevel::Debug, || {
                    format!(
                        "quote pair {}..{index} already agrees, kept",
                        left.index
                    )
                });
                continue;
            }

            let width = QuoteWidth::from_fullwidth(resolve_run(
                &sequence[left.index + 1..index],
                Side::Both,
            ));
            sequence[left.index] = left.kind.tagged(width);
            sequence[index] = quote.kind.tagged(width);
        } else {
            if quote.is_tagged() && !options.overwrite_explicit {
                continue;
            }
            let width =
                QuoteWidth::from_fullwidth(resolve_run(&sequence[..index], Side::End));
            emit_log_with(LogLevel::Debug, || {
                format!("orphan right quote at {index} resolved {width} from preceding text")
            });
            sequence[index] = quote.kind.tagged(width);
        }
    }

    // Innermost first, so outer leftovers see the tags just written.
    for left in stack.into_iter().rev() {
        let tagged = parse_quote(sequence[left.index]).is_some_and(|q| q.is_tagged());
        if tagged && !options.overwrite_explicit {
            continue;
        }
        let width =
            QuoteWidth::from_fullwidth(resolve_run(&sequence[left.index + 1..], Side::Start));
        emit_log_with(LogLevel::Debug, || {
            format!(
                "unclosed left quote at {} resolved {width} from following text",
                left.index
            )
        });
        sequence[left.index] = left.kind.tagged(width);
    }
}
