//! `svs_quotes` - context-aware widths for CJK quotation marks
//!
//! The quotation marks “ ” ‘ ’ are shared by Chinese, Japanese, Korean and
//! Western text, but Chinese and Japanese set them fullwidth while Korean
//! and Western typography set them halfwidth. Unicode resolves this with
//! standardized variation sequences: a quote followed by U+FE00 asks for the
//! halfwidth glyph, followed by U+FE01 for the fullwidth glyph.
//!
//! [`tag_quotes`] picks the selector for every quote from the characters it
//! encloses or touches:
//!
//! ```
//! use svs_quotes::{strip_tags, tag_quotes};
//!
//! let tagged = tag_quotes("\u{201C}你好\u{201D}");
//! assert_eq!(tagged, "\u{201C}\u{FE01}你好\u{201D}\u{FE01}");
//! assert_eq!(strip_tags(&tagged), "\u{201C}你好\u{201D}");
//!
//! let tagged = tag_quotes("\u{201C}hello\u{201D}");
//! assert_eq!(tagged, "\u{201C}\u{FE00}hello\u{201D}\u{FE00}");
//! ```

#![allow(clippy::module_name_repetitions)] // QuoteKind in quote, etc.
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::needless_range_loop)] // Index loops that mutate the indexed slice
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical

pub mod classify;
pub mod convert;
pub mod error;
pub mod event;
pub mod quote;
pub mod resolve;
pub mod tagger;
pub mod unicode;

pub use classify::{WidthVerdict, classify, is_fullwidth};
pub use convert::{force_fullwidth, force_halfwidth, force_width, strip_tags};
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, log_enabled, set_log_callback};
pub use quote::{
    FULLWIDTH_VS, HALFWIDTH_VS, QuoteForm, QuoteGrapheme, QuoteInfo, QuoteKind, QuoteWidth,
    is_variation_selector, parse_quote, scan_quotes,
};
pub use resolve::{Side, resolve_run, should_fullwidth, should_fullwidth_with_side};
pub use tagger::{TagOptions, tag_quotes, tag_quotes_with, tag_sequence};
pub use unicode::segment;
