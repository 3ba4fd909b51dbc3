//! Unicode utilities: grapheme segmentation and East Asian Width.

mod grapheme;
mod tables;
mod width;

pub use grapheme::{GraphemeIterator, grapheme_count, graphemes, segment};
pub use width::{EastAsianWidth, east_asian_width, is_hangul};
