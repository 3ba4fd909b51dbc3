//! Grapheme cluster segmentation.

use unicode_segmentation::UnicodeSegmentation;

/// Iterator over extended grapheme clusters in a string.
pub struct GraphemeIterator<'a> {
    inner: unicode_segmentation::Graphemes<'a>,
}

impl<'a> Iterator for GraphemeIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for GraphemeIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// Iterate over grapheme clusters in a string.
///
/// Variation selectors are grapheme extenders, so a quote and the selector
/// that tags it always come out as one cluster.
#[must_use]
pub fn graphemes(s: &str) -> GraphemeIterator<'_> {
    GraphemeIterator {
        inner: s.graphemes(true),
    }
}

/// Segment a string into an ordered sequence of grapheme clusters.
#[must_use]
pub fn segment(s: &str) -> Vec<&str> {
    graphemes(s).collect()
}

/// Number of grapheme clusters in a string.
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    graphemes(s).count()
}
