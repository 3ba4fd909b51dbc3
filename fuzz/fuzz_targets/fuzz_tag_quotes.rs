//! Fuzz target for context-aware quote tagging.
//!
//! Tagging must never panic, must be idempotent, and must keep the grapheme
//! count of its input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use svs_quotes::unicode::grapheme_count;
use svs_quotes::{TagOptions, strip_tags, tag_quotes, tag_quotes_with};

fuzz_target!(|data: &str| {
    let once = tag_quotes(data);
    assert_eq!(tag_quotes(&once), once, "tagging is not idempotent");
    assert_eq!(grapheme_count(&once), grapheme_count(data));

    let overwritten = tag_quotes_with(
        data,
        &TagOptions {
            overwrite_explicit: true,
        },
    );
    assert_eq!(grapheme_count(&overwritten), grapheme_count(data));

    let _ = strip_tags(&once);
});
