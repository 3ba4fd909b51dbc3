//! Fuzz target for the bulk converters.
//!
//! Forcing a width and stripping must never panic, and stripping a forced
//! result must match stripping the input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use svs_quotes::{QuoteWidth, force_fullwidth, force_halfwidth, force_width, strip_tags};

#[derive(Arbitrary, Debug)]
struct ConvertInput {
    text: String,
    includes_explicit: bool,
    fullwidth: bool,
}

fuzz_target!(|input: ConvertInput| {
    let text = input.text.as_str();
    let stripped = strip_tags(text);

    assert_eq!(strip_tags(&force_fullwidth(text, input.includes_explicit)), stripped);
    assert_eq!(strip_tags(&force_halfwidth(text, input.includes_explicit)), stripped);
    assert_eq!(strip_tags(&stripped), stripped);

    let width = QuoteWidth::from_fullwidth(input.fullwidth);
    let forced = force_width(text, width, true);
    assert_eq!(force_width(&forced, width, true), forced);
});
