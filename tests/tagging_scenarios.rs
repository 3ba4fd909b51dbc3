//! End-to-end tagging scenarios.
//!
//! Output is rendered with visible markers so snapshots stay readable:
//! `[F]` for VS2 (fullwidth) and `[H]` for VS1 (halfwidth).

use svs_quotes::{
    QuoteForm, QuoteKind, TagOptions, force_fullwidth, force_halfwidth, scan_quotes, strip_tags,
    tag_quotes, tag_quotes_with,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn annotate(text: &str) -> String {
    text.replace('\u{FE01}', "[F]").replace('\u{FE00}', "[H]")
}

fn tag(text: &str) -> String {
    annotate(&tag_quotes(text))
}

// ============================================================================
// Core Scenarios
// ============================================================================

#[test]
fn test_chinese_pair_fullwidth() {
    insta::assert_snapshot!(tag("“你好”"), @"“[F]你好”[F]");
}

#[test]
fn test_english_pair_halfwidth() {
    insta::assert_snapshot!(tag("“hello”"), @"“[H]hello”[H]");
}

#[test]
fn test_korean_orphan_right_quote_halfwidth() {
    insta::assert_snapshot!(tag("안녕”"), @"안녕”[H]");
}

#[test]
fn test_force_fullwidth_ignores_content() {
    insta::assert_snapshot!(annotate(&force_fullwidth("“a”", false)), @"“[F]a”[F]");
}

#[test]
fn test_strip_after_tag_restores_input() {
    assert_eq!(strip_tags(&tag_quotes("“你好”")), "“你好”");
}

// ============================================================================
// Mixed-script Text
// ============================================================================

#[test]
fn test_japanese_sentence() {
    insta::assert_snapshot!(tag("彼は“はい”と言った。"), @"彼は“[F]はい”[F]と言った。");
}

#[test]
fn test_korean_pair() {
    insta::assert_snapshot!(tag("그는 “네”라고 말했다."), @"그는 “[H]네”[H]라고 말했다.");
}

#[test]
fn test_latin_inside_chinese_sentence() {
    insta::assert_snapshot!(
        tag("他说“OK”，然后‘离开’了。"),
        @"他说“[H]OK”[H]，然后‘[F]离开’[F]了。"
    );
}

#[test]
fn test_mixed_run_takes_nearest_decisive_end() {
    // Starts Latin, ends Han: the backward scan wins.
    insta::assert_snapshot!(tag("“iPhone手机”"), @"“[F]iPhone手机”[F]");
    // Starts Han, ends Latin: the forward scan short-circuits.
    insta::assert_snapshot!(tag("“手机iPhone”"), @"“[F]手机iPhone”[F]");
}

#[test]
fn test_ambiguous_edges_are_skipped() {
    insta::assert_snapshot!(tag("“…你…”"), @"“[F]…你…”[F]");
    insta::assert_snapshot!(tag("“…”"), @"“[H]…”[H]");
}

#[test]
fn test_ambiguous_letters_are_skipped() {
    insta::assert_snapshot!(tag("“Ж你a”"), @"“[F]Ж你a”[F]");
    insta::assert_snapshot!(tag("你é”"), @"你é”[F]");
    insta::assert_snapshot!(tag("“é你"), @"“[F]é你");
    insta::assert_snapshot!(tag("“Ж”"), @"“[H]Ж”[H]");
}

#[test]
fn test_nested_quotes() {
    insta::assert_snapshot!(tag("“他说‘好’”"), @"“[F]他说‘[F]好’[F]”[F]");
    insta::assert_snapshot!(tag("“she said ‘yes’”"), @"“[H]she said ‘[H]yes’[H]”[H]");
}

#[test]
fn test_unbalanced_input() {
    insta::assert_snapshot!(tag("“你好"), @"“[F]你好");
    insta::assert_snapshot!(tag("hello”"), @"hello”[H]");
    insta::assert_snapshot!(tag("”“"), @"”[H]“[H]");
}

#[test]
fn test_leftover_left_quotes_innermost_first() {
    // The inner quote looks at "你" first; the outer one then sees the
    // inner quote's fullwidth tag before any other decisive character.
    insta::assert_snapshot!(tag("“…‘你"), @"“[F]…‘[F]你");
}

// ============================================================================
// Existing Tags
// ============================================================================

#[test]
fn test_explicit_tags_override_context() {
    let input = "“\u{FE00}你好”\u{FE00}";
    assert_eq!(tag_quotes(input), input);
}

#[test]
fn test_overwrite_recomputes_explicit_tags() {
    let options = TagOptions {
        overwrite_explicit: true,
    };
    let out = tag_quotes_with("“\u{FE00}你好”\u{FE00}", &options);
    insta::assert_snapshot!(annotate(&out), @"“[F]你好”[F]");
}

#[test]
fn test_force_halfwidth_respects_existing_tags() {
    let out = force_halfwidth("“\u{FE01}你”", false);
    insta::assert_snapshot!(annotate(&out), @"“[F]你”[H]");
    let out = force_halfwidth("“\u{FE01}你”", true);
    insta::assert_snapshot!(annotate(&out), @"“[H]你”[H]");
}

// ============================================================================
// Inspection
// ============================================================================

#[test]
fn test_scan_reports_pair_symmetry() {
    let found = scan_quotes(&tag_quotes("前“中文”后“English”"));
    let forms: Vec<_> = found.iter().map(|q| (q.kind, q.form)).collect();
    assert_eq!(
        forms,
        vec![
            (QuoteKind::LeftDouble, QuoteForm::Fullwidth),
            (QuoteKind::RightDouble, QuoteForm::Fullwidth),
            (QuoteKind::LeftDouble, QuoteForm::Halfwidth),
            (QuoteKind::RightDouble, QuoteForm::Halfwidth),
        ]
    );
    assert_eq!(found[0].index, 1);
    assert_eq!(found[1].index, 4);
}
