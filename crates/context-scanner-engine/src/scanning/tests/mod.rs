//! Integration tests for the scanning module.
//!
//! Snapshots use the line-per-item text form from `snapshot::render` so a
//! reviewer can read kinds, spans and text side by side.

use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::scanning::{
    RunKind, ScanOptions, classify_runs, scan_document, scan_outline,
    snapshot::{check_outline, check_runs, render_outline, render_runs},
};

fn render(text: &str) -> String {
    let rope = Rope::from(text);
    let doc = scan_document(&rope, &ScanOptions::default());
    check_runs(text.len(), &doc.runs);
    check_outline(text.len(), &doc.outline);
    format!(
        "{}---\n{}",
        render_runs(&rope, &doc.runs),
        render_outline(&doc.outline)
    )
}

#[test]
fn snapshot_small_document() {
    let text = "\\starttext\n\\startsection[title={Intro}]\nSome \\em{text}. % note\n\\stopsection\n\\stoptext\n";
    insta::assert_snapshot!(render(text), @r#"
    CommandName 0..10 "\\starttext"
    PlainText 10..11 "\\n"
    CommandName 11..24 "\\startsection"
    OptionText 24..39 "[title={Intro}]"
    PlainText 39..45 "\\nSome "
    CommandName 45..48 "\\em"
    ParameterText 48..54 "{text}"
    PlainText 54..56 ". "
    CommentText 56..63 "% note\\n"
    CommandName 63..75 "\\stopsection"
    PlainText 75..76 "\\n"
    CommandName 76..85 "\\stoptext"
    PlainText 85..86 "\\n"
    ---
    text 0..85 line 1
      section 11..75 line 2
    "#);
}

#[test]
fn snapshot_verbatim_and_commented_stop() {
    let text = "\\startitemize[packed]\n  \\item \\type{\\def\\x{1}} % literal\n  \\item 50\\% done\n% \\stopitemize\n\\stopitemize\n";
    insta::assert_snapshot!(render(text), @r#"
    CommandName 0..13 "\\startitemize"
    OptionText 13..21 "[packed]"
    PlainText 21..24 "\\n  "
    CommandName 24..29 "\\item"
    PlainText 29..30 " "
    CommandName 30..35 "\\type"
    ParameterText 35..36 "{"
    PlainText 36..45 "\\def\\x{1}"
    ParameterText 45..46 "}"
    PlainText 46..47 " "
    CommentText 47..57 "% literal\\n"
    PlainText 57..59 "  "
    CommandName 59..64 "\\item"
    PlainText 64..67 " 50"
    CommandName 67..69 "\\%"
    PlainText 69..75 " done\\n"
    CommentText 75..90 "% \\stopitemize\\n"
    CommandName 90..102 "\\stopitemize"
    PlainText 102..103 "\\n"
    ---
    itemize 0..102 line 1
    "#);
}

// Worked examples

#[test]
fn example_single_block() {
    let text = "\\starttext hello \\stoptext";
    let outline = scan_outline(text);
    assert_eq!(outline.len(), 1);
    assert_eq!(outline[0].name, "text");
    assert_eq!(outline[0].depth, 0);
    assert_eq!((outline[0].start, outline[0].end), (0, text.len()));
}

#[test]
fn example_commented_start() {
    let text = "% \\startitemize";
    assert!(scan_outline(text).is_empty());

    let runs = classify_runs(text);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].kind, RunKind::CommentText);
    assert_eq!(runs[0].len, text.len());
}

#[test]
fn example_command_arguments() {
    let text = "\\command[opt=1]{param}";
    let runs: Vec<_> = classify_runs(text)
        .into_iter()
        .map(|r| (r.kind, &text[r.start..r.end()]))
        .collect();
    assert_eq!(
        runs,
        vec![
            (RunKind::CommandName, "\\command"),
            (RunKind::OptionText, "[opt=1]"),
            (RunKind::ParameterText, "{param}"),
        ]
    );
}

#[test]
fn example_nested_blocks() {
    let text = "\\startsection \\startitemize \\stopitemize \\stopsection";
    let outline = scan_outline(text);
    assert_eq!(outline.len(), 2);

    assert_eq!(outline[0].name, "section");
    assert_eq!(outline[0].depth, 0);
    assert_eq!((outline[0].start, outline[0].end), (0, text.len()));

    assert_eq!(outline[1].name, "itemize");
    assert_eq!(outline[1].depth, 1);
    assert!(outline[0].span().contains(outline[1].span()));
}

#[test]
fn example_unterminated_block() {
    let text = "\\startchapter text with no stop";
    let outline = scan_outline(text);
    assert_eq!(outline.len(), 1);
    assert_eq!(outline[0].name, "chapter");
    assert_eq!(outline[0].depth, 0);
    assert_eq!(outline[0].end, text.len());
}

#[test]
fn scanners_agree_on_percent_in_verbatim() {
    let text = "\\type{50%} \\startsection x \\stopsection";
    let doc = scan_document(&Rope::from(text), &ScanOptions::default());

    assert!(doc.runs.iter().all(|r| r.kind != RunKind::CommentText));
    assert_eq!(doc.outline.len(), 1);
    assert_eq!(doc.outline[0].name, "section");
    let run = doc.runs.iter().find(|r| r.start == doc.outline[0].start);
    assert_eq!(run.map(|r| r.kind), Some(RunKind::CommandName));
}

// Invariants over messy, mid-edit input

#[rstest]
#[case::empty("")]
#[case::lone_backslash("\\")]
#[case::lone_percent("%")]
#[case::unclosed_everything("\\startA[x={\\b{ % c")]
#[case::stray_closers("]]}}\\stopA\\stopB")]
#[case::crossed_blocks("\\startA \\startB \\stopA \\stopB")]
#[case::escape_soup("\\\\\\%\\{\\}%\\\\\n\\[")]
#[case::cr_only_lines("% a\r\\startA\r% \\stopA\r\\stopA")]
#[case::unicode("\\startsection[title=Über] naïve — text \\stopsection")]
fn messy_input_keeps_invariants(#[case] text: &str) {
    let rope = Rope::from(text);
    let doc = scan_document(&rope, &ScanOptions::default());
    check_runs(text.len(), &doc.runs);
    check_outline(text.len(), &doc.outline);

    for r in &doc.runs {
        assert!(text.is_char_boundary(r.start) && text.is_char_boundary(r.end()));
    }
}

#[test]
fn rescanning_is_deterministic() {
    let text = "\\startA[x] \\b{c % d\n} \\type{\\e} \\stopA";
    let rope = Rope::from(text);
    let first = scan_document(&rope, &ScanOptions::default());
    let second = scan_document(&rope, &ScanOptions::default());
    assert_eq!(first, second);
}

#[test]
fn scan_document_matches_str_entry_points() {
    let text = "\\startA \\x{y} \\stopA";
    let doc = scan_document(&Rope::from(text), &ScanOptions::default());
    assert_eq!(doc.runs, classify_runs(text));
    assert_eq!(doc.outline, scan_outline(text));
}
