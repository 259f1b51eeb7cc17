//! Character-level diffs rendered with ANSI colors, or with text markers
//! when color is disabled.

use colored::Colorize;
use similar::{ChangeTag, TextDiff};

/// How a span of text differs between the old and new content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Unchanged,
    Added,
    Removed,
}

/// A maximal run of characters sharing one [`SpanKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSpan {
    pub kind: SpanKind,
    pub text: String,
}

impl DiffSpan {
    fn new(kind: SpanKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// Compute a minimal character-level edit script from `old` to `new`.
///
/// Consecutive characters with the same kind are merged into one span.
pub fn char_diff(old: &str, new: &str) -> Vec<DiffSpan> {
    let diff = TextDiff::from_chars(old, new);
    let mut spans: Vec<DiffSpan> = Vec::new();

    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SpanKind::Unchanged,
            ChangeTag::Insert => SpanKind::Added,
            ChangeTag::Delete => SpanKind::Removed,
        };
        match spans.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => spans.push(DiffSpan::new(kind, change.value())),
        }
    }

    spans
}

/// Whether the edit script contains any addition or removal.
pub fn has_changes(spans: &[DiffSpan]) -> bool {
    spans.iter().any(|span| span.kind != SpanKind::Unchanged)
}

/// Render spans with a color per kind: green additions, red removals,
/// grey unchanged text. Each colored span is followed by a reset code.
///
/// When color is off (`NO_COLOR`, or output is not a terminal) additions are
/// wrapped as `{+…+}` and removals as `[-…-]` instead.
pub fn render_spans(spans: &[DiffSpan]) -> String {
    render_spans_with(spans, colored::control::SHOULD_COLORIZE.should_colorize())
}

fn render_spans_with(spans: &[DiffSpan], color: bool) -> String {
    spans
        .iter()
        .map(|span| match (span.kind, color) {
            (SpanKind::Added, true) => span.text.green().to_string(),
            (SpanKind::Removed, true) => span.text.red().to_string(),
            (SpanKind::Unchanged, true) => span.text.bright_black().to_string(),
            (SpanKind::Added, false) => format!("{{+{}+}}", span.text),
            (SpanKind::Removed, false) => format!("[-{}-]", span.text),
            (SpanKind::Unchanged, false) => span.text.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_input_is_one_unchanged_span() {
        let spans = char_diff("hello\nworld\n", "hello\nworld\n");
        assert_eq!(spans, vec![DiffSpan::new(SpanKind::Unchanged, "hello\nworld\n")]);
        assert!(!has_changes(&spans));
    }

    #[test]
    fn test_single_character_edit() {
        let spans = char_diff("cat", "cut");
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0], DiffSpan::new(SpanKind::Unchanged, "c"));
        assert_eq!(spans[3], DiffSpan::new(SpanKind::Unchanged, "t"));
        assert!(spans[1..3].contains(&DiffSpan::new(SpanKind::Removed, "a")));
        assert!(spans[1..3].contains(&DiffSpan::new(SpanKind::Added, "u")));
        assert!(has_changes(&spans));
    }

    #[test]
    fn test_spans_reconstruct_both_sides() {
        let old = "export class User {\n  id!: number;\n}\n";
        let new = "export class Users {\n  id!: number;\n  name!: string;\n}\n";
        let spans = char_diff(old, new);

        let rebuilt_old: String = spans
            .iter()
            .filter(|s| s.kind != SpanKind::Added)
            .map(|s| s.text.as_str())
            .collect();
        let rebuilt_new: String = spans
            .iter()
            .filter(|s| s.kind != SpanKind::Removed)
            .map(|s| s.text.as_str())
            .collect();

        assert_eq!(rebuilt_old, old);
        assert_eq!(rebuilt_new, new);
    }

    #[test]
    fn test_render_spans_colors() {
        colored::control::set_override(true);

        let rendered = render_spans(&char_diff("ab", "ac"));
        assert!(rendered.starts_with("\u{1b}[90ma\u{1b}[0m"));
        assert!(rendered.contains("\u{1b}[31mb\u{1b}[0m"));
        assert!(rendered.contains("\u{1b}[32mc\u{1b}[0m"));
    }

    #[test]
    fn test_render_spans_without_color_uses_text_markers() {
        let spans = char_diff("cat", "cut");
        let rendered = render_spans_with(&spans, false);

        assert!(!rendered.contains('\u{1b}'));
        assert!(rendered.starts_with('c'));
        assert!(rendered.ends_with('t'));
        assert!(rendered.contains("[-a-]"));
        assert!(rendered.contains("{+u+}"));
        assert_eq!(render_spans_with(&char_diff("same", "same"), false), "same");
    }

    #[test]
    fn test_empty_inputs() {
        assert!(char_diff("", "").is_empty());
        assert_eq!(char_diff("", "x"), vec![DiffSpan::new(SpanKind::Added, "x")]);
    }
}
