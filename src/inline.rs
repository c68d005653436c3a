// src/inline.rs
//! Inline text handling: `**bold**` / `*italic*` / `` `code` `` spans,
//! marker stripping for table cells, and ASCII sanitisation for the
//! builtin PDF fonts.

/// Style of a single inline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Regular,
    Bold,
    Italic,
    Code,
}

/// A run of text sharing one inline style.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn regular(text: impl Into<String>) -> Self {
        Span { text: text.into(), style: SpanStyle::Regular }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Span { text: text.into(), style: SpanStyle::Bold }
    }
}

/// Splits a line into styled spans. Markers without a closing partner are
/// kept as literal text.
pub fn parse_spans(text: &str) -> Vec<Span> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '*' && i + 1 < chars.len() && chars[i + 1] == '*' {
            if let Some(end) = find_double_star(&chars, i + 2) {
                flush(&mut literal, &mut spans);
                spans.push(Span {
                    text: chars[i + 2..end].iter().collect(),
                    style: SpanStyle::Bold,
                });
                i = end + 2;
                continue;
            }
        } else if chars[i] == '*' {
            if let Some(end) = find_single(&chars, i + 1, '*') {
                flush(&mut literal, &mut spans);
                spans.push(Span {
                    text: chars[i + 1..end].iter().collect(),
                    style: SpanStyle::Italic,
                });
                i = end + 1;
                continue;
            }
        } else if chars[i] == '`' {
            if let Some(end) = find_single(&chars, i + 1, '`') {
                flush(&mut literal, &mut spans);
                spans.push(Span {
                    text: chars[i + 1..end].iter().collect(),
                    style: SpanStyle::Code,
                });
                i = end + 1;
                continue;
            }
        }
        literal.push(chars[i]);
        i += 1;
    }

    flush(&mut literal, &mut spans);
    spans
}

/// Removes paired inline markers, keeping the enclosed text. Table cells
/// are rendered unformatted.
pub fn strip_markers(text: &str) -> String {
    parse_spans(text).into_iter().map(|s| s.text).collect()
}

/// Replaces Unicode punctuation unsupported by the builtin fonts with
/// ASCII equivalents.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2014}' => out.push_str(" -- "), // em dash
            '\u{2013}' => out.push_str(" - "),  // en dash
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201c}' | '\u{201d}' => out.push('"'),
            '\u{2026}' => out.push_str("..."),
            '\u{2022}' => out.push('-'),
            '\u{00e9}' => out.push('e'),
            _ => out.push(c),
        }
    }
    out
}

fn flush(literal: &mut String, spans: &mut Vec<Span>) {
    if !literal.is_empty() {
        spans.push(Span {
            text: std::mem::take(literal),
            style: SpanStyle::Regular,
        });
    }
}

fn find_double_star(chars: &[char], from: usize) -> Option<usize> {
    if from >= chars.len() {
        return None;
    }
    let mut j = from;
    while j + 1 < chars.len() {
        if chars[j] == '*' && chars[j + 1] == '*' {
            // Require non-empty content.
            return if j > from { Some(j) } else { None };
        }
        j += 1;
    }
    None
}

fn find_single(chars: &[char], from: usize, delim: char) -> Option<usize> {
    let mut j = from;
    while j < chars.len() {
        if chars[j] == delim {
            return if j > from { Some(j) } else { None };
        }
        j += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_regular_span() {
        let spans = parse_spans("just some text");
        assert_eq!(spans, vec![Span::regular("just some text")]);
    }

    #[test]
    fn bold_run_in_the_middle() {
        let spans = parse_spans("a **bold** word");
        assert_eq!(
            spans,
            vec![
                Span::regular("a "),
                Span::bold("bold"),
                Span::regular(" word"),
            ]
        );
    }

    #[test]
    fn italic_and_code_runs() {
        let spans = parse_spans("*it* and `code`");
        assert_eq!(spans[0].style, SpanStyle::Italic);
        assert_eq!(spans[0].text, "it");
        assert_eq!(spans[2].style, SpanStyle::Code);
        assert_eq!(spans[2].text, "code");
    }

    #[test]
    fn unclosed_marker_stays_literal() {
        let spans = parse_spans("2 * 3 = 6");
        assert_eq!(spans, vec![Span::regular("2 * 3 = 6")]);
    }

    #[test]
    fn strip_removes_paired_markers_only() {
        assert_eq!(strip_markers("**Rate** (`req/s`)"), "Rate (req/s)");
        assert_eq!(strip_markers("a * b"), "a * b");
    }

    #[test]
    fn sanitize_maps_typographic_punctuation() {
        assert_eq!(sanitize("yes\u{2014}no"), "yes -- no");
        assert_eq!(sanitize("\u{2018}hi\u{2019} \u{2026}"), "'hi' ...");
        assert_eq!(sanitize("caf\u{00e9}"), "cafe");
    }
}
