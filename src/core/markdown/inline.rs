//! Inline span splitting for text lines and table cells.

use chatdoc_ir::InlineSpan;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern");
}

/// Split a line into text, `**bold**` and `$math$` spans in source order.
///
/// A `$` only delimits math when it is not next to another `$` and not
/// escaped. An opener whose next `$` cannot close it is kept as text.
pub fn split_inline(line: &str) -> Vec<InlineSpan> {
    let bytes = line.as_bytes();
    let mut spans = Vec::new();
    let mut last = 0;
    let mut i = 0;
    while i < bytes.len() {
        if is_math_delimiter(bytes, i) {
            // Span content never contains a `$`: the next one closes or nothing does.
            let close = (i + 1..bytes.len())
                .find(|&j| bytes[j] == b'$')
                .filter(|&j| is_math_delimiter(bytes, j));
            if let Some(close) = close {
                let latex = line[i + 1..close].trim();
                if !latex.is_empty() {
                    push_text(&line[last..i], &mut spans);
                    spans.push(InlineSpan::Math(latex.to_string()));
                    last = close + 1;
                    i = close + 1;
                    continue;
                }
            }
        }
        i += 1;
    }
    push_text(&line[last..], &mut spans);
    spans
}

fn is_math_delimiter(bytes: &[u8], i: usize) -> bool {
    if bytes[i] != b'$' {
        return false;
    }
    let before = i.checked_sub(1).map(|p| bytes[p]);
    let after = bytes.get(i + 1).copied();
    !matches!(before, Some(b'$') | Some(b'\\')) && after != Some(b'$')
}

fn push_text(text: &str, spans: &mut Vec<InlineSpan>) {
    let mut last = 0;
    for caps in BOLD.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(InlineSpan::text(&text[last..whole.start()]));
        }
        spans.push(InlineSpan::Strong(inner.as_str().to_string()));
        last = whole.end();
    }
    if last < text.len() {
        spans.push(InlineSpan::text(&text[last..]));
    }
}
