//! Integration tests for message segmentation

use chatdoc::{segment, split_inline, InlineSpan, Segment, TableRow};
use pretty_assertions::assert_eq;

fn kinds(body: &str) -> Vec<&'static str> {
    segment(body)
        .iter()
        .map(|s| match s {
            Segment::CodeBlock { .. } => "code",
            Segment::TableBlock { .. } => "table",
            Segment::BlockFormula { .. } => "formula",
            Segment::Image { .. } => "image",
            Segment::PlainText { .. } => "text",
            Segment::Blank => "blank",
        })
        .collect()
}

#[test]
fn test_three_line_fence() {
    assert_eq!(
        segment("```\nprint(1)\n```"),
        vec![Segment::CodeBlock {
            language: None,
            lines: vec!["print(1)".to_string()],
        }]
    );
}

#[test]
fn test_image_line() {
    assert_eq!(
        segment("![fig](http://x/y.png) trailing text"),
        vec![Segment::Image {
            alt: "fig".to_string(),
            source: "http://x/y.png".to_string(),
        }]
    );
}

#[test]
fn test_image_wins_over_table() {
    assert_eq!(kinds("| ![a](b.png) |"), vec!["image"]);
}

#[test]
fn test_mixed_message() {
    let body = "\
Here is the answer:

$$
\\int_0^1 x\\,dx = \\frac{1}{2}
$$

| x | $x^2$ |
|---|-------|
| 2 | 4 |

```python
print(\"hi\")
```
Done, see $f(x)$.";
    assert_eq!(
        kinds(body),
        vec!["text", "blank", "formula", "blank", "table", "blank", "code", "text"]
    );

    let segments = segment(body);
    assert_eq!(
        segments[2],
        Segment::BlockFormula {
            latex: r"\int_0^1 x\,dx = \frac{1}{2}".to_string()
        }
    );
    assert_eq!(
        segments[4],
        Segment::TableBlock {
            rows: vec![
                TableRow::new(vec!["x".to_string(), "$x^2$".to_string()]),
                TableRow::new(vec!["2".to_string(), "4".to_string()]),
            ]
        }
    );
}

#[test]
fn test_table_ends_at_line_without_pipe() {
    assert_eq!(kinds("| a |\n| b |\nplain\n| c |"), vec!["table", "text", "table"]);
}

#[test]
fn test_every_line_is_consumed() {
    let body = "a\n\nb\n$$x$$\n![i](j)\n";
    assert_eq!(kinds(body), vec!["text", "blank", "text", "formula", "image"]);
}

#[test]
fn test_crlf_lines() {
    assert_eq!(
        segment("```\r\nx\r\n```\r\n"),
        vec![Segment::CodeBlock {
            language: None,
            lines: vec!["x".to_string()],
        }]
    );
}

#[test]
fn test_inline_spans_in_order() {
    assert_eq!(
        split_inline("If **both** $a>0$ and $b>0$ then"),
        vec![
            InlineSpan::text("If "),
            InlineSpan::Strong("both".to_string()),
            InlineSpan::text(" "),
            InlineSpan::Math("a>0".to_string()),
            InlineSpan::text(" and "),
            InlineSpan::Math("b>0".to_string()),
            InlineSpan::text(" then"),
        ]
    );
}
