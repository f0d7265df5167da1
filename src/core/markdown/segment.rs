//! Line-driven segmentation of a message body
//!
//! One pass over the lines. Each step consumes at least one line; code
//! fences, tables and multi-line formulas run to their closing marker or to
//! the end of input, whichever comes first.

use chatdoc_ir::Segment;
use lazy_static::lazy_static;
use regex::Regex;

use super::table::{is_separator_row, parse_row};

pub const FENCE: &str = "```";
pub const FORMULA_FENCE: &str = "$$";

lazy_static! {
    static ref IMAGE: Regex =
        Regex::new(r#"!\[([^\]]*)\]\(\s*([^)\s]+)(?:\s+"[^"]*")?\s*\)"#).expect("image pattern");
}

/// Split a message body into segments, in source order.
pub fn segment(body: &str) -> Vec<Segment> {
    let mut segmenter = Segmenter {
        lines: body.lines().collect(),
        pos: 0,
        segments: Vec::new(),
    };
    segmenter.run();
    segmenter.segments
}

struct Segmenter<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    segments: Vec<Segment>,
}

impl<'a> Segmenter<'a> {
    fn run(&mut self) {
        while let Some(&line) = self.lines.get(self.pos) {
            let trimmed = line.trim();

            // Only the image survives when it shares its line with other text.
            if let Some(image) = image_on_line(line) {
                self.segments.push(image);
                self.pos += 1;
            } else if let Some(info) = trimmed.strip_prefix(FENCE) {
                self.code_block(info);
            } else if trimmed.starts_with('|') {
                self.table();
            } else if let Some(latex) = single_line_formula(trimmed) {
                self.segments.push(Segment::BlockFormula {
                    latex: latex.to_string(),
                });
                self.pos += 1;
            } else if trimmed == FORMULA_FENCE {
                self.multi_line_formula();
            } else {
                self.segments.push(if trimmed.is_empty() {
                    Segment::Blank
                } else {
                    Segment::PlainText {
                        line: line.to_string(),
                    }
                });
                self.pos += 1;
            }
        }
    }

    /// Collect lines after the current one up to a line trimmed-equal to
    /// `marker`. Returns the lines and whether the marker was found.
    fn until_marker(&mut self, marker: &str) -> (Vec<&'a str>, bool) {
        self.pos += 1;
        let mut body = Vec::new();
        while let Some(&line) = self.lines.get(self.pos) {
            self.pos += 1;
            if line.trim() == marker {
                return (body, true);
            }
            body.push(line);
        }
        (body, false)
    }

    fn code_block(&mut self, info: &str) {
        let language = info.trim();
        let language = (!language.is_empty()).then(|| language.to_string());
        let (lines, closed) = self.until_marker(FENCE);
        if !closed {
            log::debug!("code fence not closed, taking the rest of the message");
        }
        self.segments.push(Segment::CodeBlock {
            language,
            lines: lines.into_iter().map(str::to_string).collect(),
        });
    }

    fn table(&mut self) {
        let mut rows = Vec::new();
        while let Some(&line) = self.lines.get(self.pos) {
            if !line.contains('|') {
                break;
            }
            if !is_separator_row(line) {
                rows.push(parse_row(line));
            }
            self.pos += 1;
        }
        self.segments.push(Segment::TableBlock { rows });
    }

    fn multi_line_formula(&mut self) {
        let (lines, closed) = self.until_marker(FORMULA_FENCE);
        if !closed {
            log::debug!("$$ block not closed, taking the rest of the message");
        }
        let latex = lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        self.segments.push(Segment::BlockFormula { latex });
    }
}

fn image_on_line(line: &str) -> Option<Segment> {
    let caps = IMAGE.captures(line)?;
    Some(Segment::Image {
        alt: caps[1].to_string(),
        source: caps[2].to_string(),
    })
}

/// `$$...$$` occupying the whole (trimmed) line.
fn single_line_formula(trimmed: &str) -> Option<&str> {
    let inner = trimmed
        .strip_prefix(FORMULA_FENCE)?
        .strip_suffix(FORMULA_FENCE)?;
    if inner.contains(FORMULA_FENCE) {
        return None;
    }
    let inner = inner.trim();
    (!inner.is_empty()).then_some(inner)
}
