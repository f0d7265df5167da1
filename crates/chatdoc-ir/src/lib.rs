//! Intermediate representation shared by the math compiler, the segmenter and
//! the document assembler.

use serde::Serialize;

// =============================================================================
// Math
// =============================================================================

/// One structural term of a compiled LaTeX expression.
///
/// A compiled expression is a flat `Vec<MathNode>` of siblings. Compound
/// variants own non-empty child sequences; `Run` and `NamedFunction` are
/// always leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MathNode {
    Run {
        text: String,
        italic: bool,
        bold: bool,
    },
    Fraction {
        numerator: Vec<MathNode>,
        denominator: Vec<MathNode>,
    },
    Superscript {
        base: Vec<MathNode>,
        exponent: Vec<MathNode>,
    },
    Subscript {
        base: Vec<MathNode>,
        subscript: Vec<MathNode>,
    },
    SubSup {
        base: Vec<MathNode>,
        subscript: Vec<MathNode>,
        exponent: Vec<MathNode>,
    },
    Radical {
        content: Vec<MathNode>,
        degree: Option<Vec<MathNode>>,
    },
    Accent {
        content: Vec<MathNode>,
        mark: char,
    },
    Delimiter {
        content: Vec<MathNode>,
        open: String,
        close: String,
    },
    NamedFunction {
        name: String,
    },
}

impl MathNode {
    pub fn run(text: impl Into<String>, italic: bool, bold: bool) -> Self {
        MathNode::Run {
            text: text.into(),
            italic,
            bold,
        }
    }

    /// Upright, non-bold run. Used wherever input degrades to plain text.
    pub fn literal(text: impl Into<String>) -> Self {
        MathNode::run(text, false, false)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        MathNode::run(text, true, false)
    }

    /// Stand-in for an empty argument slot.
    pub fn placeholder() -> Self {
        MathNode::literal(" ")
    }

    pub fn named_function(name: impl Into<String>) -> Self {
        MathNode::NamedFunction { name: name.into() }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, MathNode::Run { .. } | MathNode::NamedFunction { .. })
    }

    /// Mutable access to every child sequence of a compound node.
    pub fn slots_mut(&mut self) -> Vec<&mut Vec<MathNode>> {
        match self {
            MathNode::Run { .. } | MathNode::NamedFunction { .. } => Vec::new(),
            MathNode::Fraction {
                numerator,
                denominator,
            } => vec![numerator, denominator],
            MathNode::Superscript { base, exponent } => vec![base, exponent],
            MathNode::Subscript { base, subscript } => vec![base, subscript],
            MathNode::SubSup {
                base,
                subscript,
                exponent,
            } => vec![base, subscript, exponent],
            MathNode::Radical { content, degree } => {
                let mut slots = vec![content];
                if let Some(degree) = degree {
                    slots.push(degree);
                }
                slots
            }
            MathNode::Accent { content, .. } | MathNode::Delimiter { content, .. } => {
                vec![content]
            }
        }
    }

    pub fn slots(&self) -> Vec<&Vec<MathNode>> {
        match self {
            MathNode::Run { .. } | MathNode::NamedFunction { .. } => Vec::new(),
            MathNode::Fraction {
                numerator,
                denominator,
            } => vec![numerator, denominator],
            MathNode::Superscript { base, exponent } => vec![base, exponent],
            MathNode::Subscript { base, subscript } => vec![base, subscript],
            MathNode::SubSup {
                base,
                subscript,
                exponent,
            } => vec![base, subscript, exponent],
            MathNode::Radical { content, degree } => {
                let mut slots = vec![content];
                if let Some(degree) = degree {
                    slots.push(degree);
                }
                slots
            }
            MathNode::Accent { content, .. } | MathNode::Delimiter { content, .. } => {
                vec![content]
            }
        }
    }

    /// Number of node levels from this node down to its deepest leaf.
    /// A leaf has height 1.
    pub fn height(&self) -> usize {
        1 + self
            .slots()
            .into_iter()
            .flat_map(|slot| slot.iter().map(MathNode::height))
            .max()
            .unwrap_or(0)
    }

    /// Leaf text concatenated depth-first, ignoring styling.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            MathNode::Run { text, .. } => out.push_str(text),
            MathNode::NamedFunction { name } => out.push_str(name),
            MathNode::Fraction {
                numerator,
                denominator,
            } => {
                push_all(numerator, out);
                push_all(denominator, out);
            }
            MathNode::Superscript { base, exponent } => {
                push_all(base, out);
                push_all(exponent, out);
            }
            MathNode::Subscript { base, subscript } => {
                push_all(base, out);
                push_all(subscript, out);
            }
            MathNode::SubSup {
                base,
                subscript,
                exponent,
            } => {
                push_all(base, out);
                push_all(subscript, out);
                push_all(exponent, out);
            }
            MathNode::Radical { content, degree } => {
                if let Some(degree) = degree {
                    push_all(degree, out);
                }
                push_all(content, out);
            }
            MathNode::Accent { content, .. } => push_all(content, out),
            MathNode::Delimiter {
                content,
                open,
                close,
            } => {
                out.push_str(open);
                push_all(content, out);
                out.push_str(close);
            }
        }
    }
}

fn push_all(nodes: &[MathNode], out: &mut String) {
    for node in nodes {
        node.push_plain_text(out);
    }
}

/// Plain text of a whole node sequence.
pub fn plain_text(nodes: &[MathNode]) -> String {
    let mut out = String::new();
    push_all(nodes, &mut out);
    out
}

// =============================================================================
// Segments
// =============================================================================

/// A classified run of lines from a chat message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    CodeBlock {
        language: Option<String>,
        lines: Vec<String>,
    },
    TableBlock {
        rows: Vec<TableRow>,
    },
    BlockFormula {
        latex: String,
    },
    Image {
        alt: String,
        source: String,
    },
    PlainText {
        line: String,
    },
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }
}

/// Piece of a text line after `$math$` and `**bold**` splitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InlineSpan {
    Text(String),
    Strong(String),
    Math(String),
}

impl InlineSpan {
    pub fn text(s: impl Into<String>) -> Self {
        InlineSpan::Text(s.into())
    }
}

// =============================================================================
// Document
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        text: String,
    },
    Timestamp {
        text: String,
    },
    RoleLabel {
        role: Role,
        label: String,
    },
    Paragraph {
        content: Vec<Inline>,
    },
    Code {
        language: Option<String>,
        text: String,
    },
    Table {
        rows: Vec<Vec<Vec<Inline>>>,
    },
    Formula {
        markup: String,
        align: Alignment,
    },
    Image {
        alt: String,
        source: String,
    },
    Separator {
        text: String,
    },
    Empty,
}

/// Paragraph content with math already rendered to markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Strong(String),
    Math(String),
}
