//! IR to OMML backend.
//!
//! Walks a compiled `MathNode` sequence and builds the Office Math Markup
//! element tree for one math zone (`m:oMath`). The tree is owned so callers
//! can splice it into their own paragraph, or render it straight to markup.

use std::fmt;

use chatdoc_ir::MathNode;
use serde::{Deserialize, Serialize};

pub const MATH_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";
pub const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OmmlRenderOptions {
    /// Put `xmlns:m` / `xmlns:w` on the zone root so the fragment stands alone.
    pub declare_namespaces: bool,
    /// Font written into each run's `w:rPr`. `None` leaves the run unstyled.
    pub math_font: Option<String>,
    /// Deepest node nesting accepted before rendering gives up.
    pub max_depth: usize,
}

impl Default for OmmlRenderOptions {
    fn default() -> Self {
        Self {
            declare_namespaces: true,
            math_font: Some("Cambria Math".to_string()),
            max_depth: 64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A compound node reached the renderer with an empty child slot.
    EmptySlot { element: &'static str },
    /// Node nesting exceeded `OmmlRenderOptions::max_depth`.
    TooDeep { limit: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptySlot { element } => {
                write!(f, "empty child slot in <{}>", element)
            }
            RenderError::TooDeep { limit } => {
                write!(f, "math nesting deeper than {} levels", limit)
            }
        }
    }
}

impl std::error::Error for RenderError {}

// =============================================================================
// Element tree
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OmmlNode {
    Element(OmmlElement),
    Text(String),
}

/// A namespace-qualified markup element, e.g. `m:sSup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OmmlElement {
    pub name: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<OmmlNode>,
}

impl OmmlElement {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn with_child(mut self, child: OmmlElement) -> Self {
        self.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(OmmlNode::Text(text.into()));
        self
    }

    pub fn set_attr(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn push(&mut self, child: OmmlElement) {
        self.children.push(OmmlNode::Element(child));
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[OmmlNode] {
        &self.children
    }

    /// Child elements in order, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &OmmlElement> {
        self.children.iter().filter_map(|c| match c {
            OmmlNode::Element(e) => Some(e),
            OmmlNode::Text(_) => None,
        })
    }

    /// First direct child element with the given name.
    pub fn child(&self, name: &str) -> Option<&OmmlElement> {
        self.elements().find(|e| e.name == name)
    }

    /// Concatenated text content of the subtree.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                OmmlNode::Element(e) => e.collect_text(out),
                OmmlNode::Text(t) => out.push_str(t),
            }
        }
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            escape_into(value, true, out);
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                OmmlNode::Element(e) => e.write_markup(out),
                OmmlNode::Text(t) => escape_into(t, false, out),
            }
        }
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }
}

fn escape_into(s: &str, in_attr: bool, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

// =============================================================================
// Math zone rendering
// =============================================================================

/// Render one compiled expression as an `m:oMath` element.
pub fn render_math_zone(
    nodes: &[MathNode],
    options: &OmmlRenderOptions,
) -> Result<OmmlElement, RenderError> {
    let mut zone = OmmlElement::new("m:oMath");
    if options.declare_namespaces {
        zone.set_attr("xmlns:m", MATH_NS);
        zone.set_attr("xmlns:w", WORD_NS);
    }
    let renderer = Renderer { options };
    for node in nodes {
        zone.push(renderer.node(node, 1)?);
    }
    Ok(zone)
}

/// Italic WordprocessingML run carrying the source text of an expression that
/// could not be rendered structurally.
pub fn fallback_run(source: &str, options: &OmmlRenderOptions) -> OmmlElement {
    let mut run = OmmlElement::new("w:r");
    if options.declare_namespaces {
        run.set_attr("xmlns:w", WORD_NS);
    }
    run.with_child(OmmlElement::new("w:rPr").with_child(OmmlElement::new("w:i")))
        .with_child(
            OmmlElement::new("w:t")
                .with_attr("xml:space", "preserve")
                .with_text(source),
        )
}

struct Renderer<'a> {
    options: &'a OmmlRenderOptions,
}

impl Renderer<'_> {
    fn node(&self, node: &MathNode, depth: usize) -> Result<OmmlElement, RenderError> {
        if depth > self.options.max_depth {
            return Err(RenderError::TooDeep {
                limit: self.options.max_depth,
            });
        }
        let next = depth + 1;
        let el = match node {
            MathNode::Run { text, italic, bold } => self.run(text, *italic, *bold),
            MathNode::NamedFunction { name } => self.run(name, false, false),
            MathNode::Fraction {
                numerator,
                denominator,
            } => OmmlElement::new("m:f")
                .with_child(
                    OmmlElement::new("m:fPr")
                        .with_child(OmmlElement::new("m:type").with_attr("m:val", "bar")),
                )
                .with_child(self.slot("m:num", numerator, next)?)
                .with_child(self.slot("m:den", denominator, next)?),
            MathNode::Superscript { base, exponent } => OmmlElement::new("m:sSup")
                .with_child(self.slot("m:e", base, next)?)
                .with_child(self.slot("m:sup", exponent, next)?),
            MathNode::Subscript { base, subscript } => OmmlElement::new("m:sSub")
                .with_child(self.slot("m:e", base, next)?)
                .with_child(self.slot("m:sub", subscript, next)?),
            MathNode::SubSup {
                base,
                subscript,
                exponent,
            } => OmmlElement::new("m:sSubSup")
                .with_child(self.slot("m:e", base, next)?)
                .with_child(self.slot("m:sub", subscript, next)?)
                .with_child(self.slot("m:sup", exponent, next)?),
            MathNode::Radical { content, degree } => {
                let mut rad = OmmlElement::new("m:rad");
                match degree {
                    Some(degree) => {
                        rad.push(self.slot("m:deg", degree, next)?);
                    }
                    None => {
                        rad.push(
                            OmmlElement::new("m:radPr").with_child(
                                OmmlElement::new("m:degHide").with_attr("m:val", "1"),
                            ),
                        );
                        rad.push(OmmlElement::new("m:deg"));
                    }
                }
                rad.with_child(self.slot("m:e", content, next)?)
            }
            MathNode::Accent { content, mark } => OmmlElement::new("m:acc")
                .with_child(
                    OmmlElement::new("m:accPr")
                        .with_child(OmmlElement::new("m:chr").with_attr("m:val", mark.to_string())),
                )
                .with_child(self.slot("m:e", content, next)?),
            MathNode::Delimiter {
                content,
                open,
                close,
            } => OmmlElement::new("m:d")
                .with_child(
                    OmmlElement::new("m:dPr")
                        .with_child(OmmlElement::new("m:begChr").with_attr("m:val", open.as_str()))
                        .with_child(OmmlElement::new("m:endChr").with_attr("m:val", close.as_str())),
                )
                .with_child(self.slot("m:e", content, next)?),
        };
        Ok(el)
    }

    fn slot(
        &self,
        name: &'static str,
        nodes: &[MathNode],
        depth: usize,
    ) -> Result<OmmlElement, RenderError> {
        if nodes.is_empty() {
            return Err(RenderError::EmptySlot { element: name });
        }
        let mut el = OmmlElement::new(name);
        for node in nodes {
            el.push(self.node(node, depth)?);
        }
        Ok(el)
    }

    fn run(&self, text: &str, italic: bool, bold: bool) -> OmmlElement {
        let sty = match (bold, italic) {
            (false, false) => "p",
            (false, true) => "i",
            (true, false) => "b",
            (true, true) => "bi",
        };
        let mut run = OmmlElement::new("m:r")
            .with_child(OmmlElement::new("m:rPr").with_child(OmmlElement::new("m:sty").with_attr("m:val", sty)));
        if let Some(font) = &self.options.math_font {
            run.push(
                OmmlElement::new("w:rPr").with_child(
                    OmmlElement::new("w:rFonts")
                        .with_attr("w:ascii", font.as_str())
                        .with_attr("w:hAnsi", font.as_str()),
                ),
            );
        }
        run.with_child(
            OmmlElement::new("m:t")
                .with_attr("xml:space", "preserve")
                .with_text(text),
        )
    }
}
