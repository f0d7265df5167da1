//! LaTeX expression compiler
//!
//! Single left-to-right scan producing a flat sequence of `MathNode`
//! siblings. Groups and command arguments recurse into the same scanner with
//! their own sibling buffer; nothing is shared between levels.

use chatdoc_ir::MathNode;

use super::group::{
    char_at, command_end, read_group, read_group_or_command, read_optional, skip_spaces,
};
use super::symbols::{
    delimiter_command, double_struck, is_punctuation, ACCENTS, GREEK, NAMED_FUNCTIONS, OPERATORS,
};

/// Deepest group/argument nesting compiled structurally. Anything below is
/// kept as literal text.
pub const MAX_DEPTH: usize = 48;

/// Compile a LaTeX expression into sibling math nodes. Never fails.
pub fn compile(latex: &str) -> Vec<MathNode> {
    compile_at(latex, 0)
}

fn compile_at(src: &str, depth: usize) -> Vec<MathNode> {
    if depth > MAX_DEPTH {
        log::debug!("nesting limit reached, keeping {:?} as text", src);
        let text = src.trim();
        if text.is_empty() {
            return Vec::new();
        }
        return vec![MathNode::literal(text)];
    }
    let mut scanner = Scanner {
        src,
        pos: 0,
        depth,
        nodes: Vec::new(),
        text: String::new(),
    };
    scanner.run();
    scanner.nodes
}

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
    /// Siblings produced so far at this level.
    nodes: Vec<MathNode>,
    /// Pending letters/digits not yet pushed as a run.
    text: String,
}

impl<'a> Scanner<'a> {
    fn run(&mut self) {
        while let Some(c) = char_at(self.src, self.pos) {
            match c {
                c if c.is_whitespace() => {
                    self.flush_text();
                    self.pos += c.len_utf8();
                }
                '{' => {
                    self.flush_text();
                    let (inner, next) = read_group(self.src, self.pos);
                    self.pos = next;
                    let nodes = self.child(inner);
                    self.nodes.extend(nodes);
                }
                '}' => {
                    // Stray closer with no opener.
                    self.flush_text();
                    self.pos += 1;
                }
                '\\' => {
                    self.flush_text();
                    self.command();
                }
                '^' | '_' => {
                    self.flush_text();
                    self.pos += 1;
                    self.binder(c);
                }
                c if is_punctuation(c) => {
                    self.flush_text();
                    self.nodes.push(MathNode::literal(c));
                    self.pos += 1;
                }
                c => {
                    self.text.push(c);
                    self.pos += c.len_utf8();
                }
            }
        }
        self.flush_text();
    }

    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        let italic = text.chars().any(char::is_alphabetic);
        self.nodes.push(MathNode::run(text, italic, false));
    }

    fn child(&self, src: &str) -> Vec<MathNode> {
        compile_at(src, self.depth + 1)
    }

    /// Compile `src` for a structural slot, never returning an empty sequence.
    fn slot(&self, src: &str) -> Vec<MathNode> {
        let nodes = self.child(src);
        if nodes.is_empty() {
            vec![MathNode::placeholder()]
        } else {
            nodes
        }
    }

    /// Read the next argument (group or single token) and compile it as a slot.
    fn argument(&mut self) -> Vec<MathNode> {
        let (arg, next) = read_group_or_command(self.src, self.pos);
        self.pos = next;
        self.slot(arg)
    }

    /// Read the next argument as raw text.
    fn raw_argument(&mut self) -> &'a str {
        let (arg, next) = read_group(self.src, self.pos);
        self.pos = next;
        arg
    }

    fn pop_base(&mut self) -> Vec<MathNode> {
        match self.nodes.pop() {
            Some(node) => vec![node],
            None => vec![MathNode::placeholder()],
        }
    }

    /// `^` or `_` just consumed. A directly following opposite binder folds
    /// both into one `SubSup`.
    ///
    /// Chained binders (`x^1^1^1`) wrap the previous sibling again at the
    /// same level, so the base height is checked against `MAX_DEPTH` too.
    /// Past the limit the arguments are appended as siblings.
    fn binder(&mut self, first: char) {
        let first_arg = self.argument();
        let other = if first == '^' { '_' } else { '^' };
        let after = skip_spaces(self.src, self.pos);
        let second_arg = if char_at(self.src, after) == Some(other) {
            self.pos = after + 1;
            Some(self.argument())
        } else {
            None
        };

        let base_height = self.nodes.last().map_or(0, MathNode::height);
        if self.depth + base_height >= MAX_DEPTH {
            log::debug!("binder chain too deep, appending its arguments as siblings");
            self.nodes.extend(first_arg);
            self.nodes.extend(second_arg.into_iter().flatten());
            return;
        }
        let base = self.pop_base();

        if let Some(second_arg) = second_arg {
            let (subscript, exponent) = if first == '_' {
                (first_arg, second_arg)
            } else {
                (second_arg, first_arg)
            };
            self.nodes.push(MathNode::SubSup {
                base,
                subscript,
                exponent,
            });
            return;
        }

        let node = if first == '^' {
            MathNode::Superscript {
                base,
                exponent: first_arg,
            }
        } else {
            MathNode::Subscript {
                base,
                subscript: first_arg,
            }
        };
        self.nodes.push(node);
    }

    fn command(&mut self) {
        let start = self.pos + 1;
        let end = command_end(self.src, start);
        let name = &self.src[start..end];
        self.pos = end;

        match name {
            // Lone backslash at end of input.
            "" => {}

            "frac" | "dfrac" | "tfrac" | "cfrac" => {
                let numerator = self.argument();
                let denominator = self.argument();
                self.nodes.push(MathNode::Fraction {
                    numerator,
                    denominator,
                });
            }

            "sqrt" => {
                let degree = match read_optional(self.src, self.pos) {
                    Some((degree, next)) => {
                        self.pos = next;
                        Some(self.slot(degree))
                    }
                    None => None,
                };
                let content = self.argument();
                self.nodes.push(MathNode::Radical { content, degree });
            }

            "left" => self.left_right(),
            "right" => {
                // \right without a matching \left
                let (close, next) = read_delimiter(self.src, self.pos, ")");
                self.pos = next;
                self.push_glyph(close);
            }

            "big" | "Big" | "bigg" | "Bigg" | "bigl" | "bigr" | "bigm" | "Bigl" | "Bigr"
            | "Bigm" | "biggl" | "biggr" | "biggm" | "Biggl" | "Biggr" | "Biggm" => {
                let (glyph, next) = read_delimiter(self.src, self.pos, "");
                self.pos = next;
                self.push_glyph(glyph);
            }

            "text" | "textrm" | "textnormal" | "mbox" => {
                let text = self.raw_argument();
                self.push_text(text, false, false);
            }
            "textbf" => {
                let text = self.raw_argument();
                self.push_text(text, false, true);
            }
            "textit" => {
                let text = self.raw_argument();
                self.push_text(text, true, false);
            }

            "mathrm" | "mathup" | "mathsf" | "mathtt" => self.styled(Some(false), None),
            "mathbf" => self.styled(Some(false), Some(true)),
            "boldsymbol" | "bm" => self.styled(None, Some(true)),
            "mathit" => self.styled(Some(true), None),
            "mathbb" => {
                let src = self.raw_argument();
                let mut nodes = self.child(src);
                for_each_run(&mut nodes, &mut |text, italic, _| {
                    *text = text
                        .chars()
                        .map(|c| double_struck(c).unwrap_or(c))
                        .collect();
                    *italic = false;
                });
                self.nodes.extend(nodes);
            }
            "mathcal" | "mathscr" | "mathfrak" | "boxed" => {
                let src = self.raw_argument();
                let nodes = self.child(src);
                self.nodes.extend(nodes);
            }

            "operatorname" => {
                if char_at(self.src, self.pos) == Some('*') {
                    self.pos += 1;
                }
                let name = operator_name(self.raw_argument());
                if !name.is_empty() {
                    self.nodes.push(MathNode::named_function(name));
                }
            }

            "displaystyle" | "textstyle" | "scriptstyle" | "scriptscriptstyle" | "limits"
            | "nolimits" | "nonumber" | "notag" => {}

            "," | ":" | ";" | "thinspace" | "medspace" | "thickspace" | "enspace" => {
                self.nodes.push(MathNode::literal(" "));
            }
            n if n.chars().all(char::is_whitespace) => {
                self.nodes.push(MathNode::literal(" "));
            }
            "quad" => self.nodes.push(MathNode::literal("\u{2003}")),
            "qquad" => self.nodes.push(MathNode::literal("\u{2003}\u{2003}")),
            "!" | "negthinspace" => {}

            // Line breaks; there are no rows here.
            "\\" | "newline" | "cr" => {}

            "{" | "}" | "%" | "$" | "&" | "#" | "_" => self.nodes.push(MathNode::literal(name)),
            "|" => self.nodes.push(MathNode::literal("‖")),

            _ => {
                if let Some(mark) = ACCENTS.get(name) {
                    let content = self.argument();
                    self.nodes.push(MathNode::Accent {
                        content,
                        mark: *mark,
                    });
                } else if let Some(glyph) = GREEK.get(name) {
                    self.nodes.push(MathNode::italic(*glyph));
                } else if let Some(glyph) = OPERATORS.get(name) {
                    self.nodes.push(MathNode::literal(*glyph));
                } else if NAMED_FUNCTIONS.contains(name) {
                    self.nodes.push(MathNode::named_function(name));
                } else {
                    log::debug!("unknown command \\{}, emitting its name", name);
                    self.nodes.push(MathNode::literal(name));
                }
            }
        }
    }

    /// Compile the next argument and override run styling inside it.
    fn styled(&mut self, italic: Option<bool>, bold: Option<bool>) {
        let src = self.raw_argument();
        let mut nodes = self.child(src);
        for_each_run(&mut nodes, &mut |_, run_italic, run_bold| {
            if let Some(v) = italic {
                *run_italic = v;
            }
            if let Some(v) = bold {
                *run_bold = v;
            }
        });
        self.nodes.extend(nodes);
    }

    fn push_text(&mut self, text: &str, italic: bool, bold: bool) {
        if !text.is_empty() {
            self.nodes.push(MathNode::run(text, italic, bold));
        }
    }

    fn push_glyph(&mut self, glyph: String) {
        if !glyph.is_empty() {
            self.nodes.push(MathNode::literal(glyph));
        }
    }

    /// `\left` just consumed: read the opener, find the `\right` at the same
    /// depth, compile everything between.
    fn left_right(&mut self) {
        let (open, body_start) = read_delimiter(self.src, self.pos, "(");
        let (body, close) = match find_matching_right(self.src, body_start) {
            Some(right) => {
                let (close, next) = read_delimiter(self.src, right + "\\right".len(), ")");
                self.pos = next;
                (&self.src[body_start..right], close)
            }
            None => {
                log::debug!("\\left without \\right, closing at end of input");
                self.pos = self.src.len();
                (&self.src[body_start..], ")".to_string())
            }
        };
        let content = self.slot(body);
        self.nodes.push(MathNode::Delimiter {
            content,
            open,
            close,
        });
    }
}

/// Read the delimiter after `\left`, `\right` or a sizing command. `.` is the
/// empty delimiter; `default` is used at end of input or when the next
/// command is not a delimiter.
fn read_delimiter(s: &str, pos: usize, default: &str) -> (String, usize) {
    let pos = skip_spaces(s, pos);
    match char_at(s, pos) {
        None => (default.to_string(), pos),
        Some('.') => (String::new(), pos + 1),
        Some('\\') => {
            let end = command_end(s, pos + 1);
            let name = &s[pos + 1..end];
            if name.is_empty() {
                return (default.to_string(), end);
            }
            match delimiter_command(name).or_else(|| OPERATORS.get(name).copied()) {
                Some(glyph) => (glyph.to_string(), end),
                // Not a delimiter: leave the command for the caller to scan.
                None => (default.to_string(), pos),
            }
        }
        Some(c) => (c.to_string(), pos + c.len_utf8()),
    }
}

/// Text of an `\operatorname` argument. Spacing commands become spaces;
/// other commands and braces are dropped.
fn operator_name(raw: &str) -> String {
    let mut out = String::new();
    let mut pos = 0;
    while let Some(c) = char_at(raw, pos) {
        match c {
            '\\' => {
                let end = command_end(raw, pos + 1);
                if matches!(
                    &raw[pos + 1..end],
                    "," | ":" | ";" | " " | "thinspace" | "medspace" | "thickspace"
                ) {
                    out.push(' ');
                }
                pos = end.max(pos + 1);
            }
            '{' | '}' => pos += 1,
            c => {
                out.push(c);
                pos += c.len_utf8();
            }
        }
    }
    out.trim().to_string()
}

/// Byte offset of the `\right` closing a `\left` whose body starts at
/// `start`. Nested `\left ... \right` pairs are skipped by depth count.
fn find_matching_right(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut depth = 1usize;
    let mut i = start;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        let end = command_end(s, i + 1);
        match &s[i + 1..end] {
            "left" => depth += 1,
            "right" => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i = end.max(i + 1);
    }
    None
}

/// Visit every `Run` in a node tree.
fn for_each_run(nodes: &mut [MathNode], f: &mut dyn FnMut(&mut String, &mut bool, &mut bool)) {
    for node in nodes {
        match node {
            MathNode::Run { text, italic, bold } => f(text, italic, bold),
            other => {
                for slot in other.slots_mut() {
                    for_each_run(slot, f);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatdoc_ir::plain_text;
    use pretty_assertions::assert_eq;

    fn x() -> MathNode {
        MathNode::italic("x")
    }

    #[test]
    fn fraction() {
        assert_eq!(
            compile(r"\frac{a}{b}"),
            vec![MathNode::Fraction {
                numerator: vec![MathNode::italic("a")],
                denominator: vec![MathNode::italic("b")],
            }]
        );
    }

    #[test]
    fn fraction_with_bare_tokens() {
        assert_eq!(
            compile(r"\frac12"),
            vec![MathNode::Fraction {
                numerator: vec![MathNode::literal("1")],
                denominator: vec![MathNode::literal("2")],
            }]
        );
    }

    #[test]
    fn superscript_and_subscript() {
        assert_eq!(
            compile("x^2"),
            vec![MathNode::Superscript {
                base: vec![x()],
                exponent: vec![MathNode::literal("2")],
            }]
        );
        assert_eq!(
            compile("x_2"),
            vec![MathNode::Subscript {
                base: vec![x()],
                subscript: vec![MathNode::literal("2")],
            }]
        );
    }

    #[test]
    fn binder_order_does_not_matter() {
        let expected = vec![MathNode::SubSup {
            base: vec![x()],
            subscript: vec![MathNode::literal("2")],
            exponent: vec![MathNode::literal("3")],
        }];
        assert_eq!(compile("x_2^3"), expected);
        assert_eq!(compile("x^3_2"), expected);
        assert_eq!(compile("x^{3} _{2}"), expected);
    }

    #[test]
    fn command_as_exponent() {
        assert_eq!(
            compile(r"x^\alpha"),
            vec![MathNode::Superscript {
                base: vec![x()],
                exponent: vec![MathNode::italic("α")],
            }]
        );
    }

    #[test]
    fn binder_without_base_or_argument() {
        assert_eq!(
            compile("^2"),
            vec![MathNode::Superscript {
                base: vec![MathNode::placeholder()],
                exponent: vec![MathNode::literal("2")],
            }]
        );
        assert_eq!(
            compile("x_"),
            vec![MathNode::Subscript {
                base: vec![x()],
                subscript: vec![MathNode::placeholder()],
            }]
        );
    }

    #[test]
    fn greek_and_named_functions() {
        assert_eq!(compile(r"\alpha"), vec![MathNode::italic("α")]);
        assert_eq!(compile(r"\sin"), vec![MathNode::named_function("sin")]);
        assert_eq!(
            compile(r"\sin x"),
            vec![MathNode::named_function("sin"), x()]
        );
    }

    #[test]
    fn operators_are_upright() {
        assert_eq!(
            compile(r"a \leq b"),
            vec![
                MathNode::italic("a"),
                MathNode::literal("≤"),
                MathNode::italic("b")
            ]
        );
    }

    #[test]
    fn left_right_pair() {
        assert_eq!(
            compile(r"\left(a+b\right)"),
            vec![MathNode::Delimiter {
                content: vec![
                    MathNode::italic("a"),
                    MathNode::literal("+"),
                    MathNode::italic("b"),
                ],
                open: "(".to_string(),
                close: ")".to_string(),
            }]
        );
    }

    #[test]
    fn nested_left_right_match_by_depth() {
        let nodes = compile(r"\left[ \left( x \right) + 1 \right]");
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            MathNode::Delimiter {
                content,
                open,
                close,
            } => {
                assert_eq!(open, "[");
                assert_eq!(close, "]");
                assert_eq!(content.len(), 3);
                assert!(matches!(
                    &content[0],
                    MathNode::Delimiter { open, close, .. } if open == "(" && close == ")"
                ));
            }
            other => panic!("expected delimiter, got {:?}", other),
        }
    }

    #[test]
    fn left_right_command_delimiters() {
        let nodes = compile(r"\left\{ x \right.");
        assert_eq!(
            nodes,
            vec![MathNode::Delimiter {
                content: vec![x()],
                open: "{".to_string(),
                close: String::new(),
            }]
        );
        let nodes = compile(r"\left\langle v \right\rangle");
        assert!(matches!(
            &nodes[0],
            MathNode::Delimiter { open, close, .. } if open == "⟨" && close == "⟩"
        ));
    }

    #[test]
    fn arrows_are_not_left_right() {
        assert_eq!(
            compile(r"a \rightarrow b \leftarrow c"),
            vec![
                MathNode::italic("a"),
                MathNode::literal("→"),
                MathNode::italic("b"),
                MathNode::literal("←"),
                MathNode::italic("c"),
            ]
        );
    }

    #[test]
    fn unterminated_left() {
        assert_eq!(
            compile(r"\left( x"),
            vec![MathNode::Delimiter {
                content: vec![x()],
                open: "(".to_string(),
                close: ")".to_string(),
            }]
        );
        assert_eq!(
            compile(r"\left"),
            vec![MathNode::Delimiter {
                content: vec![MathNode::placeholder()],
                open: "(".to_string(),
                close: ")".to_string(),
            }]
        );
    }

    #[test]
    fn square_and_nth_root() {
        assert_eq!(
            compile(r"\sqrt{x}"),
            vec![MathNode::Radical {
                content: vec![x()],
                degree: None,
            }]
        );
        assert_eq!(
            compile(r"\sqrt[3]{x}"),
            vec![MathNode::Radical {
                content: vec![x()],
                degree: Some(vec![MathNode::literal("3")]),
            }]
        );
    }

    #[test]
    fn accents() {
        assert_eq!(
            compile(r"\vec{v}"),
            vec![MathNode::Accent {
                content: vec![MathNode::italic("v")],
                mark: '\u{20D7}',
            }]
        );
        assert_eq!(
            compile(r"\hat{}"),
            vec![MathNode::Accent {
                content: vec![MathNode::placeholder()],
                mark: '\u{0302}',
            }]
        );
    }

    #[test]
    fn punctuation_is_split_out() {
        assert_eq!(
            compile("f(x)=2"),
            vec![
                MathNode::italic("f"),
                MathNode::literal("("),
                x(),
                MathNode::literal(")"),
                MathNode::literal("="),
                MathNode::literal("2"),
            ]
        );
    }

    #[test]
    fn letters_and_digits_coalesce() {
        assert_eq!(compile("2ab"), vec![MathNode::italic("2ab")]);
        assert_eq!(compile("42"), vec![MathNode::literal("42")]);
    }

    #[test]
    fn groups_are_spliced() {
        assert_eq!(compile("{a}{b}"), vec![MathNode::italic("a"), MathNode::italic("b")]);
        assert_eq!(
            compile("{a+b}^2"),
            vec![
                MathNode::italic("a"),
                MathNode::literal("+"),
                MathNode::Superscript {
                    base: vec![MathNode::italic("b")],
                    exponent: vec![MathNode::literal("2")],
                },
            ]
        );
    }

    #[test]
    fn unknown_command_degrades_to_its_name() {
        assert_eq!(compile(r"\foo"), vec![MathNode::literal("foo")]);
    }

    #[test]
    fn spacing_and_line_breaks() {
        assert_eq!(
            compile(r"a\,b\\c\!d"),
            vec![
                MathNode::italic("a"),
                MathNode::literal(" "),
                MathNode::italic("b"),
                MathNode::italic("c"),
                MathNode::italic("d"),
            ]
        );
        assert_eq!(compile(r"\quad"), vec![MathNode::literal("\u{2003}")]);
    }

    #[test]
    fn text_commands_keep_spaces() {
        assert_eq!(
            compile(r"\text{if } x"),
            vec![MathNode::literal("if "), x()]
        );
        assert_eq!(compile(r"\textbf{n}"), vec![MathNode::run("n", false, true)]);
    }

    #[test]
    fn style_commands_restyle_runs() {
        assert_eq!(compile(r"\mathrm{d}x"), vec![MathNode::literal("d"), x()]);
        assert_eq!(compile(r"\mathbf{v}"), vec![MathNode::run("v", false, true)]);
        assert_eq!(compile(r"\mathbb{R}"), vec![MathNode::literal("ℝ")]);
    }

    #[test]
    fn operatorname() {
        assert_eq!(
            compile(r"\operatorname{tr} A"),
            vec![MathNode::named_function("tr"), MathNode::italic("A")]
        );
        assert_eq!(
            compile(r"\operatorname*{arg\,max}"),
            vec![MathNode::named_function("arg max")]
        );
        assert_eq!(
            compile(r"\operatorname{\mathrm{sgn}}"),
            vec![MathNode::named_function("sgn")]
        );
    }

    #[test]
    fn escaped_characters() {
        assert_eq!(
            compile(r"\{ 50\% \}"),
            vec![
                MathNode::literal("{"),
                MathNode::literal("50"),
                MathNode::literal("%"),
                MathNode::literal("}"),
            ]
        );
    }

    #[test]
    fn malformed_input_terminates() {
        for input in [
            "{", "}", "{{{", r"\frac{a", r"\frac", r"\sqrt[", "^", "_", "x^", r"\left(",
            r"\right)", r"\\", "\\", r"\left(\left(", "^_^_",
        ] {
            let _ = compile(input);
        }
    }

    #[test]
    fn deep_nesting_is_bounded() {
        let input = format!("{}x{}", "{".repeat(500), "}".repeat(500));
        let nodes = compile(&input);
        assert_eq!(nodes.len(), 1);

        let input = r"\left(".repeat(300);
        let _ = compile(&input);

        let input = "x^".repeat(300);
        let _ = compile(&input);
    }

    #[test]
    fn long_binder_chains_stay_shallow() {
        let input = format!("x{}", "^1".repeat(100_000));
        let nodes = compile(&input);
        let height = nodes.iter().map(MathNode::height).max().unwrap_or(0);
        assert!(height <= MAX_DEPTH + 1, "height {}", height);
        assert_eq!(plain_text(&nodes).len(), 100_001);
        drop(nodes);

        let input = format!("x{}", "_a^b".repeat(20_000));
        let nodes = compile(&input);
        assert!(nodes.iter().all(|n| n.height() <= MAX_DEPTH + 1));
    }

    #[test]
    fn short_binder_chains_nest() {
        assert_eq!(
            compile("x^1^2"),
            vec![MathNode::Superscript {
                base: vec![MathNode::Superscript {
                    base: vec![x()],
                    exponent: vec![MathNode::literal("1")],
                }],
                exponent: vec![MathNode::literal("2")],
            }]
        );
    }

    #[test]
    fn non_delimiter_command_after_left_is_not_consumed() {
        assert_eq!(
            compile(r"\left\right)"),
            vec![MathNode::Delimiter {
                content: vec![MathNode::placeholder()],
                open: "(".to_string(),
                close: ")".to_string(),
            }]
        );
        assert_eq!(
            compile(r"\left\alpha x \right]"),
            vec![MathNode::Delimiter {
                content: vec![MathNode::italic("α"), x()],
                open: "(".to_string(),
                close: "]".to_string(),
            }]
        );
        assert_eq!(compile(r"\big\alpha"), vec![MathNode::italic("α")]);
    }

    #[test]
    fn plain_text_round_trip() {
        let input = "a + b = c, 3 < 4";
        let text: String = compile(input).iter().map(|n| n.plain_text()).collect();
        assert_eq!(text, "a+b=c,3<4");
    }
}
