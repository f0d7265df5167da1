//! Static LaTeX symbol tables
//!
//! Command names are stored without the leading backslash.

use fxhash::FxHashMap;
use lazy_static::lazy_static;
use phf::{phf_map, phf_set};

lazy_static! {
    /// Greek letters. Rendered italic.
    pub static ref GREEK: FxHashMap<&'static str, &'static str> = {
        let mut m = FxHashMap::default();

        // === Lowercase ===
        m.insert("alpha", "α");
        m.insert("beta", "β");
        m.insert("gamma", "γ");
        m.insert("delta", "δ");
        m.insert("epsilon", "ϵ");
        m.insert("varepsilon", "ε");
        m.insert("zeta", "ζ");
        m.insert("eta", "η");
        m.insert("theta", "θ");
        m.insert("vartheta", "ϑ");
        m.insert("iota", "ι");
        m.insert("kappa", "κ");
        m.insert("lambda", "λ");
        m.insert("mu", "μ");
        m.insert("nu", "ν");
        m.insert("xi", "ξ");
        m.insert("omicron", "ο");
        m.insert("pi", "π");
        m.insert("varpi", "ϖ");
        m.insert("rho", "ρ");
        m.insert("varrho", "ϱ");
        m.insert("sigma", "σ");
        m.insert("varsigma", "ς");
        m.insert("tau", "τ");
        m.insert("upsilon", "υ");
        m.insert("phi", "ϕ");
        m.insert("varphi", "φ");
        m.insert("chi", "χ");
        m.insert("psi", "ψ");
        m.insert("omega", "ω");

        // === Uppercase ===
        m.insert("Gamma", "Γ");
        m.insert("Delta", "Δ");
        m.insert("Theta", "Θ");
        m.insert("Lambda", "Λ");
        m.insert("Xi", "Ξ");
        m.insert("Pi", "Π");
        m.insert("Sigma", "Σ");
        m.insert("Upsilon", "Υ");
        m.insert("Phi", "Φ");
        m.insert("Psi", "Ψ");
        m.insert("Omega", "Ω");

        m
    };

    /// Operators, relations, arrows and miscellaneous symbols. Rendered upright.
    pub static ref OPERATORS: FxHashMap<&'static str, &'static str> = {
        let mut m = FxHashMap::default();

        // === Binary operators ===
        m.insert("times", "×");
        m.insert("cdot", "⋅");
        m.insert("cdotp", "⋅");
        m.insert("pm", "±");
        m.insert("mp", "∓");
        m.insert("div", "÷");
        m.insert("ast", "∗");
        m.insert("star", "⋆");
        m.insert("circ", "∘");
        m.insert("bullet", "∙");
        m.insert("oplus", "⊕");
        m.insert("ominus", "⊖");
        m.insert("otimes", "⊗");
        m.insert("odot", "⊙");
        m.insert("setminus", "∖");
        m.insert("wedge", "∧");
        m.insert("land", "∧");
        m.insert("vee", "∨");
        m.insert("lor", "∨");
        m.insert("cup", "∪");
        m.insert("cap", "∩");

        // === Relations ===
        m.insert("leq", "≤");
        m.insert("le", "≤");
        m.insert("geq", "≥");
        m.insert("ge", "≥");
        m.insert("neq", "≠");
        m.insert("ne", "≠");
        m.insert("approx", "≈");
        m.insert("equiv", "≡");
        m.insert("sim", "∼");
        m.insert("simeq", "≃");
        m.insert("cong", "≅");
        m.insert("propto", "∝");
        m.insert("ll", "≪");
        m.insert("gg", "≫");
        m.insert("mid", "∣");
        m.insert("parallel", "∥");
        m.insert("perp", "⊥");
        m.insert("models", "⊨");
        m.insert("vdash", "⊢");

        // === Sets and logic ===
        m.insert("in", "∈");
        m.insert("notin", "∉");
        m.insert("ni", "∋");
        m.insert("subset", "⊂");
        m.insert("subseteq", "⊆");
        m.insert("supset", "⊃");
        m.insert("supseteq", "⊇");
        m.insert("emptyset", "∅");
        m.insert("varnothing", "∅");
        m.insert("forall", "∀");
        m.insert("exists", "∃");
        m.insert("nexists", "∄");
        m.insert("neg", "¬");
        m.insert("lnot", "¬");

        // === Arrows ===
        m.insert("to", "→");
        m.insert("rightarrow", "→");
        m.insert("leftarrow", "←");
        m.insert("gets", "←");
        m.insert("leftrightarrow", "↔");
        m.insert("Rightarrow", "⇒");
        m.insert("Leftarrow", "⇐");
        m.insert("Leftrightarrow", "⇔");
        m.insert("implies", "⟹");
        m.insert("impliedby", "⟸");
        m.insert("iff", "⟺");
        m.insert("mapsto", "↦");
        m.insert("longrightarrow", "⟶");
        m.insert("longleftarrow", "⟵");
        m.insert("uparrow", "↑");
        m.insert("downarrow", "↓");
        m.insert("nearrow", "↗");
        m.insert("searrow", "↘");

        // === Large operators ===
        m.insert("sum", "∑");
        m.insert("prod", "∏");
        m.insert("coprod", "∐");
        m.insert("int", "∫");
        m.insert("iint", "∬");
        m.insert("iiint", "∭");
        m.insert("oint", "∮");
        m.insert("bigcup", "⋃");
        m.insert("bigcap", "⋂");

        // === Miscellaneous ===
        m.insert("infty", "∞");
        m.insert("partial", "∂");
        m.insert("nabla", "∇");
        m.insert("ldots", "…");
        m.insert("dots", "…");
        m.insert("cdots", "⋯");
        m.insert("vdots", "⋮");
        m.insert("ddots", "⋱");
        m.insert("angle", "∠");
        m.insert("triangle", "△");
        m.insert("degree", "°");
        m.insert("prime", "′");
        m.insert("hbar", "ℏ");
        m.insert("ell", "ℓ");
        m.insert("Re", "ℜ");
        m.insert("Im", "ℑ");
        m.insert("aleph", "ℵ");
        m.insert("langle", "⟨");
        m.insert("rangle", "⟩");
        m.insert("lfloor", "⌊");
        m.insert("rfloor", "⌋");
        m.insert("lceil", "⌈");
        m.insert("rceil", "⌉");
        m.insert("lbrace", "{");
        m.insert("rbrace", "}");
        m.insert("vert", "|");
        m.insert("Vert", "‖");
        m.insert("lvert", "|");
        m.insert("rvert", "|");
        m.insert("lVert", "‖");
        m.insert("rVert", "‖");

        m
    };
}

/// Function names rendered upright as `NamedFunction`.
pub static NAMED_FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "sin", "cos", "tan", "cot", "sec", "csc",
    "arcsin", "arccos", "arctan",
    "sinh", "cosh", "tanh", "coth",
    "ln", "log", "lg", "exp",
    "lim", "liminf", "limsup",
    "max", "min", "sup", "inf",
    "det", "dim", "ker", "deg", "gcd", "lcm", "arg", "hom", "mod", "Pr",
};

/// Accent commands and the combining mark each one places.
pub static ACCENTS: phf::Map<&'static str, char> = phf_map! {
    "hat" => '\u{0302}',
    "widehat" => '\u{0302}',
    "bar" => '\u{0304}',
    "overline" => '\u{0305}',
    "vec" => '\u{20D7}',
    "dot" => '\u{0307}',
    "ddot" => '\u{0308}',
    "tilde" => '\u{0303}',
    "widetilde" => '\u{0303}',
    "check" => '\u{030C}',
    "breve" => '\u{0306}',
    "acute" => '\u{0301}',
    "grave" => '\u{0300}',
};

/// Single characters that always stand alone as an upright run.
pub const PUNCTUATION: &[char] = &[
    '+', '-', '=', '<', '>', '(', ')', ',', '.', ':', ';', '!', '?', '[', ']', '|', '/',
];

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Resolve a delimiter command used after `\left`, `\right` or `\big`.
pub fn delimiter_command(name: &str) -> Option<&'static str> {
    match name {
        "{" | "lbrace" => Some("{"),
        "}" | "rbrace" => Some("}"),
        "|" | "Vert" | "lVert" | "rVert" => Some("‖"),
        "vert" | "lvert" | "rvert" => Some("|"),
        "langle" => Some("⟨"),
        "rangle" => Some("⟩"),
        "lfloor" => Some("⌊"),
        "rfloor" => Some("⌋"),
        "lceil" => Some("⌈"),
        "rceil" => Some("⌉"),
        _ => None,
    }
}

/// Double-struck form of a Latin letter (`\mathbb`).
pub fn double_struck(c: char) -> Option<char> {
    // Letters with pre-existing code points outside the Mathematical
    // Alphanumeric block.
    let special = match c {
        'C' => Some('ℂ'),
        'H' => Some('ℍ'),
        'N' => Some('ℕ'),
        'P' => Some('ℙ'),
        'Q' => Some('ℚ'),
        'R' => Some('ℝ'),
        'Z' => Some('ℤ'),
        _ => None,
    };
    if special.is_some() {
        return special;
    }
    let offset = match c {
        'A'..='Z' => 0x1D538 + (c as u32 - 'A' as u32),
        'a'..='z' => 0x1D552 + (c as u32 - 'a' as u32),
        '0'..='9' => 0x1D7D8 + (c as u32 - '0' as u32),
        _ => return None,
    };
    char::from_u32(offset)
}
