//! LaTeX symbol and command mappings for Unicode transliteration
//!
//! Two tables drive the text substitution steps of the transliterator:
//! - `GREEK_LETTERS`: Greek-letter command names, substituted with a
//!   word-boundary guard so `\theta` never matches inside a longer command
//! - `MATH_SYMBOLS`: literal symbol commands, substituted by plain string
//!   replacement in insertion order
//!
//! Blackboard-bold and script capitals are computed from codepoints rather
//! than tabulated; see `blackboard_letter` and `script_letter`.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Greek letters (math mode command names)
    pub static ref GREEK_LETTERS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        // Lowercase
        m.insert("\\alpha", "α");
        m.insert("\\beta", "β");
        m.insert("\\gamma", "γ");
        m.insert("\\delta", "δ");
        m.insert("\\epsilon", "ε");
        m.insert("\\varepsilon", "ε");
        m.insert("\\zeta", "ζ");
        m.insert("\\eta", "η");
        m.insert("\\theta", "θ");
        m.insert("\\vartheta", "ϑ");
        m.insert("\\iota", "ι");
        m.insert("\\kappa", "κ");
        m.insert("\\lambda", "λ");
        m.insert("\\mu", "μ");
        m.insert("\\nu", "ν");
        m.insert("\\xi", "ξ");
        m.insert("\\pi", "π");
        m.insert("\\varpi", "ϖ");
        m.insert("\\rho", "ρ");
        m.insert("\\varrho", "ϱ");
        m.insert("\\sigma", "σ");
        m.insert("\\varsigma", "ς");
        m.insert("\\tau", "τ");
        m.insert("\\upsilon", "υ");
        m.insert("\\phi", "φ");
        m.insert("\\varphi", "φ");
        m.insert("\\chi", "χ");
        m.insert("\\psi", "ψ");
        m.insert("\\omega", "ω");
        // Uppercase (only the names LaTeX actually defines)
        m.insert("\\Gamma", "Γ");
        m.insert("\\Delta", "Δ");
        m.insert("\\Theta", "Θ");
        m.insert("\\Lambda", "Λ");
        m.insert("\\Xi", "Ξ");
        m.insert("\\Pi", "Π");
        m.insert("\\Sigma", "Σ");
        m.insert("\\Upsilon", "Υ");
        m.insert("\\Phi", "Φ");
        m.insert("\\Psi", "Ψ");
        m.insert("\\Omega", "Ω");
        m
    };

    /// Literal symbol commands, most specific first.
    ///
    /// Substitution is plain substring replacement, so any command that is a
    /// backslash-prefix of another (`\cdot`/`\cdots`, `\in`/`\int`/`\infty`,
    /// `\to`/`\top`, `\sim`/`\simeq`, `\subset`/`\subseteq`) must come after
    /// the longer form. IndexMap preserves this insertion order.
    pub static ref MATH_SYMBOLS: IndexMap<&'static str, &'static str> = {
        let mut m = IndexMap::new();
        // Arrows
        m.insert("\\longleftrightarrow", "⟷");
        m.insert("\\Longleftrightarrow", "⟺");
        m.insert("\\longrightarrow", "⟶");
        m.insert("\\Longrightarrow", "⟹");
        m.insert("\\longleftarrow", "⟵");
        m.insert("\\Longleftarrow", "⟸");
        m.insert("\\leftrightarrow", "↔");
        m.insert("\\Leftrightarrow", "⇔");
        m.insert("\\rightarrow", "→");
        m.insert("\\Rightarrow", "⇒");
        m.insert("\\leftarrow", "←");
        m.insert("\\Leftarrow", "⇐");
        m.insert("\\mapsto", "↦");
        m.insert("\\uparrow", "↑");
        m.insert("\\downarrow", "↓");
        // Relations
        m.insert("\\subseteq", "⊆");
        m.insert("\\supseteq", "⊇");
        m.insert("\\subset", "⊂");
        m.insert("\\supset", "⊃");
        m.insert("\\notin", "∉");
        m.insert("\\leq", "≤");
        m.insert("\\geq", "≥");
        m.insert("\\neq", "≠");
        m.insert("\\approx", "≈");
        m.insert("\\equiv", "≡");
        m.insert("\\propto", "∝");
        m.insert("\\simeq", "≃");
        m.insert("\\cong", "≅");
        m.insert("\\sim", "∼");
        m.insert("\\ll", "≪");
        m.insert("\\gg", "≫");
        m.insert("\\perp", "⊥");
        m.insert("\\parallel", "∥");
        m.insert("\\mid", "∣");
        m.insert("\\vdash", "⊢");
        m.insert("\\models", "⊨");
        // Operators and big operators (limit-carrying forms are classified
        // complex before this table is ever consulted)
        m.insert("\\infty", "∞");
        m.insert("\\int", "∫");
        // Operator names, before \in so \inf and friends are never split
        m.insert("\\limits", "");
        m.insert("\\liminf", "lim inf");
        m.insert("\\limsup", "lim sup");
        m.insert("\\lim", "lim");
        m.insert("\\inf", "inf");
        m.insert("\\sup", "sup");
        m.insert("\\log", "log");
        m.insert("\\exp", "exp");
        m.insert("\\min", "min");
        m.insert("\\max", "max");
        m.insert("\\det", "det");
        m.insert("\\arg", "arg");
        m.insert("\\sinh", "sinh");
        m.insert("\\cosh", "cosh");
        m.insert("\\tanh", "tanh");
        m.insert("\\sin", "sin");
        m.insert("\\cos", "cos");
        m.insert("\\tan", "tan");
        m.insert("\\in", "∈");
        m.insert("\\times", "×");
        m.insert("\\cdots", "⋯");
        m.insert("\\cdot", "⋅");
        m.insert("\\pm", "±");
        m.insert("\\mp", "∓");
        m.insert("\\div", "÷");
        m.insert("\\ast", "∗");
        m.insert("\\oplus", "⊕");
        m.insert("\\ominus", "⊖");
        m.insert("\\otimes", "⊗");
        m.insert("\\circ", "∘");
        m.insert("\\bullet", "•");
        m.insert("\\star", "⋆");
        m.insert("\\setminus", "∖");
        m.insert("\\cup", "∪");
        m.insert("\\cap", "∩");
        m.insert("\\wedge", "∧");
        m.insert("\\vee", "∨");
        m.insert("\\land", "∧");
        m.insert("\\lor", "∨");
        m.insert("\\neg", "¬");
        m.insert("\\lnot", "¬");
        m.insert("\\sum", "∑");
        m.insert("\\prod", "∏");
        m.insert("\\sqrt", "√");
        m.insert("\\top", "⊤");
        m.insert("\\to", "→");
        m.insert("\\bot", "⊥");
        m.insert("\\nabla", "∇");
        m.insert("\\partial", "∂");
        // Logic and sets
        m.insert("\\nexists", "∄");
        m.insert("\\forall", "∀");
        m.insert("\\exists", "∃");
        m.insert("\\emptyset", "∅");
        m.insert("\\varnothing", "∅");
        // Dots
        m.insert("\\ldots", "…");
        m.insert("\\vdots", "⋮");
        m.insert("\\ddots", "⋱");
        m.insert("\\dots", "…");
        // Miscellaneous
        m.insert("\\prime", "′");
        m.insert("\\dagger", "†");
        m.insert("\\ell", "ℓ");
        m.insert("\\hbar", "ℏ");
        m.insert("\\Re", "ℜ");
        m.insert("\\Im", "ℑ");
        m.insert("\\aleph", "ℵ");
        m.insert("\\angle", "∠");
        m.insert("\\triangle", "△");
        m.insert("\\degree", "°");
        // Spacing
        m.insert("\\qquad", "  ");
        m.insert("\\quad", " ");
        m.insert("\\,", " ");
        m.insert("\\;", " ");
        m.insert("\\:", " ");
        m.insert("\\!", "");
        // Last: \ln is a backslash-prefix of \lnot above
        m.insert("\\ln", "ln");
        m
    };
}

/// Replace a LaTeX command only if it is not followed by a letter.
///
/// Plain substring replacement would turn `\thetaX` into `θX`; a command match
/// is only complete when the next character cannot extend the command name.
pub fn replace_command_safe(input: &str, cmd: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut remaining = input;

    while let Some(pos) = remaining.find(cmd) {
        result.push_str(&remaining[..pos]);

        let after_cmd = &remaining[pos + cmd.len()..];
        let next_char = after_cmd.chars().next();

        if next_char.map(|c| c.is_ascii_alphabetic()).unwrap_or(false) {
            // Part of a longer command name, keep as-is
            result.push_str(cmd);
        } else {
            result.push_str(replacement);
        }

        remaining = after_cmd;
    }

    result.push_str(remaining);
    result
}

/// Blackboard-bold capital for `\mathbb{..}`.
///
/// The commonly used letters live in the Letterlike Symbols block, not at a
/// uniform offset, so they are enumerated here. Other capitals fall through to
/// the generic command stripping.
pub fn blackboard_letter(c: char) -> Option<char> {
    Some(match c {
        'E' => '𝔼',
        'R' => 'ℝ',
        'N' => 'ℕ',
        'Z' => 'ℤ',
        'C' => 'ℂ',
        _ => return None,
    })
}

/// Script capital for `\mathcal{..}`, computed from U+1D49C MATHEMATICAL
/// SCRIPT CAPITAL A so every capital letter is covered.
pub fn script_letter(c: char) -> Option<char> {
    if c.is_ascii_uppercase() {
        char::from_u32(0x1D49C + (c as u32 - 'A' as u32))
    } else {
        None
    }
}
