//! LaTeX math → Unicode transliteration
//!
//! Classifies a math expression as simple or complex, and rewrites simple
//! expressions into plain Unicode so inline math reads naturally in prose.
//! Complex expressions (and all display math) are left untouched so the
//! downstream renderer can turn them into images.
//!
//! The rewrite is a fixed sequence of substitution steps; order matters
//! because later steps assume earlier ones have normalized the structure
//! (e.g. brace removal must come after superscript group handling).

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::data::scripts::{to_subscript, to_superscript};
use crate::data::symbols::{
    blackboard_letter, replace_command_safe, script_letter, GREEK_LETTERS, MATH_SYMBOLS,
};

/// Constructs that cannot be approximated as flowing Unicode text.
/// Checked in order, first match wins.
const COMPLEX_MARKERS: [&str; 11] = [
    "\\frac{",      // fractions
    "\\sqrt{",      // square roots with content
    "\\begin{",     // environments
    "\\sum_",       // summation with limits
    "\\int_",       // integrals with limits
    "\\langle",     // angle brackets (bra-ket)
    "\\underbrace", // underbraces
    "\\overbrace",  // overbraces
    "\\matrix",     // matrices
    "\\pmatrix",    // matrices
    "\\bmatrix",    // matrices
];

/// Check if a LaTeX expression is too complex for Unicode conversion.
pub fn is_complex_math(latex: &str) -> bool {
    COMPLEX_MARKERS.iter().any(|marker| latex.contains(marker))
}

lazy_static! {
    static ref MATHBB: Regex = Regex::new(r"\\mathbb\{([A-Z])\}").unwrap();
    static ref MATHCAL: Regex = Regex::new(r"\\mathcal\{([A-Z])\}").unwrap();
    static ref TEXT_WRAPPER: Regex = Regex::new(r"\\text(?:it|bf)?\{([^}]+)\}").unwrap();
    static ref SUPERSCRIPT_GROUP: Regex = Regex::new(r"\^\{([^}]+)\}").unwrap();
    static ref SUPERSCRIPT_SINGLE: Regex = Regex::new(r"\^([a-zA-Z0-9αβγδθφ])").unwrap();
    static ref SUBSCRIPT_GROUP: Regex = Regex::new(r"_\{([^}]+)\}").unwrap();
    static ref SUBSCRIPT_SINGLE: Regex = Regex::new(r"_([a-zA-Z0-9])").unwrap();
    /// Accent commands → combining diacritic, braced and unbraced forms
    static ref ACCENTS: Vec<(Regex, Regex, char)> = vec![
        (
            Regex::new(r"\\hat\{([a-zA-Z])\}").unwrap(),
            Regex::new(r"\\hat([a-zA-Z])").unwrap(),
            '\u{0302}',
        ),
        (
            Regex::new(r"\\bar\{([a-zA-Z])\}").unwrap(),
            Regex::new(r"\\bar([a-zA-Z])").unwrap(),
            '\u{0304}',
        ),
        (
            Regex::new(r"\\tilde\{([a-zA-Z])\}").unwrap(),
            Regex::new(r"\\tilde([a-zA-Z])").unwrap(),
            '\u{0303}',
        ),
    ];
    static ref COMMAND: Regex = Regex::new(r"\\[a-zA-Z]+").unwrap();
}

/// Convert simple LaTeX math to Unicode.
///
/// Returns `None` when the expression is too complex for a text rendering,
/// or when nothing printable is left after conversion; the caller must then
/// preserve the original markup for image-based rendering.
pub fn latex_to_unicode(latex: &str) -> Option<String> {
    let trimmed = latex.trim();

    if is_complex_math(trimmed) {
        return None;
    }

    let mut result = trimmed.to_string();

    // Greek letters, guarded against longer command names
    for (cmd, letter) in GREEK_LETTERS.iter() {
        result = replace_command_safe(&result, cmd, letter);
    }

    // Literal symbol commands, most specific first
    for (cmd, glyph) in MATH_SYMBOLS.iter() {
        result = result.replace(cmd, glyph);
    }

    // Blackboard-bold and script capitals
    result = MATHBB
        .replace_all(&result, |caps: &Captures| {
            match caps[1].chars().next().and_then(blackboard_letter) {
                Some(letter) => letter.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned();
    result = MATHCAL
        .replace_all(&result, |caps: &Captures| {
            match caps[1].chars().next().and_then(script_letter) {
                Some(letter) => letter.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned();

    // \text{..}, \textit{..}, \textbf{..} → bare content
    result = TEXT_WRAPPER.replace_all(&result, "$1").into_owned();

    // Superscripts: ^{..} or ^x
    result = SUPERSCRIPT_GROUP
        .replace_all(&result, |caps: &Captures| to_superscript(&caps[1]))
        .into_owned();
    result = SUPERSCRIPT_SINGLE
        .replace_all(&result, |caps: &Captures| to_superscript(&caps[1]))
        .into_owned();

    // Subscripts: _{..} or _x
    result = SUBSCRIPT_GROUP
        .replace_all(&result, |caps: &Captures| to_subscript(&caps[1]))
        .into_owned();
    result = SUBSCRIPT_SINGLE
        .replace_all(&result, |caps: &Captures| to_subscript(&caps[1]))
        .into_owned();

    // Accents: \hat{x} and \hatx → x + combining mark
    for (braced, bare, mark) in ACCENTS.iter() {
        let replace = |caps: &Captures| format!("{}{}", &caps[1], mark);
        result = braced.replace_all(&result, replace).into_owned();
        result = bare.replace_all(&result, replace).into_owned();
    }

    // Norm bars
    result = result.replace("\\|", "‖");

    // Remaining braces
    result = result.replace('{', "").replace('}', "");

    // Remaining unknown commands; their argument braces are already gone, so
    // only the command name is dropped and trailing content survives
    result = COMMAND.replace_all(&result, "").into_owned();
    result = result.replace('\\', "");

    // Collapse whitespace
    let result = result.split_whitespace().collect::<Vec<_>>().join(" ");

    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}

/// Delimiter kind of a math span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathDelimiter {
    /// `$...$`, eligible for Unicode transliteration
    Inline,
    /// `$$...$$`, always image-rendered
    Display,
}

/// A math span located in a document
#[derive(Debug, Clone)]
pub struct MathSpan<'a> {
    pub delimiter: MathDelimiter,
    /// Content between the delimiters
    pub body: &'a str,
    /// Byte offset of the opening delimiter
    pub start: usize,
    /// Byte offset just past the closing delimiter
    pub end: usize,
}

/// Locate every math span in `content`.
///
/// Display spans are `$$...$$` pairs and may cross lines. Inline spans are
/// single-`$` pairs on one line with a non-empty body; a candidate whose
/// closing `$` abuts another `$` is rejected, matching the behavior of a
/// scanner that never confuses `$a$$b$$` with inline math.
pub fn scan_math_spans(content: &str) -> Vec<MathSpan<'_>> {
    let bytes = content.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'$' {
            i += 1;
            continue;
        }

        if i + 1 < bytes.len() && bytes[i + 1] == b'$' {
            match content[i + 2..].find("$$") {
                Some(rel) => {
                    let close = i + 2 + rel;
                    spans.push(MathSpan {
                        delimiter: MathDelimiter::Display,
                        body: &content[i + 2..close],
                        start: i,
                        end: close + 2,
                    });
                    i = close + 2;
                }
                // Unterminated display block: skip the delimiter
                None => i += 2,
            }
            continue;
        }

        // Inline candidate: scan to the closing '$' on the same line
        let mut j = i + 1;
        while j < bytes.len() && bytes[j] != b'$' && bytes[j] != b'\n' {
            j += 1;
        }

        let closed = j < bytes.len() && bytes[j] == b'$' && j > i + 1;
        let abuts_next = bytes.get(j + 1) == Some(&b'$');

        if closed && !abuts_next {
            spans.push(MathSpan {
                delimiter: MathDelimiter::Inline,
                body: &content[i + 1..j],
                start: i,
                end: j + 1,
            });
            i = j + 1;
        } else {
            i += 1;
        }
    }

    spans
}

/// Convert inline math spans to Unicode where possible.
///
/// Display spans and inline spans that fail transliteration are preserved
/// byte-for-byte so the downstream image renderer still sees them.
pub fn convert_inline_math(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut last = 0;

    for span in scan_math_spans(content) {
        out.push_str(&content[last..span.start]);
        match span.delimiter {
            MathDelimiter::Inline => match latex_to_unicode(span.body) {
                Some(unicode) => out.push_str(&unicode),
                None => out.push_str(&content[span.start..span.end]),
            },
            MathDelimiter::Display => out.push_str(&content[span.start..span.end]),
        }
        last = span.end;
    }

    out.push_str(&content[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_classification() {
        assert!(is_complex_math(r"\frac{1}{2}"));
        assert!(is_complex_math(r"\sqrt{x+1}"));
        assert!(is_complex_math(r"\begin{aligned} x &= y \end{aligned}"));
        assert!(is_complex_math(r"\sum_{i=1}^n i"));
        assert!(is_complex_math(r"\int_0^1 f(x) dx"));
        assert!(is_complex_math(r"\langle u, v \rangle"));
        assert!(is_complex_math(r"\underbrace{a+b}_{c}"));
        assert!(is_complex_math(r"\begin{pmatrix} a & b \end{pmatrix}"));

        assert!(!is_complex_math(r"\alpha + \beta"));
        assert!(!is_complex_math(r"x^2 + y^2"));
        // A bare \sum without limits is fine as text
        assert!(!is_complex_math(r"\sum x_i"));
    }

    #[test]
    fn test_greek_letters() {
        assert_eq!(latex_to_unicode(r"\alpha"), Some("α".to_string()));
        assert_eq!(latex_to_unicode(r"\Omega"), Some("Ω".to_string()));
        assert_eq!(
            latex_to_unicode(r"\alpha + \beta"),
            Some("α + β".to_string())
        );
    }

    #[test]
    fn test_greek_prefix_not_partially_matched() {
        // \vartheta must not decay into "var" + θ
        assert_eq!(latex_to_unicode(r"\vartheta"), Some("ϑ".to_string()));
        // An unknown theta-prefixed command is stripped whole, never split
        assert_eq!(latex_to_unicode(r"\thetaX"), None);
        assert_eq!(latex_to_unicode(r"\thetaX y"), Some("y".to_string()));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(latex_to_unicode(r"a \leq b"), Some("a ≤ b".to_string()));
        assert_eq!(latex_to_unicode(r"x \to y"), Some("x → y".to_string()));
        assert_eq!(latex_to_unicode(r"\top"), Some("⊤".to_string()));
        assert_eq!(latex_to_unicode(r"x \in S"), Some("x ∈ S".to_string()));
        assert_eq!(latex_to_unicode(r"\infty"), Some("∞".to_string()));
    }

    #[test]
    fn test_blackboard_and_script() {
        assert_eq!(latex_to_unicode(r"\mathbb{R}"), Some("ℝ".to_string()));
        assert_eq!(latex_to_unicode(r"\mathbb{E}[X]"), Some("𝔼[X]".to_string()));
        assert_eq!(latex_to_unicode(r"\mathcal{S}"), Some("𝒮".to_string()));
        // Unsupported blackboard letters reduce to nothing and fall back to
        // image rendering
        assert_eq!(latex_to_unicode(r"\mathbb{Q}"), None);
    }

    #[test]
    fn test_text_wrappers() {
        assert_eq!(
            latex_to_unicode(r"\text{if } x"),
            Some("if x".to_string())
        );
        assert_eq!(latex_to_unicode(r"\textbf{bold}"), Some("bold".to_string()));
    }

    #[test]
    fn test_superscripts() {
        assert_eq!(latex_to_unicode(r"x^{2}"), Some("x²".to_string()));
        assert_eq!(latex_to_unicode(r"x^2"), Some("x²".to_string()));
        assert_eq!(latex_to_unicode(r"e^{n+1}"), Some("eⁿ⁺¹".to_string()));
        // Unmapped characters pass through, not dropped
        assert_eq!(latex_to_unicode(r"x^{2q}"), Some("x²q".to_string()));
    }

    #[test]
    fn test_subscripts() {
        assert_eq!(latex_to_unicode(r"a_{i}"), Some("aᵢ".to_string()));
        assert_eq!(latex_to_unicode(r"a_i"), Some("aᵢ".to_string()));
        assert_eq!(latex_to_unicode(r"x_{ij}"), Some("xᵢⱼ".to_string()));
    }

    #[test]
    fn test_accents() {
        assert_eq!(latex_to_unicode(r"\hat{x}"), Some("x\u{0302}".to_string()));
        assert_eq!(latex_to_unicode(r"\hatx"), Some("x\u{0302}".to_string()));
        assert_eq!(latex_to_unicode(r"\bar{y}"), Some("y\u{0304}".to_string()));
        assert_eq!(latex_to_unicode(r"\tilde{n}"), Some("n\u{0303}".to_string()));
    }

    #[test]
    fn test_norm_bars() {
        assert_eq!(latex_to_unicode(r"\|v\|"), Some("‖v‖".to_string()));
    }

    #[test]
    fn test_unknown_commands_stripped_content_kept() {
        // Brace removal runs first, so the command token is dropped and the
        // non-letter trailing content survives
        assert_eq!(latex_to_unicode(r"\mathrm{2}"), Some("2".to_string()));
        assert_eq!(latex_to_unicode(r"\displaystyle x"), Some("x".to_string()));
    }

    #[test]
    fn test_empty_result_is_failure() {
        assert_eq!(latex_to_unicode(r"\text{}"), None);
        assert_eq!(latex_to_unicode("{}"), None);
        assert_eq!(latex_to_unicode("   "), None);
    }

    #[test]
    fn test_complex_returns_none() {
        assert_eq!(latex_to_unicode(r"\frac{1}{2}"), None);
        assert_eq!(latex_to_unicode(r"\begin{bmatrix}1\end{bmatrix}"), None);
    }

    #[test]
    fn test_scan_spans() {
        let spans = scan_math_spans("a $x$ b $$y$$ c");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].delimiter, MathDelimiter::Inline);
        assert_eq!(spans[0].body, "x");
        assert_eq!(spans[1].delimiter, MathDelimiter::Display);
        assert_eq!(spans[1].body, "y");
    }

    #[test]
    fn test_scan_ignores_multiline_inline() {
        let spans = scan_math_spans("a $x\ny$ b");
        assert!(spans.is_empty());
    }

    #[test]
    fn test_scan_display_across_lines() {
        let spans = scan_math_spans("$$\n\\frac{1}{2}\n$$");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].delimiter, MathDelimiter::Display);
    }

    #[test]
    fn test_convert_inline_math() {
        assert_eq!(
            convert_inline_math(r"Let $\alpha + \beta^{2}$ hold."),
            "Let α + β² hold."
        );
    }

    #[test]
    fn test_convert_preserves_complex_inline() {
        let input = r"A $\frac{1}{2}$ B";
        assert_eq!(convert_inline_math(input), input);
    }

    #[test]
    fn test_convert_leaves_display_untouched() {
        // Display math is never transliterated, even when simple
        let input = "before\n\n$$\\alpha + \\beta$$\n\nafter";
        assert_eq!(convert_inline_math(input), input);
    }

    #[test]
    fn test_convert_preserves_empty_reduction() {
        let input = r"x $\text{}$ y";
        assert_eq!(convert_inline_math(input), input);
    }

    #[test]
    fn test_adjacent_dollars_never_inline() {
        let input = "costs $$ nothing";
        assert_eq!(convert_inline_math(input), input);
    }
}
