//! Markup normalization passes
//!
//! Regex-based cleanup applied at two points in the pipeline:
//! - `normalize_markdown` runs on the intermediate markdown pandoc produces
//!   from LaTeX (or on raw markdown input) before math conversion
//! - `normalize_html` runs on the rendered HTML to fit Substack's layout
//!   expectations
//!
//! Both passes are idempotent: running one twice on its own output changes
//! nothing. The image-rewrap rule checks for an existing wrapper for exactly
//! that reason.

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

lazy_static! {
    /// Pandoc fenced div marker with attributes, e.g. `::: {.proof}`
    static ref FENCED_DIV_ATTR: Regex = Regex::new(r"(?m)^:::\s*\{[^}]*\}\s*$").unwrap();
    /// Bare fenced div closer
    static ref FENCED_DIV_BARE: Regex = Regex::new(r"(?m)^:::\s*$").unwrap();
    static ref EQUATION_OPEN: Regex = Regex::new(r"\$\$\s*\\begin\{equation\*?\}").unwrap();
    static ref EQUATION_CLOSE: Regex = Regex::new(r"\\end\{equation\*?\}\s*\$\$").unwrap();
    static ref EMPTY_PARAGRAPH: Regex = Regex::new(r"<p>\s*</p>").unwrap();
    static ref DISPLAY_MATH_IMG: Regex =
        Regex::new(r#"<img[^>]*class="math display"[^>]*>"#).unwrap();
}

const CENTERED_OPEN: &str = r#"<p style="text-align:center;">"#;

/// Clean up intermediate markdown before math conversion and rendering.
pub fn normalize_markdown(markdown: &str) -> String {
    let mut content = markdown.to_string();

    // Environment renaming runs before the generic marker stripping below,
    // since it restructures the text the stripper matches against.

    // Collapse \begin{equation} blocks inside $$ to the bare $$ form
    content = EQUATION_OPEN.replace_all(&content, NoExpand("$$")).into_owned();
    content = EQUATION_CLOSE.replace_all(&content, NoExpand("$$")).into_owned();

    // The HTML renderer only understands the "aligned" spelling
    content = content.replace("\\begin{align*}", "\\begin{aligned}");
    content = content.replace("\\end{align*}", "\\end{aligned}");
    content = content.replace("\\begin{align}", "\\begin{aligned}");
    content = content.replace("\\end{align}", "\\end{aligned}");

    // Strip fenced div markers emitted for custom LaTeX environments
    content = FENCED_DIV_ATTR.replace_all(&content, "").into_owned();
    content = FENCED_DIV_BARE.replace_all(&content, "").into_owned();

    // Over-escaped punctuation (footnotes, mostly)
    content = content.replace("\\.", ".");
    content = content.replace("\\\"", "\"");

    content
}

/// Post-process rendered HTML for Substack.
///
/// - typographic quotes → straight quotes
/// - display math images get their own centered paragraph
/// - empty paragraphs left by the rewrapping are removed
pub fn normalize_html(html: &str) -> String {
    let mut content = html.to_string();

    content = content.replace('\u{2018}', "'").replace('\u{2019}', "'");
    content = content.replace('\u{201C}', "\"").replace('\u{201D}', "\"");

    content = wrap_display_images(&content);

    content = EMPTY_PARAGRAPH.replace_all(&content, "").into_owned();

    content
}

/// True when the rendered HTML contains at least one display-math image tag.
///
/// The rewrap rule silently stops firing if the renderer changes its output
/// format; the pipeline uses this to warn when display math was present but
/// no such tag was produced.
pub fn has_display_image(html: &str) -> bool {
    DISPLAY_MATH_IMG.is_match(html)
}

/// Close the enclosing paragraph around every display-math image and reopen
/// it afterwards, so the image renders as its own centered block.
fn wrap_display_images(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + 64);
    let mut last = 0;

    for m in DISPLAY_MATH_IMG.find_iter(html) {
        // Already wrapped on a previous pass
        if html[..m.start()].ends_with(CENTERED_OPEN) {
            continue;
        }
        out.push_str(&html[last..m.start()]);
        out.push_str("</p>");
        out.push_str(CENTERED_OPEN);
        out.push_str(m.as_str());
        out.push_str("</p><p>");
        last = m.end();
    }

    out.push_str(&html[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fenced_divs_stripped() {
        let input = "::: {.theorem}\nbody\n:::\n";
        let result = normalize_markdown(input);
        assert!(!result.contains(":::"));
        assert!(result.contains("body"));
    }

    #[test]
    fn test_equation_blocks_collapsed() {
        let input = "$$\\begin{equation}\nE = mc^2\n\\end{equation}$$";
        let result = normalize_markdown(input);
        assert_eq!(result, "$$\nE = mc^2\n$$");

        let starred = "$$ \\begin{equation*} x \\end{equation*} $$";
        assert_eq!(normalize_markdown(starred), "$$ x $$");
    }

    #[test]
    fn test_align_renamed() {
        let input = "$$\\begin{align}\na &= b\n\\end{align}$$";
        let result = normalize_markdown(input);
        assert!(result.contains("\\begin{aligned}"));
        assert!(result.contains("\\end{aligned}"));
        assert!(!result.contains("\\begin{align}\n"));
    }

    #[test]
    fn test_over_escapes_removed() {
        assert_eq!(normalize_markdown("end\\. \\\"quoted\\\""), "end. \"quoted\"");
    }

    #[test]
    fn test_markdown_pass_idempotent() {
        let input = "::: {.x}\n$$\\begin{equation}y\\end{equation}$$\n:::\n\\.";
        let once = normalize_markdown(input);
        assert_eq!(normalize_markdown(&once), once);
    }

    #[test]
    fn test_quotes_normalized() {
        let input = "<p>\u{201C}hello\u{201D} and \u{2018}world\u{2019}</p>";
        assert_eq!(normalize_html(input), "<p>\"hello\" and 'world'</p>");
    }

    #[test]
    fn test_display_image_rewrapped() {
        let input = r#"<p>before <img src="u" alt="f" class="math display" /> after</p>"#;
        let result = normalize_html(input);
        assert_eq!(
            result,
            "<p>before </p><p style=\"text-align:center;\">\
             <img src=\"u\" alt=\"f\" class=\"math display\" /></p><p> after</p>"
        );
    }

    #[test]
    fn test_empty_paragraphs_removed() {
        let input = r#"<p><img src="u" class="math display" /></p>"#;
        let result = normalize_html(input);
        // Both paragraphs emptied by the rewrap are cleaned up
        assert_eq!(
            result,
            "<p style=\"text-align:center;\">\
             <img src=\"u\" class=\"math display\" /></p>"
        );
    }

    #[test]
    fn test_html_pass_idempotent() {
        let input = concat!(
            "<p>\u{201C}q\u{201D} text <img src=\"u\" class=\"math display\" /> more</p>",
            "<p></p>"
        );
        let once = normalize_html(input);
        let twice = normalize_html(&once);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_has_display_image() {
        assert!(has_display_image(
            r#"<img src="u" class="math display" />"#
        ));
        assert!(!has_display_image(r#"<img src="u" class="math inline" />"#));
    }
}
