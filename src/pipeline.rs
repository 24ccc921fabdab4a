//! Document conversion pipeline
//!
//! Orchestrates the full run: source → intermediate markdown → normalization
//! → inline math transliteration → HTML rendering → post-processing →
//! finalized output file.
//!
//! The intermediate markdown and the rendered HTML both live in scoped temp
//! files. The markdown file is removed on every exit path; the HTML file is
//! persisted over the output path only after post-processing succeeds, so a
//! failed run never replaces a previous good output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::core::normalize::{has_display_image, normalize_html, normalize_markdown};
use crate::core::translit::{convert_inline_math, scan_math_spans, MathDelimiter};
use crate::utils::error::{ConversionError, ConversionResult, ConversionWarning};
use crate::utils::pandoc::DocumentBackend;

/// Options for a document conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Output HTML path; defaults to the input path with an `.html` extension
    pub output: Option<PathBuf>,
    /// DPI for externally rendered equation images
    pub dpi: u32,
    /// HTML document title (empty = none)
    pub title: String,
    /// Suppress progress output on stderr
    pub quiet: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output: None,
            dpi: 200,
            title: String::new(),
            quiet: true,
        }
    }
}

/// Result of a successful conversion run
#[derive(Debug)]
pub struct RenderedDocument {
    /// Path of the finalized HTML file
    pub path: PathBuf,
    /// Non-fatal issues encountered during post-processing
    pub warnings: Vec<ConversionWarning>,
}

/// Run the full conversion pipeline for one document.
///
/// `.tex` input goes through the backend's structural conversion; `.md` input
/// is read directly. Anything else is an unsupported-extension error.
pub fn convert_document(
    input: &Path,
    options: &ConvertOptions,
    backend: &dyn DocumentBackend,
) -> ConversionResult<RenderedDocument> {
    if !input.exists() {
        return Err(ConversionError::input_not_found(
            input.display().to_string(),
        ));
    }

    let output_path = match &options.output {
        Some(path) => path.clone(),
        None => input.with_extension("html"),
    };

    let progress = |msg: &str| {
        if !options.quiet {
            eprintln!("{}", msg);
        }
    };

    progress(&format!(
        "Converting {} -> {}",
        input.display(),
        output_path.display()
    ));

    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let markup = match extension.as_str() {
        "tex" => {
            progress("  [1/5] Converting LaTeX to Markdown...");
            backend.source_to_markup(input)?
        }
        "md" => {
            progress("  [1/5] Reading Markdown input...");
            fs::read_to_string(input)?
        }
        _ => {
            return Err(ConversionError::unsupported(
                input.display().to_string(),
                extension,
            ))
        }
    };

    progress("  [2/5] Cleaning and normalizing Markdown...");
    let markup = normalize_markdown(&markup);

    progress("  [3/5] Converting inline math to Unicode...");
    let markup = convert_inline_math(&markup);

    let has_display_math = scan_math_spans(&markup)
        .iter()
        .any(|span| span.delimiter == MathDelimiter::Display);

    let mut markup_file = Builder::new()
        .prefix("substex-")
        .suffix(".md")
        .tempfile()?;
    markup_file.write_all(markup.as_bytes())?;
    markup_file.flush()?;

    progress(&format!(
        "  [4/5] Generating HTML with {}dpi equations...",
        options.dpi
    ));
    let webtex_url = format!(
        "https://latex.codecogs.com/png.latex?\\dpi{{{}}}",
        options.dpi
    );

    // Render next to the final output so the persist below is a same-device
    // rename
    let render_dir = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let html_file = Builder::new()
        .prefix("substex-")
        .suffix(".html")
        .tempfile_in(&render_dir)?;

    backend.markup_to_html(
        markup_file.path(),
        html_file.path(),
        &webtex_url,
        &options.title,
    )?;

    progress("  [5/5] Post-processing for Substack layout...");
    let html = fs::read_to_string(html_file.path())?;
    let html = normalize_html(&html);

    let mut warnings = Vec::new();
    if has_display_math && !has_display_image(&html) {
        warnings.push(ConversionWarning::with_suggestion(
            "display math was present but no display-math image tag was found \
             in the rendered output; centered block wrapping did not apply",
            "the renderer's image markup may have changed",
        ));
    }

    fs::write(html_file.path(), &html)?;
    html_file
        .persist(&output_path)
        .map_err(|e| ConversionError::from(e.error))?;

    Ok(RenderedDocument {
        path: output_path,
        warnings,
    })
}
