//! External document converter integration
//!
//! Both heavy lifting stages are delegated to pandoc: structural conversion
//! of the source document into markdown, and rendering of the processed
//! markdown into HTML (with `--webtex` pointing un-transliterated math at an
//! image rendering endpoint).
//!
//! The key abstraction is the `DocumentBackend` trait, which allows different
//! implementations for the CLI (a real pandoc process) and for tests (an
//! in-memory stand-in).

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::core::translit::{scan_math_spans, MathDelimiter};

/// Trait for the external conversion tool
///
/// Implementations:
/// - `PandocBackend`: spawns the `pandoc` binary (CLI)
/// - `MemoryBackend`: canned conversion and minimal rendering (testing)
pub trait DocumentBackend {
    /// Probe whether the tool can be invoked at all
    fn is_available(&self) -> bool;

    /// Convert a source document into intermediate markdown
    fn source_to_markup(&self, source: &Path) -> Result<String, BackendError>;

    /// Render intermediate markdown into an HTML file, sending any remaining
    /// math through the given webtex endpoint
    fn markup_to_html(
        &self,
        markup: &Path,
        output: &Path,
        webtex_url: &str,
        title: &str,
    ) -> Result<(), BackendError>;
}

/// Error type for backend invocations
#[derive(Debug, Clone)]
pub enum BackendError {
    /// The tool binary could not be spawned
    NotAvailable(String),
    /// The source → markdown stage failed
    Conversion(String),
    /// The markdown → HTML stage failed
    Render(String),
    /// IO error around the invocation
    Io(String),
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::NotAvailable(tool) => write!(f, "Tool not available: {}", tool),
            BackendError::Conversion(msg) => write!(f, "Conversion failed: {}", msg),
            BackendError::Render(msg) => write!(f, "Rendering failed: {}", msg),
            BackendError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

/// Install guidance surfaced when the external tool is missing
pub const PANDOC_INSTALL_GUIDANCE: &str = "Install it from https://pandoc.org/installing.html";

impl From<BackendError> for crate::utils::error::ConversionError {
    fn from(err: BackendError) -> Self {
        use crate::utils::error::ConversionError;
        match err {
            BackendError::NotAvailable(tool) => {
                ConversionError::missing_dependency(tool, PANDOC_INSTALL_GUIDANCE)
            }
            BackendError::Conversion(detail) => {
                ConversionError::tool("document conversion", detail)
            }
            BackendError::Render(detail) => ConversionError::tool("HTML rendering", detail),
            BackendError::Io(message) => ConversionError::IoError { message },
        }
    }
}

/// Pandoc-based backend (for CLI usage)
pub struct PandocBackend {
    program: String,
}

impl PandocBackend {
    pub fn new() -> Self {
        Self {
            program: "pandoc".to_string(),
        }
    }

    /// Use a different binary name or path (e.g. a pinned pandoc build)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn spawn_error(&self, err: std::io::Error) -> BackendError {
        if err.kind() == std::io::ErrorKind::NotFound {
            BackendError::NotAvailable(self.program.clone())
        } else {
            BackendError::Io(err.to_string())
        }
    }
}

impl Default for PandocBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBackend for PandocBackend {
    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn source_to_markup(&self, source: &Path) -> Result<String, BackendError> {
        let output = Command::new(&self.program)
            .arg(source)
            .args(["-t", "markdown", "--wrap=none"])
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(BackendError::Conversion(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| BackendError::Conversion(format!("non-UTF-8 output: {}", e)))
    }

    fn markup_to_html(
        &self,
        markup: &Path,
        output: &Path,
        webtex_url: &str,
        title: &str,
    ) -> Result<(), BackendError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg(markup)
            .arg("-s")
            .arg(format!("--webtex={}", webtex_url))
            .args(["-V", "maxwidth=100%"])
            .arg("-o")
            .arg(output);

        if !title.is_empty() {
            cmd.arg("--metadata").arg(format!("title={}", title));
        }

        let result = cmd.output().map_err(|e| self.spawn_error(e))?;

        if !result.status.success() {
            return Err(BackendError::Render(
                String::from_utf8_lossy(&result.stderr).trim().to_string(),
            ));
        }

        Ok(())
    }
}

/// In-memory backend (for testing)
///
/// `source_to_markup` returns a canned markdown string, and `markup_to_html`
/// approximates the fragment of pandoc's output the post-processing pass
/// cares about: blank-line-separated paragraphs and `class="math display"`
/// image tags for display math.
pub struct MemoryBackend {
    source_markup: String,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            source_markup: String::new(),
        }
    }

    /// Set the markdown returned for any source document
    pub fn with_source(source_markup: impl Into<String>) -> Self {
        Self {
            source_markup: source_markup.into(),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBackend for MemoryBackend {
    fn is_available(&self) -> bool {
        true
    }

    fn source_to_markup(&self, _source: &Path) -> Result<String, BackendError> {
        Ok(self.source_markup.clone())
    }

    fn markup_to_html(
        &self,
        markup: &Path,
        output: &Path,
        webtex_url: &str,
        title: &str,
    ) -> Result<(), BackendError> {
        let content = fs::read_to_string(markup).map_err(|e| BackendError::Io(e.to_string()))?;

        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
        if !title.is_empty() {
            html.push_str(&format!("<title>{}</title>\n", title));
        }
        html.push_str("</head>\n<body>\n");

        for block in content.split("\n\n").filter(|b| !b.trim().is_empty()) {
            html.push_str("<p>");
            html.push_str(&render_block(block, webtex_url));
            html.push_str("</p>\n");
        }

        html.push_str("</body>\n</html>\n");

        fs::write(output, html).map_err(|e| BackendError::Io(e.to_string()))
    }
}

/// Replace display math in a paragraph block with webtex image tags.
fn render_block(block: &str, webtex_url: &str) -> String {
    let mut out = String::with_capacity(block.len());
    let mut last = 0;

    for span in scan_math_spans(block) {
        if span.delimiter != MathDelimiter::Display {
            continue;
        }
        out.push_str(&block[last..span.start]);
        out.push_str(&format!(
            r#"<img src="{}{}" alt="{}" class="math display" />"#,
            webtex_url,
            span.body.trim(),
            span.body.trim()
        ));
        last = span.end;
    }

    out.push_str(&block[last..]);
    out
}
