//! Substex CLI - Convert LaTeX/Markdown documents to Substack-ready HTML

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use substex::{
    convert_document, ConvertOptions, DocumentBackend, PandocBackend, PANDOC_INSTALL_GUIDANCE,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "d2s")]
#[command(author = "SciPenAI")]
#[command(version)]
#[command(about = "Substex - Convert LaTeX and Markdown documents to Substack-ready HTML", long_about = None)]
struct Cli {
    /// Input file (.tex or .md)
    input: PathBuf,

    /// Output HTML file (default: input path with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// DPI for rendered equation images
    #[arg(long, default_value_t = 200)]
    dpi: u32,

    /// HTML document title
    #[arg(long, default_value = "")]
    title: String,

    /// Quiet mode: suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let backend = PandocBackend::new();

    // Check the external dependency before doing any work
    if !backend.is_available() {
        eprintln!("Error: 'pandoc' is not installed or not on PATH.");
        eprintln!("  {}", PANDOC_INSTALL_GUIDANCE);
        std::process::exit(1);
    }

    if !cli.input.exists() {
        eprintln!("Error: input file not found: {}", cli.input.display());
        std::process::exit(1);
    }

    let extension = cli
        .input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if extension != "tex" && extension != "md" {
        eprintln!(
            "Warning: input file does not have a .tex or .md extension: {}",
            cli.input.display()
        );
    }

    let options = ConvertOptions {
        output: cli.output,
        dpi: cli.dpi,
        title: cli.title,
        quiet: cli.quiet,
    };

    match convert_document(&cli.input, &options, &backend) {
        Ok(doc) => {
            for warning in &doc.warnings {
                eprintln!("{}", warning);
            }
            if doc.warnings.is_empty() {
                eprintln!("✓ Output written to: {}", doc.path.display());
            } else {
                eprintln!(
                    "⚠ Output written to: {} ({} warning(s))",
                    doc.path.display(),
                    doc.warnings.len()
                );
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install substex --features cli");
    eprintln!("  d2s [OPTIONS] <INPUT>");
}
