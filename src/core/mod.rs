//! Core conversion modules
//!
//! This module contains the two transformation passes:
//! - `translit`: LaTeX math → Unicode transliteration
//! - `normalize`: markdown and HTML cleanup rewrites

pub mod normalize;
pub mod translit;

// Re-export main types and functions
pub use normalize::{has_display_image, normalize_html, normalize_markdown};
pub use translit::{
    convert_inline_math, is_complex_math, latex_to_unicode, scan_math_spans, MathDelimiter,
    MathSpan,
};
