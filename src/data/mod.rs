//! Data layer - Static mappings
//!
//! This module contains all static data used for LaTeX → Unicode
//! transliteration:
//! - Greek letter mappings
//! - Symbol command mappings
//! - Superscript/subscript character tables

pub mod scripts;
pub mod symbols;

// Re-export commonly used items
pub use scripts::{to_subscript, to_superscript, SUBSCRIPTS, SUPERSCRIPTS};
pub use symbols::{
    blackboard_letter, replace_command_safe, script_letter, GREEK_LETTERS, MATH_SYMBOLS,
};
