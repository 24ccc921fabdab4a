//! Error handling for Substex conversions
//!
//! This module provides a unified error type and result type for the
//! conversion pipeline, plus a non-fatal warning type.

use std::fmt;

/// Conversion error type
#[derive(Debug, Clone)]
pub enum ConversionError {
    /// A required external tool is not installed
    MissingDependency { tool: String, guidance: String },
    /// Input file does not exist
    InputNotFound { path: String },
    /// Input file has an extension the pipeline cannot handle
    UnsupportedInput { path: String, extension: String },
    /// An external tool invocation failed
    ToolFailure { stage: String, detail: String },
    /// IO error (for file operations)
    IoError { message: String },
    /// Internal error
    InternalError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::MissingDependency { tool, guidance } => {
                write!(f, "Required tool '{}' is not installed or not on PATH. {}", tool, guidance)
            }
            ConversionError::InputNotFound { path } => {
                write!(f, "Input file not found: {}", path)
            }
            ConversionError::UnsupportedInput { path, extension } => {
                write!(f, "Unsupported input extension '{}': {}", extension, path)
            }
            ConversionError::ToolFailure { stage, detail } => {
                write!(f, "External {} failed: {}", stage, detail)
            }
            ConversionError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            ConversionError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion warnings (non-fatal issues)
#[derive(Debug, Clone)]
pub struct ConversionWarning {
    pub message: String,
    pub suggestion: Option<String>,
}

impl ConversionWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning: {}", self.message)?;
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

// Convenience constructors
impl ConversionError {
    pub fn missing_dependency(tool: impl Into<String>, guidance: impl Into<String>) -> Self {
        ConversionError::MissingDependency {
            tool: tool.into(),
            guidance: guidance.into(),
        }
    }

    pub fn input_not_found(path: impl Into<String>) -> Self {
        ConversionError::InputNotFound { path: path.into() }
    }

    pub fn unsupported(path: impl Into<String>, extension: impl Into<String>) -> Self {
        ConversionError::UnsupportedInput {
            path: path.into(),
            extension: extension.into(),
        }
    }

    pub fn tool(stage: impl Into<String>, detail: impl Into<String>) -> Self {
        ConversionError::ToolFailure {
            stage: stage.into(),
            detail: detail.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ConversionError::InternalError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dependency_display() {
        let err = ConversionError::missing_dependency("pandoc", "Install it from pandoc.org.");
        let msg = err.to_string();
        assert!(msg.contains("pandoc"));
        assert!(msg.contains("Install"));
    }

    #[test]
    fn test_tool_failure_display() {
        let err = ConversionError::tool("HTML rendering", "exit status 1");
        let msg = err.to_string();
        assert!(msg.contains("HTML rendering"));
        assert!(msg.contains("exit status 1"));
    }

    #[test]
    fn test_warning_display() {
        let warn = ConversionWarning::with_suggestion("no image found", "check pandoc version");
        let msg = warn.to_string();
        assert!(msg.contains("no image found"));
        assert!(msg.contains("check pandoc version"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ConversionError = io.into();
        assert!(matches!(err, ConversionError::IoError { .. }));
    }
}
