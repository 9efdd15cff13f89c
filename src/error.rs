//! Structured error types for the Folio layout engine.
//!
//! Four variants cover the real error sources: profile JSON parsing,
//! template selection, unplaceable layout blocks, and PDF serialization.

use thiserror::Error;

/// The unified error type returned by all public Folio API functions.
#[derive(Debug, Error)]
pub enum FolioError {
    /// JSON input failed to parse as a profile document.
    #[error("Failed to parse profile: {source}{}", hint_suffix(.hint))]
    ParseError {
        #[source]
        source: serde_json::Error,
        hint: String,
    },

    /// The template identifier is not one the selector knows.
    #[error("Unknown template '{0}' (expected 'classic' or 'professional')")]
    InvalidTemplate(String),

    /// An atomic block is taller than an entire empty page.
    #[error(
        "Layout overflow on page {page}: block needs {needed:.2}pt but a page only has {available:.2}pt"
    )]
    LayoutOverflow {
        page: usize,
        needed: f64,
        available: f64,
    },

    /// The PDF writer rejected an instruction.
    #[error("Serialization failed at instruction {index}: {reason}")]
    SerializationFailure { index: usize, reason: String },
}

fn hint_suffix(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the profile schema. Check field names and types.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        FolioError::ParseError { source: e, hint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_carries_hint() {
        let err: FolioError = serde_json::from_str::<serde_json::Value>("{\"a\": 1,}")
            .unwrap_err()
            .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to parse profile"));
        assert!(msg.contains("Hint: Check for trailing commas"));
    }

    #[test]
    fn test_invalid_template_message() {
        let err = FolioError::InvalidTemplate("gothic".to_string());
        assert!(err.to_string().contains("'gothic'"));
    }

    #[test]
    fn test_serialization_failure_names_index() {
        let err = FolioError::SerializationFailure {
            index: 7,
            reason: "bad colour".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Serialization failed at instruction 7: bad colour"
        );
    }
}
