//! JSON output types for machine-readable CLI output.
//!
//! Used by the `--json` flag on `validate` and `inspect`.

use manifesto_audio::wav::WavHeader;
use manifesto_goal::{ValidationError, ValidationWarning};
use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// Validation errors pass their own codes (`G001`, ...) through.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// File is not a canonical WAV
    pub const INVALID_WAV: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "G001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Form field the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the field path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Form field the warning refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// BLAKE3 hash of the form file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether inspection succeeded
    pub success: bool,
    /// Errors encountered during inspection
    pub errors: Vec<JsonError>,
    /// Header details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

/// WAV header details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectResult {
    /// Total file length in bytes
    pub file_len: usize,
    /// Declared RIFF chunk size
    pub riff_len: u32,
    /// Audio format tag (1 = PCM)
    pub audio_format: u16,
    /// Number of channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Declared byte rate
    pub byte_rate: u32,
    /// Declared block align
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Declared data chunk size
    pub data_len: u32,
    /// Number of frames
    pub frame_count: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// BLAKE3 hash of the data chunk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}

impl InspectResult {
    /// Builds the result from a parsed header.
    pub fn from_header(header: &WavHeader, file_len: usize, pcm_hash: Option<String>) -> Self {
        Self {
            file_len,
            riff_len: header.riff_len,
            audio_format: header.audio_format,
            channels: header.channels,
            sample_rate: header.sample_rate,
            byte_rate: header.byte_rate,
            block_align: header.block_align,
            bits_per_sample: header.bits_per_sample,
            data_len: header.data_len,
            frame_count: header.frame_count(),
            duration_seconds: header.duration_seconds(),
            pcm_hash,
        }
    }
}

impl InspectOutput {
    /// Creates a successful inspect output.
    pub fn success(result: InspectResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed inspect output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Converts an input error to a JSON error.
pub fn input_error_to_json(err: &InputError, file: Option<&str>) -> JsonError {
    let code = match err {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
    };
    let error = JsonError::new(code, err.to_string());
    match file {
        Some(f) => error.with_file(f),
        None => error,
    }
}

/// Converts a form validation error to a JSON error.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    JsonError {
        code: err.code.to_string(),
        message: err.message.clone(),
        path: err.path.clone(),
        file: None,
    }
}

/// Converts a form validation warning to a JSON warning.
pub fn validation_warning_to_json(warning: &ValidationWarning) -> JsonWarning {
    JsonWarning {
        code: warning.code.to_string(),
        message: warning.message.clone(),
        path: warning.path.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifesto_goal::{ErrorCode, WarningCode};

    #[test]
    fn test_json_error_serialization() {
        let error = JsonError::new("G001", "fullName must not be empty")
            .with_path("fullName")
            .with_file("form.json");

        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"G001\""));
        assert!(json.contains("\"path\":\"fullName\""));
        assert!(json.contains("\"file\":\"form.json\""));
    }

    #[test]
    fn test_json_error_skips_empty_fields() {
        let json = serde_json::to_string(&JsonError::new("CLI_001", "x")).unwrap();
        assert!(!json.contains("path"));
        assert!(!json.contains("file"));
    }

    #[test]
    fn test_validation_conversions() {
        let err = ValidationError::with_path(ErrorCode::EmptyField, "empty", "platform");
        let json = validation_error_to_json(&err);
        assert_eq!(json.code, "G001");
        assert_eq!(json.path.as_deref(), Some("platform"));

        let warning = ValidationWarning::with_path(
            WarningCode::ProfitGoalNotNumeric,
            "no digits",
            "profitGoal",
        );
        let json = validation_warning_to_json(&warning);
        assert_eq!(json.code, "W001");
        assert_eq!(json.message, "no digits");
    }

    #[test]
    fn test_input_error_codes() {
        let err = InputError::JsonParse {
            message: "eof".to_string(),
        };
        let json = input_error_to_json(&err, Some("form.json"));
        assert_eq!(json.code, error_codes::JSON_PARSE);
        assert_eq!(json.file.as_deref(), Some("form.json"));
    }
}
