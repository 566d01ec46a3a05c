//! Loading goal forms and prose from disk.

use manifesto_goal::GoalForm;
use std::path::{Path, PathBuf};

/// Result of loading a goal form.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// The parsed form.
    pub form: GoalForm,
    /// BLAKE3 hash of the file content.
    pub source_hash: String,
}

/// Error loading an input file.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// File is not a valid goal form.
    JsonParse {
        /// Parser error message.
        message: String,
    },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::JsonParse { message } => {
                write!(f, "JSON parse error: {}", message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Loads a goal form from a JSON file.
///
/// Missing fields default to empty strings; validation is left to the caller.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use manifesto_cli::input::load_form;
///
/// let result = load_form(Path::new("form.json")).unwrap();
/// println!("Loaded form for {}", result.form.full_name);
/// ```
pub fn load_form(path: &Path) -> Result<LoadResult, InputError> {
    let content = read_text(path)?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let form = GoalForm::from_json(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;

    Ok(LoadResult { form, source_hash })
}

/// Reads a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_form() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("form.json");
        std::fs::write(&path, r#"{ "fullName": "Nguyễn Văn A", "dominantSense": "Nghe" }"#)
            .unwrap();

        let result = load_form(&path).unwrap();
        assert_eq!(result.form.full_name, "Nguyễn Văn A");
        assert_eq!(result.form.profit_goal, "");
        assert_eq!(result.source_hash.len(), 64);
    }

    #[test]
    fn test_load_form_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_form(&tmp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_form_bad_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("form.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_form(&path).unwrap_err();
        assert!(matches!(err, InputError::JsonParse { .. }));
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
