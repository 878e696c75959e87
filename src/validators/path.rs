use crate::error::ValidationError;
use crate::validation::Validator;
use std::path::Path;

/// Validates that input names an existing directory.
///
/// The only side effect in the validator set: one filesystem stat per call.
/// The path string itself is returned unchanged on success.
#[derive(Debug, Clone, Default)]
pub struct PathValidator {
    message: Option<String>,
}

impl PathValidator {
    pub const DEFAULT_MESSAGE: &'static str = "Enter a valid path.";

    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the message shown when the directory does not exist.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(Self::DEFAULT_MESSAGE)
    }
}

impl Validator for PathValidator {
    type Output = String;

    fn validate(&self, input: &str) -> Result<String, ValidationError> {
        if Path::new(input).is_dir() {
            Ok(input.to_string())
        } else {
            Err(ValidationError::new(self.message()))
        }
    }
}

/// Validates that input names an existing regular file.
#[derive(Debug, Clone, Default)]
pub struct FileValidator {
    message: Option<String>,
}

impl FileValidator {
    pub const DEFAULT_MESSAGE: &'static str = "Enter a valid file.";

    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the message shown when the file does not exist.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(Self::DEFAULT_MESSAGE)
    }
}

impl Validator for FileValidator {
    type Output = String;

    fn validate(&self, input: &str) -> Result<String, ValidationError> {
        if Path::new(input).is_file() {
            Ok(input.to_string())
        } else {
            Err(ValidationError::new(self.message()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok_eq};

    #[test]
    fn test_existing_directory_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap().to_string();

        let validator = PathValidator::new();
        assert_ok_eq!(validator.validate(&path), path.clone());
    }

    #[test]
    fn test_missing_directory_fails() {
        let validator = PathValidator::new();
        let error = validator
            .validate("/definitely/not/a/real/directory")
            .unwrap_err();
        assert_eq!(error.message(), "Enter a valid path.");
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("data.txt");
        std::fs::write(&file_path, "contents").unwrap();

        let validator = PathValidator::new();
        assert_err!(validator.validate(file_path.to_str().unwrap()));
    }

    #[test]
    fn test_existing_file_passes() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("data.txt");
        std::fs::write(&file_path, "contents").unwrap();
        let path = file_path.to_str().unwrap().to_string();

        let validator = FileValidator::new();
        assert_ok_eq!(validator.validate(&path), path.clone());
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();

        let validator = FileValidator::new();
        let error = validator.validate(dir.path().to_str().unwrap()).unwrap_err();
        assert_eq!(error.message(), "Enter a valid file.");
    }

    #[test]
    fn test_message_overrides() {
        let path_error = PathValidator::new()
            .with_message("Directory not found.")
            .validate("/nope")
            .unwrap_err();
        assert_eq!(path_error.message(), "Directory not found.");

        let file_error = FileValidator::new()
            .with_message("File not found.")
            .validate("/nope.txt")
            .unwrap_err();
        assert_eq!(file_error.message(), "File not found.");
    }
}
