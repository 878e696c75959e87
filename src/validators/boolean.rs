use crate::error::ValidationError;
use crate::validation::Validator;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The fixed token table. Lookup is case-insensitive; no locale variants.
static BOOLEAN_MAP: Lazy<HashMap<&'static str, bool>> = Lazy::new(|| {
    HashMap::from([
        ("true", true),
        ("t", true),
        ("1", true),
        ("false", false),
        ("f", false),
        ("0", false),
    ])
});

/// Validates that input is one of a fixed set of boolean tokens.
///
/// `true`/`t`/`1` map to `true` and `false`/`f`/`0` to `false`, compared
/// case-insensitively. Anything outside the table — `yes`, `no`, `on` —
/// fails with the configured message.
#[derive(Debug, Clone, Default)]
pub struct BooleanValidator {
    message: Option<String>,
}

impl BooleanValidator {
    pub const DEFAULT_MESSAGE: &'static str = "Enter True or False.";

    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the message shown when the input is not a known token.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(Self::DEFAULT_MESSAGE)
    }
}

impl Validator for BooleanValidator {
    type Output = bool;

    fn validate(&self, input: &str) -> Result<bool, ValidationError> {
        BOOLEAN_MAP
            .get(input.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ValidationError::new(self.message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_ok_eq;

    #[test]
    fn test_true_tokens() {
        let validator = BooleanValidator::new();
        for input in ["true", "True", "TRUE", "t", "T", "1"] {
            assert_ok_eq!(validator.validate(input), true, "input: {input}");
        }
    }

    #[test]
    fn test_false_tokens() {
        let validator = BooleanValidator::new();
        for input in ["false", "False", "FALSE", "f", "F", "0"] {
            assert_ok_eq!(validator.validate(input), false, "input: {input}");
        }
    }

    #[test]
    fn test_table_is_exhaustive() {
        let validator = BooleanValidator::new();
        for input in ["yes", "no", "on", "off", "2", "", " true "] {
            let error = validator.validate(input).unwrap_err();
            assert_eq!(error.message(), "Enter True or False.", "input: {input}");
        }
    }

    #[test]
    fn test_message_override() {
        let error = BooleanValidator::new()
            .with_message("Answer t or f.")
            .validate("maybe")
            .unwrap_err();
        assert_eq!(error.message(), "Answer t or f.");
    }
}
