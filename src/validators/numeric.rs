use crate::error::ValidationError;
use crate::validation::Validator;

/// Validates that input parses as a base-10 integer.
///
/// Surrounding whitespace is tolerated, matching how interactive input
/// usually arrives. Anything that is not a whole number — including a float
/// like `4.2` — fails with the configured message.
///
/// # Examples
///
/// ```
/// use promptval::{IntegerValidator, Validator};
///
/// let validator = IntegerValidator::new();
/// assert_eq!(validator.validate("42").unwrap(), 42);
/// assert!(validator.validate("4.2").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntegerValidator {
    message: Option<String>,
}

impl IntegerValidator {
    pub const DEFAULT_MESSAGE: &'static str = "Enter a valid number.";

    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the message shown when the input does not parse.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(Self::DEFAULT_MESSAGE)
    }
}

impl Validator for IntegerValidator {
    type Output = i64;

    fn validate(&self, input: &str) -> Result<i64, ValidationError> {
        input
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::new(self.message()))
    }
}

/// Validates that input parses as an IEEE-754 double.
#[derive(Debug, Clone, Default)]
pub struct FloatValidator {
    message: Option<String>,
}

impl FloatValidator {
    pub const DEFAULT_MESSAGE: &'static str = "Enter a valid float.";

    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the message shown when the input does not parse.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(Self::DEFAULT_MESSAGE)
    }
}

impl Validator for FloatValidator {
    type Output = f64;

    fn validate(&self, input: &str) -> Result<f64, ValidationError> {
        input
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::new(self.message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_ok_eq;

    #[test]
    fn test_integer_accepts_whole_numbers() {
        let validator = IntegerValidator::new();
        assert_ok_eq!(validator.validate("42"), 42);
        assert_ok_eq!(validator.validate("-17"), -17);
        assert_ok_eq!(validator.validate("  7  "), 7);
    }

    #[test]
    fn test_integer_rejects_everything_else() {
        let validator = IntegerValidator::new();
        for input in ["4.2", "abc", "", "1e3", "0x10"] {
            let error = validator.validate(input).unwrap_err();
            assert_eq!(error.message(), "Enter a valid number.", "input: {input}");
        }
    }

    #[test]
    fn test_float_accepts_numbers() {
        let validator = FloatValidator::new();
        assert_ok_eq!(validator.validate("3.14"), 3.14);
        assert_ok_eq!(validator.validate("-0.5"), -0.5);
        assert_ok_eq!(validator.validate("42"), 42.0);
        assert_ok_eq!(validator.validate("1e3"), 1000.0);
    }

    #[test]
    fn test_float_rejects_non_numeric() {
        let validator = FloatValidator::new();
        for input in ["nope", "", "1,5", "3.14.15"] {
            let error = validator.validate(input).unwrap_err();
            assert_eq!(error.message(), "Enter a valid float.", "input: {input}");
        }
    }

    #[test]
    fn test_message_overrides() {
        let error = IntegerValidator::new()
            .with_message("Whole numbers only.")
            .validate("x")
            .unwrap_err();
        assert_eq!(error.message(), "Whole numbers only.");

        let error = FloatValidator::new()
            .with_message("Numbers only.")
            .validate("x")
            .unwrap_err();
        assert_eq!(error.message(), "Numbers only.");
    }

    #[test]
    fn test_idempotence() {
        let validator = IntegerValidator::new();
        assert_eq!(validator.validate("42"), validator.validate("42"));
        assert_eq!(validator.validate("x"), validator.validate("x"));
    }
}
