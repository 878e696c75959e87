use crate::error::ValidationError;
use crate::validation::Validator;
use regex::Regex;

/// Validates that input matches a regular expression.
///
/// The pattern is compiled exactly once, at construction; reusing an
/// instance across prompt attempts never recompiles it. The match is an
/// unanchored search, so `^`/`$` must be part of the pattern when the whole
/// input has to conform.
///
/// # Examples
///
/// ```
/// use promptval::{RegexValidator, Validator};
///
/// let digits = RegexValidator::new(r"^\d+$").unwrap();
/// assert_eq!(digits.validate("123").unwrap(), "123");
/// assert!(digits.validate("abc").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RegexValidator {
    regex: Regex,
    message: String,
}

impl RegexValidator {
    pub const DEFAULT_MESSAGE: &'static str = "Enter a valid value.";

    /// Compiles `pattern` once and wraps it in a validator.
    ///
    /// A malformed pattern is a programming error in the prompt definition,
    /// not a user-input failure, so it surfaces as [`regex::Error`] rather
    /// than a [`ValidationError`].
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::from(Regex::new(pattern)?))
    }

    /// Overrides the message shown when the input does not match.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl From<Regex> for RegexValidator {
    fn from(regex: Regex) -> Self {
        Self {
            regex,
            message: Self::DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl Validator for RegexValidator {
    type Output = String;

    fn validate(&self, input: &str) -> Result<String, ValidationError> {
        if self.regex.is_match(input) {
            Ok(input.to_string())
        } else {
            Err(ValidationError::new(&self.message))
        }
    }
}
