use crate::error::ValidationError;
use crate::validation::Validator;

/// Validates that input is a member of an enumerated option set.
///
/// Membership is plain value equality against the collection supplied at
/// construction; ordering and duplicates in that collection do not affect
/// the check. Successful input comes back unchanged, no coercion.
///
/// # Examples
///
/// ```
/// use promptval::{OptionValidator, Validator};
///
/// let validator = OptionValidator::new(["staging", "production"]);
/// assert_eq!(validator.validate("staging").unwrap(), "staging");
/// assert!(validator.validate("qa").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct OptionValidator {
    options: Vec<String>,
    message: String,
}

impl OptionValidator {
    pub const DEFAULT_MESSAGE: &'static str = "Select from the list of valid options.";

    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            message: Self::DEFAULT_MESSAGE.to_string(),
        }
    }

    /// Overrides the message shown when the input is not an option.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// The option set this validator accepts.
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl Validator for OptionValidator {
    type Output = String;

    fn validate(&self, input: &str) -> Result<String, ValidationError> {
        if self.options.iter().any(|option| option == input) {
            Ok(input.to_string())
        } else {
            Err(ValidationError::new(&self.message))
        }
    }
}
