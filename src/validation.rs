use crate::error::ValidationError;

/// Core validation trait implemented by every validator in this crate.
///
/// A validator accepts one raw input string and either returns the coerced
/// value of its target type or fails with a [`ValidationError`] carrying a
/// human-readable message. The surrounding prompt loop decides what to do
/// with the outcome (typically re-prompt on failure).
///
/// Validators are configured once at construction and hold no per-call
/// state, so a single instance can be reused across prompt attempts and
/// shared between threads.
///
/// # Examples
///
/// ```
/// use promptval::{ValidationError, Validator};
///
/// struct NonEmpty;
///
/// impl Validator for NonEmpty {
///     type Output = String;
///
///     fn validate(&self, input: &str) -> Result<String, ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::new("Enter a non-empty value."))
///         } else {
///             Ok(input.to_string())
///         }
///     }
/// }
/// ```
pub trait Validator {
    /// The coerced type a successful validation produces.
    type Output;

    /// Validate one raw input string, returning the coerced value or a
    /// failure with a human-readable message.
    fn validate(&self, input: &str) -> Result<Self::Output, ValidationError>;
}
