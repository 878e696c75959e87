use crate::error::ValidationError;
use crate::literal::{self, Literal};
use crate::validation::Validator;

/// Validates that input is a list literal.
///
/// The input is run through the restricted literal parser in
/// [`crate::literal`] and the top-level result must be a list; tuples,
/// dicts and scalars at the top level fail, as does malformed syntax. Both
/// failure modes funnel into the same [`ValidationError`] so a prompt loop
/// sees one kind of outcome.
///
/// # Examples
///
/// ```
/// use promptval::{ListValidator, Literal, Validator};
///
/// let validator = ListValidator::new();
/// let items = validator.validate("[1, 2, 3]").unwrap();
/// assert_eq!(items, vec![Literal::Int(1), Literal::Int(2), Literal::Int(3)]);
///
/// assert!(validator.validate("(1, 2)").is_err());
/// assert!(validator.validate("not a list").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListValidator {
    message: Option<String>,
}

impl ListValidator {
    pub const DEFAULT_MESSAGE: &'static str = "Enter a valid list.";

    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the message shown when the input is not a list literal.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(Self::DEFAULT_MESSAGE)
    }
}

impl Validator for ListValidator {
    type Output = Vec<Literal>;

    fn validate(&self, input: &str) -> Result<Vec<Literal>, ValidationError> {
        match literal::parse(input) {
            Ok(Literal::List(items)) => Ok(items),
            // Non-list literals and parse failures are the same outcome
            // from the caller's point of view.
            Ok(_) | Err(_) => Err(ValidationError::new(self.message())),
        }
    }
}
