use thiserror::Error;

/// An error raised while validating user input.
///
/// Every validator in this crate funnels every failure mode — pattern
/// mismatch, filesystem absence, parse failure, membership miss — into this
/// single kind. The message is the human-readable text a prompt loop shows
/// next to the re-prompt; each validator ships a default and accepts an
/// override at construction.
///
/// A composite validator can bundle the failures of its parts with
/// [`ValidationError::aggregate`]; for the plain validators in this crate the
/// aggregation list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    errors: Vec<ValidationError>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Bundles several validation failures under one summary message.
    pub fn aggregate(message: impl Into<String>, errors: Vec<ValidationError>) -> Self {
        Self {
            message: message.into(),
            errors,
        }
    }

    /// The human-readable message to show the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Individual failures bundled by [`ValidationError::aggregate`].
    /// Empty for errors raised by a single validator.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_and_display_agree() {
        let error = ValidationError::new("Enter a valid value.");
        assert_eq!(error.message(), "Enter a valid value.");
        assert_eq!(error.to_string(), "Enter a valid value.");
        assert!(error.errors().is_empty());
    }

    #[test]
    fn test_aggregate_retains_children() {
        let children = vec![
            ValidationError::new("Enter a valid number."),
            ValidationError::new("Enter a valid float."),
        ];
        let error = ValidationError::aggregate("2 fields failed validation", children.clone());

        assert_eq!(error.message(), "2 fields failed validation");
        assert_eq!(error.errors(), children.as_slice());
    }
}
