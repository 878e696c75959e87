//! The validator set: eight independent predicate/coercion units.
//!
//! Each validator is a leaf with no dependency on the others; a prompt loop
//! composes them by picking one per question. [`AnyValidator`] wraps the
//! closed set behind one output type for callers that keep heterogeneous
//! validator lists in a prompt definition.

mod boolean;
mod list;
mod numeric;
mod option;
mod path;
mod regex;

pub use boolean::BooleanValidator;
pub use list::ListValidator;
pub use numeric::{FloatValidator, IntegerValidator};
pub use option::OptionValidator;
pub use path::{FileValidator, PathValidator};
pub use self::regex::RegexValidator;

use crate::error::ValidationError;
use crate::literal::Literal;
use crate::validation::Validator;

/// The coerced output of an [`AnyValidator`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Literal>),
}

/// A validator of any kind, unified behind a single output type.
///
/// The set of validator kinds is fixed, so a tagged union covers it; each
/// variant delegates to the wrapped validator and lifts its typed output
/// into [`Value`].
#[derive(Debug, Clone)]
pub enum AnyValidator {
    Regex(RegexValidator),
    Path(PathValidator),
    File(FileValidator),
    Integer(IntegerValidator),
    Float(FloatValidator),
    Boolean(BooleanValidator),
    Option(OptionValidator),
    List(ListValidator),
}

impl AnyValidator {
    fn kind(&self) -> &'static str {
        match self {
            AnyValidator::Regex(_) => "regex",
            AnyValidator::Path(_) => "path",
            AnyValidator::File(_) => "file",
            AnyValidator::Integer(_) => "integer",
            AnyValidator::Float(_) => "float",
            AnyValidator::Boolean(_) => "boolean",
            AnyValidator::Option(_) => "option",
            AnyValidator::List(_) => "list",
        }
    }
}

impl Validator for AnyValidator {
    type Output = Value;

    fn validate(&self, input: &str) -> Result<Value, ValidationError> {
        let result = match self {
            AnyValidator::Regex(v) => v.validate(input).map(Value::Str),
            AnyValidator::Path(v) => v.validate(input).map(Value::Str),
            AnyValidator::File(v) => v.validate(input).map(Value::Str),
            AnyValidator::Integer(v) => v.validate(input).map(Value::Int),
            AnyValidator::Float(v) => v.validate(input).map(Value::Float),
            AnyValidator::Boolean(v) => v.validate(input).map(Value::Bool),
            AnyValidator::Option(v) => v.validate(input).map(Value::Str),
            AnyValidator::List(v) => v.validate(input).map(Value::List),
        };

        if let Err(error) = &result {
            log::debug!("{} validator rejected input: {error}", self.kind());
        }

        result
    }
}

impl From<RegexValidator> for AnyValidator {
    fn from(validator: RegexValidator) -> Self {
        AnyValidator::Regex(validator)
    }
}

impl From<PathValidator> for AnyValidator {
    fn from(validator: PathValidator) -> Self {
        AnyValidator::Path(validator)
    }
}

impl From<FileValidator> for AnyValidator {
    fn from(validator: FileValidator) -> Self {
        AnyValidator::File(validator)
    }
}

impl From<IntegerValidator> for AnyValidator {
    fn from(validator: IntegerValidator) -> Self {
        AnyValidator::Integer(validator)
    }
}

impl From<FloatValidator> for AnyValidator {
    fn from(validator: FloatValidator) -> Self {
        AnyValidator::Float(validator)
    }
}

impl From<BooleanValidator> for AnyValidator {
    fn from(validator: BooleanValidator) -> Self {
        AnyValidator::Boolean(validator)
    }
}

impl From<OptionValidator> for AnyValidator {
    fn from(validator: OptionValidator) -> Self {
        AnyValidator::Option(validator)
    }
}

impl From<ListValidator> for AnyValidator {
    fn from(validator: ListValidator) -> Self {
        AnyValidator::List(validator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok_eq};

    #[test]
    fn test_dispatch_lifts_typed_outputs() {
        let validators: Vec<AnyValidator> = vec![
            RegexValidator::new(r"^\d+$").unwrap().into(),
            IntegerValidator::new().into(),
            FloatValidator::new().into(),
            BooleanValidator::new().into(),
            ListValidator::new().into(),
        ];

        assert_ok_eq!(validators[0].validate("123"), Value::Str("123".to_string()));
        assert_ok_eq!(validators[1].validate("42"), Value::Int(42));
        assert_ok_eq!(validators[2].validate("3.14"), Value::Float(3.14));
        assert_ok_eq!(validators[3].validate("T"), Value::Bool(true));
        assert_ok_eq!(
            validators[4].validate("[1]"),
            Value::List(vec![Literal::Int(1)])
        );
    }

    #[test]
    fn test_dispatch_propagates_failures() {
        let validator = AnyValidator::from(OptionValidator::new(["a", "b"]));
        let error = validator.validate("c").unwrap_err();
        assert_eq!(error.message(), "Select from the list of valid options.");
    }

    #[test]
    fn test_validators_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnyValidator>();
        assert_send_sync::<RegexValidator>();
        assert_send_sync::<ListValidator>();
    }

    #[test]
    fn test_heterogeneous_prompt_definition() {
        // The shape a prompt loop holds: one validator per question.
        let questions: Vec<(&str, AnyValidator)> = vec![
            ("retries", IntegerValidator::new().into()),
            ("verbose", BooleanValidator::new().into()),
            ("env", OptionValidator::new(["dev", "prod"]).into()),
        ];

        assert_ok_eq!(questions[0].1.validate("3"), Value::Int(3));
        assert_ok_eq!(questions[1].1.validate("0"), Value::Bool(false));
        assert_err!(questions[2].1.validate("staging"));
    }
}
