//! # Promptval
//!
//! Input validation primitives for terminal prompt workflows. Given a raw
//! string typed by a user, each validator confirms it satisfies a shape —
//! regex match, existing path or file, integer, float, boolean, list
//! literal, or membership in an enumerated option set — and returns the
//! coerced value or a failure carrying a human-readable message.
//!
//! The prompting loop itself is out of scope: this crate is the piece a
//! prompt library calls once per input attempt, reacting to the outcome by
//! accepting the value or re-prompting with the message.
//!
//! ## Modules
//!
//! - [`error`] - The single validation error kind and its aggregation list
//! - [`literal`] - Restricted structured-literal parsing for list input
//! - [`validation`] - The [`Validator`] trait every validator implements
//! - [`validators`] - The eight validator types and [`AnyValidator`]
//!
//! ## Example
//!
//! ```
//! use promptval::{IntegerValidator, Validator};
//!
//! let retries = IntegerValidator::new().with_message("Enter a whole number of retries.");
//!
//! assert_eq!(retries.validate("3").unwrap(), 3);
//! assert_eq!(
//!     retries.validate("three").unwrap_err().message(),
//!     "Enter a whole number of retries."
//! );
//! ```

pub mod error;
pub mod literal;
pub mod validation;
pub mod validators;

pub use error::ValidationError;
pub use literal::Literal;
pub use validation::Validator;
pub use validators::{
    AnyValidator, BooleanValidator, FileValidator, FloatValidator, IntegerValidator,
    ListValidator, OptionValidator, PathValidator, RegexValidator, Value,
};
