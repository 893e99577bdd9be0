//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], plus the type-erased [`BoxedRule`]
//! - **Errors**: [`ValidationError`]
//!
//! A field's rule chain is a `Vec<BoxedRule<T>>` evaluated in insertion
//! order with [`first_failure`].

pub mod error;
pub mod traits;

pub use error::{ErrorParams, ValidationError};
pub use traits::{BoxedRule, Validate, first_failure};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
