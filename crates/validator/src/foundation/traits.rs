//! Core traits for the validation system
//!
//! Every rule in a field's chain implements [`Validate`].

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A single validation rule over a field value.
///
/// Rules are pure: the result depends only on the input, and checking has
/// no side effects. A rule that panics is a bug in the rule itself; the
/// panic is not caught by the validator.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldguard_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "Spaces are not allowed"))
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` carrying the message to show otherwise
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns the name of this rule.
    ///
    /// Used in debug output and trace events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// An owned, type-erased rule as stored in a validator's chain.
pub type BoxedRule<T> = Box<dyn Validate<Input = T>>;

impl<T: ?Sized> Validate for BoxedRule<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// CHAIN EVALUATION
// ============================================================================

/// Runs `rules` against `input` in order and returns the first failure.
///
/// Evaluation short-circuits: rules after the first failing one are not
/// consulted.
pub fn first_failure<'a, T, I>(rules: I, input: &T) -> Result<(), ValidationError>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a BoxedRule<T>>,
{
    for rule in rules {
        if let Err(error) = rule.validate(input) {
            tracing::trace!(rule = rule.name(), code = %error.code, "rule failed");
            return Err(error);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails(&'static str, Rc<Cell<usize>>);

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            self.1.set(self.1.get() + 1);
            Err(ValidationError::new("always_fails", self.0))
        }
    }

    #[test]
    fn test_empty_chain_passes() {
        let rules: Vec<BoxedRule<str>> = Vec::new();
        assert!(first_failure(&rules, "anything").is_ok());
    }

    #[test]
    fn test_first_failure_short_circuits() {
        let calls = Rc::new(Cell::new(0));
        let rules: Vec<BoxedRule<str>> = vec![
            Box::new(AlwaysValid),
            Box::new(AlwaysFails("first", Rc::clone(&calls))),
            Box::new(AlwaysFails("second", Rc::clone(&calls))),
        ];

        let error = first_failure(&rules, "x").unwrap_err();
        assert_eq!(error.message, "first");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_boxed_rule_forwards_name() {
        let rule: BoxedRule<str> = Box::new(AlwaysValid);
        assert!(rule.name().ends_with("AlwaysValid"));
    }
}
