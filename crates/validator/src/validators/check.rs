//! Predicate rule for ad-hoc checks on any value type

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Fails with `message` when `predicate` returns `false`.
///
/// This is the generic building block field kinds use for rules that have
/// no dedicated type.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldguard_validator::validators::check;
/// use fieldguard_validator::foundation::Validate;
///
/// let rule = check(|s: &str| s.contains('@'), "Enter a valid email");
/// assert!(rule.validate("a@b.c").is_ok());
/// assert!(rule.validate("abc").is_err());
/// ```
pub struct Check<T: ?Sized, P> {
    predicate: P,
    message: Cow<'static, str>,
    _input: PhantomData<fn(&T)>,
}

impl<T, P> Check<T, P>
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    /// Creates a predicate rule.
    pub fn new(predicate: P, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            predicate,
            message: message.into(),
            _input: PhantomData,
        }
    }

    /// The message reported on failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T: ?Sized, P> fmt::Debug for Check<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<T, P> Validate for Check<T, P>
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if (self.predicate)(input) {
            Ok(())
        } else {
            Err(ValidationError::new("check", self.message.clone()))
        }
    }

    fn name(&self) -> &str {
        "check"
    }
}

/// Creates a [`Check`] rule.
pub fn check<T, P>(predicate: P, message: impl Into<Cow<'static, str>>) -> Check<T, P>
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    Check::new(predicate, message)
}
