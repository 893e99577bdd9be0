//! Error type for rule failures
//!
//! A [`ValidationError`] is the expected, user-facing outcome of a failing
//! rule. It is routed to the field's error display and never raised as a
//! panic.
//!
//! String fields use `Cow<'static, str>` so static codes and default
//! messages never allocate.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// Ordered key-value parameters attached to an error (typically 0-2).
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single rule failure.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldguard_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "Must be at least 5 characters")
///     .with_param("min", "5")
///     .with_param("actual", "3");
///
/// assert_eq!(error.param("min"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "min_length", "max_length"
    pub code: Cow<'static, str>,

    /// The message shown to the user.
    pub message: Cow<'static, str>,

    /// Parameters the message was built from.
    pub params: ErrorParams,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_param_lookup() {
        let error = ValidationError::new("min_length", "too short")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn test_display_without_params() {
        let error = ValidationError::new("required", "Email required");
        assert_eq!(error.to_string(), "required: Email required");
    }

    #[test]
    fn test_display_with_params() {
        let error = ValidationError::new("max_length", "too long")
            .with_param("max", "3")
            .with_param("actual", "4");
        assert_eq!(
            error.to_string(),
            "max_length: too long (params: [max=3, actual=4])"
        );
    }
}
