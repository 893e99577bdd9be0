//! Text length rules
//!
//! Length is measured in Unicode scalar values (chars), so `"héllo"` has
//! length 5 regardless of its UTF-8 byte size.
//!
//! Messages are fixed when the rule is created. A template containing `#`
//! has it replaced by the bound; any other text is used as-is.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};
use crate::messages::{Messages, fill_template};

#[inline]
fn measure(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Fails when the text is shorter than `min` characters.
///
/// An empty string never fails `MinLength::new(0)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MinLength {
    min: usize,
    message: Cow<'static, str>,
}

impl MinLength {
    /// Creates the rule with the default English message.
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self::with_message(min, &Messages::default().min_length)
    }

    /// Creates the rule with `template`, substituting `#` with `min`.
    #[must_use]
    pub fn with_message(min: usize, template: &str) -> Self {
        Self {
            min,
            message: Cow::Owned(fill_template(template, min)),
        }
    }

    /// The inclusive lower bound.
    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    /// The message reported on failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Validate for MinLength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let actual = measure(input);
        if actual >= self.min {
            Ok(())
        } else {
            Err(ValidationError::new("min_length", self.message.clone())
                .with_param("min", self.min.to_string())
                .with_param("actual", actual.to_string()))
        }
    }

    fn name(&self) -> &str {
        "min_length"
    }
}

/// Creates a [`MinLength`] rule with the default message.
#[must_use]
pub fn min_length(min: usize) -> MinLength {
    MinLength::new(min)
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Fails when the text is longer than `max` characters.
///
/// An empty string never fails a max-length rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaxLength {
    max: usize,
    message: Cow<'static, str>,
}

impl MaxLength {
    /// Creates the rule with the default English message.
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self::with_message(max, &Messages::default().max_length)
    }

    /// Creates the rule with `template`, substituting `#` with `max`.
    #[must_use]
    pub fn with_message(max: usize, template: &str) -> Self {
        Self {
            max,
            message: Cow::Owned(fill_template(template, max)),
        }
    }

    /// The inclusive upper bound.
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    /// The message reported on failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Validate for MaxLength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let actual = measure(input);
        if actual <= self.max {
            Ok(())
        } else {
            Err(ValidationError::new("max_length", self.message.clone())
                .with_param("max", self.max.to_string())
                .with_param("actual", actual.to_string()))
        }
    }

    fn name(&self) -> &str {
        "max_length"
    }
}

/// Creates a [`MaxLength`] rule with the default message.
#[must_use]
pub fn max_length(max: usize) -> MaxLength {
    MaxLength::new(max)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_min_length_valid() {
        let validator = MinLength::new(5);
        assert!(validator.validate("abcde").is_ok());
        assert!(validator.validate("hello world").is_ok());
    }

    #[test]
    fn test_min_length_invalid_reports_bound() {
        let error = MinLength::new(5).validate("abcd").unwrap_err();
        assert_eq!(error.code, "min_length");
        assert!(error.message.contains('5'));
        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("4"));
    }

    #[test]
    fn test_min_length_zero_accepts_empty() {
        assert!(MinLength::new(0).validate("").is_ok());
    }

    #[test]
    fn test_min_length_custom_template() {
        let rule = MinLength::with_message(8, "Password needs # chars");
        assert_eq!(rule.message(), "Password needs 8 chars");
        assert_eq!(
            rule.validate("short").unwrap_err().message,
            "Password needs 8 chars"
        );
    }

    #[test]
    fn test_min_length_message_without_placeholder_is_verbatim() {
        let rule = MinLength::with_message(8, "Too short");
        assert_eq!(rule.message(), "Too short");
    }

    #[test]
    fn test_max_length_valid() {
        let validator = MaxLength::new(3);
        assert!(validator.validate("abc").is_ok());
        assert!(validator.validate("").is_ok());
    }

    #[test]
    fn test_max_length_invalid() {
        let error = MaxLength::new(3).validate("abcd").unwrap_err();
        assert_eq!(error.code, "max_length");
        assert_eq!(error.message, "Must be at most 3 characters");
    }

    #[test]
    fn test_max_length_zero_accepts_only_empty() {
        let validator = MaxLength::new(0);
        assert!(validator.validate("").is_ok());
        assert!(validator.validate("a").is_err());
    }

    #[test]
    fn test_unicode_counts_chars() {
        assert!(MinLength::new(5).validate("h\u{e9}llo").is_ok());
        assert!(MaxLength::new(5).validate("h\u{e9}llo").is_ok());
        assert!(MinLength::new(3).validate("\u{1f44b}\u{1f30d}").is_err());
    }

    #[test]
    fn test_helper_functions() {
        assert!(min_length(5).validate("hello").is_ok());
        assert!(max_length(10).validate("hello").is_ok());
    }
}
