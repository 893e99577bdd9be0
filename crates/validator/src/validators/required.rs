//! Required text rule

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};
use crate::messages::Messages;

/// Fails when the text is empty or whitespace-only.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldguard_validator::validators::Required;
/// use fieldguard_validator::foundation::Validate;
///
/// let rule = Required::with_message("Email required");
/// assert!(rule.validate("a@b.c").is_ok());
/// assert!(rule.validate("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Required {
    message: Cow<'static, str>,
}

impl Required {
    /// Creates the rule with the default English message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: Cow::Owned(Messages::default().required),
        }
    }

    /// Creates the rule with a message that replaces the default entirely.
    #[must_use]
    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message reported on failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Required {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.trim().is_empty() {
            Err(ValidationError::new("required", self.message.clone()))
        } else {
            Ok(())
        }
    }

    fn name(&self) -> &str {
        "required"
    }
}

/// Creates a [`Required`] rule with the default message.
#[must_use]
pub fn required() -> Required {
    Required::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_blank_fails(#[case] input: &str) {
        let error = required().validate(input).unwrap_err();
        assert_eq!(error.code, "required");
        assert_eq!(error.message, "This field is required");
    }

    #[rstest]
    #[case("a")]
    #[case("  a  ")]
    #[case("hello")]
    fn test_non_blank_passes(#[case] input: &str) {
        assert!(required().validate(input).is_ok());
    }

    #[test]
    fn test_explicit_message_replaces_default() {
        let error = Required::with_message("Name required")
            .validate("")
            .unwrap_err();
        assert_eq!(error.message, "Name required");
    }
}
