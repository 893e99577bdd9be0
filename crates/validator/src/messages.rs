//! Message catalogue for default rule messages
//!
//! The host application owns localization. Validators only ask a
//! [`MessageSource`] for a template by [`MessageKey`] when a rule is added
//! without an explicit message. Templates may contain the placeholder
//! [`PLACEHOLDER`], which is replaced with the rule's numeric bound.
//!
//! [`Messages`] is the built-in English catalogue. It deserializes from
//! JSON with every key optional:
//!
//! ```rust,ignore
//! use fieldguard_validator::messages::Messages;
//!
//! let messages = Messages::from_json(r#"{ "required": "Obligatoire" }"#)?;
//! assert_eq!(messages.required, "Obligatoire");
//! assert_eq!(messages.min_length, "Must be at least # characters");
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;

/// Token replaced by a rule's numeric bound in message templates.
pub const PLACEHOLDER: char = '#';

// ============================================================================
// KEYS
// ============================================================================

/// Identifies a default message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Generic "this field is required" message.
    Required,
    /// Suffix appended to a field's hint, e.g. `"Email" + " required"`.
    RequiredUseHint,
    /// Minimum length template, `#` is the bound.
    MinLength,
    /// Maximum length template, `#` is the bound.
    MaxLength,
}

impl MessageKey {
    /// Every key, in declaration order.
    pub const ALL: [MessageKey; 4] = [
        MessageKey::Required,
        MessageKey::RequiredUseHint,
        MessageKey::MinLength,
        MessageKey::MaxLength,
    ];

    /// The catalogue key as it appears in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageKey::Required => "required",
            MessageKey::RequiredUseHint => "required_use_hint",
            MessageKey::MinLength => "min_length",
            MessageKey::MaxLength => "max_length",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SOURCE TRAIT
// ============================================================================

/// Resolves default message templates.
///
/// Implemented by [`Messages`] and by any `Fn(MessageKey) -> String`, so a
/// host can plug in its own resource lookup:
///
/// ```rust,ignore
/// let lookup = |key: MessageKey| resources.get_string(key.as_str());
/// let builder = ValidatorBuilder::with_messages(field, lookup);
/// ```
pub trait MessageSource {
    /// Returns the template for `key`.
    fn resolve(&self, key: MessageKey) -> Cow<'_, str>;
}

impl<F> MessageSource for F
where
    F: Fn(MessageKey) -> String,
{
    fn resolve(&self, key: MessageKey) -> Cow<'_, str> {
        Cow::Owned(self(key))
    }
}

// ============================================================================
// BUILT-IN CATALOGUE
// ============================================================================

/// Errors raised while loading a message catalogue.
#[derive(Debug, thiserror::Error)]
pub enum MessagesError {
    /// The document is not valid catalogue JSON.
    #[error("invalid message catalogue: {0}")]
    Parse(#[from] serde_json::Error),

    /// A template is empty or whitespace-only.
    #[error("message template `{key}` is empty")]
    EmptyTemplate {
        /// The offending key.
        key: MessageKey,
    },
}

/// The default English message catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
    /// Shown by a required rule when the field has no hint.
    pub required: String,
    /// Appended to the field hint by a required rule.
    pub required_use_hint: String,
    /// Minimum length template.
    pub min_length: String,
    /// Maximum length template.
    pub max_length: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: "This field is required".to_owned(),
            required_use_hint: "required".to_owned(),
            min_length: "Must be at least # characters".to_owned(),
            max_length: "Must be at most # characters".to_owned(),
        }
    }
}

impl Messages {
    /// Loads a catalogue from JSON. Missing keys keep their English default.
    pub fn from_json(json: &str) -> Result<Self, MessagesError> {
        let messages: Self = serde_json::from_str(json)?;
        messages.ensure_complete()?;
        Ok(messages)
    }

    /// Fails if any template is blank.
    pub fn ensure_complete(&self) -> Result<(), MessagesError> {
        match MessageKey::ALL
            .into_iter()
            .find(|key| self.template(*key).trim().is_empty())
        {
            Some(key) => Err(MessagesError::EmptyTemplate { key }),
            None => Ok(()),
        }
    }

    /// Returns the template stored for `key`.
    #[must_use]
    pub fn template(&self, key: MessageKey) -> &str {
        match key {
            MessageKey::Required => &self.required,
            MessageKey::RequiredUseHint => &self.required_use_hint,
            MessageKey::MinLength => &self.min_length,
            MessageKey::MaxLength => &self.max_length,
        }
    }
}

impl MessageSource for Messages {
    fn resolve(&self, key: MessageKey) -> Cow<'_, str> {
        Cow::Borrowed(self.template(key))
    }
}

// ============================================================================
// TEMPLATES
// ============================================================================

/// Replaces every [`PLACEHOLDER`] in `template` with `value`.
///
/// Templates without a placeholder are returned unchanged.
#[must_use]
pub fn fill_template(template: &str, value: usize) -> String {
    if template.contains(PLACEHOLDER) {
        template.replace(PLACEHOLDER, &value.to_string())
    } else {
        template.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Must be at least # characters", 5, "Must be at least 5 characters")]
    #[case("# to #", 3, "3 to 3")]
    #[case("Too short", 8, "Too short")]
    #[case("", 1, "")]
    fn test_fill_template(#[case] template: &str, #[case] value: usize, #[case] expected: &str) {
        assert_eq!(fill_template(template, value), expected);
    }

    #[test]
    fn test_default_catalogue_is_complete() {
        assert!(Messages::default().ensure_complete().is_ok());
    }

    #[test]
    fn test_from_json_keeps_defaults_for_missing_keys() {
        let messages = Messages::from_json(r#"{ "required": "Obligatoire" }"#).unwrap();
        assert_eq!(messages.required, "Obligatoire");
        assert_eq!(messages.min_length, Messages::default().min_length);
    }

    #[test]
    fn test_from_json_rejects_blank_template() {
        let err = Messages::from_json(r#"{ "max_length": "  " }"#).unwrap_err();
        assert!(matches!(
            err,
            MessagesError::EmptyTemplate {
                key: MessageKey::MaxLength
            }
        ));
        assert_eq!(err.to_string(), "message template `max_length` is empty");
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let err = Messages::from_json(r#"{ "minimum": "x" }"#).unwrap_err();
        assert!(matches!(err, MessagesError::Parse(_)));
    }

    #[test]
    fn test_closure_source() {
        let source = |key: MessageKey| format!("<{key}>");
        assert_eq!(source.resolve(MessageKey::Required), "<required>");
    }
}
