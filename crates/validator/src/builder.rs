//! Fluent construction of validators
//!
//! [`ValidatorBuilder`] works for any [`HostField`]: it accumulates rules
//! for the field's value type and wires live validation on
//! [`build`](ValidatorBuilder::build). Text fields (`Value = str`) get
//! extra convenience methods for the common rules.
//!
//! Rules run in the order they were added. Nothing is reordered, so call
//! `required()` first if it should win over length checks on empty input.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldguard_validator::prelude::*;
//!
//! let validator = ValidatorBuilder::new(email_field)
//!     .required()
//!     .min_length(5)
//!     .max_length(254)
//!     .build();
//!
//! if validator.validate() {
//!     submit();
//! }
//! ```

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::display::ErrorDisplay;
use crate::foundation::{BoxedRule, Validate};
use crate::host::HostField;
use crate::messages::{MessageKey, MessageSource, Messages};
use crate::validator::Validator;
use crate::validators::{Check, MaxLength, MinLength, Required};

/// Accumulates rules for one field and produces a [`Validator`].
///
/// `build` consumes the builder, so a builder can only ever produce one
/// validator and the change hook is wired at most once.
pub struct ValidatorBuilder<F: HostField + 'static> {
    field: Rc<F>,
    display: ErrorDisplay,
    rules: Vec<BoxedRule<F::Value>>,
    validate_on_change: bool,
    messages: Box<dyn MessageSource>,
}

impl<F: HostField + 'static> ValidatorBuilder<F> {
    /// Starts a builder using the English [`Messages`] catalogue.
    pub fn new(field: Rc<F>) -> Self {
        Self::with_messages(field, Messages::default())
    }

    /// Starts a builder that resolves default messages from `messages`.
    pub fn with_messages(field: Rc<F>, messages: impl MessageSource + 'static) -> Self {
        let display = ErrorDisplay::resolve(&*field);
        Self {
            field,
            display,
            rules: Vec::new(),
            validate_on_change: true,
            messages: Box::new(messages),
        }
    }

    /// Don't validate after each change; the caller runs
    /// [`Validator::validate`] itself, e.g. on submit.
    pub fn skip_validate_on_change(mut self) -> Self {
        self.validate_on_change = false;
        self
    }

    /// Appends any rule for the field's value type.
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: Validate<Input = F::Value> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends a predicate rule.
    pub fn check<P>(self, predicate: P, message: impl Into<Cow<'static, str>>) -> Self
    where
        P: Fn(&F::Value) -> bool + 'static,
    {
        self.rule(Check::new(predicate, message))
    }

    /// Finishes the chain, wiring live validation unless it was skipped.
    ///
    /// With live validation the field keeps the validator alive, so the
    /// returned handle may be dropped. Without it the handle is the only
    /// way to run the chain.
    pub fn build(self) -> Validator<F> {
        let live = self.validate_on_change;
        let validator = Validator::new(&self.field, self.rules, self.display);
        if live {
            validator.watch(&self.field);
        }
        tracing::debug!(
            rules = validator.rule_count(),
            display = ?validator.display_kind(),
            live,
            "built validator"
        );
        validator
    }

    /// Resolves a default message template.
    ///
    /// A blank template is a broken catalogue, not bad user input.
    fn message(&self, key: MessageKey) -> String {
        let template = self.messages.resolve(key);
        assert!(
            !template.trim().is_empty(),
            "message catalogue returned an empty `{key}` template"
        );
        template.into_owned()
    }
}

// ============================================================================
// TEXT FIELDS
// ============================================================================

impl<F> ValidatorBuilder<F>
where
    F: HostField<Value = str> + 'static,
{
    /// Requires non-blank text.
    ///
    /// With a hint on the container or field the message is
    /// `"<hint> required"`; otherwise the generic required message is used.
    pub fn required(self) -> Self {
        let message = match self.display.hint(&*self.field) {
            Some(hint) => format!("{hint} {}", self.message(MessageKey::RequiredUseHint)),
            None => self.message(MessageKey::Required),
        };
        self.rule(Required::with_message(message))
    }

    /// Requires non-blank text, reporting `message` when empty.
    pub fn required_with(self, message: impl Into<Cow<'static, str>>) -> Self {
        self.rule(Required::with_message(message))
    }

    /// Requires at least `min` characters.
    pub fn min_length(self, min: usize) -> Self {
        let template = self.message(MessageKey::MinLength);
        self.rule(MinLength::with_message(min, &template))
    }

    /// Requires at least `min` characters. `#` in `message` becomes `min`.
    pub fn min_length_with(self, min: usize, message: &str) -> Self {
        self.rule(MinLength::with_message(min, message))
    }

    /// Allows at most `max` characters.
    pub fn max_length(self, max: usize) -> Self {
        let template = self.message(MessageKey::MaxLength);
        self.rule(MaxLength::with_message(max, &template))
    }

    /// Allows at most `max` characters. `#` in `message` becomes `max`.
    pub fn max_length_with(self, max: usize, message: &str) -> Self {
        self.rule(MaxLength::with_message(max, message))
    }
}

impl<F: HostField + 'static> fmt::Debug for ValidatorBuilder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules: Vec<&str> = self.rules.iter().map(|rule| rule.name()).collect();
        f.debug_struct("ValidatorBuilder")
            .field("display", &self.display)
            .field("rules", &rules)
            .field("validate_on_change", &self.validate_on_change)
            .finish_non_exhaustive()
    }
}
