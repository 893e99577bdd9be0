//! Per-field validator
//!
//! A [`Validator`] binds an ordered rule chain to one host field. Each run
//! reads the field's current value, stops at the first failing rule and
//! shows its message, or clears the error when every rule passes. Exactly
//! one display call happens per run.
//!
//! Validators are created by [`ValidatorBuilder`](crate::ValidatorBuilder)
//! and their rule chain never changes afterwards.

use std::borrow::Borrow;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::display::{DisplayKind, ErrorDisplay};
use crate::foundation::{BoxedRule, ValidationResult, first_failure};
use crate::host::HostField;

/// Validates a single host field.
///
/// The validator borrows the field: it holds it weakly, and the field's
/// change hook holds the validator. A validator built with live
/// validation therefore keeps working after every handle returned by
/// `build` is dropped, and lives exactly as long as the field. Once the
/// field is gone, runs pass without any display call.
///
/// Cloning is cheap and yields a handle to the same validator.
pub struct Validator<F: HostField + 'static> {
    inner: Rc<Inner<F>>,
}

struct Inner<F: HostField + 'static> {
    field: Weak<F>,
    rules: Vec<BoxedRule<F::Value>>,
    display: ErrorDisplay,
    shown: RefCell<Option<String>>,
    live: Cell<bool>,
}

impl<F: HostField + 'static> Inner<F> {
    fn check(&self) -> ValidationResult<()> {
        match self.field.upgrade() {
            Some(field) => self.check_value(&field),
            None => Ok(()),
        }
    }

    fn check_value(&self, field: &F) -> ValidationResult<()> {
        let owned = field.value();
        let value: &F::Value = owned.borrow();
        first_failure(&self.rules, value)
    }

    fn validate(&self) -> bool {
        let Some(field) = self.field.upgrade() else {
            tracing::trace!("field dropped, nothing to validate");
            return true;
        };
        match self.check_value(&field) {
            Ok(()) => {
                self.clear_on(&field);
                true
            }
            Err(error) => {
                self.show_on(&field, &error.message);
                false
            }
        }
    }

    fn show_on(&self, field: &F, message: &str) {
        self.display.show(field, message);
        *self.shown.borrow_mut() = Some(message.to_owned());
    }

    fn clear_on(&self, field: &F) {
        self.display.clear(field);
        *self.shown.borrow_mut() = None;
    }
}

impl<F: HostField + 'static> Validator<F> {
    pub(crate) fn new(field: &Rc<F>, rules: Vec<BoxedRule<F::Value>>, display: ErrorDisplay) -> Self {
        Self {
            inner: Rc::new(Inner {
                field: Rc::downgrade(field),
                rules,
                display,
                shown: RefCell::new(None),
                live: Cell::new(false),
            }),
        }
    }

    /// Runs the rule chain against the field's current value.
    ///
    /// Shows the first failing rule's message and returns `false`, or
    /// clears any shown error and returns `true`.
    pub fn validate(&self) -> bool {
        let valid = self.inner.validate();
        tracing::trace!(valid, rules = self.inner.rules.len(), "validated field");
        valid
    }

    /// Runs the rule chain without touching the error display.
    ///
    /// The returned error carries the failing rule's `code` and its
    /// parameters. The length rules report the bound (`min` or `max`)
    /// and the measured `actual` length:
    ///
    /// ```rust,ignore
    /// let error = validator.check().unwrap_err();
    /// assert_eq!(error.code, "min_length");
    /// assert_eq!(error.param("min"), Some("5"));
    /// assert_eq!(error.param("actual"), Some("4"));
    /// ```
    pub fn check(&self) -> ValidationResult<()> {
        self.inner.check()
    }

    /// Shows `message` through the resolved display.
    pub fn show_error(&self, message: &str) {
        if let Some(field) = self.inner.field.upgrade() {
            self.inner.show_on(&field, message);
        }
    }

    /// Clears the error through the resolved display.
    pub fn clear_error(&self) {
        if let Some(field) = self.inner.field.upgrade() {
            self.inner.clear_on(&field);
        }
    }

    /// The message currently shown by this validator, if any.
    pub fn error(&self) -> Option<String> {
        self.inner.shown.borrow().clone()
    }

    /// Whether the last display call showed an error.
    pub fn has_error(&self) -> bool {
        self.inner.shown.borrow().is_some()
    }

    /// Number of rules in the chain.
    pub fn rule_count(&self) -> usize {
        self.inner.rules.len()
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.inner.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Where errors are rendered.
    pub fn display_kind(&self) -> DisplayKind {
        self.inner.display.kind()
    }

    /// Whether the validator re-runs after every value change.
    pub fn is_live(&self) -> bool {
        self.inner.live.get()
    }

    /// The validated field, or `None` once it has been dropped.
    pub fn field(&self) -> Option<Rc<F>> {
        self.inner.field.upgrade()
    }

    /// Subscribes to `field` so every mutation triggers a run.
    ///
    /// The listener owns a handle to the validator; the validator only
    /// refers back to the field weakly, so no cycle forms.
    pub(crate) fn watch(&self, field: &F) {
        let inner = Rc::clone(&self.inner);
        field.subscribe(Box::new(move || {
            tracing::trace!("field changed, revalidating");
            inner.validate();
        }));
        self.inner.live.set(true);
    }
}

impl<F: HostField + 'static> Clone for Validator<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<F: HostField + 'static> fmt::Debug for Validator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rule_names())
            .field("display", &self.inner.display)
            .field("error", &self.inner.shown.borrow())
            .field("live", &self.inner.live.get())
            .finish_non_exhaustive()
    }
}
