//! Interfaces a UI toolkit implements to host validated fields
//!
//! A [`HostField`] is the input widget that owns the current value. It may
//! be wrapped by a [`DecoratedContainer`], an outer widget that renders
//! inline error text and has its own "error mode" styling.
//!
//! All of this runs on the UI thread. Implementations use interior
//! mutability (`Cell`/`RefCell`) and must not hold a borrow of their own
//! state while invoking change listeners: a listener immediately reads the
//! value back and may set an error on the same field.

use std::rc::Rc;

/// Callback registered with [`HostField::subscribe`].
///
/// Invoked after each mutation of the field's value, once the new value is
/// readable through [`HostField::value`].
pub type ChangeListener = Box<dyn Fn()>;

/// An input widget whose value is validated.
pub trait HostField {
    /// The value type rules are checked against, e.g. `str` for text fields.
    type Value: ?Sized + ToOwned;

    /// Returns a snapshot of the current value.
    fn value(&self) -> <Self::Value as ToOwned>::Owned;

    /// Shows `Some(message)` on the field itself, or clears it with `None`.
    fn set_error(&self, message: Option<&str>);

    /// The field's hint or label, if any.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Registers `listener` to run after every value mutation.
    fn subscribe(&self, listener: ChangeListener);

    /// The decorated container wrapping this field, if there is one.
    ///
    /// Queried once when a validator is built. The validator keeps only a
    /// weak reference, so the host must own the container elsewhere.
    fn decorated_container(&self) -> Option<Rc<dyn DecoratedContainer>> {
        None
    }
}

/// A wrapper widget able to render an inline error for its field.
pub trait DecoratedContainer {
    /// Shows `Some(message)` or clears the error text with `None`.
    fn set_error(&self, message: Option<&str>);

    /// Toggles the container's error styling independently of the text.
    fn set_error_enabled(&self, enabled: bool);

    /// The container's hint or label, if any.
    fn hint(&self) -> Option<String> {
        None
    }
}

/// Treats `None` and empty strings alike.
pub(crate) fn non_empty(hint: Option<String>) -> Option<String> {
    hint.filter(|h| !h.is_empty())
}
