//! Error display strategies
//!
//! Where an error message is rendered is decided once, when the validator
//! is constructed: if the host field reports a decorated container, errors
//! go to the container; otherwise they go to the bare field.

use std::fmt;
use std::rc::{Rc, Weak};

use crate::host::{DecoratedContainer, HostField, non_empty};

/// Which strategy a validator resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayKind {
    /// Errors are rendered by the field's decorated container.
    Container,
    /// Errors are rendered by the field itself.
    Field,
}

/// The resolved display strategy.
///
/// The container is held weakly, like the field. Once it is gone its
/// display calls are dropped.
pub(crate) enum ErrorDisplay {
    Container(Weak<dyn DecoratedContainer>),
    Field,
}

impl ErrorDisplay {
    /// Asks `field` for its container once and caches the answer.
    pub(crate) fn resolve<F: HostField + ?Sized>(field: &F) -> Self {
        let resolved = match field.decorated_container() {
            Some(container) => ErrorDisplay::Container(Rc::downgrade(&container)),
            None => ErrorDisplay::Field,
        };
        let kind = resolved.kind();
        tracing::debug!(?kind, "resolved error display");
        resolved
    }

    pub(crate) fn kind(&self) -> DisplayKind {
        match self {
            ErrorDisplay::Container(_) => DisplayKind::Container,
            ErrorDisplay::Field => DisplayKind::Field,
        }
    }

    pub(crate) fn show<F: HostField + ?Sized>(&self, field: &F, message: &str) {
        match self {
            ErrorDisplay::Container(container) => {
                if let Some(container) = container.upgrade() {
                    container.set_error(Some(message));
                }
            }
            ErrorDisplay::Field => field.set_error(Some(message)),
        }
    }

    /// Clears the message. A container also leaves error mode, so its
    /// styling resets along with the text.
    pub(crate) fn clear<F: HostField + ?Sized>(&self, field: &F) {
        match self {
            ErrorDisplay::Container(container) => {
                if let Some(container) = container.upgrade() {
                    container.set_error(None);
                    container.set_error_enabled(false);
                }
            }
            ErrorDisplay::Field => field.set_error(None),
        }
    }

    /// The hint to build messages from: the container's first, then the
    /// field's.
    pub(crate) fn hint<F: HostField + ?Sized>(&self, field: &F) -> Option<String> {
        let container_hint = match self {
            ErrorDisplay::Container(container) => {
                container.upgrade().and_then(|container| non_empty(container.hint()))
            }
            ErrorDisplay::Field => None,
        };
        container_hint.or_else(|| non_empty(field.hint()))
    }
}

impl fmt::Debug for ErrorDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorDisplay").field(&self.kind()).finish()
    }
}
