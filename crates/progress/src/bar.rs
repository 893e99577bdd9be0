//! A single-slot progress indicator

use std::fmt;
use std::sync::Arc;

use crate::surface::{ProgressHandle, ProgressOptions, ProgressSurface};

/// Shows at most one indicator at a time on a surface.
///
/// Showing while an indicator is active dismisses the old one first.
/// Dropping the bar dismisses whatever is still on screen.
pub struct ProgressBar {
    surface: Arc<dyn ProgressSurface>,
    active: Option<Box<dyn ProgressHandle>>,
}

impl ProgressBar {
    /// Creates a bar with nothing on screen.
    pub fn new(surface: Arc<dyn ProgressSurface>) -> Self {
        Self {
            surface,
            active: None,
        }
    }

    /// Replaces any active indicator with a new one.
    pub fn show(&mut self, options: ProgressOptions) {
        self.hide();
        tracing::debug!(
            style = ?options.style,
            title = options.title.as_deref(),
            cancelable = options.cancelable,
            "showing progress indicator"
        );
        self.active = Some(self.surface.open(options));
    }

    /// Dismisses the active indicator. Does nothing if none is showing.
    pub fn hide(&mut self) {
        if let Some(handle) = self.active.take() {
            tracing::debug!("hiding progress indicator");
            handle.dismiss();
        }
    }

    /// Whether an indicator is on screen.
    pub fn is_showing(&self) -> bool {
        self.active.is_some()
    }
}

impl Drop for ProgressBar {
    fn drop(&mut self) {
        self.hide();
    }
}

impl fmt::Debug for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBar")
            .field("showing", &self.is_showing())
            .finish_non_exhaustive()
    }
}
