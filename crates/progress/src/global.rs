//! The process-wide progress indicator
//!
//! One [`ProgressBar`] per process, driven from the UI thread. The host
//! installs its surface once at startup; afterwards any code can show or
//! hide the indicator without passing handles around.
//!
//! Surface and handle implementations must not call back into this module
//! from `open` or `dismiss`.

use std::sync::Arc;

use parking_lot::{Mutex, const_mutex};

use crate::bar::ProgressBar;
use crate::error::{ProgressError, ProgressResult};
use crate::style::ProgressStyle;
use crate::surface::{CancelCallback, ProgressOptions, ProgressSurface};

static PROGRESS: Mutex<Option<ProgressBar>> = const_mutex(None);

/// Installs the surface indicators are shown on.
///
/// Replacing a surface dismisses anything the previous one was showing.
pub fn install(surface: impl ProgressSurface + 'static) {
    let previous = PROGRESS.lock().replace(ProgressBar::new(Arc::new(surface)));
    if previous.is_some() {
        tracing::debug!("replacing progress surface");
    }
    drop(previous);
}

/// Removes the installed surface, dismissing any active indicator.
pub fn uninstall() {
    let previous = PROGRESS.lock().take();
    drop(previous);
}

/// Shows an indicator, replacing the active one if any.
pub fn show(
    style: ProgressStyle,
    title: Option<&str>,
    message: Option<&str>,
    cancelable: bool,
    on_cancel: Option<CancelCallback>,
) -> ProgressResult<()> {
    let mut options = ProgressOptions::new(style).cancelable(cancelable);
    if let Some(title) = title {
        options = options.title(title);
    }
    if let Some(message) = message {
        options = options.message(message);
    }
    options.on_cancel = on_cancel;
    show_options(options)
}

/// Shows a non-cancelable indicator with optional title and message.
pub fn show_with(
    style: ProgressStyle,
    title: Option<&str>,
    message: Option<&str>,
) -> ProgressResult<()> {
    show(style, title, message, false, None)
}

/// Shows a bare spinner.
pub fn show_spinner() -> ProgressResult<()> {
    show_options(ProgressOptions::new(ProgressStyle::Spinner))
}

/// Shows an indicator built from `options`.
pub fn show_options(options: ProgressOptions) -> ProgressResult<()> {
    let mut slot = PROGRESS.lock();
    let bar = slot.as_mut().ok_or(ProgressError::NoSurface)?;
    bar.show(options);
    Ok(())
}

/// Dismisses the active indicator. Does nothing if none is showing.
pub fn hide() {
    if let Some(bar) = PROGRESS.lock().as_mut() {
        bar.hide();
    }
}

/// Whether an indicator is on screen.
pub fn is_showing() -> bool {
    PROGRESS.lock().as_ref().is_some_and(ProgressBar::is_showing)
}
