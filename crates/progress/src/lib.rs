//! # fieldguard-progress
//!
//! A modal progress indicator with at most one instance on screen.
//!
//! ```rust,ignore
//! use fieldguard_progress::{self as progress, ProgressStyle};
//!
//! progress::install(MyDialogSurface::new(window));
//!
//! progress::show_with(ProgressStyle::Spinner, Some("Signing in"), None)?;
//! // ...
//! progress::hide();
//! ```
//!
//! Showing while an indicator is active replaces it; hiding when nothing
//! is active is a no-op. [`ProgressBar`] offers the same behaviour as a
//! plain value for hosts that prefer to own the state.

mod bar;
mod error;
mod global;
mod style;
mod surface;

pub use bar::ProgressBar;
pub use error::{ProgressError, ProgressResult};
pub use global::{
    hide, install, is_showing, show, show_options, show_spinner, show_with, uninstall,
};
pub use style::ProgressStyle;
pub use surface::{CancelCallback, ProgressHandle, ProgressOptions, ProgressSurface};
