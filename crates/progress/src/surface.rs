//! The platform side of a progress indicator
//!
//! A [`ProgressSurface`] opens modal indicators; each open indicator is a
//! [`ProgressHandle`] that can be dismissed exactly once.

use std::fmt;

use crate::style::ProgressStyle;

/// Called when the user cancels a cancelable indicator.
pub type CancelCallback = Box<dyn FnMut() + Send>;

/// Creates and shows indicators.
pub trait ProgressSurface: Send + Sync {
    /// Shows a new indicator configured by `options`.
    fn open(&self, options: ProgressOptions) -> Box<dyn ProgressHandle>;
}

/// An indicator currently on screen.
pub trait ProgressHandle: Send {
    /// Removes the indicator from the screen.
    fn dismiss(self: Box<Self>);
}

/// How an indicator is presented.
///
/// Empty titles and messages are treated as absent.
///
/// ```rust,ignore
/// let options = ProgressOptions::new(ProgressStyle::Horizontal)
///     .title("Uploading")
///     .message("photo.jpg")
///     .cancelable(true)
///     .on_cancel(|| abort_upload());
/// ```
#[derive(Default)]
pub struct ProgressOptions {
    /// Spinner or horizontal bar.
    pub style: ProgressStyle,
    /// Optional title.
    pub title: Option<String>,
    /// Optional body text.
    pub message: Option<String>,
    /// Whether the user may dismiss the indicator.
    pub cancelable: bool,
    /// Invoked by the surface when the user cancels.
    pub on_cancel: Option<CancelCallback>,
}

fn non_empty(text: impl Into<String>) -> Option<String> {
    let text = text.into();
    (!text.is_empty()).then_some(text)
}

impl ProgressOptions {
    /// Non-cancelable indicator of `style` with no title or message.
    #[must_use]
    pub fn new(style: ProgressStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Sets the title.
    #[must_use = "builder methods must be chained or built"]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title);
        self
    }

    /// Sets the body text.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = non_empty(message);
        self
    }

    /// Lets the user cancel the indicator.
    #[must_use = "builder methods must be chained or built"]
    pub fn cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    /// Registers the cancel callback.
    #[must_use = "builder methods must be chained or built"]
    pub fn on_cancel(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for ProgressOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressOptions")
            .field("style", &self.style)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("cancelable", &self.cancelable)
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}
