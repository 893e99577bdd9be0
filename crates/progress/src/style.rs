//! Indicator styles

/// Visual style of a progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProgressStyle {
    /// Indeterminate spinning wheel.
    #[default]
    Spinner,
    /// Horizontal bar.
    Horizontal,
}

impl ProgressStyle {
    /// The platform style id.
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            ProgressStyle::Spinner => 0,
            ProgressStyle::Horizontal => 1,
        }
    }
}
