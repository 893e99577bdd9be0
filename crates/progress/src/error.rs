//! Errors for the global progress indicator

/// Result type for progress operations.
pub type ProgressResult<T> = Result<T, ProgressError>;

/// Progress indicator error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// `show` was called before a surface was installed.
    #[error("no progress surface installed")]
    NoSurface,
}
