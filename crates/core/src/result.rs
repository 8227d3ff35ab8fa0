//! Result type definition and recovery combinators.
//!
//! The page controller never surfaces an error to the visitor. Fallible
//! browser access goes through these combinators so every recovery is logged
//! in one place instead of being dropped with `let _ =`.

use crate::error::Error;

/// The standard Result type for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Recovery combinators for Results whose failure is non-fatal.
pub trait ResultExt<T> {
    /// Convert to an Option, logging the error at debug level.
    fn into_option_logged(self, context: &str) -> Option<T>;

    /// Get the value or a default, logging the error at debug level.
    fn or_default_logged(self, default: T, context: &str) -> T;

    /// Discard the outcome, logging the error at debug level.
    fn ignore_logged(self, context: &str);
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(error = %e, "{context}");
                None
            }
        }
    }

    fn or_default_logged(self, default: T, context: &str) -> T {
        self.into_option_logged(context).unwrap_or(default)
    }

    fn ignore_logged(self, context: &str) {
        let _ = self.into_option_logged(context);
    }
}
