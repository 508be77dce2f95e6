//! `Result` adapters for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Collapses infrastructure failures into a logged 500.
///
/// The context string ends up in the server log, never in the response body.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|source| {
            error!("{context}: {source}");

            StatusError::internal_server_error()
        })
    }
}
