//! Auth service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::auth::{password::PasswordError, token::TokenError};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("an account already exists for this email")]
    EmailTaken,

    #[error("password does not meet the minimum length")]
    WeakPassword,

    /// Deliberately covers both an unknown email and a wrong password, so a
    /// caller cannot probe which emails are registered.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing required data")]
    MissingRequiredData,

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::EmailTaken,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            _ => Self::Sql(error),
        }
    }
}
