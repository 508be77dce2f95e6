//! Categories service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CategoriesServiceError {
    #[error("category already exists")]
    AlreadyExists,

    #[error("category not found")]
    NotFound,

    #[error("category is still referenced")]
    StillReferenced,

    #[error("category name must not be blank")]
    InvalidName,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CategoriesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::StillReferenced,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidName,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
