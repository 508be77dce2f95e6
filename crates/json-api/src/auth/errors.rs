//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use souk_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::EmailTaken => {
            StatusError::conflict().brief("An account already exists for this email")
        }
        AuthServiceError::WeakPassword => {
            StatusError::bad_request().brief("Password does not meet the minimum length")
        }
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid credentials")
        }
        AuthServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Email and password are required")
        }
        AuthServiceError::Password(source) => {
            error!("password hashing error: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Token(source) => {
            error!("token signing error: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Sql(source) => {
            error!("auth storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
