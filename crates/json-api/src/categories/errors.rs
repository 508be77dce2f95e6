//! Category Errors

use salvo::http::StatusError;
use tracing::error;

use souk_app::domain::categories::CategoriesServiceError;

pub(crate) fn into_status_error(error: CategoriesServiceError) -> StatusError {
    match error {
        CategoriesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Category already exists")
        }
        CategoriesServiceError::StillReferenced => {
            StatusError::conflict().brief("Category still has products")
        }
        CategoriesServiceError::InvalidName => {
            StatusError::bad_request().brief("Category name must not be blank")
        }
        CategoriesServiceError::NotFound => StatusError::not_found().brief("Category not found"),
        CategoriesServiceError::Sql(source) => {
            error!("categories storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
