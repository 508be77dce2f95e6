//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use souk_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Category does not exist")
        }
        ProductsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Product name must not be blank")
        }
        ProductsServiceError::InvalidData | ProductsServiceError::InvalidPrice(_) => {
            StatusError::bad_request().brief("Invalid product data")
        }
        ProductsServiceError::Sql(source) => {
            error!("products storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
