//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use souk_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::AlreadyExists => {
            StatusError::conflict().brief("A cart already exists for this customer")
        }
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::ItemNotFound => StatusError::not_found().brief("Cart item not found"),
        CartsServiceError::ProductNotFound => {
            StatusError::bad_request().brief("Product does not exist")
        }
        CartsServiceError::EmptyCustomerEmail => {
            StatusError::bad_request().brief("Customer email must not be blank")
        }
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be greater than zero")
        }
        CartsServiceError::MissingRequiredData | CartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid cart data")
        }
        CartsServiceError::Sql(source) => {
            error!("carts storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
