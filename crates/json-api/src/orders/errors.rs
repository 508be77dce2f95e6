//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use souk_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::ProductNotFound => {
            StatusError::bad_request().brief("Product does not exist")
        }
        OrdersServiceError::EmptyItems => {
            StatusError::bad_request().brief("An order must contain at least one item")
        }
        OrdersServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be greater than zero")
        }
        OrdersServiceError::MissingRequiredData | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order data")
        }
        OrdersServiceError::Sql(source) => {
            error!("orders storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
