//! Create Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use souk_app::domain::orders::models::{NewOrder, NewOrderItem, PaymentMethod, ShippingAddress};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderItemRequest {
    /// The product to order
    pub product_uuid: Uuid,

    /// How many units to order
    pub quantity: u32,

    /// The price per unit in minor units; the product's current price is
    /// captured when absent
    #[serde(default)]
    pub unit_price: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShippingAddressRequest {
    /// The street address
    pub address: String,

    /// The city
    pub city: String,

    /// The state or province
    pub state: String,

    /// The postal code
    pub postal_code: String,

    /// The country
    pub country: String,
}

impl From<ShippingAddressRequest> for ShippingAddress {
    fn from(shipping: ShippingAddressRequest) -> Self {
        ShippingAddress {
            address: shipping.address,
            city: shipping.city,
            state: shipping.state,
            postal_code: shipping.postal_code,
            country: shipping.country,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    /// The name of the customer placing the order
    pub customer_name: String,

    /// The customer placing the order
    pub customer_email: String,

    /// The contact number for delivery
    pub contact_number: String,

    /// Where the order ships to
    pub shipping: ShippingAddressRequest,

    /// The payment method, e.g. `CREDIT_CARD` or `CASH_ON_DELIVERY`
    pub payment_method: String,

    /// The lines to order
    pub items: Vec<CreateOrderItemRequest>,
}

/// Create Order Handler
///
/// Places a new order. Orders start as `PENDING`.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    security(("bearer_auth" = [])),
    status_codes(201, 400, 401, 500)
)]
pub(crate) async fn handler(
    body: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let body = body.into_inner();

    let payment_method = body
        .payment_method
        .parse::<PaymentMethod>()
        .map_err(|_| StatusError::bad_request().brief("Unknown payment method"))?;

    let order = state
        .app
        .orders
        .create_order(NewOrder {
            customer_name: body.customer_name,
            customer_email: body.customer_email,
            contact_number: body.contact_number,
            shipping: body.shipping.into(),
            payment_method,
            items: body
                .items
                .into_iter()
                .map(|item| NewOrderItem {
                    product_uuid: item.product_uuid.into(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect(),
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);
    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use souk_app::domain::{
        orders::{MockOrdersService, OrdersServiceError, models::OrderUuid},
        products::models::ProductUuid,
    };

    use crate::test_helpers::{make_order, make_order_item, orders_service};

    use super::*;

    fn make_service(repo: MockOrdersService) -> Service {
        orders_service(repo, Router::with_path("orders").post(handler))
    }

    fn request(product: Uuid) -> CreateOrderRequest {
        CreateOrderRequest {
            customer_name: "Ada Lovelace".to_string(),
            customer_email: "ada@example.com".to_string(),
            contact_number: "+1 555 0100".to_string(),
            shipping: ShippingAddressRequest {
                address: "1 Example Way".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                postal_code: "62701".to_string(),
                country: "US".to_string(),
            },
            payment_method: "CREDIT_CARD".to_string(),
            items: vec![CreateOrderItemRequest {
                product_uuid: product,
                quantity: 2,
                unit_price: None,
            }],
        }
    }

    #[tokio::test]
    async fn test_create_returns_201_with_location() -> TestResult {
        let mut repo = MockOrdersService::new();
        let uuid = OrderUuid::new();
        let product = ProductUuid::new();

        repo.expect_create_order()
            .once()
            .withf(move |new| {
                new.customer_name == "Ada Lovelace"
                    && new.customer_email == "ada@example.com"
                    && new.shipping.city == "Springfield"
                    && new.payment_method == PaymentMethod::CreditCard
                    && new.items.len() == 1
                    && new.items[0].product_uuid == product
                    && new.items[0].quantity == 2
            })
            .return_once(move |_| {
                let mut order = make_order(uuid, "ada@example.com");
                order.items = vec![make_order_item(uuid, product, 2)];
                order.total = 200;
                Ok(order)
            });

        let mut res = TestClient::post("http://example.com/orders")
            .json(&request(product.into_uuid()))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(
            res.headers().get(LOCATION).map(|v| v.to_str()).transpose()?,
            Some(format!("/orders/{uuid}").as_str())
        );

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(body.status, "PENDING");
        assert_eq!(body.total, 200);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_with_unknown_payment_method_returns_400() -> TestResult {
        let repo = MockOrdersService::new();

        let res = TestClient::post("http://example.com/orders")
            .json(&CreateOrderRequest {
                payment_method: "BARTER".to_string(),
                ..request(Uuid::now_v7())
            })
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_without_items_returns_400() -> TestResult {
        let mut repo = MockOrdersService::new();

        repo.expect_create_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::EmptyItems));

        let res = TestClient::post("http://example.com/orders")
            .json(&CreateOrderRequest {
                items: vec![],
                ..request(Uuid::now_v7())
            })
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_with_unknown_product_returns_400() -> TestResult {
        let mut repo = MockOrdersService::new();

        repo.expect_create_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::ProductNotFound));

        let res = TestClient::post("http://example.com/orders")
            .json(&request(Uuid::now_v7()))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
