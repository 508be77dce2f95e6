//! Get Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use souk_app::domain::carts::models::{Cart, CartItem};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The unique identifier of the cart item
    pub uuid: Uuid,

    /// The product in the cart
    pub product_uuid: Uuid,

    /// How many units of the product are in the cart
    pub quantity: u32,

    /// The unit price in minor units, captured when the item was first added
    pub unit_price: u64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        CartItemResponse {
            uuid: item.uuid.into(),
            product_uuid: item.product_uuid.into(),
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// The customer the cart belongs to
    pub customer_email: String,

    /// The cart total in minor units
    pub total: u64,

    /// The items in the cart
    pub items: Vec<CartItemResponse>,

    /// The date and time the cart was created
    pub created_at: String,

    /// The date and time the cart was last updated
    pub updated_at: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        CartResponse {
            uuid: cart.uuid.into(),
            customer_email: cart.customer_email,
            total: cart.total,
            items: cart.items.into_iter().map(Into::into).collect(),
            created_at: cart.created_at.to_string(),
            updated_at: cart.updated_at.to_string(),
        }
    }
}

/// Get Cart Handler
///
/// Returns a cart with its items.
#[endpoint(tags("carts"), summary = "Get Cart", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart(cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use souk_app::domain::{
        carts::{CartsServiceError, MockCartsService, models::CartUuid},
        products::models::ProductUuid,
    };

    use crate::test_helpers::{carts_service, make_cart, make_cart_item};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("carts/{cart}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_cart_with_items() -> TestResult {
        let mut repo = MockCartsService::new();
        let uuid = CartUuid::new();
        let product = ProductUuid::new();

        repo.expect_get_cart()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| {
                let mut cart = make_cart(uuid, "ada@example.com");
                cart.items = vec![make_cart_item(uuid, product, 2)];
                cart.total = 200;
                Ok(cart)
            });

        let mut res = TestClient::get(format!("http://example.com/carts/{uuid}"))
            .send(&make_service(repo))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.total, 200);
        assert_eq!(body.items.len(), 1);
        assert_eq!(body.items[0].product_uuid, product.into_uuid());
        assert_eq!(body.items[0].quantity, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_cart_returns_404() -> TestResult {
        let mut repo = MockCartsService::new();
        let uuid = CartUuid::new();

        repo.expect_get_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/carts/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
