//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, get::CartResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// The new quantity. Zero removes the item.
    pub quantity: u32,
}

/// Update Cart Item Handler
///
/// Sets the quantity of a cart item. A quantity of zero removes the
/// item.
#[endpoint(
    tags("carts"),
    summary = "Update Cart Item",
    security(("bearer_auth" = [])),
    status_codes(200, 401, 404, 500)
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    item: PathParam<Uuid>,
    body: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .update_item_quantity(
            cart.into_inner().into(),
            item.into_inner().into(),
            body.into_inner().quantity,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use souk_app::domain::{
        carts::{
            CartsServiceError, MockCartsService,
            models::{CartItemUuid, CartUuid},
        },
        products::models::ProductUuid,
    };

    use crate::test_helpers::{carts_service, make_cart, make_cart_item};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(
            repo,
            Router::with_path("carts/{cart}/items/{item}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_sets_quantity() -> TestResult {
        let mut repo = MockCartsService::new();
        let cart = CartUuid::new();
        let item = CartItemUuid::new();
        let product = ProductUuid::new();

        repo.expect_update_item_quantity()
            .once()
            .withf(move |c, i, quantity| *c == cart && *i == item && *quantity == 5)
            .return_once(move |_, _, _| {
                let mut updated = make_cart(cart, "ada@example.com");
                updated.items = vec![make_cart_item(cart, product, 5)];
                updated.total = 500;
                Ok(updated)
            });

        let mut res = TestClient::put(format!("http://example.com/carts/{cart}/items/{item}"))
            .json(&UpdateCartItemRequest { quantity: 5 })
            .send(&make_service(repo))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.items[0].quantity, 5);
        assert_eq!(body.total, 500);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_to_zero_removes_item() -> TestResult {
        let mut repo = MockCartsService::new();
        let cart = CartUuid::new();
        let item = CartItemUuid::new();

        repo.expect_update_item_quantity()
            .once()
            .withf(move |_, _, quantity| *quantity == 0)
            .return_once(move |_, _, _| Ok(make_cart(cart, "ada@example.com")));

        let mut res = TestClient::put(format!("http://example.com/carts/{cart}/items/{item}"))
            .json(&UpdateCartItemRequest { quantity: 0 })
            .send(&make_service(repo))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_item_returns_404() -> TestResult {
        let mut repo = MockCartsService::new();
        let cart = CartUuid::new();
        let item = CartItemUuid::new();

        repo.expect_update_item_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::ItemNotFound));

        let res = TestClient::put(format!("http://example.com/carts/{cart}/items/{item}"))
            .json(&UpdateCartItemRequest { quantity: 2 })
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
