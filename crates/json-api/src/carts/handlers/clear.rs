//! Clear Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, get::CartResponse},
    extensions::*,
    state::State,
};

/// Clear Cart Handler
///
/// Removes every item from the cart and returns the emptied cart.
#[endpoint(
    tags("carts"),
    summary = "Clear Cart",
    security(("bearer_auth" = [])),
    status_codes(200, 401, 404, 500)
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .clear_cart(cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use souk_app::domain::carts::{CartsServiceError, MockCartsService, models::CartUuid};

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("carts/{cart}/items").delete(handler))
    }

    #[tokio::test]
    async fn test_clear_returns_empty_cart() -> TestResult {
        let mut repo = MockCartsService::new();
        let uuid = CartUuid::new();

        repo.expect_clear_cart()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(make_cart(uuid, "ada@example.com")));

        let mut res = TestClient::delete(format!("http://example.com/carts/{uuid}/items"))
            .send(&make_service(repo))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.items.is_empty());
        assert_eq!(body.total, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_clear_missing_cart_returns_404() -> TestResult {
        let mut repo = MockCartsService::new();
        let uuid = CartUuid::new();

        repo.expect_clear_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/carts/{uuid}/items"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
