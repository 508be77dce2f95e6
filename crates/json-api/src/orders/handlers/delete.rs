//! Delete Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Delete Order Handler
///
/// Deletes an order and its item lines.
#[endpoint(
    tags("orders"),
    summary = "Delete Order",
    security(("bearer_auth" = [])),
    status_codes(204, 401, 404, 500)
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    state
        .app
        .orders
        .delete_order(order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use souk_app::domain::orders::{MockOrdersService, OrdersServiceError, models::OrderUuid};

    use crate::test_helpers::orders_service;

    use super::*;

    fn make_service(repo: MockOrdersService) -> Service {
        orders_service(repo, Router::with_path("orders/{order}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_returns_204() -> TestResult {
        let mut repo = MockOrdersService::new();
        let uuid = OrderUuid::new();

        repo.expect_delete_order()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!("http://example.com/orders/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_order_returns_404() -> TestResult {
        let mut repo = MockOrdersService::new();
        let uuid = OrderUuid::new();

        repo.expect_delete_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/orders/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
