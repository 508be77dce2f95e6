//! Order Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use souk_app::domain::orders::models::OrderStatus;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// The list of orders, newest first, without item lines
    pub orders: Vec<OrderResponse>,
}

/// Order Index Handler
///
/// Returns orders, newest first. Filter by `email` or `status`; when
/// both are given, `email` wins.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    email: QueryParam<String, false>,
    status: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let orders = match (email.into_inner(), status.into_inner()) {
        (Some(email), _) => state.app.orders.list_orders_by_email(&email).await,
        (None, Some(status)) => {
            let status = status
                .parse::<OrderStatus>()
                .map_err(|_| StatusError::bad_request().brief("Unknown order status"))?;

            state.app.orders.list_orders_by_status(status).await
        }
        (None, None) => state.app.orders.list_orders().await,
    }
    .map_err(into_status_error)?;

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use souk_app::domain::orders::{MockOrdersService, models::OrderUuid};

    use crate::test_helpers::{make_order, orders_service};

    use super::*;

    fn make_service(repo: MockOrdersService) -> Service {
        orders_service(repo, Router::with_path("orders").get(handler))
    }

    #[tokio::test]
    async fn test_index_lists_all_orders() -> TestResult {
        let uuid_a = OrderUuid::new();
        let uuid_b = OrderUuid::new();

        let mut repo = MockOrdersService::new();

        repo.expect_list_orders().once().return_once(move || {
            Ok(vec![
                make_order(uuid_a, "ada@example.com"),
                make_order(uuid_b, "grace@example.com"),
            ])
        });

        let response: OrdersResponse = TestClient::get("http://example.com/orders")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.orders.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_filters_by_email() -> TestResult {
        let uuid = OrderUuid::new();

        let mut repo = MockOrdersService::new();

        repo.expect_list_orders_by_email()
            .once()
            .withf(|email| email == "ada@example.com")
            .return_once(move |_| Ok(vec![make_order(uuid, "ada@example.com")]));

        let response: OrdersResponse =
            TestClient::get("http://example.com/orders?email=ada@example.com")
                .send(&make_service(repo))
                .await
                .take_json()
                .await?;

        assert_eq!(response.orders.len(), 1);
        assert_eq!(response.orders[0].customer_email, "ada@example.com");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_filters_by_status() -> TestResult {
        let uuid = OrderUuid::new();

        let mut repo = MockOrdersService::new();

        repo.expect_list_orders_by_status()
            .once()
            .withf(|status| *status == OrderStatus::Shipped)
            .return_once(move |_| {
                let mut order = make_order(uuid, "ada@example.com");
                order.status = OrderStatus::Shipped;
                Ok(vec![order])
            });

        let response: OrdersResponse = TestClient::get("http://example.com/orders?status=SHIPPED")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.orders.len(), 1);
        assert_eq!(response.orders[0].status, "SHIPPED");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_with_unknown_status_returns_400() -> TestResult {
        let repo = MockOrdersService::new();

        let res = TestClient::get("http://example.com/orders?status=MISLAID")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
