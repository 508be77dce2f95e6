//! Category Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{categories::get::CategoryResponse, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    /// The list of categories
    pub categories: Vec<CategoryResponse>,
}

/// Category Index Handler
///
/// Returns all categories, ordered by name.
#[endpoint(
    tags("categories"),
    summary = "List Categories",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let categories = state
        .app
        .categories
        .list_categories()
        .await
        .or_500("failed to fetch categories")?;

    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use souk_app::domain::categories::{
        CategoriesServiceError, MockCategoriesService, models::CategoryUuid,
    };

    use crate::test_helpers::{categories_service, make_category};

    use super::*;

    fn make_service(repo: MockCategoriesService) -> Service {
        categories_service(repo, Router::with_path("categories").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_categories() -> TestResult {
        let uuid_a = CategoryUuid::new();
        let uuid_b = CategoryUuid::new();

        let mut repo = MockCategoriesService::new();

        repo.expect_list_categories().once().return_once(move || {
            Ok(vec![
                make_category(uuid_a, "Art"),
                make_category(uuid_b, "Books"),
            ])
        });

        let response: CategoriesResponse = TestClient::get("http://example.com/categories")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.categories.len(), 2, "expected two categories");
        assert_eq!(response.categories[0].name, "Art");
        assert_eq!(response.categories[1].name, "Books");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut repo = MockCategoriesService::new();

        repo.expect_list_categories()
            .once()
            .return_once(|| Ok(vec![]));

        let response: CategoriesResponse = TestClient::get("http://example.com/categories")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert!(response.categories.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_service_error_returns_500() -> TestResult {
        let mut repo = MockCategoriesService::new();

        repo.expect_list_categories()
            .once()
            .return_once(|| Err(CategoriesServiceError::Sql(sqlx_error())));

        let res = TestClient::get("http://example.com/categories")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }

    fn sqlx_error() -> souk_app::sqlx::Error {
        souk_app::sqlx::Error::PoolClosed
    }
}
