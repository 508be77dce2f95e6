//! Get Category Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use souk_app::domain::categories::models::Category;

use crate::{categories::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    /// The unique identifier of the category
    pub uuid: Uuid,

    /// The category name
    pub name: String,

    /// The date and time the category was created
    pub created_at: String,

    /// The date and time the category was last updated
    pub updated_at: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            uuid: category.uuid.into(),
            name: category.name,
            created_at: category.created_at.to_string(),
            updated_at: category.updated_at.to_string(),
        }
    }
}

/// Get Category Handler
///
/// Returns a category.
#[endpoint(
    tags("categories"),
    summary = "Get Category",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    category: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let category = state
        .app
        .categories
        .get_category(category.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(category.into()))
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
        categories_service(repo, Router::with_path("categories/{category}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut repo = MockCategoriesService::new();
        let uuid = CategoryUuid::new();

        let category = make_category(uuid, "Electronics");

        repo.expect_get_category()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(category));

        let mut res = TestClient::get(format!("http://example.com/categories/{uuid}"))
            .send(&make_service(repo))
            .await;

        let body: CategoryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.name, "Electronics");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_category_returns_404() -> TestResult {
        let mut repo = MockCategoriesService::new();
        let uuid = CategoryUuid::new();

        repo.expect_get_category()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Err(CategoriesServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/categories/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
