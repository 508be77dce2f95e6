//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{extract::JsonBody, extract::PathParam},
    prelude::*,
};
use uuid::Uuid;

use souk_app::domain::products::models::ProductUpdate;

use crate::{
    extensions::*,
    products::{
        create::{CreateProductRequest, parse_expiry},
        errors::into_status_error,
        get::ProductResponse,
    },
    state::State,
};

/// Update Product Handler
///
/// Replaces the mutable fields of a product.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    status_codes(200, 400, 401, 404, 500)
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    body: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let body = body.into_inner();
    let expires_on = parse_expiry(body.expires_on)?;

    let product = state
        .app
        .products
        .update_product(
            product.into_inner().into(),
            ProductUpdate {
                name: body.name,
                description: body.description,
                price: body.price,
                quantity: body.quantity,
                expires_on,
                category_uuid: body.category_uuid.map(Into::into),
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use souk_app::domain::products::{
        MockProductsService, ProductsServiceError, models::ProductUuid,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{product}").put(handler))
    }

    fn request() -> CreateProductRequest {
        CreateProductRequest {
            name: "Renamed Product".to_string(),
            description: "An updated description".to_string(),
            price: 250,
            quantity: 4,
            expires_on: None,
            category_uuid: None,
        }
    }

    #[tokio::test]
    async fn test_update_replaces_fields() -> TestResult {
        let mut repo = MockProductsService::new();
        let uuid = ProductUuid::new();

        repo.expect_update_product()
            .once()
            .withf(move |u, update| {
                *u == uuid && update.name == "Renamed Product" && update.price == 250
            })
            .return_once(move |_, _| Ok(make_product(uuid)));

        let res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&request())
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();
        let uuid = ProductUuid::new();

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&request())
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_blank_name_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();
        let uuid = ProductUuid::new();

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::MissingRequiredData));

        let res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&CreateProductRequest {
                name: "  ".to_string(),
                ..request()
            })
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
