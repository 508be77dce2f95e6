//! Category Products Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, index::ProductsResponse},
    state::State,
};

/// Category Products Handler
///
/// Returns the products belonging to a category.
#[endpoint(
    tags("categories"),
    summary = "List Category Products",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    category: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let products = state
        .app
        .products
        .list_products_by_category(category.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
