//! Product Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns all products, or a keyword search over name and description
/// when `q` is given.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let products = match q.into_inner() {
        Some(keyword) => state.app.products.search_products(&keyword).await,
        None => state.app.products.list_products().await,
    }
    .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
