//! Update Category Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    categories::{errors::into_status_error, get::CategoryResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCategoryRequest {
    /// The new category name
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCategoryResponse {
    /// A human-readable confirmation of the rename
    pub message: String,

    /// The updated category
    pub category: CategoryResponse,
}

/// Update Category Handler
///
/// Renames a category.
#[endpoint(
    tags("categories"),
    summary = "Update Category",
    security(("bearer_auth" = [])),
    status_codes(200, 400, 401, 404, 409, 500)
)]
pub(crate) async fn handler(
    category: PathParam<Uuid>,
    body: JsonBody<UpdateCategoryRequest>,
    depot: &mut Depot,
) -> Result<Json<UpdateCategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let category = state
        .app
        .categories
        .rename_category(category.into_inner().into(), body.into_inner().name)
        .await
        .map_err(into_status_error)?;

    Ok(Json(UpdateCategoryResponse {
        message: format!("Category {} updated to {}", category.uuid, category.name),
        category: category.into(),
    }))
}
