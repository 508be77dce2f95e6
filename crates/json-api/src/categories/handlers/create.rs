//! Create Category Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use souk_app::domain::categories::models::NewCategory;

use crate::{
    categories::{errors::into_status_error, get::CategoryResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCategoryRequest {
    /// The category name
    pub name: String,
}

/// Create Category Handler
///
/// Creates a new category.
#[endpoint(
    tags("categories"),
    summary = "Create Category",
    security(("bearer_auth" = [])),
    status_codes(201, 400, 401, 409, 500)
)]
pub(crate) async fn handler(
    body: JsonBody<CreateCategoryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let category = state
        .app
        .categories
        .create_category(NewCategory {
            name: body.into_inner().name,
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);
    res.add_header(LOCATION, format!("/categories/{}", category.uuid), true)
        .or_500("failed to set location header")?;

    Ok(Json(category.into()))
}
