//! Delete Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{categories::errors::into_status_error, extensions::*, state::State};

/// Delete Category Handler
///
/// Deletes a category. Categories that still have products cannot be
/// deleted.
#[endpoint(
    tags("categories"),
    summary = "Delete Category",
    security(("bearer_auth" = [])),
    status_codes(204, 401, 404, 409, 500)
)]
pub(crate) async fn handler(
    category: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    state
        .app
        .categories
        .delete_category(category.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
