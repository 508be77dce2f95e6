//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Delete Product Handler
///
/// Deletes a product.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    security(("bearer_auth" = [])),
    status_codes(204, 401, 404, 500)
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    state
        .app
        .products
        .delete_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
