//! Create Product Handler

use std::sync::Arc;

use jiff::civil::Date;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use souk_app::domain::products::models::NewProduct;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// The product name
    pub name: String,

    /// The product description
    #[serde(default)]
    pub description: String,

    /// The price in minor units (cents)
    pub price: u64,

    /// The stock on hand
    pub quantity: u32,

    /// The expiry date in `YYYY-MM-DD` form, if any
    #[serde(default)]
    pub expires_on: Option<String>,

    /// The category the product belongs to, if any
    #[serde(default)]
    pub category_uuid: Option<Uuid>,
}

pub(crate) fn parse_expiry(expires_on: Option<String>) -> Result<Option<Date>, StatusError> {
    expires_on
        .map(|raw| raw.parse::<Date>())
        .transpose()
        .map_err(|_| StatusError::bad_request().brief("Expiry date must be YYYY-MM-DD"))
}

/// Create Product Handler
///
/// Creates a new product.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    status_codes(201, 400, 401, 409, 500)
)]
pub(crate) async fn handler(
    body: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.user_uuid_or_401()?;

    let body = body.into_inner();
    let expires_on = parse_expiry(body.expires_on)?;

    let product = state
        .app
        .products
        .create_product(NewProduct {
            name: body.name,
            description: body.description,
            price: body.price,
            quantity: body.quantity,
            expires_on,
            category_uuid: body.category_uuid.map(Into::into),
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);
    res.add_header(LOCATION, format!("/products/{}", product.uuid), true)
        .or_500("failed to set location header")?;

    Ok(Json(product.into()))
}
