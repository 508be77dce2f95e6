//! Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use souk_app::auth::password::Password;

use crate::{
    auth::{errors::into_status_error, register::AuthenticatedResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    /// The account email
    pub email: String,

    /// The account password
    pub password: String,
}

/// Login Handler
///
/// Verifies credentials and returns a fresh bearer token. Unknown
/// emails and wrong passwords are indistinguishable in the response.
#[endpoint(tags("auth"), summary = "Login", status_codes(200, 401, 500))]
pub(crate) async fn handler(
    body: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<AuthenticatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body = body.into_inner();

    let authenticated = state
        .app
        .auth
        .login(&body.email, Password::new(body.password))
        .await
        .map_err(into_status_error)?;

    Ok(Json(authenticated.into()))
}
