//! Register Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use souk_app::auth::{
    models::{AuthenticatedUser, NewUser},
    password::Password,
};

use crate::{auth::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterRequest {
    /// The email to register
    pub email: String,

    /// The password, at least eight characters
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AuthenticatedResponse {
    /// A signed bearer token for the Authorization header
    pub token: String,

    /// The unique identifier of the account
    pub uuid: Uuid,

    /// The account email
    pub email: String,
}

impl From<AuthenticatedUser> for AuthenticatedResponse {
    fn from(authenticated: AuthenticatedUser) -> Self {
        AuthenticatedResponse {
            token: authenticated.token,
            uuid: authenticated.user.uuid.into(),
            email: authenticated.user.email,
        }
    }
}

/// Register Handler
///
/// Creates an account and returns a signed bearer token.
#[endpoint(
    tags("auth"),
    summary = "Register",
    status_codes(201, 400, 409, 500)
)]
pub(crate) async fn handler(
    body: JsonBody<RegisterRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AuthenticatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body = body.into_inner();

    let authenticated = state
        .app
        .auth
        .register(NewUser {
            email: body.email,
            password: Password::new(body.password),
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(authenticated.into()))
}
