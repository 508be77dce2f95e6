//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use souk_app::auth::AuthServiceError;

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    let claims = match state.app.auth.authenticate(token) {
        Ok(claims) => claims,
        Err(AuthServiceError::Token(_)) => {
            res.render(StatusError::unauthorized().brief("Invalid or expired token"));

            return;
        }
        Err(source) => {
            error!("failed to authenticate bearer token: {source}");

            res.render(StatusError::internal_server_error());

            return;
        }
    };

    depot.insert_user_uuid(claims.sub.into());

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
