//! Liveness endpoint.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"`; liveness is implied by the response arriving at all
    pub status: String,
}

/// Liveness probe
///
/// Answers with a fixed body for load balancers and deploy checks.
#[endpoint(tags("health"), summary = "Liveness probe")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
