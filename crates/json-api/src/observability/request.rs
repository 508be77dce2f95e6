//! Per-request logging and metrics middleware.

use std::time::Instant;

use salvo::{Depot, FlowCtrl, Request, Response, handler};
use tracing::info;

use super::metrics::{InFlightRequestGuard, observe_request};

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let started = Instant::now();
    let _guard = InFlightRequestGuard::track();

    ctrl.call_next(req, depot, res).await;

    let duration = started.elapsed();
    let status = res.status_code.map_or(200, |code| code.as_u16());

    observe_request(&method, &path, status, duration.as_secs_f64());

    info!(
        method = %method,
        path = %path,
        status = status,
        duration_ms = duration.as_millis() as u64,
        "request"
    );
}
