//! Request routing for the health endpoints.

use std::time::Instant;

use bytes::Bytes;
use http::{header, HeaderValue, Method, Request, Response, StatusCode};
use http_body_util::Full;
use serde::Serialize;
use tracing::debug;

use crate::health::{liveness, ReadinessAggregator};

/// Liveness probe path.
pub const LIVENESS_PATH: &str = "/health/liveliness";

/// Readiness probe path.
pub const READINESS_PATH: &str = "/health/readiness";

/// Route a request to the matching responder.
///
/// HEAD is answered like GET; hyper drops the body on the wire.
pub async fn handle_request<B>(
    req: Request<B>,
    readiness: &ReadinessAggregator,
) -> Response<Full<Bytes>> {
    let start = Instant::now();
    let method = req.method();
    let path = req.uri().path();
    let readable = method == Method::GET || method == Method::HEAD;

    let response = match path {
        LIVENESS_PATH | READINESS_PATH if !readable => method_not_allowed(),
        LIVENESS_PATH => json_response(StatusCode::OK, &liveness()),
        READINESS_PATH => {
            let verdict = readiness.evaluate().await;
            json_response(verdict.http_status(), &verdict)
        }
        _ => json_response(
            StatusCode::NOT_FOUND,
            &serde_json::json!({ "error": "not found" }),
        ),
    };

    debug!(
        method = %method,
        path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Request handled"
    );

    response
}

fn json_response(status: StatusCode, value: &impl Serialize) -> Response<Full<Bytes>> {
    let body = serde_json::to_vec(value).unwrap_or_else(|_| b"{}".to_vec());

    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

fn method_not_allowed() -> Response<Full<Bytes>> {
    let mut response = json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        &serde_json::json!({ "error": "method not allowed" }),
    );
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("GET, HEAD"));
    response
}
