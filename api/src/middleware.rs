use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Method, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::info;

/// Logs method, path and client IP for each incoming HTTP request, skipping
/// CORS preflight `OPTIONS` requests.
///
/// Apply globally with `Router::layer(from_fn(log_request))`; the router must
/// be served with `into_make_service_with_connect_info::<SocketAddr>()` for
/// the `ConnectInfo` extractor to resolve.
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    info!(
        method = %req.method(),
        path = %req.uri().path(),
        ip = %addr.ip(),
        "Incoming request"
    );

    Ok(next.run(req).await)
}
