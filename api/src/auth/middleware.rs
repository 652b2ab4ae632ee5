use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts},
    http::{Method, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Origin, UserAgent};
use std::net::SocketAddr;
use tracing::info;

use crate::auth::claims::AuthUser;

/// Logs method, path, IP address, user id (if authenticated), origin, and
/// user-agent for each incoming HTTP request. Skips CORS preflight `OPTIONS`
/// requests.
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let (mut parts, body) = req.into_parts();

    if parts.method == Method::OPTIONS {
        let req = Request::from_parts(parts, body);
        return Ok(next.run(req).await);
    }

    let user_id = AuthUser::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|AuthUser(c)| c.sub);

    let origin = TypedHeader::<Origin>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(o)| o.to_string());

    let user_agent = TypedHeader::<UserAgent>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(ua)| ua.to_string());

    info!(
        method = ?parts.method,
        path = %parts.uri.path(),
        ip = %addr.ip(),
        user = user_id.as_deref().unwrap_or("-"),
        origin = origin.unwrap_or_else(|| "unknown".into()),
        user_agent = user_agent.unwrap_or_else(|| "unknown".into()),
        "Incoming request"
    );

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}
