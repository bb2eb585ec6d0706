//! Request-id propagation.
//!
//! Every request carries an id through the tracing span, the Sentry
//! scope, and the response headers, so one value correlates a log
//! line, a captured error, and what the client saw.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Span;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware that ensures every request has a request id.
///
/// Callers that send `x-request-id` (a proxy, or a client retrying and
/// reporting a failure) keep their value; everyone else gets a fresh
/// UUID. The id is recorded into the current span, tagged on the
/// Sentry scope, and echoed on the response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = match request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(id) => id.to_owned(),
        None => Uuid::new_v4().to_string(),
    };

    Span::current().record("request_id", &request_id);

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, header_value);
    }

    response
}
