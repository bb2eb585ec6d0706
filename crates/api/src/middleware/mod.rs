//! HTTP middleware for the submission API.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost)
//! 2. CORS
//! 3. `TraceLayer` (request span)
//! 4. Request ID (record into span, Sentry scope, response header)
//! 5. Rate limiting (governor, `/api` routes only)

pub mod rate_limit;
pub mod request_id;

pub use rate_limit::{ClientIpKeyExtractor, RateLimiterLayer, api_rate_limiter};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
