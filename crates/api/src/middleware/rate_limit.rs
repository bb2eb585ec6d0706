//! Per-client rate limiting for the `/api` surface.
//!
//! Keys on the client IP. Deployments behind a proxy get the original
//! address from the usual forwarding headers; direct connections fall
//! back to the peer address, which requires serving with
//! `into_make_service_with_connect_info::<SocketAddr>()`.
//!
//! A background thread sweeps idle clients out of the keyed state once
//! a minute; without it the per-IP map grows for the life of the
//! process.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::KeyExtractor;
use tower_governor::{GovernorError, GovernorLayer};

/// Headers consulted for the client IP, in order of trust.
const CLIENT_IP_HEADERS: [&str; 4] = [
    "cf-connecting-ip",
    "x-forwarded-for",
    "x-real-ip",
    "fly-client-ip",
];

/// Extracts the client IP from proxy headers, falling back to the
/// connection's peer address.
#[derive(Clone, Copy)]
pub struct ClientIpKeyExtractor;

impl ClientIpKeyExtractor {
    fn header_ip<B>(req: &Request<B>) -> Option<IpAddr> {
        CLIENT_IP_HEADERS.iter().find_map(|header| {
            let value = req.headers().get(*header)?.to_str().ok()?;
            // x-forwarded-for may carry a chain; the first entry is the client.
            let first = value.split(',').next()?.trim();
            first.parse().ok()
        })
    }

    fn peer_ip<B>(req: &Request<B>) -> Option<IpAddr> {
        req.extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
    }
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<B>(&self, req: &Request<B>) -> Result<Self::Key, GovernorError> {
        Self::header_ip(req)
            .or_else(|| Self::peer_ip(req))
            .ok_or(GovernorError::UnableToExtractKey)
    }
}

pub type RateLimiterLayer =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, Body>;

/// How often the sweep thread reclaims fully replenished clients.
const RETENTION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Rate limiter for the submission endpoints: one request per second
/// per client (replenish), burst of 50.
///
/// The limiter tracks state per client IP and that map only grows as
/// new clients appear, so construction also spawns a detached thread
/// that periodically calls `retain_recent`, dropping every client
/// whose quota has fully replenished.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid
/// positive integers (`per_second(1)` and `burst_size(50)`), which are
/// always accepted by `GovernorConfigBuilder`.
#[must_use]
pub fn api_rate_limiter() -> RateLimiterLayer {
    let config = api_governor_config();

    let limiter = config.limiter().clone();
    std::thread::spawn(move || {
        loop {
            std::thread::sleep(RETENTION_SWEEP_INTERVAL);
            tracing::debug!("rate limiter tracking {} clients", limiter.len());
            limiter.retain_recent();
        }
    });

    GovernorLayer::new(config)
}

fn api_governor_config()
-> Arc<GovernorConfig<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>>> {
    governor_config(1, 50)
}

fn governor_config(
    per_second: u64,
    burst: u32,
) -> Arc<GovernorConfig<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>>> {
    let config = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor)
        .per_second(per_second)
        .burst_size(burst)
        .finish()
        .expect("rate limiter config with positive per_second and burst_size is valid");
    Arc::new(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request() -> Request<Body> {
        Request::builder().body(Body::empty()).unwrap()
    }

    #[test]
    fn test_prefers_cloudflare_header() {
        let mut req = request();
        req.headers_mut()
            .insert("cf-connecting-ip", "203.0.113.7".parse().unwrap());
        req.headers_mut()
            .insert("x-forwarded-for", "198.51.100.1".parse().unwrap());

        let key = ClientIpKeyExtractor.extract(&req).unwrap();
        assert_eq!(key, "203.0.113.7".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_takes_first_forwarded_entry() {
        let mut req = request();
        req.headers_mut().insert(
            "x-forwarded-for",
            "198.51.100.1, 10.0.0.2".parse().unwrap(),
        );

        let key = ClientIpKeyExtractor.extract(&req).unwrap();
        assert_eq!(key, "198.51.100.1".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_falls_back_to_peer_address() {
        let mut req = request();
        let peer: SocketAddr = "127.0.0.1:54321".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(peer));

        let key = ClientIpKeyExtractor.extract(&req).unwrap();
        assert_eq!(key, "127.0.0.1".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_no_source_is_an_error() {
        let req = request();

        assert!(matches!(
            ClientIpKeyExtractor.extract(&req),
            Err(GovernorError::UnableToExtractKey)
        ));
    }

    #[test]
    fn test_sweep_drops_idle_clients() {
        // Burst of 1 so the quota replenishes in about a second.
        // retain_recent keeps a key until its full burst has come back,
        // so under the API config (burst 50) this would take ~50s.
        let config = governor_config(1, 1);
        let limiter = config.limiter();
        assert!(limiter.is_empty());

        let client: IpAddr = "198.51.100.7".parse().unwrap();
        assert!(limiter.check_key(&client).is_ok());
        assert_eq!(limiter.len(), 1);

        let deadline = std::time::Instant::now() + Duration::from_secs(10);
        while !limiter.is_empty() {
            assert!(
                std::time::Instant::now() < deadline,
                "idle client was never reclaimed"
            );
            std::thread::sleep(Duration::from_millis(250));
            limiter.retain_recent();
        }
    }
}
