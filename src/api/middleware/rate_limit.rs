//! Rate limiting middleware using token bucket algorithm.

use axum::Router;
use axum::response::{IntoResponse, Response};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use serde_json::json;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::error::AppError;

/// Sustained requests per second per client.
const PER_SECOND: u64 = 5;

/// Requests a client may burst above the sustained rate.
const BURST_SIZE: u32 = 100;

/// Applies per-client rate limiting to a router.
///
/// # Limits
///
/// - **Rate**: 5 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests` with a
/// `rate_limited` error body and the governor's `retry-after` headers.
///
/// # Key Extraction
///
/// - `behind_proxy = false`: the socket peer address, which requires serving
///   with `into_make_service_with_connect_info::<SocketAddr>()`
/// - `behind_proxy = true`: `X-Forwarded-For` / `X-Real-IP` / `Forwarded`,
///   falling back to the peer address
pub fn apply<S>(router: Router<S>, behind_proxy: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if behind_proxy {
        router.layer(
            GovernorLayer::new(config(SmartIpKeyExtractor)).error_handler(error_response),
        )
    } else {
        router.layer(GovernorLayer::new(config(PeerIpKeyExtractor)).error_handler(error_response))
    }
}

fn error_response(error: GovernorError) -> Response {
    match error {
        GovernorError::TooManyRequests { wait_time, headers } => {
            let mut response = AppError::rate_limited(wait_time).into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        other => {
            tracing::error!(error = %other, "Rate limiter could not classify request");
            AppError::internal("Internal server error", json!({})).into_response()
        }
    }
}

fn config<K: KeyExtractor>(key: K) -> Arc<GovernorConfig<K, NoOpMiddleware<QuantaInstant>>> {
    Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key)
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit quota is non-zero"),
    )
}
