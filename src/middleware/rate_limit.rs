//! Rate limiting middleware
//!
//! Form submissions are limited per client IP so a single client cannot
//! flood the validators or the upload directory.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use tracing::{debug, info};

use crate::config::RateLimitSettings;
use crate::utils::errors::{FormDeskError, Result};
use crate::utils::logging::log_rate_limited;

/// Rate limit configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Sustained submissions per minute
    pub requests_per_minute: u32,
    /// Extra submissions allowed in a short burst
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_minute: 30,
            burst: 10,
        }
    }
}

impl From<&RateLimitSettings> for RateLimitConfig {
    fn from(settings: &RateLimitSettings) -> Self {
        Self {
            requests_per_minute: settings.requests_per_minute,
            burst: settings.burst,
        }
    }
}

impl RateLimitConfig {
    /// Replenish `requests_per_minute` cells per minute, holding up to
    /// `requests_per_minute + burst` at once
    fn quota(&self) -> Quota {
        let per_minute = NonZeroU32::new(self.requests_per_minute).unwrap_or(NonZeroU32::MIN);
        let capacity = NonZeroU32::new(self.requests_per_minute.saturating_add(self.burst))
            .unwrap_or(per_minute);
        Quota::per_minute(per_minute).allow_burst(capacity)
    }
}

/// Per-client-IP submission limiter
#[derive(Clone)]
pub struct RateLimitMiddleware {
    config: RateLimitConfig,
    limiter: Arc<DefaultKeyedRateLimiter<IpAddr>>,
}

impl RateLimitMiddleware {
    pub fn new(config: RateLimitConfig) -> Self {
        let limiter = RateLimiter::keyed(config.quota());
        Self {
            config,
            limiter: Arc::new(limiter),
        }
    }

    /// Limiter built from application settings
    pub fn from_settings(settings: &RateLimitSettings) -> Self {
        let middleware = Self::new(RateLimitConfig::from(settings));
        info!(
            requests_per_minute = middleware.config.requests_per_minute,
            burst = middleware.config.burst,
            "Rate limiter configured"
        );
        middleware
    }

    /// Consume one submission for `client`
    pub fn check_rate_limit(&self, client: IpAddr) -> Result<()> {
        match self.limiter.check_key(&client) {
            Ok(()) => {
                debug!(client = %client, "Rate limit check passed");
                Ok(())
            }
            Err(_) => Err(FormDeskError::RateLimitExceeded),
        }
    }

    pub fn get_status(&self) -> RateLimitStatus {
        RateLimitStatus {
            tracked_clients: self.limiter.len(),
            requests_per_minute: self.config.requests_per_minute,
            burst: self.config.burst,
        }
    }

    /// Drop clients whose quota has fully replenished (should be called periodically)
    pub fn cleanup_old_entries(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
        debug!(remaining_entries = self.limiter.len(), "Cleaned up old rate limit entries");
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }
}

impl Default for RateLimitMiddleware {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

impl std::fmt::Debug for RateLimitMiddleware {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimitMiddleware")
            .field("config", &self.config)
            .field("tracked_clients", &self.limiter.len())
            .finish()
    }
}

/// Snapshot of the limiter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub tracked_clients: usize,
    pub requests_per_minute: u32,
    pub burst: u32,
}

/// Client address from the connection, or the unspecified address when the
/// router is served without connect info (as in tests)
pub fn client_ip(request: &Request) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Axum middleware limiting POST submissions. Page loads pass through.
pub async fn enforce_rate_limit(
    State(limiter): State<RateLimitMiddleware>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::POST {
        return next.run(request).await;
    }

    let client = client_ip(&request);
    match limiter.check_rate_limit(client) {
        Ok(()) => next.run(request).await,
        Err(error) => {
            log_rate_limited(&client.to_string(), request.uri().path());
            error.into_response()
        }
    }
}

/// Run `cleanup_old_entries` every `period` until the runtime shuts down
pub fn spawn_cleanup(limiter: RateLimitMiddleware, period: std::time::Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await;
        loop {
            interval.tick().await;
            limiter.cleanup_old_entries();
        }
    })
}
