//! Router assembly and the HTTP server loop

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use crate::forms::FormKind;
use crate::handlers::{self, AppState};
use crate::middleware::{enforce_rate_limit, log_requests, rate_limit::spawn_cleanup};
use crate::utils::errors::{FormDeskError, Result};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

/// How often idle clients are dropped from the rate limiter
pub const RATE_LIMIT_CLEANUP_PERIOD: Duration = Duration::from_secs(300);

/// Build the application router. Disabled forms are not routed.
pub fn build_router(state: AppState) -> Router {
    let settings = state.settings.clone();
    let features = &settings.features;

    let mut forms = Router::new();
    if features.contact_form {
        forms = forms.route(
            FormKind::Contact.path(),
            get(handlers::contact::show).post(handlers::contact::submit),
        );
    }
    if features.donation_form {
        forms = forms.route(
            FormKind::Donation.path(),
            get(handlers::donation::show).post(handlers::donation::submit),
        );
    }
    if features.registration_form {
        forms = forms.route(
            FormKind::Registration.path(),
            get(handlers::registration::show).post(handlers::registration::submit),
        );
    }
    if features.hire_form {
        forms = forms.route(
            FormKind::Hire.path(),
            get(handlers::hire::show).post(handlers::hire::submit),
        );
    }

    if settings.rate_limit.enabled {
        forms = forms.layer(from_fn_with_state(state.rate_limiter.clone(), enforce_rate_limit));
    }

    Router::new()
        .route("/health", get(handlers::health))
        .merge(forms)
        .nest_service(state.photos.public_prefix(), ServeDir::new(state.photos.directory()))
        .layer(DefaultBodyLimit::max(settings.server.max_body_bytes))
        .layer(from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind, serve until a shutdown signal arrives, then drain
pub async fn serve(state: AppState) -> Result<()> {
    let address = state.settings.bind_address();
    state.photos.ensure_directory().await?;

    let cleanup = state
        .settings
        .rate_limit
        .enabled
        .then(|| spawn_cleanup(state.rate_limiter.clone(), RATE_LIMIT_CLEANUP_PERIOD));

    let app = build_router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| FormDeskError::Config(format!("Failed to bind {}: {}", address, e)))?;
    info!("Server running on {address}");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(cleanup) = cleanup {
        cleanup.abort();
    }
    info!("Server shut down");
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
