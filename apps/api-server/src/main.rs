//! # Remark API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use remark_core::ports::RateLimiter;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use middleware::rate_limit::RateLimitMiddleware;
use middleware::security::{cors, security_headers};
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Remark API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config)
        .await
        .map_err(std::io::Error::other)?;
    let limiter = build_rate_limiter(&config)?;
    let allowed_origin = config.allowed_origin.clone();

    let server_state = state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RateLimitMiddleware::new(limiter.clone()))
            .wrap(security_headers())
            .wrap(cors(&allowed_origin))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(server_state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    // Stops accepting connections on SIGINT/SIGTERM and drains in-flight requests.
    let result = server.await;

    state.shutdown().await;
    tracing::info!("Server stopped");
    result
}

#[cfg(feature = "rate-limit")]
fn build_rate_limiter(config: &AppConfig) -> std::io::Result<Option<Arc<dyn RateLimiter>>> {
    use remark_infra::InMemoryRateLimiter;

    let limiter = Arc::new(
        InMemoryRateLimiter::new(config.rate_limit.clone()).map_err(std::io::Error::other)?,
    );

    // Drop state for clients that have been idle long enough to be fully replenished.
    let pruned = Arc::clone(&limiter);
    actix_rt::spawn(async move {
        let mut interval = actix_rt::time::interval(std::time::Duration::from_secs(60));
        loop {
            interval.tick().await;
            pruned.prune();
        }
    });

    Ok(Some(limiter))
}

#[cfg(not(feature = "rate-limit"))]
fn build_rate_limiter(_config: &AppConfig) -> std::io::Result<Option<Arc<dyn RateLimiter>>> {
    tracing::info!("Running without rate-limit feature - requests are not limited");
    Ok(None)
}
