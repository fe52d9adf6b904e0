use crate::{
    auth::session::SessionManager,
    axum_http::{default_routers, error_responses, routers},
    config::config_model::DotEnvyConfig,
};
use anyhow::Result;
use axum::{
    Extension, Router,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    middleware,
    routing::get,
};
use sriyan_core::infra::memory::memory_store::MemoryStore;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

pub fn build_router(
    config: &DotEnvyConfig,
    store: Arc<MemoryStore>,
    sessions: Arc<SessionManager>,
) -> Result<Router> {
    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest("/api/plans", routers::plans::routes(Arc::clone(&store)))
        .nest("/api/staff", routers::staff::routes(Arc::clone(&store)))
        .nest(
            "/api/testimonials",
            routers::testimonials::routes(Arc::clone(&store)),
        )
        .nest(
            "/api/server-status",
            routers::server_status::routes(Arc::clone(&store)),
        )
        .nest("/api/auth", routers::auth::routes(Arc::clone(&store)))
        .nest("/api/admin", routers::admin::routes(store))
        .route("/api/health-check", get(default_routers::health_check))
        .layer(Extension(sessions))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.backend_server.timeout),
        ))
        .layer(RequestBodyLimitLayer::new(
            (config.backend_server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([CONTENT_TYPE])
                .allow_origin(Any),
        )
        .layer(middleware::map_response(
            error_responses::envelope_bare_errors,
        ))
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

pub async fn start(
    config: Arc<DotEnvyConfig>,
    store: Arc<MemoryStore>,
    sessions: Arc<SessionManager>,
) -> Result<()> {
    let app = build_router(&config, store, sessions)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.backend_server.port));
    let listener = TcpListener::bind(addr).await?;

    info!(port = config.backend_server.port, stage = ?config.stage, "http: serving");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "http: failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "http: failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("http: received ctrl+c, shutting down"),
        _ = terminate => info!("http: received terminate signal, shutting down"),
    }
}
