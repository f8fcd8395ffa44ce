// ABOUTME: HTTP server assembly with middleware layers and graceful shutdown
// ABOUTME: Wraps the API router in request ID, tracing, timeout, and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use crate::middleware::{create_request_span, setup_cors, stamp_error_request_id};
use crate::resources::ServerResources;
use crate::routes::api_router;
use anyhow::{Context, Result};
use axum::{http::StatusCode, middleware, Router};
use std::future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

/// Build the complete application router with middleware
///
/// Layers run outermost first: a request ID is assigned, the request span is
/// opened with it, the ID is copied onto the response and into any error
/// body, and the handler is bounded by the configured timeout. Dropping the handler future on timeout
/// also drops any in-flight availability fan-out.
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    let http_config = &resources.config.http;

    api_router(resources).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(setup_cors(http_config))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                http_config.request_timeout(),
            ))
            .layer(middleware::from_fn(stamp_error_request_id)),
    )
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails
pub async fn serve(resources: Arc<ServerResources>) -> Result<()> {
    let bind_address = format!("{}:{}", resources.config.host, resources.config.http_port);
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind to {bind_address}"))?;

    let app = build_router(&resources);
    info!(address = %bind_address, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C");
        },
        () = terminate => {
            info!("Received SIGTERM");
        },
    }
}
