use std::time::Duration;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use registry_application::commands::export_commands;
use registry_application::queries::route_queries;
use registry_application::AppState;
use registry_infrastructure::ExportFileRepository;
use registry_interfaces_http::build_router;

use crate::context::AppContext;

fn build_router_with_layers(state: AppState) -> Router {
    build_router(state.clone())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.config.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_standalone() -> Result<()> {
    let context = AppContext::new().await?;
    let state = context.state;
    let app = build_router_with_layers(state.clone());
    let addr: std::net::SocketAddr = state.config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub async fn run_export(out_dir: Option<String>) -> Result<()> {
    let context = AppContext::new().await?;
    let state = context.state;
    let out_dir = out_dir.unwrap_or_else(|| state.config.export_dir.clone());
    let sink = ExportFileRepository::new(out_dir.clone());
    let report = export_commands::export_static(&state, &sink).await?;
    info!("wrote {} routes to {}", report.written, out_dir);
    if !report.skipped.is_empty() {
        warn!("skipped routes: {}", report.skipped.join(", "));
    }
    Ok(())
}

pub async fn print_routes() -> Result<()> {
    let context = AppContext::new().await?;
    let routes = route_queries::list_routes(&context.state);
    println!("{}", serde_json::to_string_pretty(&routes)?);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("failed to install SIGTERM handler: {}", err);
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
    info!("shutdown signal received");
}
