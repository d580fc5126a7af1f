//! `passage run` — start the proxy server.
//!
//! Validates the upstream URL and prefix, builds the shared state and
//! router, and serves with graceful shutdown on Ctrl+C / SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::RunArgs;
use crate::config::ProxyConfig;
use crate::error::PassageError;
use crate::logging::{self, LogFormat};
use crate::server::{self, AppState, Stats};

pub async fn execute(args: RunArgs) -> Result<(), PassageError> {
    logging::init(&args.log_level, LogFormat::detect(args.pretty, args.json));

    let config = ProxyConfig::new(&args.upstream, &args.prefix, args.timeout, args.max_body)?;

    let state = Arc::new(AppState {
        config,
        http_client: server::build_http_client(),
        start_time: Instant::now(),
        stats: Stats::new(),
    });

    let router = server::build_router(Arc::clone(&state));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        upstream = %state.config.upstream_base,
        prefix = %state.config.prefix,
        timeout_ms = state.config.timeout_ms,
        "passage started"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("passage stopped");
    Ok(())
}
