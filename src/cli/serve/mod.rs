//! Serve command - runs the HTTP server guarded by bearer tokens

use std::net::SocketAddr;

use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::create_router_with_state;
use crate::api::state::AppState;
use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Arguments for the serve command
#[derive(Args, Clone, Debug, Default)]
pub struct ServeArgs {
    /// Print a token for this principal at startup, signed with the
    /// server's secret (repeatable)
    #[arg(long = "issue-for", value_name = "UID")]
    pub issue_for: Vec<i64>,
}

/// Run the server
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging)?;

    if config.auth.secret.is_some() {
        warn!("Using configured token secret; tokens survive restarts");
    }

    let state = crate::create_app_state(&config)?;

    for line in startup_tokens(&state, &args.issue_for) {
        println!("{}", line);
    }

    let expires_in_secs = state.token_service.expires_in_secs();
    let app = create_router_with_state(state);

    let addr = build_socket_addr(&config)?;
    info!(expires_in_secs, "Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

/// `uid<TAB>token` lines for the principals requested on the command line
fn startup_tokens(state: &AppState, uids: &[i64]) -> Vec<String> {
    uids.iter()
        .map(|&uid| format!("{}\t{}", uid, state.token_service.issue(uid).token))
        .collect()
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
