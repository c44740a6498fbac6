//! Party activity service entry point.
//!
//! Binary name: `party`
//!
//! Parses CLI arguments, loads config, builds the activity registry, then
//! dispatches to the requested command or starts the HTTP server.

mod cli;
mod config;
mod http;
mod state;

use clap::Parser;

use cli::{Cli, Commands};
use party_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::load_config(cli.config.as_deref()).await?;

    let otel = config.log.otel || matches!(cli.command, Commands::Serve { otel: true, .. });
    init_tracing(verbosity_filter(cli.verbose, cli.quiet), otel).map_err(|e| anyhow::anyhow!(e))?;

    match &cli.config {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!("no config file given, using defaults"),
    }

    // Registry is built exactly once, before any request is served.
    let state = AppState::init();

    match cli.command {
        Commands::Serve { port, host, .. } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            tracing::info!(%addr, "party server listening");
            if !cli.quiet {
                println!(
                    "  {} Party service listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("party server stopped");
        }

        Commands::List => {
            println!("{}", cli::activity::list_activities(&state, cli.json)?);
        }

        Commands::Call { venue, activity } => {
            println!(
                "{}",
                cli::activity::call_activity(&state, &venue, &activity, cli.json)?
            );
        }
    }

    shutdown_tracing();
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
