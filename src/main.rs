//! Paste server entrypoint.

use quickpaste::{serve_router, AppState, Config, PasteStore, DEFAULT_PORT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn parse_wants_help(args: &[String]) -> anyhow::Result<bool> {
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" => return Ok(true),
            value if value.starts_with('-') => {
                anyhow::bail!(
                    "Unknown option: '{}'. Use --help to see supported options.",
                    value
                );
            }
            value => {
                anyhow::bail!(
                    "Unexpected positional argument: '{}'. Use --help to see supported options.",
                    value
                );
            }
        }
    }
    Ok(false)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quickpaste=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if parse_wants_help(&args)? {
        print_help();
        return Ok(());
    }

    let config = Config::from_env();
    let state = AppState::new(config.clone(), PasteStore::new());

    let bind_addr = quickpaste::resolve_bind_address(&config);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let actual_addr = listener.local_addr().unwrap_or(bind_addr);
    tracing::info!("Quickpaste running at http://{}", actual_addr);

    serve_router(listener, state, shutdown_signal()).await?;
    tracing::info!("Server stopped; in-memory pastes discarded");

    Ok(())
}

fn print_help() {
    println!("Quickpaste Server\n");
    println!("Usage: quickpaste [OPTIONS]\n");
    println!("Options:");
    println!("  --help            Show this help message");
    println!("\nEnvironment variables:");
    println!(
        "  PORT              Server port (default: {})",
        DEFAULT_PORT
    );
    println!(
        "  BIND              Override bind address (e.g. 127.0.0.1:{})",
        DEFAULT_PORT
    );
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
