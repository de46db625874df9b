use clap::Parser;
use ecsfind::cli::{commands, Cli};
use std::process;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };

    // SDK crates stay at warn unless RUST_LOG says otherwise.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,ecsfind={}", log_level)));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        process::exit(1);
    }

    info!("Starting ecsfind v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = commands::handle(&cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
