use clap::Parser;
use formforge::cli::Cli;
use formforge::config::Settings;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (RUST_LOG, default info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    info!(
        "Starting formforge on {} (backend: {}, llm enabled: {})",
        settings.bind_address(),
        settings.llm.backend,
        settings.generation.llm_enabled
    );

    let state = formforge::build_state(&settings)?;
    let app = formforge::create_app(state, &settings);

    let addr: SocketAddr = settings.bind_address().parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
