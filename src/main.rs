use anyhow::{Context, Result};
use ordo_site::config::Config;
use ordo_site::i18n::LocaleRegistry;
use ordo_site::server::{self, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ordo_site=info".parse()?),
        )
        .init();

    info!("Starting Ordo site service");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Build the locale registry once; it is read-only from here on
    let registry = LocaleRegistry::install(config.load_registry()?)?;
    for locale in registry.list() {
        info!(
            "Locale {} ({}){}",
            locale.code(),
            locale.native_name(),
            if registry.is_default(locale) { " [default]" } else { "" }
        );
    }

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;

    server::serve(listener, AppState::new(registry)).await?;
    Ok(())
}
