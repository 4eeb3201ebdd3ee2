//! LearnHub Shell launcher.
//!
//! Server builds load configuration and install the tracing subscriber
//! before handing the root component to Dioxus; WASM builds use the logger
//! Dioxus installs at launch.

use anyhow::Result;

use learnhub_shell::app::App;

fn main() -> Result<()> {
    #[cfg(feature = "server")]
    init_server_logging()?;

    tracing::info!("Starting LearnHub shell");
    dioxus::launch(App);

    Ok(())
}

#[cfg(feature = "server")]
fn init_server_logging() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let config = learnhub_shell::config::load_config()?;

    // RUST_LOG wins over the configured filter
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config.env_filter()?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(?config, "Configuration loaded");
    Ok(())
}
