mod graphics;     // macroquad window, canvas and frame loop
mod host;         // host polling -> simulation notifications
mod settings;     // config/default.toml + environment overrides

use graphics::window_conf;

use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Elastic Grid started.");

    if let Err(e) = run().await {
        error!("Elastic Grid failed to start: {:?}", e);
    }
}

async fn run() -> anyhow::Result<()> {
    let settings = settings::load_settings()?;
    graphics::run_visualization_loop(settings.field).await;
    Ok(())
}
