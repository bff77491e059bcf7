use anyhow::Context;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use elastic_field::FieldParams;
use serde::Deserialize;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "ELASTIC_GRID";

/// Runtime settings. Anything left out falls back to the compiled-in
/// constants of [`FieldParams::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub field: FieldParams,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let builder = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    let settings = settings_from(builder)?;
    info!(field = ?settings.field, "Successfully loaded configuration");
    Ok(settings)
}

fn settings_from(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Settings> {
    let settings: Settings = builder
        .build()
        .context("failed to read configuration sources")?
        .try_deserialize()
        .context("malformed configuration")?;

    settings
        .field
        .validate()
        .context("invalid [field] parameters")?;

    Ok(settings)
}
