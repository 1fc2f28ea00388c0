use crate::domain_model::UserId;
use crate::logger::LogConfig;
use anyhow::{Result, anyhow};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub log: LogConfig,
    pub server: ServerSettings,
    pub user: UserSettings,
    pub map: MapSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// Stamped on every session this server opens.
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct UserSettings {
    pub backend: String, // only "local" for now
    #[serde(default)]
    pub known: Vec<KnownUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KnownUser {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct MapSettings {
    pub backend: String, // only "local" for now
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

const ENV_PREFIX: &str = "LOCAL_API";

/// Load settings from `path` (or the build's default file), then apply
/// `LOCAL_API__SECTION__KEY` environment overrides.
pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}

pub fn parse_settings_str(toml: &str) -> Result<Settings> {
    let settings: Settings = Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}
