use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;
use shared::protocol::ROBOTS_COLLECTION_PATH;

pub const DEFAULT_CONFIG_FILE: &str = "client.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    pub robots_path: String,
    pub request_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".into(),
            robots_path: ROBOTS_COLLECTION_PATH.into(),
            request_timeout_secs: 10,
        }
    }
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    robots_path: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Defaults, then the TOML file (an explicit `path` must exist, the default
/// `client.toml` is optional), then `APP__*` environment overrides.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<ClientSettings> {
    load_settings_with(path, |key| std::env::var(key).ok())
}

fn load_settings_with(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    let raw = match path {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?,
        ),
        None => fs::read_to_string(DEFAULT_CONFIG_FILE).ok(),
    };
    if let Some(raw) = raw {
        apply_file_settings(&mut settings, &raw)?;
    }

    apply_env_overrides(&mut settings, lookup);
    Ok(settings)
}

fn apply_file_settings(settings: &mut ClientSettings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw).context("malformed client config")?;
    if let Some(v) = file_cfg.server_url {
        settings.server_url = v;
    }
    if let Some(v) = file_cfg.robots_path {
        settings.robots_path = v;
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        settings.request_timeout_secs = v;
    }
    Ok(())
}

fn apply_env_overrides(settings: &mut ClientSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = lookup("APP__ROBOTS_PATH") {
        settings.robots_path = v;
    }

    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_secs = parsed;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
