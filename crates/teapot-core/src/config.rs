use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Server configuration loaded from `~/.config/teapot/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the demo server binds to.
    pub bind: String,
    /// Port the demo server listens on.
    pub port: u16,
    /// Session-cookie signing key. Overridden by the SECRET_KEY environment
    /// variable when set; the shipped default is for local experimentation
    /// only.
    pub secret_key: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 5000,
            secret_key: "secret_string".to_string(),
        }
    }
}

impl ServerConfig {
    /// Signing key after applying the SECRET_KEY environment override.
    pub fn effective_secret(&self) -> String {
        std::env::var("SECRET_KEY").unwrap_or_else(|_| self.secret_key.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("teapot")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ServerConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ServerConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ServerConfig = toml::from_str(&data)?;
    Ok(cfg)
}
