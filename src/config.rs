use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/superapp.json";

/// Explicit application configuration. Every field has a defaulting rule,
/// so a missing or invalid config file is a degraded mode, not a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Namespace prefix for every document path.
    #[serde(default = "default_app_id")]
    pub app_id: String,
    /// Sqlite file backing the document store. `None` keeps everything
    /// in memory for the current run.
    #[serde(default = "default_db_path")]
    pub db_path: Option<String>,
    /// Host of the delivery REST backend.
    #[serde(default = "default_delivery_host")]
    pub delivery_host: String,
    /// Pre-issued auth token, if the environment supplies one.
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Numeric client id expected by the delivery backend.
    #[serde(default = "default_cliente_id")]
    pub cliente_id: u32,
}

fn default_app_id() -> String {
    "default-app-id".to_string()
}

fn default_db_path() -> Option<String> {
    Some("data/superapp.db".to_string())
}

fn default_delivery_host() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_cliente_id() -> u32 {
    2
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_id: default_app_id(),
            db_path: default_db_path(),
            delivery_host: default_delivery_host(),
            auth_token: None,
            cliente_id: default_cliente_id(),
        }
    }
}

impl AppConfig {
    /// `SUPERAPP_AUTH_TOKEN` in the environment (or `.env`) overrides the
    /// config file token.
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var("SUPERAPP_AUTH_TOKEN") {
            if !token.trim().is_empty() {
                self.auth_token = Some(token);
            }
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}
