use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use registry_domain::RuntimeConfig;

pub const CONFIG_ENV: &str = "ENGINE_UI_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub manifest_path: String,
    pub source_root: String,
    pub export_dir: String,
    pub rewrite_imports: bool,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let runtime = RuntimeConfig::default();
        Self {
            bind_addr: runtime.bind_addr,
            api_token: runtime.api_token,
            manifest_path: runtime.manifest_path,
            source_root: runtime.source_root,
            export_dir: runtime.export_dir,
            rewrite_imports: runtime.rewrite_imports,
            request_timeout_seconds: runtime.request_timeout_seconds,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        let mut config: AppConfig = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        self.bind_addr = self.bind_addr.trim().to_string();
        if self.source_root.trim().is_empty() {
            self.source_root = ".".to_string();
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.manifest_path = resolve_path(base, &self.manifest_path);
        self.source_root = resolve_path(base, &self.source_root);
        self.export_dir = resolve_path(base, &self.export_dir);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.manifest_path.trim().is_empty() {
            return Err(anyhow!("manifest_path must not be empty"));
        }
        if self.export_dir.trim().is_empty() {
            return Err(anyhow!("export_dir must not be empty"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            manifest_path: self.manifest_path.clone(),
            source_root: self.source_root.clone(),
            export_dir: self.export_dir.clone(),
            rewrite_imports: self.rewrite_imports,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("ENGINE_UI_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("ENGINE_UI_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("ENGINE_UI_MANIFEST_PATH") {
            self.manifest_path = value;
        }
        if let Ok(value) = env::var("ENGINE_UI_SOURCE_ROOT") {
            self.source_root = value;
        }
        if let Ok(value) = env::var("ENGINE_UI_EXPORT_DIR") {
            self.export_dir = value;
        }
        if let Ok(value) = env::var("ENGINE_UI_REWRITE_IMPORTS") {
            self.rewrite_imports = value.parse().unwrap_or(self.rewrite_imports);
        }
        if let Ok(value) = env::var("ENGINE_UI_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
