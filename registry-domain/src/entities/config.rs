// Runtime configuration handed to the application layer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub manifest_path: String,
    pub source_root: String,
    pub export_dir: String,
    pub rewrite_imports: bool,
    pub request_timeout_seconds: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3333".to_string(),
            api_token: None,
            manifest_path: "./registry.json".to_string(),
            source_root: ".".to_string(),
            export_dir: "./public".to_string(),
            rewrite_imports: false,
            request_timeout_seconds: 15,
        }
    }
}
