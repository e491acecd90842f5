use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use registry_application::{AppState, Metrics};
use registry_domain::ports::ManifestRepository;
use registry_domain::{builtin_manifest, Manifest};
use registry_infrastructure::{AppConfig, ManifestFileRepository, SourceFileRepository};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();

        let manifest = load_manifest(&ManifestFileRepository::new(), &runtime_config.manifest_path).await?;
        info!(
            "registry '{}' loaded with {} items, sources under {}",
            manifest.name(),
            manifest.len(),
            runtime_config.source_root
        );

        let sources = Arc::new(SourceFileRepository::new(runtime_config.source_root.clone()));
        let state = AppState {
            config: runtime_config,
            manifest: Arc::new(manifest),
            sources,
            metrics: Arc::new(Metrics::default()),
        };
        Ok(Self { state })
    }
}

/// Loads the manifest once for the process. Falls back to the built-in
/// catalog when no manifest file exists.
pub async fn load_manifest(repo: &dyn ManifestRepository, path: &str) -> Result<Manifest> {
    let document = match repo.load_manifest(path).await? {
        Some(document) => document,
        None => {
            info!("no manifest at {}, using built-in catalog", path);
            builtin_manifest()
        }
    };
    Ok(Manifest::try_from(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_manifest_uses_builtin_catalog() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("registry.json");
        let manifest = load_manifest(&ManifestFileRepository::new(), &path.to_string_lossy())
            .await
            .expect("manifest");
        assert_eq!(manifest.name(), "engine-ui");
        assert!(manifest.lookup("status-honeycomb").is_some());
    }

    #[tokio::test]
    async fn duplicate_names_fail_startup() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("registry.json");
        std::fs::write(
            &path,
            r#"{"name":"engine-ui","homepage":"https://engine-ui.vercel.app","items":[
                {"name":"health-gauge","type":"registry:ui","files":[]},
                {"name":"health-gauge","type":"registry:ui","files":[]}
            ]}"#,
        )
        .expect("write");
        let err = load_manifest(&ManifestFileRepository::new(), &path.to_string_lossy())
            .await
            .expect_err("duplicate");
        assert!(err.to_string().contains("health-gauge"));
    }
}
