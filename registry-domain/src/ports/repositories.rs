use async_trait::async_trait;

use crate::entities::ManifestDocument;

/// Reads registry source files addressed by their declared, root-relative path.
#[async_trait]
pub trait SourceRepository: Send + Sync {
    async fn read_source(&self, path: &str) -> anyhow::Result<String>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait ManifestRepository: Send + Sync {
    /// `Ok(None)` when no manifest exists at `path`.
    async fn load_manifest(&self, path: &str) -> anyhow::Result<Option<ManifestDocument>>;
}

/// Destination for statically exported registry responses.
#[async_trait]
pub trait ExportRepository: Send + Sync {
    async fn write_export(&self, relative_path: &str, body: &[u8]) -> anyhow::Result<()>;
}
