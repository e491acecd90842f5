use std::path::PathBuf;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::fs;

use registry_domain::ports::SourceRepository;

/// Reads registry sources from a directory on disk.
pub struct SourceFileRepository {
    root: PathBuf,
}

impl SourceFileRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl SourceRepository for SourceFileRepository {
    async fn read_source(&self, path: &str) -> anyhow::Result<String> {
        let content = fs::read_to_string(self.root.join(path)).await?;
        Ok(content)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let metadata = fs::metadata(&self.root).await?;
        if !metadata.is_dir() {
            return Err(anyhow!(
                "source root {} is not a directory",
                self.root.display()
            ));
        }
        Ok(())
    }
}
