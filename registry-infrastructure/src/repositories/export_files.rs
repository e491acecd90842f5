use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use registry_domain::ports::ExportRepository;

/// Writes exported registry responses under an output directory.
pub struct ExportFileRepository {
    out_dir: PathBuf,
}

impl ExportFileRepository {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

#[async_trait]
impl ExportRepository for ExportFileRepository {
    async fn write_export(&self, relative_path: &str, body: &[u8]) -> anyhow::Result<()> {
        let path = self.out_dir.join(relative_path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        fs::write(path, body).await?;
        Ok(())
    }
}
