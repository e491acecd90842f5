use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;

use registry_domain::ports::{ExportRepository, SourceRepository};
use registry_domain::{FileEntry, Manifest, ManifestEntry, RuntimeConfig};
use tokio::sync::Mutex;

use crate::{AppState, Metrics};

#[derive(Default)]
pub struct MemorySources {
    files: HashMap<String, String>,
    reads: AtomicUsize,
}

impl MemorySources {
    pub fn with(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(path, content)| (path.to_string(), content.to_string()))
                .collect(),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceRepository for MemorySources {
    async fn read_source(&self, path: &str) -> anyhow::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("no such file: {}", path))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryExport {
    pub written: Mutex<Vec<(String, Vec<u8>)>>,
}

#[async_trait]
impl ExportRepository for MemoryExport {
    async fn write_export(&self, relative_path: &str, body: &[u8]) -> anyhow::Result<()> {
        self.written
            .lock()
            .await
            .push((relative_path.to_string(), body.to_vec()));
        Ok(())
    }
}

pub fn entry(name: &str, item_type: &str, files: &[&str]) -> ManifestEntry {
    ManifestEntry {
        name: name.to_string(),
        item_type: item_type.to_string(),
        description: Some(format!("{} description", name)),
        files: files.iter().map(|path| FileEntry::from(*path)).collect(),
        ..ManifestEntry::default()
    }
}

pub fn state_with(entries: Vec<ManifestEntry>, sources: Arc<MemorySources>) -> AppState {
    let manifest =
        Manifest::new("engine-ui", "https://engine-ui.vercel.app", entries).expect("manifest");
    AppState {
        config: RuntimeConfig::default(),
        manifest: Arc::new(manifest),
        sources,
        metrics: Arc::new(Metrics::default()),
    }
}
