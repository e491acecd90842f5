use anyhow::Context;
use futures_util::future::join_all;
use tracing::warn;

use registry_domain::{fix_file_paths, rewrite_imports, validate_entry, validate_resolved};
use registry_domain::{RegistryFile, RegistryItem};

use crate::AppState;

/// Reads one declared file and applies the configured content transform.
pub(crate) async fn read_content(state: &AppState, path: &str) -> anyhow::Result<String> {
    let raw = state
        .sources
        .read_source(path)
        .await
        .with_context(|| format!("failed to read registry file {}", path))?;
    if state.config.rewrite_imports {
        return Ok(rewrite_imports(&raw));
    }
    Ok(raw)
}

/// Resolves an item with file contents and item-relative paths.
///
/// Returns `None` for unknown names and for entries that fail validation.
/// A file that cannot be read is served with empty content.
pub async fn resolve_item(state: &AppState, name: &str) -> Option<RegistryItem> {
    let entry = state.manifest.lookup(name)?;
    let item = match validate_entry(entry) {
        Ok(item) => item,
        Err(err) => {
            warn!("registry item '{}' rejected before resolution: {}", name, err);
            return None;
        }
    };

    let contents = join_all(item.files.iter().map(|file| async move {
        match read_content(state, &file.path).await {
            Ok(content) => content,
            Err(err) => {
                warn!("{:#}", err);
                String::new()
            }
        }
    }))
    .await;

    let files = item
        .files
        .iter()
        .cloned()
        .zip(contents)
        .map(|(file, content)| RegistryFile {
            content: Some(content),
            ..file
        })
        .collect();
    let resolved = RegistryItem {
        files: fix_file_paths(files),
        ..item
    };

    if let Err(err) = validate_resolved(&resolved) {
        warn!("registry item '{}' rejected after resolution: {}", name, err);
        return None;
    }
    Some(resolved)
}
