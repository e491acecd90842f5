use futures_util::future::try_join_all;
use tracing::warn;

use registry_domain::{resolve_target, validate_entry, ItemName, RegistryFile, RegistryItem};

use crate::queries::resolve_queries::read_content;
use crate::{AppError, AppState};

/// Full item record for the CLI. `slug` may carry a `.json` suffix.
pub async fn get_item(state: &AppState, slug: &str) -> Result<RegistryItem, AppError> {
    state.metrics.record_item_request();
    let result = load_item(state, slug).await;
    if let Err(err) = &result {
        state.metrics.record_failure(err);
    }
    result
}

pub(crate) async fn load_item(state: &AppState, slug: &str) -> Result<RegistryItem, AppError> {
    let name = ItemName::from_slug(slug);
    let entry = state
        .manifest
        .lookup(name.as_str())
        .ok_or(AppError::NotFound)?;
    if entry.files.is_empty() {
        return Err(AppError::NoFiles);
    }
    let item = validate_entry(entry).map_err(|err| {
        warn!("registry item '{}' rejected: {}", name, err);
        AppError::NotFound
    })?;

    // Any failed read fails the whole item; declared order is kept.
    let contents = try_join_all(item.files.iter().map(|file| read_content(state, &file.path))).await?;

    // Served paths are the manifest strings as written; reads use the
    // normalized form.
    let files = item
        .files
        .iter()
        .cloned()
        .zip(entry.files.iter())
        .zip(contents)
        .map(|((file, declared), content)| {
            let target = resolve_target(&file);
            RegistryFile {
                path: declared.path().to_string(),
                content: Some(content),
                target: Some(target),
                ..file
            }
        })
        .collect();
    Ok(RegistryItem { files, ..item })
}
