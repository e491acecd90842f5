use registry_domain::SourceView;

use crate::queries::resolve_queries::resolve_item;
use crate::{AppError, AppState};

/// Primary file source of an item. Missing items and items whose primary
/// file is empty are both reported as not found.
pub async fn get_source(state: &AppState, name: &str) -> Result<SourceView, AppError> {
    state.metrics.record_source_request();
    let result = load_source(state, name).await;
    if let Err(err) = &result {
        state.metrics.record_failure(err);
    }
    result
}

async fn load_source(state: &AppState, name: &str) -> Result<SourceView, AppError> {
    let item = resolve_item(state, name).await.ok_or(AppError::NotFound)?;
    let code = item
        .primary_file()
        .and_then(|file| file.content.clone())
        .filter(|content| !content.is_empty())
        .ok_or(AppError::NotFound)?;
    Ok(SourceView {
        code,
        name: item.name,
        description: item.description,
    })
}
