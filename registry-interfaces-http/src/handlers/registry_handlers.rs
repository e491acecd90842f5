use axum::extract::{Path, State};
use axum::Json;

use registry_application::queries::{item_queries, route_queries, source_queries};
use registry_application::AppState;
use registry_domain::{ManifestDocument, RegistryItem, SourceView};

use crate::error::HttpError;

pub async fn get_source(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SourceView>, HttpError> {
    let view = source_queries::get_source(&state, &name).await?;
    Ok(Json(view))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RegistryItem>, HttpError> {
    let item = item_queries::get_item(&state, &name).await?;
    Ok(Json(item))
}

pub async fn get_registry_index(State(state): State<AppState>) -> Json<ManifestDocument> {
    Json(route_queries::registry_index(&state))
}
