use registry_domain::{enumerate_routes, ManifestDocument, RouteParam};

use crate::AppState;

pub fn list_routes(state: &AppState) -> Vec<RouteParam> {
    enumerate_routes(&state.manifest)
}

/// Manifest as declared, without file contents.
pub fn registry_index(state: &AppState) -> ManifestDocument {
    state.manifest.to_document()
}
