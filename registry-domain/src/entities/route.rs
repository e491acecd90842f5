// Static route entity

use serde::{Deserialize, Serialize};

/// One servable slug under `/r/`, produced ahead of request time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParam {
    pub name: String,
}

/// Outcome of a static export run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    pub written: usize,
    pub skipped: Vec<String>,
}
