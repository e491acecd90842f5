use std::sync::Arc;

use registry_domain::ports::SourceRepository;
use registry_domain::{Manifest, RuntimeConfig};

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub manifest: Arc<Manifest>,
    pub sources: Arc<dyn SourceRepository>,
    pub metrics: Arc<Metrics>,
}
