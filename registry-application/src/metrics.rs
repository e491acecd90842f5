use std::sync::atomic::{AtomicU64, Ordering};

use crate::AppError;

#[derive(Debug, Default)]
pub struct Metrics {
    source_requests: AtomicU64,
    item_requests: AtomicU64,
    not_found: AtomicU64,
    errors: AtomicU64,
}

impl Metrics {
    pub fn record_source_request(&self) {
        self.source_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_item_request(&self) {
        self.item_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self, err: &AppError) {
        match err {
            AppError::NotFound => {
                self.not_found.fetch_add(1, Ordering::Relaxed);
            }
            AppError::NoFiles | AppError::Internal(_) => {
                self.errors.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub fn render_prometheus(&self) -> String {
        let sources = self.source_requests.load(Ordering::Relaxed);
        let items = self.item_requests.load(Ordering::Relaxed);
        let not_found = self.not_found.load(Ordering::Relaxed);
        let errors = self.errors.load(Ordering::Relaxed);

        format!(
            "# TYPE registry_source_requests_total counter\n\
registry_source_requests_total {}\n\
# TYPE registry_item_requests_total counter\n\
registry_item_requests_total {}\n\
# TYPE registry_not_found_total counter\n\
registry_not_found_total {}\n\
# TYPE registry_errors_total counter\n\
registry_errors_total {}\n",
            sources, items, not_found, errors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_prometheus_reports_counters() {
        let metrics = Metrics::default();
        metrics.record_item_request();
        metrics.record_item_request();
        metrics.record_source_request();
        metrics.record_failure(&AppError::NotFound);
        metrics.record_failure(&AppError::NoFiles);
        let text = metrics.render_prometheus();
        assert!(text.contains("registry_item_requests_total 2\n"));
        assert!(text.contains("registry_source_requests_total 1\n"));
        assert!(text.contains("registry_not_found_total 1\n"));
        assert!(text.contains("registry_errors_total 1\n"));
    }
}
