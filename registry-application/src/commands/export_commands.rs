use tracing::{info, warn};

use registry_domain::ports::ExportRepository;
use registry_domain::{enumerate_routes, ExportReport};

use crate::queries::item_queries::load_item;
use crate::queries::route_queries::registry_index;
use crate::{AppError, AppState};

pub const INDEX_PATH: &str = "registry.json";

/// Writes every servable `/r/` route plus the manifest index.
///
/// Routes that cannot be served are skipped and reported; write failures abort.
pub async fn export_static(
    state: &AppState,
    sink: &dyn ExportRepository,
) -> Result<ExportReport, AppError> {
    let mut report = ExportReport::default();
    for route in enumerate_routes(&state.manifest) {
        let item = match load_item(state, &route.name).await {
            Ok(item) => item,
            Err(err) => {
                warn!("skipping route {}: {}", route.name, err);
                report.skipped.push(route.name);
                continue;
            }
        };
        let body = serde_json::to_vec(&item).map_err(|err| AppError::Internal(err.into()))?;
        sink.write_export(&format!("r/{}", route.name), &body).await?;
        report.written += 1;
    }

    let index = serde_json::to_vec(&registry_index(state))
        .map_err(|err| AppError::Internal(err.into()))?;
    sink.write_export(INDEX_PATH, &index).await?;

    info!(
        "static export finished: {} routes written, {} skipped",
        report.written,
        report.skipped.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::{entry, state_with, MemoryExport, MemorySources};

    #[tokio::test]
    async fn writes_both_slugs_and_skips_unservable_items() {
        let sources = Arc::new(MemorySources::with(&[(
            "registry/default/ui/latency-flame-compact.tsx",
            "flame",
        )]));
        let state = state_with(
            vec![
                entry(
                    "latency-flame-compact",
                    "registry:ui",
                    &["registry/default/ui/latency-flame-compact.tsx"],
                ),
                entry("latency-flame-compact-demo", "registry:example", &[]),
            ],
            sources,
        );
        let sink = MemoryExport::default();
        let report = export_static(&state, &sink).await.expect("export");

        assert_eq!(report.written, 2);
        assert_eq!(
            report.skipped,
            vec![
                "latency-flame-compact-demo".to_string(),
                "latency-flame-compact-demo.json".to_string()
            ]
        );

        let written = sink.written.lock().await;
        let paths: Vec<&str> = written.iter().map(|(path, _)| path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "r/latency-flame-compact",
                "r/latency-flame-compact.json",
                "registry.json"
            ]
        );
        assert_eq!(written[0].1, written[1].1);
    }
}
