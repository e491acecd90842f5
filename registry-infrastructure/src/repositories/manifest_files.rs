use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use registry_domain::ports::ManifestRepository;
use registry_domain::ManifestDocument;

pub struct ManifestFileRepository;

impl ManifestFileRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ManifestFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[async_trait]
impl ManifestRepository for ManifestFileRepository {
    async fn load_manifest(&self, path: &str) -> anyhow::Result<Option<ManifestDocument>> {
        let file_path = Path::new(path);
        if !file_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(file_path).await?;
        let document: ManifestDocument = if is_yaml(file_path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        Ok(Some(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_manifest_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("registry.json");
        let loaded = ManifestFileRepository::new()
            .load_manifest(&path.to_string_lossy())
            .await
            .expect("load");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn loads_json_and_yaml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let json_path = dir.path().join("registry.json");
        std::fs::write(
            &json_path,
            r#"{"name":"engine-ui","homepage":"https://engine-ui.vercel.app","items":[
                {"name":"metric-grid","type":"registry:ui","files":["registry/default/ui/metric-grid.tsx"]}
            ]}"#,
        )
        .expect("write json");
        let yaml_path = dir.path().join("registry.yaml");
        std::fs::write(
            &yaml_path,
            "name: engine-ui\nhomepage: https://engine-ui.vercel.app\nitems:\n  - name: use-pulse\n    type: registry:hook\n    files:\n      - path: registry/default/hooks/use-pulse.ts\n        type: registry:hook\n",
        )
        .expect("write yaml");

        let repo = ManifestFileRepository::new();
        let json = repo
            .load_manifest(&json_path.to_string_lossy())
            .await
            .expect("json")
            .expect("present");
        assert_eq!(json.items[0].name, "metric-grid");

        let yaml = repo
            .load_manifest(&yaml_path.to_string_lossy())
            .await
            .expect("yaml")
            .expect("present");
        assert_eq!(yaml.items[0].item_type, "registry:hook");
        assert_eq!(yaml.items[0].files[0].path(), "registry/default/hooks/use-pulse.ts");
    }

    #[tokio::test]
    async fn malformed_manifest_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("registry.json");
        std::fs::write(&path, "{\"name\": 1}").expect("write");
        assert!(ManifestFileRepository::new()
            .load_manifest(&path.to_string_lossy())
            .await
            .is_err());
    }

    #[tokio::test]
    async fn malformed_item_does_not_fail_the_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("registry.json");
        std::fs::write(
            &path,
            r#"{"name":"engine-ui","homepage":"https://engine-ui.vercel.app","items":[
                {"name":"health-gauge","type":"registry:ui","files":["registry/default/ui/health-gauge.tsx"]},
                {"name":"broken","files":["registry/default/ui/broken.tsx"]},
                {"name":"pathless","type":"registry:ui","files":[{"type":"registry:ui"}]}
            ]}"#,
        )
        .expect("write");
        let document = ManifestFileRepository::new()
            .load_manifest(&path.to_string_lossy())
            .await
            .expect("load")
            .expect("present");
        assert_eq!(document.items.len(), 3);
        assert_eq!(document.items[1].item_type, "");
        assert_eq!(document.items[2].files[0].path(), "");
    }
}
