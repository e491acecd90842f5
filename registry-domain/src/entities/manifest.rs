// Registry manifest entity
// Declared items as they appear at rest, before validation and resolution

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub path: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A `files` entry may be declared as a bare path or as a full descriptor.
/// Anything else is kept as `Malformed` and rejected when its item is
/// validated, so one bad entry never fails the whole manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileEntry {
    Path(String),
    Descriptor(FileDescriptor),
    Malformed(serde_json::Value),
}

impl FileEntry {
    pub fn path(&self) -> &str {
        match self {
            FileEntry::Path(path) => path,
            FileEntry::Descriptor(descriptor) => &descriptor.path,
            FileEntry::Malformed(_) => "",
        }
    }

    pub fn to_descriptor(&self) -> FileDescriptor {
        match self {
            FileEntry::Path(path) => FileDescriptor {
                path: path.clone(),
                ..FileDescriptor::default()
            },
            FileEntry::Descriptor(descriptor) => descriptor.clone(),
            FileEntry::Malformed(_) => FileDescriptor::default(),
        }
    }
}

impl From<&str> for FileEntry {
    fn from(path: &str) -> Self {
        FileEntry::Path(path.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_dependencies: Option<Vec<String>>,
    #[serde(default)]
    pub files: Vec<FileEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

/// On-disk shape of a registry manifest (`registry.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDocument {
    pub name: String,
    pub homepage: String,
    #[serde(default)]
    pub items: Vec<ManifestEntry>,
}

/// Immutable manifest with a name index built once at construction.
#[derive(Debug, Clone)]
pub struct Manifest {
    name: String,
    homepage: String,
    items: Vec<ManifestEntry>,
    index: HashMap<String, usize>,
}

impl Manifest {
    pub fn new(
        name: impl Into<String>,
        homepage: impl Into<String>,
        items: Vec<ManifestEntry>,
    ) -> Result<Self, ManifestError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            // Unnamed entries stay in the document but can never be looked up.
            if item.name.trim().is_empty() {
                continue;
            }
            if index.insert(item.name.clone(), position).is_some() {
                return Err(ManifestError::DuplicateName(item.name.clone()));
            }
        }
        Ok(Self {
            name: name.into(),
            homepage: homepage.into(),
            items,
            index,
        })
    }

    pub fn lookup(&self, name: &str) -> Option<&ManifestEntry> {
        self.index.get(name).map(|position| &self.items[*position])
    }

    pub fn items(&self) -> &[ManifestEntry] {
        &self.items
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn homepage(&self) -> &str {
        &self.homepage
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_document(&self) -> ManifestDocument {
        ManifestDocument {
            name: self.name.clone(),
            homepage: self.homepage.clone(),
            items: self.items.clone(),
        }
    }
}

impl TryFrom<ManifestDocument> for Manifest {
    type Error = ManifestError;

    fn try_from(document: ManifestDocument) -> Result<Self, Self::Error> {
        Manifest::new(document.name, document.homepage, document.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> ManifestEntry {
        ManifestEntry {
            name: name.to_string(),
            item_type: "registry:ui".to_string(),
            files: vec![FileEntry::from("registry/default/ui/a.tsx")],
            ..ManifestEntry::default()
        }
    }

    #[test]
    fn lookup_finds_declared_items_only() {
        let manifest = Manifest::new("test", "https://example.com", vec![entry("a"), entry("b")])
            .expect("manifest");
        assert_eq!(manifest.lookup("b").map(|item| item.name.as_str()), Some("b"));
        assert!(manifest.lookup("c").is_none());
        assert_eq!(manifest.len(), 2);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Manifest::new("test", "https://example.com", vec![entry("a"), entry("a")])
            .expect_err("duplicate");
        assert_eq!(err, ManifestError::DuplicateName("a".to_string()));
    }

    #[test]
    fn files_accept_bare_paths_and_descriptors() {
        let raw = r#"{
            "name": "engine-ui",
            "homepage": "https://engine-ui.vercel.app",
            "items": [{
                "name": "use-thing",
                "type": "registry:hook",
                "devDependencies": ["vitest"],
                "files": [
                    "registry/default/hooks/use-thing.ts",
                    {"path": "registry/default/lib/thing.ts", "type": "registry:lib", "target": "lib/thing.ts"}
                ]
            }]
        }"#;
        let document: ManifestDocument = serde_json::from_str(raw).expect("parse");
        let item = &document.items[0];
        assert_eq!(item.dev_dependencies, Some(vec!["vitest".to_string()]));
        assert_eq!(item.files[0], FileEntry::from("registry/default/hooks/use-thing.ts"));
        let descriptor = item.files[1].to_descriptor();
        assert_eq!(descriptor.file_type.as_deref(), Some("registry:lib"));
        assert_eq!(descriptor.target.as_deref(), Some("lib/thing.ts"));
    }

    #[test]
    fn malformed_entries_load_and_keep_their_neighbours() {
        let raw = r#"{
            "name": "engine-ui",
            "homepage": "https://engine-ui.vercel.app",
            "items": [
                {"name": "health-gauge", "type": "registry:ui", "files": ["registry/default/ui/health-gauge.tsx"]},
                {"name": "untyped", "files": ["registry/default/ui/untyped.tsx"]},
                {"name": "pathless", "type": "registry:ui", "files": [{"type": "registry:ui"}, 42]},
                {"type": "registry:ui", "files": []},
                {"type": "registry:lib"}
            ]
        }"#;
        let document: ManifestDocument = serde_json::from_str(raw).expect("parse");
        let pathless = &document.items[2];
        assert_eq!(pathless.files.len(), 2);
        assert_eq!(pathless.files[0].path(), "");
        assert!(matches!(pathless.files[1], FileEntry::Malformed(_)));
        assert_eq!(document.items[1].item_type, "");

        let manifest = Manifest::try_from(document).expect("manifest");
        assert_eq!(manifest.len(), 5);
        assert!(manifest.lookup("health-gauge").is_some());
        assert!(manifest.lookup("untyped").is_some());
        assert!(manifest.lookup("").is_none());
    }
}
