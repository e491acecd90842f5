// Built-in Engine UI catalog
// Served when no manifest file is configured.

use crate::entities::{FileDescriptor, FileEntry, ManifestDocument, ManifestEntry};

pub const REGISTRY_NAME: &str = "engine-ui";
pub const REGISTRY_HOMEPAGE: &str = "https://engine-ui.vercel.app";

const UI_DIR: &str = "registry/default/ui";
const EXAMPLE_DIR: &str = "registry/default/example";

struct UiSeed {
    name: &'static str,
    description: &'static str,
    dependencies: &'static [&'static str],
    category: &'static str,
    subcategory: &'static str,
    demo_description: &'static str,
}

const UI_ITEMS: &[UiSeed] = &[
    UiSeed {
        name: "status-honeycomb",
        description: "Dense microservice health visualization with 100+ cells showing instance/pod status in a compact honeycomb grid",
        dependencies: &["motion"],
        category: "Status & Health Visualization",
        subcategory: "Monitoring",
        demo_description: "Demo showcasing StatusHoneycomb with microservice health monitoring",
    },
    UiSeed {
        name: "trace-breadcrumb",
        description: "Horizontal trace timeline showing request flow through microservices with time spent in each service",
        dependencies: &[],
        category: "Tracing & Observability",
        subcategory: "Distributed Tracing",
        demo_description: "Demo showcasing TraceBreadcrumb with multiple trace scenarios",
    },
    UiSeed {
        name: "latency-flame-compact",
        description: "Horizontal flame graph strip for trace spans with stacked bars by duration and depth coloring",
        dependencies: &[],
        category: "Tracing & Observability",
        subcategory: "Flame Graphs",
        demo_description: "Demo showcasing LatencyFlameCompact with nested trace spans",
    },
    UiSeed {
        name: "health-gauge",
        description: "Vertical segmented rack light gauge for CPU/MEM/Disk/Load with signal glow on thresholds",
        dependencies: &[],
        category: "Status & Health Visualization",
        subcategory: "Monitoring",
        demo_description: "Demo showcasing HealthGauge with server metrics and table integration",
    },
];

fn file(dir: &str, name: &str, file_type: &str) -> FileEntry {
    FileEntry::Descriptor(FileDescriptor {
        path: format!("{}/{}.tsx", dir, name),
        file_type: Some(file_type.to_string()),
        ..FileDescriptor::default()
    })
}

fn ui_entry(seed: &UiSeed) -> ManifestEntry {
    ManifestEntry {
        name: seed.name.to_string(),
        item_type: "registry:ui".to_string(),
        description: Some(seed.description.to_string()),
        dependencies: Some(seed.dependencies.iter().map(ToString::to_string).collect()),
        files: vec![file(UI_DIR, seed.name, "registry:ui")],
        category: Some(seed.category.to_string()),
        subcategory: Some(seed.subcategory.to_string()),
        ..ManifestEntry::default()
    }
}

fn example_entry(seed: &UiSeed) -> ManifestEntry {
    let name = format!("{}-demo", seed.name);
    ManifestEntry {
        files: vec![file(EXAMPLE_DIR, &name, "registry:example")],
        name,
        item_type: "registry:example".to_string(),
        description: Some(seed.demo_description.to_string()),
        registry_dependencies: Some(vec![seed.name.to_string()]),
        ..ManifestEntry::default()
    }
}

/// UI components first, then their demos.
pub fn builtin_manifest() -> ManifestDocument {
    let items = UI_ITEMS
        .iter()
        .map(ui_entry)
        .chain(UI_ITEMS.iter().map(example_entry))
        .collect();
    ManifestDocument {
        name: REGISTRY_NAME.to_string(),
        homepage: REGISTRY_HOMEPAGE.to_string(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Manifest;
    use crate::services::validate_entry;

    #[test]
    fn builtin_manifest_is_valid_and_unique() {
        let manifest = Manifest::try_from(builtin_manifest()).expect("unique names");
        assert_eq!(manifest.len(), 8);
        for entry in manifest.items() {
            validate_entry(entry).expect("valid entry");
        }
    }

    #[test]
    fn demos_depend_on_their_component() {
        let manifest = Manifest::try_from(builtin_manifest()).expect("manifest");
        let demo = manifest.lookup("health-gauge-demo").expect("demo");
        assert_eq!(
            demo.registry_dependencies,
            Some(vec!["health-gauge".to_string()])
        );
        assert_eq!(
            demo.files[0].path(),
            "registry/default/example/health-gauge-demo.tsx"
        );
        let ui = manifest.lookup("status-honeycomb").expect("ui");
        assert_eq!(ui.files[0].path(), "registry/default/ui/status-honeycomb.tsx");
        assert_eq!(ui.dependencies, Some(vec!["motion".to_string()]));
    }
}
