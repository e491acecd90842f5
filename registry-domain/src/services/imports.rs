// Import specifier rewriting from registry layout to consumer layout

use std::sync::LazyLock;

use regex::{Captures, Regex};

static REGISTRY_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@/registry/default/(ui|example|lib|hooks)/([\w-]+)").expect("valid import pattern")
});

/// Rewrites `@/registry/default/<kind>/<name>` to where the CLI installs it.
pub fn rewrite_imports(content: &str) -> String {
    REGISTRY_IMPORT
        .replace_all(content, |caps: &Captures<'_>| {
            let component = &caps[2];
            match &caps[1] {
                "ui" => format!("@/components/ui/{}", component),
                "example" => format!("@/components/{}", component),
                "hooks" => format!("@/hooks/{}", component),
                "lib" => format!("@/lib/{}", component),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}
