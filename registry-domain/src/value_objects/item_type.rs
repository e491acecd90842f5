// Registry item type value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryItemType {
    #[serde(rename = "registry:ui", alias = "ui")]
    Ui,
    #[serde(rename = "registry:component", alias = "component")]
    Component,
    #[serde(rename = "registry:example", alias = "example")]
    Example,
    #[serde(rename = "registry:block", alias = "block")]
    Block,
    #[serde(rename = "registry:lib", alias = "lib")]
    Lib,
    #[serde(rename = "registry:hook", alias = "hook")]
    Hook,
}

impl RegistryItemType {
    pub const ALL: [RegistryItemType; 6] = [
        RegistryItemType::Ui,
        RegistryItemType::Component,
        RegistryItemType::Example,
        RegistryItemType::Block,
        RegistryItemType::Lib,
        RegistryItemType::Hook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryItemType::Ui => "registry:ui",
            RegistryItemType::Component => "registry:component",
            RegistryItemType::Example => "registry:example",
            RegistryItemType::Block => "registry:block",
            RegistryItemType::Lib => "registry:lib",
            RegistryItemType::Hook => "registry:hook",
        }
    }

    /// Directory in the consumer project that files of this type install into.
    pub fn install_dir(&self) -> &'static str {
        match self {
            RegistryItemType::Block | RegistryItemType::Component | RegistryItemType::Example => {
                "components"
            }
            RegistryItemType::Ui => "components/ui",
            RegistryItemType::Hook => "hooks",
            RegistryItemType::Lib => "lib",
        }
    }

    /// Accepts both the wire form (`registry:ui`) and the bare form (`ui`).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let bare = value.strip_prefix("registry:").unwrap_or(value);
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().strip_prefix("registry:") == Some(bare))
    }
}

impl std::fmt::Display for RegistryItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_wire_and_bare_forms() {
        assert_eq!(RegistryItemType::parse("registry:hook"), Some(RegistryItemType::Hook));
        assert_eq!(RegistryItemType::parse(" ui "), Some(RegistryItemType::Ui));
        assert_eq!(RegistryItemType::parse("registry:theme"), None);
        assert_eq!(RegistryItemType::parse(""), None);
    }

    #[test]
    fn serializes_to_wire_form() {
        let json = serde_json::to_string(&RegistryItemType::Example).expect("serialize");
        assert_eq!(json, "\"registry:example\"");
        let parsed: RegistryItemType = serde_json::from_str("\"lib\"").expect("alias");
        assert_eq!(parsed, RegistryItemType::Lib);
    }
}
