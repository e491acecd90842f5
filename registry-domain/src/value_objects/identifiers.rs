// Identifier value objects

use serde::{Deserialize, Serialize};

const JSON_SUFFIX: &str = ".json";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemName(pub String);

impl ItemName {
    /// Builds a lookup name from a URL slug. `foo` and `foo.json` name the same item;
    /// only one trailing `.json` is stripped.
    pub fn from_slug(slug: &str) -> Self {
        Self(slug.strip_suffix(JSON_SUFFIX).unwrap_or(slug).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn json_slug(&self) -> String {
        format!("{}{}", self.0, JSON_SUFFIX)
    }
}

impl std::fmt::Display for ItemName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slug_strips_single_json_suffix() {
        assert_eq!(ItemName::from_slug("health-gauge").as_str(), "health-gauge");
        assert_eq!(ItemName::from_slug("health-gauge.json").as_str(), "health-gauge");
        assert_eq!(ItemName::from_slug("odd.json.json").as_str(), "odd.json");
    }

    #[test]
    fn json_slug_appends_suffix() {
        let name = ItemName::from_slug("metric-grid");
        assert_eq!(name.json_slug(), "metric-grid.json");
    }
}
