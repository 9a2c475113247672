use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::Category;

/// One catalog entry as stored in the dataset and the manual override file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Plugin {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub repo_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub download_url: String,
    /// Category id; kept as written so unknown ids survive a regeneration.
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub stars: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub latest_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub license: String,
}

impl Plugin {
    /// Category used for display; unknown ids fall back to `Other`.
    pub fn category_kind(&self) -> Category {
        Category::resolve(&self.category)
    }
}

/// The generated artifact consumed by the viewer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub last_updated: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub plugins: Vec<Plugin>,
}

/// Hand-maintained additions and corrections applied on top of discovery.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManualOverrides {
    #[serde(deserialize_with = "null_as_default")]
    pub plugins: Vec<Plugin>,
    #[serde(deserialize_with = "null_as_default")]
    pub category_overrides: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub exclude_repos: Vec<String>,
}

/// Hand-edited files write `null` for unknown values; read it as the field default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Stable id for `owner/name`: lowercased, anything outside `[a-z0-9-]` becomes `-`.
pub fn plugin_id(owner: &str, name: &str) -> String {
    format!("{owner}-{name}")
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_id_lowercases_and_replaces() {
        assert_eq!(plugin_id("Foo", "Bar.Plugin"), "foo-bar-plugin");
        assert_eq!(plugin_id("a_b", "c d"), "a-b-c-d");
        assert_eq!(plugin_id("user1", "ymm4-tool"), "user1-ymm4-tool");
    }

    #[test]
    fn plugin_record_uses_camel_case() {
        let p = Plugin {
            id: "a-b".to_string(),
            author_url: "https://github.com/a".to_string(),
            last_updated: Some("2024-01-15T00:00:00Z".to_string()),
            ..Plugin::default()
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["authorUrl"], "https://github.com/a");
        assert_eq!(json["lastUpdated"], "2024-01-15T00:00:00Z");
        assert_eq!(json["latestVersion"], "");
    }

    #[test]
    fn plugin_record_tolerates_missing_fields() {
        let p: Plugin = serde_json::from_str(r#"{"id":"x","name":"X","category":"weird"}"#).unwrap();
        assert_eq!(p.stars, 0);
        assert!(p.tags.is_empty());
        assert!(p.last_updated.is_none());
        assert_eq!(p.category, "weird");
        assert_eq!(p.category_kind(), Category::Other);
    }

    #[test]
    fn manual_overrides_parse() {
        let json = r#"{
            "plugins": [{"id":"m-1","name":"Manual"}],
            "categoryOverrides": {"a-b": "shape"},
            "excludeRepos": ["Spam/Repo"]
        }"#;
        let m: ManualOverrides = serde_json::from_str(json).unwrap();
        assert_eq!(m.plugins.len(), 1);
        assert_eq!(m.category_overrides.get("a-b").map(String::as_str), Some("shape"));
        assert_eq!(m.exclude_repos, vec!["Spam/Repo"]);
    }

    #[test]
    fn manual_overrides_partial_file() {
        let m: ManualOverrides = serde_json::from_str(r#"{"excludeRepos":["a/b"]}"#).unwrap();
        assert!(m.plugins.is_empty());
        assert!(m.category_overrides.is_empty());
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let json = r#"{"id":"m-1","name":"M","description":null,"license":null,
            "stars":null,"tags":null,"lastUpdated":null}"#;
        let p: Plugin = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "m-1");
        assert_eq!(p.description, "");
        assert_eq!(p.license, "");
        assert_eq!(p.stars, 0);
        assert!(p.tags.is_empty());
        assert!(p.last_updated.is_none());
    }

    #[test]
    fn null_in_one_manual_entry_keeps_the_rest_of_the_file() {
        let json = r#"{
            "plugins": [{"id":"m-1","name":"M","license":null}],
            "categoryOverrides": null,
            "excludeRepos": ["spam/repo"]
        }"#;
        let m: ManualOverrides = serde_json::from_str(json).unwrap();
        assert_eq!(m.plugins.len(), 1);
        assert_eq!(m.plugins[0].license, "");
        assert!(m.category_overrides.is_empty());
        assert_eq!(m.exclude_repos, vec!["spam/repo"]);
    }
}
