//! Payloads for the two downstream rule systems.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::context::OverridePredicate;

/// Parent used for flat item models.
pub const GENERATED_PARENT: &str = "minecraft:item/generated";
/// Parent used for tools and weapons.
pub const HANDHELD_PARENT: &str = "minecraft:item/handheld";

/// Texture slots of an item model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelTextures {
    /// Primary texture reference.
    pub layer0: String,
}

/// One `{predicate, model}` override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideEntry {
    /// Predicate name → required value.
    pub predicate: BTreeMap<String, u32>,
    /// Model shown when the predicate matches.
    pub model: String,
}

impl OverrideEntry {
    /// Override selecting `model` when `predicate` is set.
    pub fn new(predicate: OverridePredicate, model: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(predicate.name().to_string(), 1);
        Self {
            predicate: map,
            model: model.into(),
        }
    }

    /// Name of the (single) predicate of this entry.
    pub fn predicate_name(&self) -> Option<&str> {
        self.predicate.keys().next().map(String::as_str)
    }
}

/// Model file in the override-based format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemModel {
    /// Parent model reference.
    pub parent: String,
    /// Texture slots.
    pub textures: ModelTextures,
    /// Override list; omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<OverrideEntry>,
}

impl ItemModel {
    /// Model with the given parent and texture and no overrides.
    pub fn flat(parent: &str, layer0: impl Into<String>) -> Self {
        Self {
            parent: parent.to_string(),
            textures: ModelTextures {
                layer0: layer0.into(),
            },
            overrides: Vec::new(),
        }
    }

    /// Count overrides using the predicate named `name`.
    pub fn count_predicate(&self, name: &str) -> usize {
        self.overrides
            .iter()
            .filter(|entry| entry.predicate.contains_key(name))
            .count()
    }
}

/// Ordered `key=value` property file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFile {
    entries: Vec<(String, String)>,
}

impl PropertyFile {
    /// Empty property file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key, keeping insertion order.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.push((key.to_string(), value.into()));
        self
    }

    /// Value of the first entry named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render as newline-joined `key=value` lines.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_model_omits_overrides() {
        let model = ItemModel::flat(GENERATED_PARENT, "minecraft:item/book");
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["parent"], GENERATED_PARENT);
        assert_eq!(json["textures"]["layer0"], "minecraft:item/book");
        assert!(json.get("overrides").is_none());
    }

    #[test]
    fn override_entry_serializes_predicate_map() {
        let entry = OverrideEntry::new(OverridePredicate::Held, "minecraft:item/book_3d");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["predicate"]["is_held"], 1);
        assert_eq!(json["model"], "minecraft:item/book_3d");
        assert_eq!(entry.predicate_name(), Some("is_held"));
    }

    #[test]
    fn property_file_renders_in_order() {
        let props = PropertyFile::new()
            .with("type", "item")
            .with("items", "enchanted_book");
        assert_eq!(props.render(), "type=item\nitems=enchanted_book");
        assert_eq!(props.get("items"), Some("enchanted_book"));
        assert_eq!(props.get("model"), None);
    }
}
