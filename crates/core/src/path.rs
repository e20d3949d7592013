//! Execution paths: one fully resolved route through an item's conditional tree.

use serde::Serialize;

use crate::context::GUI_CONTEXTS;

/// Enchantment required for a path to apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EnchantmentCondition {
    /// Enchantment id without namespace (e.g. "sharpness").
    #[serde(rename = "type")]
    pub id: String,
    /// Required enchantment level.
    pub level: u32,
}

impl EnchantmentCondition {
    /// Construct a condition, stripping any namespace from `id`.
    pub fn new(id: &str, level: u32) -> Self {
        let id = id.split_once(':').map(|(_, bare)| bare).unwrap_or(id);
        Self {
            id: id.to_string(),
            level,
        }
    }
}

/// Conditions accumulated along a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathConditions {
    /// Render contexts this path covers. May contain duplicates.
    pub display_context: Vec<String>,
    /// Component name from the innermost component selector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Enchantment parsed from a component selector case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enchantment: Option<EnchantmentCondition>,
}

/// A flat condition-set → model mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPath {
    /// Conditions under which `target_model` is shown.
    pub conditions: PathConditions,
    /// Terminal model reference.
    pub target_model: String,
    /// Higher is more specific.
    pub priority: i32,
    /// Reached through a selector's fallback branch.
    pub is_fallback: bool,
}

impl ExecutionPath {
    /// True if the path covers `context`.
    pub fn has_context(&self, context: &str) -> bool {
        self.conditions.display_context.iter().any(|c| c == context)
    }

    /// True if the path covers any of `contexts`.
    pub fn covers_any(&self, contexts: &[&str]) -> bool {
        contexts.iter().any(|c| self.has_context(c))
    }

    /// True if the path is shown in a GUI slot or item frame.
    pub fn is_gui(&self) -> bool {
        self.covers_any(&GUI_CONTEXTS)
    }

    /// Enchantment carried by this path, if any.
    pub fn enchantment(&self) -> Option<&EnchantmentCondition> {
        self.conditions.enchantment.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enchantment_condition_strips_namespace() {
        let cond = EnchantmentCondition::new("minecraft:sharpness", 3);
        assert_eq!(cond.id, "sharpness");
        assert_eq!(cond.level, 3);
        assert_eq!(EnchantmentCondition::new("mending", 1).id, "mending");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let path = ExecutionPath {
            conditions: PathConditions {
                display_context: vec!["gui".into()],
                component: None,
                enchantment: Some(EnchantmentCondition::new("flame", 1)),
            },
            target_model: "minecraft:item/bow".into(),
            priority: 110,
            is_fallback: false,
        };
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json["conditions"]["displayContext"][0], "gui");
        assert_eq!(json["conditions"]["enchantment"]["type"], "flame");
        assert_eq!(json["targetModel"], "minecraft:item/bow");
        assert_eq!(json["isFallback"], false);
    }
}
