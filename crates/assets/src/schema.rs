//! Typed view of the nested item-model schema.
//!
//! The tree is a tagged union; dispatch on the tag happens once here so the extractor can
//! match exhaustively on [`ModelNode`].

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Top-level item definition (`assets/<ns>/items/<id>.json`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDefinition {
    /// Root of the model tree.
    #[serde(default)]
    pub model: Option<ModelNode>,
}

impl ItemDefinition {
    /// True when the root is a selector, i.e. there is something to backport.
    pub fn is_conditional(&self) -> bool {
        matches!(self.model, Some(ModelNode::Select(_)))
    }
}

/// One node of the model tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelNode {
    /// Terminal model reference.
    Model(ModelLeaf),
    /// Multi-way selector on a property.
    Select(SelectNode),
    /// Boolean branch.
    Condition(ConditionNode),
}

/// Terminal model reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelLeaf {
    /// Namespaced model path.
    pub model: String,
}

/// `minecraft:select` node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectNode {
    /// Property being switched on (e.g. `minecraft:display_context`).
    pub property: String,
    /// Component name when `property` is `component`.
    #[serde(default)]
    pub component: Option<String>,
    /// Explicit cases, in declaration order.
    #[serde(default)]
    pub cases: Vec<SelectCase>,
    /// Sub-tree used when no case matches.
    #[serde(default)]
    pub fallback: Option<Box<ModelNode>>,
}

/// One `{when, model}` case.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectCase {
    /// Scalar, array or mapping, depending on the property.
    pub when: Value,
    /// Sub-tree for this case.
    pub model: ModelNode,
}

/// `minecraft:condition` node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConditionNode {
    /// Boolean property (`predicate` is accepted as an alias).
    #[serde(alias = "predicate")]
    pub property: String,
    /// Sub-tree when the property holds.
    pub on_true: Box<ModelNode>,
    /// Sub-tree otherwise.
    pub on_false: Box<ModelNode>,
}

impl ModelNode {
    /// Convert a raw JSON value, dispatching on its `type` tag.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let tag = match &value {
            Value::String(model) => {
                return Ok(Self::Model(ModelLeaf {
                    model: model.clone(),
                }))
            }
            Value::Object(map) => match map.get("type").and_then(Value::as_str) {
                Some(tag) => tag.to_string(),
                None => return Err("model node without a `type` tag".to_string()),
            },
            other => return Err(format!("expected a model node, found {other}")),
        };

        let bare = tag.strip_prefix("minecraft:").unwrap_or(&tag);
        let node = match bare {
            "model" => serde_json::from_value(value).map(Self::Model),
            "select" => serde_json::from_value(value).map(Self::Select),
            "condition" => serde_json::from_value(value).map(Self::Condition),
            _ => return Err(format!("unknown node type `{tag}`")),
        };
        node.map_err(|err| format!("invalid `{tag}` node: {err}"))
    }
}

impl<'de> Deserialize<'de> for ModelNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        ModelNode::from_value(value).map_err(de::Error::custom)
    }
}
