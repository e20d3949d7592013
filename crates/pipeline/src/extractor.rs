//! Path extraction.
//!
//! Walks one item's model tree depth-first and emits one [`ExecutionPath`] per leaf. The
//! condition chain from root to leaf is kept as a stack of [`ChainEntry`] and folded into
//! [`PathConditions`] when a leaf is reached.

use mcbackport_assets::{ItemDefinition, ModelNode};
use mcbackport_core::context::{
    bare_property, COMPONENT_PROPERTY, DISPLAY_CONTEXT_PROPERTY, FALLBACK,
};
use mcbackport_core::{EnchantmentCondition, ExecutionPath, PathConditions};
use serde_json::Value;
use tracing::debug;

use crate::PipelineError;

/// Priority added per display-context selector on the path.
pub const DISPLAY_CONTEXT_WEIGHT: i32 = 10;
/// Priority added per non-fallback component selector on the path.
pub const ENCHANTMENT_WEIGHT: i32 = 100;
/// Added once to paths that crossed a condition's `on_true` arm.
pub const CONDITION_TRUE_PENALTY: i32 = 5;

/// Which branch of a node the walk descended into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Branch<'a> {
    /// An explicit select case.
    Case(&'a Value),
    /// A select's fallback.
    Fallback,
    /// A condition's `on_true`.
    OnTrue,
    /// A condition's `on_false`.
    OnFalse,
}

/// One step of the root-to-leaf condition chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainEntry<'a> {
    /// Property name without namespace.
    pub property: &'a str,
    /// Component name for component selectors.
    pub component: Option<&'a str>,
    /// Branch taken.
    pub branch: Branch<'a>,
}

/// Linearize an item's model tree into execution paths, in traversal order.
pub fn extract_all_paths(item: &ItemDefinition) -> Result<Vec<ExecutionPath>, PipelineError> {
    let root = item
        .model
        .as_ref()
        .ok_or_else(|| PipelineError::Structure("item definition has no `model`".into()))?;

    let mut paths = Vec::new();
    let mut chain = Vec::new();
    walk(root, &mut chain, &mut paths);
    debug!("extracted {} execution paths", paths.len());
    Ok(paths)
}

fn walk<'a>(node: &'a ModelNode, chain: &mut Vec<ChainEntry<'a>>, out: &mut Vec<ExecutionPath>) {
    match node {
        ModelNode::Model(leaf) => out.push(build_path(chain, &leaf.model)),
        ModelNode::Select(select) => {
            let property = bare_property(&select.property);
            let component = select.component.as_deref();
            for case in &select.cases {
                chain.push(ChainEntry {
                    property,
                    component,
                    branch: Branch::Case(&case.when),
                });
                walk(&case.model, chain, out);
                chain.pop();
            }
            if let Some(fallback) = &select.fallback {
                chain.push(ChainEntry {
                    property,
                    component,
                    branch: Branch::Fallback,
                });
                walk(fallback, chain, out);
                chain.pop();
            }
        }
        ModelNode::Condition(condition) => {
            let property = bare_property(&condition.property);
            for (branch, arm) in [
                (Branch::OnTrue, &condition.on_true),
                (Branch::OnFalse, &condition.on_false),
            ] {
                chain.push(ChainEntry {
                    property,
                    component: None,
                    branch,
                });
                walk(arm, chain, out);
                chain.pop();
            }
        }
    }
}

fn build_path(chain: &[ChainEntry<'_>], model: &str) -> ExecutionPath {
    ExecutionPath {
        conditions: merge_conditions(chain),
        target_model: model.to_string(),
        priority: compute_priority(chain),
        is_fallback: chain.iter().any(|e| e.branch == Branch::Fallback),
    }
}

/// Fold a condition chain into the final path conditions.
pub fn merge_conditions(chain: &[ChainEntry<'_>]) -> PathConditions {
    let mut conditions = PathConditions::default();
    for entry in chain {
        match (entry.property, entry.branch) {
            (DISPLAY_CONTEXT_PROPERTY, Branch::Case(when)) => {
                push_contexts(&mut conditions.display_context, when)
            }
            (DISPLAY_CONTEXT_PROPERTY, Branch::Fallback) => {
                conditions.display_context.push(FALLBACK.to_string())
            }
            (COMPONENT_PROPERTY, Branch::Case(when)) => {
                conditions.component = entry.component.map(str::to_string);
                if let Some(enchantment) = parse_enchantment(when) {
                    conditions.enchantment = Some(enchantment);
                }
            }
            (COMPONENT_PROPERTY, Branch::Fallback) => {
                conditions.component = entry.component.map(str::to_string);
            }
            _ => {}
        }
    }
    conditions
}

fn push_contexts(contexts: &mut Vec<String>, when: &Value) {
    match when {
        Value::String(context) => contexts.push(context.clone()),
        Value::Array(items) => contexts.extend(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string),
        ),
        _ => {}
    }
}

/// Parse a component case `when` into an enchantment condition.
///
/// Accepts `{"minecraft:sharpness": 3}` or `[{"minecraft:sharpness": 3}, ...]` and uses only the
/// first pair found; multi-enchantment AND conditions are not supported. Unrecognized shapes
/// yield `None`.
pub fn parse_enchantment(when: &Value) -> Option<EnchantmentCondition> {
    let map = match when {
        Value::Object(map) => map,
        Value::Array(items) => items.first()?.as_object()?,
        _ => return None,
    };
    let (id, level) = map.iter().next()?;
    let level = u32::try_from(level.as_u64()?).ok()?;
    Some(EnchantmentCondition::new(id, level))
}

fn compute_priority(chain: &[ChainEntry<'_>]) -> i32 {
    let mut priority = 0;
    for entry in chain {
        match (entry.property, entry.branch) {
            (DISPLAY_CONTEXT_PROPERTY, Branch::Case(_) | Branch::Fallback) => {
                priority += DISPLAY_CONTEXT_WEIGHT
            }
            (COMPONENT_PROPERTY, Branch::Case(_)) => priority += ENCHANTMENT_WEIGHT,
            _ => {}
        }
    }
    if chain.iter().any(|e| e.branch == Branch::OnTrue) {
        priority += CONDITION_TRUE_PENALTY;
    }
    priority
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcbackport_assets::item_from_str;

    fn paths_for(json: &str) -> Vec<ExecutionPath> {
        let item = item_from_str(json).expect("valid item");
        extract_all_paths(&item).expect("extract")
    }

    #[test]
    fn missing_model_is_a_structure_error() {
        let item = item_from_str(r#"{"hand_animation_on_swap": true}"#).unwrap();
        let err = extract_all_paths(&item).unwrap_err();
        assert!(matches!(err, PipelineError::Structure(_)));
    }

    #[test]
    fn bare_string_root_is_a_leaf() {
        let paths = paths_for(r#"{"model": "minecraft:item/stick"}"#);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].target_model, "minecraft:item/stick");
        assert_eq!(paths[0].priority, 0);
        assert!(paths[0].conditions.display_context.is_empty());
    }

    #[test]
    fn display_context_cases_and_fallback() {
        let paths = paths_for(
            r#"{"model": {
                "type": "minecraft:select",
                "property": "minecraft:display_context",
                "cases": [
                    {"when": ["gui", "fixed"], "model": {"type": "minecraft:model", "model": "minecraft:item/spyglass"}},
                    {"when": "head", "model": {"type": "minecraft:model", "model": "minecraft:item/spyglass_hat"}}
                ],
                "fallback": {"type": "minecraft:model", "model": "minecraft:item/spyglass_in_hand"}
            }}"#,
        );
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0].conditions.display_context, vec!["gui", "fixed"]);
        assert_eq!(paths[1].conditions.display_context, vec!["head"]);
        assert_eq!(paths[2].conditions.display_context, vec![FALLBACK]);
        assert!(!paths[0].is_fallback);
        assert!(paths[2].is_fallback);
        assert!(paths.iter().all(|p| p.priority == DISPLAY_CONTEXT_WEIGHT));
    }

    #[test]
    fn nested_component_selector_sets_enchantment() {
        let paths = paths_for(
            r#"{"model": {
                "type": "minecraft:select",
                "property": "minecraft:component",
                "component": "minecraft:stored_enchantments",
                "cases": [{
                    "when": {"minecraft:sharpness": 3},
                    "model": {
                        "type": "minecraft:select",
                        "property": "minecraft:display_context",
                        "cases": [{"when": "gui", "model": "minecraft:item/enchanted_books/sharpness_3"}]
                    }
                }],
                "fallback": "minecraft:item/enchanted_book"
            }}"#,
        );
        assert_eq!(paths.len(), 2);
        let sharp = &paths[0];
        assert_eq!(
            sharp.conditions.enchantment,
            Some(EnchantmentCondition::new("sharpness", 3))
        );
        assert_eq!(
            sharp.conditions.component.as_deref(),
            Some("minecraft:stored_enchantments")
        );
        assert_eq!(sharp.priority, ENCHANTMENT_WEIGHT + DISPLAY_CONTEXT_WEIGHT);

        let fallback = &paths[1];
        assert!(fallback.is_fallback);
        assert!(fallback.conditions.enchantment.is_none());
        assert_eq!(fallback.priority, 0);
        assert!(fallback.conditions.display_context.is_empty());
    }

    #[test]
    fn condition_true_arm_gets_penalty() {
        let paths = paths_for(
            r#"{"model": {
                "type": "minecraft:select",
                "property": "display_context",
                "cases": [{
                    "when": "firstperson_righthand",
                    "model": {
                        "type": "minecraft:condition",
                        "property": "minecraft:using_item",
                        "on_true": "minecraft:item/spyglass_using",
                        "on_false": "minecraft:item/spyglass_in_hand"
                    }
                }]
            }}"#,
        );
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].priority, DISPLAY_CONTEXT_WEIGHT + CONDITION_TRUE_PENALTY);
        assert_eq!(paths[1].priority, DISPLAY_CONTEXT_WEIGHT);
        assert_eq!(
            paths[0].conditions.display_context,
            paths[1].conditions.display_context
        );
    }

    #[test]
    fn enchantment_parsing_shapes() {
        use serde_json::json;
        assert_eq!(
            parse_enchantment(&json!({"minecraft:mending": 1})),
            Some(EnchantmentCondition::new("mending", 1))
        );
        assert_eq!(
            parse_enchantment(&json!([{"minecraft:power": 5}, {"minecraft:flame": 1}])),
            Some(EnchantmentCondition::new("power", 5))
        );
        assert_eq!(parse_enchantment(&json!("minecraft:mending")), None);
        assert_eq!(parse_enchantment(&json!([])), None);
        assert_eq!(parse_enchantment(&json!({"minecraft:power": "five"})), None);
        assert_eq!(parse_enchantment(&json!({"minecraft:power": -1})), None);
    }

    #[test]
    fn extraction_is_deterministic() {
        let json = r#"{"model": {
            "type": "minecraft:select",
            "property": "minecraft:display_context",
            "cases": [
                {"when": "gui", "model": "a"},
                {"when": ["ground", "head"], "model": "b"}
            ],
            "fallback": "c"
        }}"#;
        assert_eq!(paths_for(json), paths_for(json));
    }
}
