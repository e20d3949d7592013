//! Override synthesis for the display-context mod.
//!
//! The renderer evaluates every predicate independently and an offhand item also satisfies
//! `is_held`; the last matching entry wins. Emitting ground once, held twice and offhand three
//! times (in that order) is what makes offhand win. Do not deduplicate these entries.

use std::collections::BTreeMap;

use mcbackport_core::{EnchantmentCondition, ExecutionPath, OverrideEntry, OverridePredicate};

/// 3D-bucket paths grouped by the predicate their contexts map to.
#[derive(Debug, Default)]
pub struct PredicateGroups<'p> {
    groups: BTreeMap<OverridePredicate, Vec<&'p ExecutionPath>>,
}

impl<'p> PredicateGroups<'p> {
    /// Group paths by predicate. A path lands in each predicate group at most once, in input order.
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = &'p ExecutionPath>,
    {
        let mut groups: BTreeMap<OverridePredicate, Vec<&'p ExecutionPath>> = BTreeMap::new();
        for path in paths {
            for context in &path.conditions.display_context {
                let Some(predicate) = OverridePredicate::for_context(context) else {
                    continue;
                };
                let group = groups.entry(predicate).or_default();
                if !group.iter().any(|p| std::ptr::eq(*p, path)) {
                    group.push(path);
                }
            }
        }
        Self { groups }
    }

    /// Paths mapped to `predicate`, in input order.
    pub fn get(&self, predicate: OverridePredicate) -> &[&'p ExecutionPath] {
        self.groups
            .get(&predicate)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True if no path maps to any predicate.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Expand one resolved model per predicate into the final override list.
///
/// Output order is ground, held, held, offhand, offhand, offhand, skipping absent predicates.
fn emit_with_multiplicity(resolved: &BTreeMap<OverridePredicate, String>) -> Vec<OverrideEntry> {
    let mut overrides = Vec::new();
    for predicate in OverridePredicate::ALL {
        if let Some(model) = resolved.get(&predicate) {
            for _ in 0..predicate.multiplicity() {
                overrides.push(OverrideEntry::new(predicate, model.clone()));
            }
        }
    }
    overrides
}

/// Overrides for a plain (non-enchantment) model.
///
/// Each predicate takes the first path of its group, preferring paths without an enchantment.
pub fn build_regular_overrides(groups: &PredicateGroups<'_>) -> Vec<OverrideEntry> {
    let mut resolved = BTreeMap::new();
    for predicate in OverridePredicate::ALL {
        let group = groups.get(predicate);
        let chosen = group
            .iter()
            .find(|p| p.enchantment().is_none())
            .or_else(|| group.first());
        if let Some(path) = chosen {
            resolved.insert(predicate, path.target_model.clone());
        }
    }
    emit_with_multiplicity(&resolved)
}

/// Overrides for one enchantment unit.
///
/// Ground always points at the unit's 2D model. Held and offhand resolve, in order, to a path
/// with the same enchantment and level, the same enchantment at any level, a path with no
/// enchantment, or a synthesized `<texture>_3d[_offhand]` model name.
pub fn build_enchantment_overrides(
    enchantment: &EnchantmentCondition,
    gui_model: &str,
    texture_ref: &str,
    groups: &PredicateGroups<'_>,
) -> Vec<OverrideEntry> {
    let mut resolved = BTreeMap::new();
    resolved.insert(OverridePredicate::Ground, gui_model.to_string());

    for predicate in [OverridePredicate::Held, OverridePredicate::Offhand] {
        let group = groups.get(predicate);
        if group.is_empty() {
            continue;
        }
        let model = group
            .iter()
            .find(|p| p.enchantment() == Some(enchantment))
            .or_else(|| {
                group
                    .iter()
                    .find(|p| p.enchantment().is_some_and(|e| e.id == enchantment.id))
            })
            .or_else(|| group.iter().find(|p| p.enchantment().is_none()))
            .map(|p| p.target_model.clone())
            .unwrap_or_else(|| synthesized_model(texture_ref, predicate));
        resolved.insert(predicate, model);
    }
    emit_with_multiplicity(&resolved)
}

fn synthesized_model(texture_ref: &str, predicate: OverridePredicate) -> String {
    match predicate {
        OverridePredicate::Offhand => format!("{texture_ref}_3d_offhand"),
        _ => format!("{texture_ref}_3d"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcbackport_core::PathConditions;

    fn path(contexts: &[&str], enchantment: Option<(&str, u32)>, model: &str) -> ExecutionPath {
        ExecutionPath {
            conditions: PathConditions {
                display_context: contexts.iter().map(|c| c.to_string()).collect(),
                component: None,
                enchantment: enchantment.map(|(id, level)| EnchantmentCondition::new(id, level)),
            },
            target_model: model.to_string(),
            priority: 0,
            is_fallback: false,
        }
    }

    fn predicate_names(overrides: &[OverrideEntry]) -> Vec<&str> {
        overrides
            .iter()
            .filter_map(OverrideEntry::predicate_name)
            .collect()
    }

    #[test]
    fn regular_overrides_follow_one_two_three() {
        let paths = vec![
            path(&["ground"], None, "m:ground"),
            path(&["firstperson_righthand", "thirdperson_righthand"], None, "m:held"),
            path(&["firstperson_lefthand", "thirdperson_lefthand", "head"], None, "m:off"),
        ];
        let groups = PredicateGroups::from_paths(&paths);
        let overrides = build_regular_overrides(&groups);
        assert_eq!(
            predicate_names(&overrides),
            vec!["is_ground", "is_held", "is_held", "is_offhand", "is_offhand", "is_offhand"]
        );
        let models: Vec<_> = overrides.iter().map(|o| o.model.as_str()).collect();
        assert_eq!(
            models,
            vec!["m:ground", "m:held", "m:held", "m:off", "m:off", "m:off"]
        );
    }

    #[test]
    fn regular_overrides_skip_missing_groups() {
        let paths = vec![path(&["thirdperson_righthand"], None, "m:held")];
        let overrides = build_regular_overrides(&PredicateGroups::from_paths(&paths));
        assert_eq!(predicate_names(&overrides), vec!["is_held", "is_held"]);
    }

    #[test]
    fn gui_only_paths_produce_no_overrides() {
        let paths = vec![path(&["gui", "fixed"], None, "m:flat")];
        let groups = PredicateGroups::from_paths(&paths);
        assert!(groups.is_empty());
        assert!(build_regular_overrides(&groups).is_empty());
    }

    #[test]
    fn enchantment_overrides_prefer_matching_paths() {
        let paths = vec![
            path(&["firstperson_righthand"], Some(("protection", 1)), "m:prot_held"),
            path(&["firstperson_righthand"], Some(("sharpness", 3)), "m:sharp_held"),
            path(&["firstperson_lefthand"], None, "m:generic_off"),
        ];
        let groups = PredicateGroups::from_paths(&paths);
        let sharp = EnchantmentCondition::new("sharpness", 3);
        let overrides = build_enchantment_overrides(
            &sharp,
            "m:sharp_gui",
            "minecraft:item/enchanted_books/sharpness_3",
            &groups,
        );
        let models: Vec<_> = overrides.iter().map(|o| o.model.as_str()).collect();
        assert_eq!(
            models,
            vec![
                "m:sharp_gui",
                "m:sharp_held",
                "m:sharp_held",
                "m:generic_off",
                "m:generic_off",
                "m:generic_off"
            ]
        );
    }

    #[test]
    fn enchantment_overrides_synthesize_missing_models() {
        let paths = vec![
            path(&["firstperson_righthand"], Some(("protection", 1)), "m:prot_held"),
            path(&["head"], Some(("protection", 1)), "m:prot_off"),
        ];
        let groups = PredicateGroups::from_paths(&paths);
        let mending = EnchantmentCondition::new("mending", 1);
        let overrides = build_enchantment_overrides(
            &mending,
            "m:mending_gui",
            "minecraft:item/enchanted_books/mending",
            &groups,
        );
        assert_eq!(overrides[1].model, "minecraft:item/enchanted_books/mending_3d");
        assert_eq!(
            overrides[5].model,
            "minecraft:item/enchanted_books/mending_3d_offhand"
        );
    }

    #[test]
    fn ground_is_always_present_for_enchantment_units() {
        let groups = PredicateGroups::default();
        let overrides = build_enchantment_overrides(
            &EnchantmentCondition::new("sharpness", 1),
            "m:gui",
            "t",
            &groups,
        );
        assert_eq!(predicate_names(&overrides), vec!["is_ground"]);
        assert_eq!(overrides[0].model, "m:gui");
    }
}
