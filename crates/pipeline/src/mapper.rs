//! Target system mapping.
//!
//! Paths are bucketed by which downstream system can express them, then each item kind is
//! dispatched to the set of output units it needs:
//!
//! * book-like items with per-enchantment GUI paths: a bare base model, plus one CIT property
//!   file and one override model per (enchantment, level);
//! * other book-like items: one override model;
//! * everything else: one override model (and a preserved copy of the original 3D model when the
//!   generated file would overwrite it), plus per-enchantment units if any exist.

use mcbackport_assets::PackLookup;
use mcbackport_core::context::{
    ALL_CONTEXTS, FALLBACK, GROUND_CONTEXT, GUI_CONTEXTS, THREE_D_CONTEXTS,
};
use mcbackport_core::model::{GENERATED_PARENT, HANDHELD_PARENT};
use mcbackport_core::naming::{
    enchanted_texture_ref, is_animated_model, is_book_like, model_file_path, namespaced,
    split_resource_location, strip_namespace, texture_file_path, texture_name,
};
use mcbackport_core::{
    EnchantmentCondition, ExecutionPath, ItemKind, ItemModel, OutputTarget, PropertyFile,
    TargetKind,
};
use tracing::debug;

use crate::overrides::{build_enchantment_overrides, build_regular_overrides, PredicateGroups};

/// Paths bucketed by downstream rule system.
#[derive(Debug, Default)]
pub struct PathGroups<'p> {
    /// GUI paths that require an enchantment; owned by CIT.
    pub enchantment_specific: Vec<&'p ExecutionPath>,
    /// Paths rendered in hand, on the head or on the ground.
    pub three_d: Vec<&'p ExecutionPath>,
    /// Subset of `three_d` whose models carry animation metadata.
    pub animated: Vec<&'p ExecutionPath>,
    /// Everything else.
    pub base: Vec<&'p ExecutionPath>,
}

/// Classify every path into exactly one bucket.
pub fn group_paths_by_target(paths: &[ExecutionPath]) -> PathGroups<'_> {
    let mut groups = PathGroups::default();
    for path in paths {
        if path.is_gui() && path.enchantment().is_some() {
            groups.enchantment_specific.push(path);
        } else if path.covers_any(&THREE_D_CONTEXTS) || path.has_context(GROUND_CONTEXT) {
            if is_animated_model(&path.target_model) {
                groups.animated.push(path);
            }
            groups.three_d.push(path);
        } else {
            groups.base.push(path);
        }
    }
    groups
}

/// Replace the `FALLBACK` context with the contexts its siblings leave uncovered.
///
/// Siblings are the non-fallback paths with the same enchantment condition (or none).
pub fn expand_fallback_contexts(paths: &[ExecutionPath]) -> Vec<ExecutionPath> {
    paths
        .iter()
        .map(|path| {
            if !path.has_context(FALLBACK) {
                return path.clone();
            }
            let covered: Vec<&str> = paths
                .iter()
                .filter(|other| !other.has_context(FALLBACK))
                .filter(|other| other.enchantment() == path.enchantment())
                .flat_map(|other| other.conditions.display_context.iter().map(String::as_str))
                .collect();

            let mut expanded = path.clone();
            let contexts = &mut expanded.conditions.display_context;
            contexts.retain(|c| c != FALLBACK);
            for context in ALL_CONTEXTS {
                if !covered.contains(&context) && !contexts.iter().any(|c| c == context) {
                    contexts.push(context.to_string());
                }
            }
            expanded
        })
        .collect()
}

/// Split enchanted paths whose contexts mix GUI and in-world rendering.
///
/// The GUI half keeps the path's position; the in-world half is appended after all input paths
/// so that dedicated hand/ground cases are preferred over contexts shared with a GUI case.
/// Unenchanted paths are returned unchanged.
pub fn split_mixed_enchantment_paths(paths: Vec<ExecutionPath>) -> Vec<ExecutionPath> {
    let mut out = Vec::with_capacity(paths.len());
    let mut in_world = Vec::new();
    for path in paths {
        let mixed = path.enchantment().is_some()
            && path.is_gui()
            && (path.covers_any(&THREE_D_CONTEXTS) || path.has_context(GROUND_CONTEXT));
        if !mixed {
            out.push(path);
            continue;
        }
        let (gui, world): (Vec<String>, Vec<String>) = path
            .conditions
            .display_context
            .iter()
            .cloned()
            .partition(|context| GUI_CONTEXTS.contains(&context.as_str()));

        let mut world_half = path.clone();
        world_half.conditions.display_context = world;
        in_world.push(world_half);

        let mut gui_half = path;
        gui_half.conditions.display_context = gui;
        out.push(gui_half);
    }
    out.extend(in_world);
    out
}

/// Maps execution paths onto output targets.
pub struct TargetMapper<'a, L: PackLookup + ?Sized> {
    lookup: &'a L,
}

impl<'a, L: PackLookup + ?Sized> TargetMapper<'a, L> {
    /// Mapper reading model/texture data through `lookup`.
    pub fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    /// Produce the output targets for one item.
    pub fn map_paths_to_targets(
        &self,
        paths: &[ExecutionPath],
        item_id: &str,
    ) -> Vec<OutputTarget> {
        let item_id = strip_namespace(item_id);
        let base_texture = self.base_texture(item_id, paths);
        let expanded = split_mixed_enchantment_paths(expand_fallback_contexts(paths));
        let groups = group_paths_by_target(&expanded);
        let kind = ItemKind::classify(item_id);
        debug!(
            item = item_id,
            enchantment_specific = groups.enchantment_specific.len(),
            three_d = groups.three_d.len(),
            base = groups.base.len(),
            "grouped paths"
        );

        let mut targets = Vec::new();
        if is_book_like(item_id) {
            if groups.enchantment_specific.is_empty() {
                let overrides = build_regular_overrides(&PredicateGroups::from_paths(
                    groups.three_d.iter().copied(),
                ));
                let mut model = ItemModel::flat(parent_for(kind), base_texture);
                model.overrides = overrides;
                targets.push(OutputTarget::model(item_model_file(item_id), model));
            } else {
                let model = ItemModel::flat(parent_for(kind), base_texture);
                targets.push(OutputTarget::model(item_model_file(item_id), model));
                targets.extend(self.enchantment_units(item_id, kind, &groups));
            }
        } else {
            targets.extend(self.regular_item_targets(item_id, kind, base_texture, &groups));
            targets.extend(self.enchantment_units(item_id, kind, &groups));
        }

        let mut animated: Vec<&str> = Vec::new();
        for path in &groups.animated {
            if !animated.contains(&path.target_model.as_str()) {
                animated.push(&path.target_model);
            }
        }
        targets.extend(animated.into_iter().map(|model| {
            OutputTarget::copy(TargetKind::Enhanced3dModelCopy, model_file_path(model))
        }));

        debug!(item = item_id, targets = targets.len(), "mapped targets");
        targets
    }

    /// Texture of the first unenchanted model explicitly selected for a GUI context, falling back
    /// to `minecraft:item/<id>`.
    ///
    /// Runs on unexpanded paths: a fallback that only reaches `gui` or `fixed` through context
    /// expansion is usually a 3D model and never supplies the flat texture.
    fn base_texture(&self, item_id: &str, paths: &[ExecutionPath]) -> String {
        paths
            .iter()
            .find(|path| path.is_gui() && path.enchantment().is_none())
            .and_then(|path| self.lookup.model_texture(&path.target_model))
            .unwrap_or_else(|| format!("minecraft:item/{item_id}"))
    }

    fn regular_item_targets(
        &self,
        item_id: &str,
        kind: ItemKind,
        base_texture: String,
        groups: &PathGroups<'_>,
    ) -> Vec<OutputTarget> {
        let model_ref = format!("minecraft:item/{item_id}");
        let mut overrides = build_regular_overrides(&PredicateGroups::from_paths(
            groups.three_d.iter().copied(),
        ));

        let mut targets = Vec::new();
        if overrides.iter().any(|o| namespaced(&o.model) == model_ref) {
            let preserved = format!("{model_ref}_3d");
            debug!(
                item = item_id,
                preserved = %preserved,
                "override model collides with item model"
            );
            for entry in overrides.iter_mut().filter(|o| namespaced(&o.model) == model_ref) {
                entry.model = preserved.clone();
            }
            targets.push(OutputTarget::copy(
                TargetKind::Preserved3dModelCopy,
                model_file_path(&preserved),
            ));
        }

        let mut model = ItemModel::flat(parent_for(kind), base_texture);
        model.overrides = overrides;
        targets.push(OutputTarget::model(model_file_path(&model_ref), model));
        targets
    }

    fn enchantment_units(
        &self,
        item_id: &str,
        kind: ItemKind,
        groups: &PathGroups<'_>,
    ) -> Vec<OutputTarget> {
        let predicate_groups = PredicateGroups::from_paths(groups.three_d.iter().copied());

        let mut units: Vec<(&EnchantmentCondition, &ExecutionPath)> = Vec::new();
        for path in groups.enchantment_specific.iter().copied() {
            if let Some(enchantment) = path.enchantment() {
                if !units.iter().any(|(seen, _)| *seen == enchantment) {
                    units.push((enchantment, path));
                }
            }
        }

        let mut targets = Vec::new();
        for (enchantment, gui_path) in units {
            let unit = texture_name(enchantment);
            let texture_ref = enchanted_texture_ref(kind, item_id, enchantment);
            let model_ref = match kind {
                ItemKind::Book => format!("minecraft:item/enchanted_books/{unit}"),
                _ => format!("minecraft:item/enchanted_items/{item_id}/{unit}"),
            };

            let mut model = ItemModel::flat(parent_for(kind), texture_ref.clone());
            model.overrides = build_enchantment_overrides(
                enchantment,
                &gui_path.target_model,
                &texture_ref,
                &predicate_groups,
            );
            targets.push(OutputTarget::model(model_file_path(&model_ref), model));
            targets.push(OutputTarget::properties(
                format!("assets/minecraft/optifine/cit/{item_id}/{unit}.properties"),
                cit_properties(item_id, enchantment, &model_ref),
            ));

            if self.lookup.texture_exists(&texture_ref) {
                targets.push(OutputTarget::copy(
                    TargetKind::PlainTextureCopy,
                    texture_file_path(&texture_ref),
                ));
            }
        }
        targets
    }
}

fn cit_properties(
    item_id: &str,
    enchantment: &EnchantmentCondition,
    model_ref: &str,
) -> PropertyFile {
    let (_, model_path) = split_resource_location(model_ref);
    PropertyFile::new()
        .with("type", "item")
        .with("items", item_id)
        .with("model", model_path)
        .with("enchantmentIDs", format!("minecraft:{}", enchantment.id))
        .with("enchantmentLevels", enchantment.level.to_string())
}

fn item_model_file(item_id: &str) -> String {
    model_file_path(&format!("minecraft:item/{item_id}"))
}

fn parent_for(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Tool => HANDHELD_PARENT,
        _ => GENERATED_PARENT,
    }
}
