//! Naming rules shared by both rule systems.
//!
//! CIT property files keep the vanilla enchantment id (`binding_curse`) while textures use the
//! display name (`curse_of_binding`). Mixing the two up produces files that load but never match.

use crate::path::EnchantmentCondition;

/// Vanilla id → texture base name for the two curses.
pub const CURSE_RENAMES: [(&str, &str); 2] = [
    ("binding_curse", "curse_of_binding"),
    ("vanishing_curse", "curse_of_vanishing"),
];

/// Enchantments with a single level; their textures carry no `_<level>` suffix.
pub const SINGLE_LEVEL_ENCHANTMENTS: [&str; 9] = [
    "aqua_affinity",
    "channeling",
    "curse_of_binding",
    "curse_of_vanishing",
    "flame",
    "infinity",
    "mending",
    "multishot",
    "silk_touch",
];

/// Enchantments whose 3D models ship animation metadata.
pub const ANIMATED_ENCHANTMENTS: [&str; 4] = ["channeling", "flame", "fire_aspect", "riptide"];

/// Marker in model names identifying 3D variants.
pub const THREE_D_MARKER: &str = "3d";

const DEFAULT_NAMESPACE: &str = "minecraft";

const ARMOR_SUFFIXES: [&str; 4] = ["_helmet", "_chestplate", "_leggings", "_boots"];
const ARMOR_ITEMS: [&str; 2] = ["elytra", "turtle_helmet"];
const TOOL_SUFFIXES: [&str; 5] = ["_sword", "_pickaxe", "_axe", "_shovel", "_hoe"];
const TOOL_ITEMS: [&str; 8] = [
    "bow",
    "crossbow",
    "trident",
    "mace",
    "fishing_rod",
    "shears",
    "flint_and_steel",
    "shield",
];

/// Broad item category deciding texture layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Books and enchanted books.
    Book,
    /// Tools and weapons.
    Tool,
    /// Wearable armor.
    Armor,
    /// Everything else.
    Other,
}

impl ItemKind {
    /// Classify an item id (namespace optional).
    pub fn classify(item_id: &str) -> Self {
        let id = strip_namespace(item_id);
        if is_book_like(id) {
            Self::Book
        } else if ARMOR_ITEMS.contains(&id) || ARMOR_SUFFIXES.iter().any(|s| id.ends_with(s)) {
            Self::Armor
        } else if TOOL_ITEMS.contains(&id) || TOOL_SUFFIXES.iter().any(|s| id.ends_with(s)) {
            Self::Tool
        } else {
            Self::Other
        }
    }
}

/// Book-like items have their per-enchantment visuals owned by CIT.
pub fn is_book_like(item_id: &str) -> bool {
    let id = strip_namespace(item_id);
    id == "enchanted_book" || id.contains("book")
}

/// Drop a leading `namespace:` prefix.
pub fn strip_namespace(id: &str) -> &str {
    id.split_once(':').map(|(_, path)| path).unwrap_or(id)
}

/// Split a resource location into namespace and path, defaulting to `minecraft`.
pub fn split_resource_location(location: &str) -> (&str, &str) {
    location
        .split_once(':')
        .unwrap_or((DEFAULT_NAMESPACE, location))
}

/// Add the `minecraft:` namespace if none is present.
pub fn namespaced(location: &str) -> String {
    let (namespace, path) = split_resource_location(location);
    format!("{namespace}:{path}")
}

/// Pack-relative JSON path for a model reference.
pub fn model_file_path(model_ref: &str) -> String {
    let (namespace, path) = split_resource_location(model_ref);
    format!("assets/{namespace}/models/{path}.json")
}

/// Pack-relative PNG path for a texture reference.
pub fn texture_file_path(texture_ref: &str) -> String {
    let (namespace, path) = split_resource_location(texture_ref);
    format!("assets/{namespace}/textures/{path}.png")
}

/// Curse-renamed base name for an enchantment id.
pub fn texture_base_name(enchantment_id: &str) -> &str {
    let id = strip_namespace(enchantment_id);
    CURSE_RENAMES
        .iter()
        .find(|(vanilla, _)| *vanilla == id)
        .map(|(_, renamed)| *renamed)
        .unwrap_or(id)
}

/// Texture-style name: base name plus `_<level>` unless single-level.
pub fn texture_name(enchantment: &EnchantmentCondition) -> String {
    let base = texture_base_name(&enchantment.id);
    if SINGLE_LEVEL_ENCHANTMENTS.contains(&base) {
        base.to_string()
    } else {
        format!("{base}_{}", enchantment.level)
    }
}

/// Texture reference for an enchanted variant of `item_id`.
pub fn enchanted_texture_ref(
    kind: ItemKind,
    item_id: &str,
    enchantment: &EnchantmentCondition,
) -> String {
    let item = strip_namespace(item_id);
    match kind {
        ItemKind::Book => format!(
            "minecraft:item/enchanted_books/{}",
            texture_name(enchantment)
        ),
        ItemKind::Tool => format!(
            "minecraft:item/enchanted_tools/{item}/{}",
            texture_name(enchantment)
        ),
        ItemKind::Armor => format!(
            "minecraft:item/enchanted_armor/{item}/{}",
            texture_base_name(&enchantment.id)
        ),
        ItemKind::Other => format!(
            "minecraft:item/enchanted_items/{item}/{}",
            texture_name(enchantment)
        ),
    }
}

/// Animated 3D models are copied verbatim rather than regenerated.
pub fn is_animated_model(model_ref: &str) -> bool {
    let name = model_ref.rsplit('/').next().unwrap_or(model_ref);
    let name = strip_namespace(name);
    name.contains(THREE_D_MARKER)
        && ANIMATED_ENCHANTMENTS
            .iter()
            .any(|enchantment| name.contains(enchantment))
}
