//! Canned item definitions shaped like real packs.

/// Enchanted book: stored-enchantments selector with a sharpness 3 case wrapping a
/// display-context selector, plus a plain fallback.
///
/// GUI/fixed/head → `A`, ground → `A`, main hand → `B`, off hand → `C`.
pub const ENCHANTED_BOOK_SHARPNESS: &str = r#"{
  "model": {
    "type": "minecraft:select",
    "property": "minecraft:component",
    "component": "minecraft:stored_enchantments",
    "cases": [
      {
        "when": { "minecraft:sharpness": 3 },
        "model": {
          "type": "minecraft:select",
          "property": "minecraft:display_context",
          "cases": [
            { "when": ["gui", "fixed", "head"], "model": { "type": "minecraft:model", "model": "minecraft:item/enchanted_books/sharpness_3" } },
            { "when": "ground", "model": { "type": "minecraft:model", "model": "minecraft:item/enchanted_books/sharpness_3" } },
            { "when": ["firstperson_righthand", "thirdperson_righthand"], "model": { "type": "minecraft:model", "model": "minecraft:item/books_3d/sharpness_3_3d" } },
            { "when": ["firstperson_lefthand", "thirdperson_lefthand"], "model": { "type": "minecraft:model", "model": "minecraft:item/books_3d/sharpness_3_3d_offhand" } }
          ]
        }
      }
    ],
    "fallback": { "type": "minecraft:model", "model": "minecraft:item/enchanted_book" }
  }
}"#;

/// GUI model `A` of [`ENCHANTED_BOOK_SHARPNESS`].
pub const SHARPNESS_GUI_MODEL: &str = "minecraft:item/enchanted_books/sharpness_3";
/// Held model `B` of [`ENCHANTED_BOOK_SHARPNESS`].
pub const SHARPNESS_HELD_MODEL: &str = "minecraft:item/books_3d/sharpness_3_3d";
/// Offhand model `C` of [`ENCHANTED_BOOK_SHARPNESS`].
pub const SHARPNESS_OFFHAND_MODEL: &str = "minecraft:item/books_3d/sharpness_3_3d_offhand";

/// Enchanted book with a curse, a single-level enchantment with an animated 3D model, and a
/// malformed `when` that yields no enchantment data.
pub const ENCHANTED_BOOK_MIXED: &str = r#"{
  "model": {
    "type": "minecraft:select",
    "property": "minecraft:component",
    "component": "minecraft:stored_enchantments",
    "cases": [
      {
        "when": [{ "minecraft:binding_curse": 1 }],
        "model": {
          "type": "minecraft:select",
          "property": "minecraft:display_context",
          "cases": [
            { "when": ["gui", "fixed"], "model": "minecraft:item/enchanted_books/curse_of_binding" }
          ],
          "fallback": "minecraft:item/books_3d/curse_of_binding_3d"
        }
      },
      {
        "when": { "minecraft:channeling": 1 },
        "model": {
          "type": "minecraft:select",
          "property": "minecraft:display_context",
          "cases": [
            { "when": ["gui", "fixed"], "model": "minecraft:item/enchanted_books/channeling" },
            { "when": ["firstperson_righthand", "thirdperson_righthand", "firstperson_lefthand", "thirdperson_lefthand"], "model": "minecraft:item/books_3d/channeling_3d" }
          ]
        }
      },
      {
        "when": "minecraft:weird",
        "model": "minecraft:item/enchanted_book"
      }
    ],
    "fallback": "minecraft:item/enchanted_book"
  }
}"#;

/// Plain book with only a display-context selector.
pub const PLAIN_BOOK: &str = r#"{
  "model": {
    "type": "minecraft:select",
    "property": "minecraft:display_context",
    "cases": [
      { "when": ["gui", "fixed"], "model": "minecraft:item/book" },
      { "when": "ground", "model": "minecraft:item/book_ground" },
      { "when": ["firstperson_righthand", "thirdperson_righthand"], "model": "minecraft:item/book_3d" },
      { "when": ["firstperson_lefthand", "thirdperson_lefthand", "head"], "model": "minecraft:item/book_3d_offhand" }
    ]
  }
}"#;

/// Trident whose fallback 3D model has the same name as the generated item model.
pub const TRIDENT_COLLIDING: &str = r#"{
  "model": {
    "type": "minecraft:select",
    "property": "minecraft:display_context",
    "cases": [
      { "when": ["gui", "fixed", "ground"], "model": "minecraft:item/trident_2d" }
    ],
    "fallback": "minecraft:item/trident"
  }
}"#;

/// Spyglass with a using-item condition in the main hand.
pub const SPYGLASS_CONDITION: &str = r#"{
  "model": {
    "type": "minecraft:select",
    "property": "minecraft:display_context",
    "cases": [
      { "when": ["gui", "fixed"], "model": "minecraft:item/spyglass" },
      {
        "when": ["firstperson_righthand", "thirdperson_righthand"],
        "model": {
          "type": "minecraft:condition",
          "property": "minecraft:using_item",
          "on_true": "minecraft:item/spyglass_scoping",
          "on_false": "minecraft:item/spyglass_in_hand"
        }
      }
    ],
    "fallback": "minecraft:item/spyglass_in_hand"
  }
}"#;

/// Item without conditional structure.
pub const PASSTHROUGH_STICK: &str = r#"{
  "model": { "type": "minecraft:model", "model": "minecraft:item/stick" }
}"#;

/// Item using a node type the backport does not understand.
pub const UNKNOWN_NODE: &str = r#"{
  "model": {
    "type": "minecraft:select",
    "property": "minecraft:display_context",
    "cases": [
      { "when": "gui", "model": { "type": "minecraft:range_dispatch", "property": "minecraft:damage", "entries": [] } }
    ]
  }
}"#;

/// Enchanted book whose sharpness case selects only `gui`; every other context falls back to
/// the 3D model. The root fallback is a 3D model too.
pub const ENCHANTED_BOOK_GUI_CASE: &str = r#"{
  "model": {
    "type": "minecraft:select",
    "property": "minecraft:component",
    "component": "minecraft:stored_enchantments",
    "cases": [
      {
        "when": { "minecraft:sharpness": 3 },
        "model": {
          "type": "minecraft:select",
          "property": "minecraft:display_context",
          "cases": [
            { "when": "gui", "model": "minecraft:item/enchanted_books/sharpness_3" }
          ],
          "fallback": "minecraft:item/books_3d/sharpness_3_3d"
        }
      }
    ],
    "fallback": "minecraft:item/books_3d/enchanted_book_3d"
  }
}"#;

/// Enchanted book with a display-context root and stored-enchantment selectors below it.
pub const ENCHANTED_BOOK_CONTEXT_ROOT: &str = r#"{
  "model": {
    "type": "minecraft:select",
    "property": "minecraft:display_context",
    "cases": [
      {
        "when": "gui",
        "model": {
          "type": "minecraft:select",
          "property": "minecraft:component",
          "component": "minecraft:stored_enchantments",
          "cases": [
            { "when": { "minecraft:sharpness": 3 }, "model": "minecraft:item/enchanted_books/sharpness_3" }
          ],
          "fallback": "minecraft:item/enchanted_book"
        }
      }
    ],
    "fallback": {
      "type": "minecraft:select",
      "property": "minecraft:component",
      "component": "minecraft:stored_enchantments",
      "cases": [
        { "when": { "minecraft:sharpness": 3 }, "model": "minecraft:item/books_3d/sharpness_3_3d" }
      ],
      "fallback": "minecraft:item/books_3d/enchanted_book_3d"
    }
  }
}"#;

/// Diamond sword with a sharpness 5 GUI texture, an enchanted in-hand model and a plain
/// in-hand fallback.
pub const DIAMOND_SWORD_SHARPNESS: &str = r#"{
  "model": {
    "type": "minecraft:select",
    "property": "minecraft:component",
    "component": "minecraft:enchantments",
    "cases": [
      {
        "when": { "minecraft:sharpness": 5 },
        "model": {
          "type": "minecraft:select",
          "property": "minecraft:display_context",
          "cases": [
            { "when": ["gui", "fixed"], "model": "minecraft:item/enchanted_tools/diamond_sword/sharpness_5" }
          ],
          "fallback": "minecraft:item/diamond_sword_sharpness_in_hand"
        }
      }
    ],
    "fallback": {
      "type": "minecraft:select",
      "property": "minecraft:display_context",
      "cases": [
        { "when": ["gui", "fixed"], "model": "minecraft:item/diamond_sword" }
      ],
      "fallback": "minecraft:item/diamond_sword_in_hand"
    }
  }
}"#;

/// Chestplate with a protection 4 GUI texture and nothing else.
pub const DIAMOND_CHESTPLATE_PROTECTION: &str = r#"{
  "model": {
    "type": "minecraft:select",
    "property": "minecraft:component",
    "component": "minecraft:enchantments",
    "cases": [
      {
        "when": { "minecraft:protection": 4 },
        "model": {
          "type": "minecraft:select",
          "property": "minecraft:display_context",
          "cases": [
            { "when": ["gui", "fixed"], "model": "minecraft:item/enchanted_armor/diamond_chestplate/protection" }
          ]
        }
      }
    ],
    "fallback": "minecraft:item/diamond_chestplate_2d"
  }
}"#;
