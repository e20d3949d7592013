//! Display contexts and the override predicates they map to.

use serde::Serialize;

/// Select property that branches on the render context.
pub const DISPLAY_CONTEXT_PROPERTY: &str = "display_context";
/// Select property that branches on an item component.
pub const COMPONENT_PROPERTY: &str = "component";

/// Sentinel `when` value recorded for a selector's fallback branch.
pub const FALLBACK: &str = "FALLBACK";
/// Sentinel recorded for a condition node's `on_true` arm.
pub const CONDITION_TRUE: &str = "CONDITION_TRUE";
/// Sentinel recorded for a condition node's `on_false` arm.
pub const CONDITION_FALSE: &str = "CONDITION_FALSE";

/// Inventory slot rendering.
pub const GUI: &str = "gui";
/// Item frame rendering.
pub const FIXED: &str = "fixed";
/// Dropped item entity.
pub const GROUND_CONTEXT: &str = "ground";
/// Worn on the head.
pub const HEAD: &str = "head";
/// Main hand, first person.
pub const FIRSTPERSON_RIGHTHAND: &str = "firstperson_righthand";
/// Main hand, third person.
pub const THIRDPERSON_RIGHTHAND: &str = "thirdperson_righthand";
/// Off hand, first person.
pub const FIRSTPERSON_LEFTHAND: &str = "firstperson_lefthand";
/// Off hand, third person.
pub const THIRDPERSON_LEFTHAND: &str = "thirdperson_lefthand";

/// Contexts rendered from the flat 2D texture.
pub const GUI_CONTEXTS: [&str; 2] = [GUI, FIXED];

/// Contexts that need a 3D model.
pub const THREE_D_CONTEXTS: [&str; 5] = [
    FIRSTPERSON_RIGHTHAND,
    THIRDPERSON_RIGHTHAND,
    FIRSTPERSON_LEFTHAND,
    THIRDPERSON_LEFTHAND,
    HEAD,
];

/// Every context a fallback branch can stand for, in a stable order.
pub const ALL_CONTEXTS: [&str; 8] = [
    GUI,
    FIXED,
    GROUND_CONTEXT,
    HEAD,
    FIRSTPERSON_RIGHTHAND,
    THIRDPERSON_RIGHTHAND,
    FIRSTPERSON_LEFTHAND,
    THIRDPERSON_LEFTHAND,
];

/// How many times the ground override is emitted.
pub const GROUND_MULTIPLICITY: usize = 1;
/// How many times the held override is emitted.
///
/// The target renderer lets an offhand item satisfy both `is_held` and `is_offhand`, and the
/// last matching override wins. These counts were measured against a known-good pack.
pub const HELD_MULTIPLICITY: usize = 2;
/// How many times the offhand override is emitted.
pub const OFFHAND_MULTIPLICITY: usize = 3;

/// Predicates understood by the display-context mod.
///
/// Ordering follows emission order in an override list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum OverridePredicate {
    /// Item lying on the ground.
    Ground,
    /// Item held in the main hand.
    Held,
    /// Item held in the off hand or worn on the head.
    Offhand,
}

impl OverridePredicate {
    /// All predicates in emission order.
    pub const ALL: [Self; 3] = [Self::Ground, Self::Held, Self::Offhand];

    /// Predicate name as written into model JSON.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ground => "is_ground",
            Self::Held => "is_held",
            Self::Offhand => "is_offhand",
        }
    }

    /// Number of identical override entries emitted for this predicate.
    pub fn multiplicity(self) -> usize {
        match self {
            Self::Ground => GROUND_MULTIPLICITY,
            Self::Held => HELD_MULTIPLICITY,
            Self::Offhand => OFFHAND_MULTIPLICITY,
        }
    }

    /// Map a display context onto its predicate. GUI contexts have none.
    pub fn for_context(context: &str) -> Option<Self> {
        match context {
            GROUND_CONTEXT => Some(Self::Ground),
            FIRSTPERSON_RIGHTHAND | THIRDPERSON_RIGHTHAND => Some(Self::Held),
            FIRSTPERSON_LEFTHAND | THIRDPERSON_LEFTHAND | HEAD => Some(Self::Offhand),
            _ => None,
        }
    }
}

/// Strip the `minecraft:` namespace from a property name, if present.
pub fn bare_property(property: &str) -> &str {
    property.strip_prefix("minecraft:").unwrap_or(property)
}
