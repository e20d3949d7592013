#![warn(missing_docs)]
//! Shared vocabulary for the item-model backport pipeline.
//!
//! Everything here is plain data or fixed lookup tables: execution paths produced by the
//! extractor, output targets produced by the mapper, and the naming rules both downstream
//! rule systems (override models and CIT property files) expect.

pub mod context;
pub mod model;
pub mod naming;
pub mod path;
pub mod target;

pub use context::{
    OverridePredicate, ALL_CONTEXTS, GROUND_CONTEXT, GROUND_MULTIPLICITY, GUI_CONTEXTS,
    HELD_MULTIPLICITY, OFFHAND_MULTIPLICITY, THREE_D_CONTEXTS,
};
pub use model::{ItemModel, ModelTextures, OverrideEntry, PropertyFile};
pub use naming::ItemKind;
pub use path::{EnchantmentCondition, ExecutionPath, PathConditions};
pub use target::{OutputTarget, TargetContent, TargetKind};
