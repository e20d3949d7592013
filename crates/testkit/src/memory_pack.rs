use std::collections::{HashMap, HashSet};

use mcbackport_assets::PackLookup;
use mcbackport_core::naming::namespaced;
use serde_json::Value;

/// In-memory [`PackLookup`] for mapper tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryPack {
    models: HashMap<String, Value>,
    textures: HashSet<String>,
}

impl MemoryPack {
    /// Empty pack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under `model_ref`.
    pub fn with_model(mut self, model_ref: &str, model: Value) -> Self {
        self.models.insert(namespaced(model_ref), model);
        self
    }

    /// Register a model whose only texture is `layer0`.
    pub fn with_flat_model(self, model_ref: &str, layer0: &str) -> Self {
        self.with_model(
            model_ref,
            serde_json::json!({
                "parent": "minecraft:item/generated",
                "textures": { "layer0": layer0 }
            }),
        )
    }

    /// Mark a texture as present.
    pub fn with_texture(mut self, texture_ref: &str) -> Self {
        self.textures.insert(namespaced(texture_ref));
        self
    }
}

impl PackLookup for MemoryPack {
    fn read_model(&self, model_ref: &str) -> Option<Value> {
        self.models.get(&namespaced(model_ref)).cloned()
    }

    fn texture_exists(&self, texture_ref: &str) -> bool {
        self.textures.contains(&namespaced(texture_ref))
    }
}
