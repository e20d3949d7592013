//! Read-only access to the source pack, used by the mapper to recover textures.

use std::fs;
use std::path::PathBuf;

use mcbackport_core::naming::{model_file_path, texture_file_path};
use serde_json::Value;
use tracing::debug;

/// Read-only view of a resource pack.
pub trait PackLookup {
    /// Parsed model JSON for a model reference, if present and readable.
    fn read_model(&self, model_ref: &str) -> Option<Value>;

    /// Whether the texture PNG for `texture_ref` exists.
    fn texture_exists(&self, texture_ref: &str) -> bool;

    /// Primary texture of the model behind `model_ref`.
    fn model_texture(&self, model_ref: &str) -> Option<String> {
        self.read_model(model_ref)
            .and_then(|model| primary_texture(&model))
    }
}

/// `textures.layer0`, else the first texture in declaration order.
pub fn primary_texture(model: &Value) -> Option<String> {
    let textures = model.get("textures")?.as_object()?;
    if let Some(layer0) = textures.get("layer0").and_then(Value::as_str) {
        return Some(layer0.to_string());
    }
    textures
        .values()
        .find_map(Value::as_str)
        .map(str::to_string)
}

/// Pack lookup backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FsPack {
    root: PathBuf,
}

impl FsPack {
    /// Wrap an unpacked resource pack directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PackLookup for FsPack {
    fn read_model(&self, model_ref: &str) -> Option<Value> {
        let path = self.root.join(model_file_path(model_ref));
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!("model {model_ref} unreadable at {}: {err}", path.display());
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!("model {model_ref} is not valid JSON: {err}");
                None
            }
        }
    }

    fn texture_exists(&self, texture_ref: &str) -> bool {
        self.root.join(texture_file_path(texture_ref)).is_file()
    }
}
