use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use mcbackport_core::naming::{model_file_path, texture_file_path};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unpacked resource pack in a unique temp directory, removed on drop.
#[derive(Debug)]
pub struct TempPack {
    root: PathBuf,
}

impl TempPack {
    /// Create an empty pack directory; `tag` only makes the name readable.
    pub fn new(tag: &str) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock after epoch")
            .as_nanos();
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        let root = std::env::temp_dir().join(format!(
            "mcbackport_{tag}_{}_{timestamp}_{seq}",
            std::process::id()
        ));
        fs::create_dir_all(&root).expect("temp pack root");
        Self { root }
    }

    /// Pack root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `contents` at a pack-relative path, creating parents.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, contents).expect("write pack file");
        path
    }

    /// Write `assets/minecraft/items/<id>.json`.
    pub fn write_item(&self, item_id: &str, json: &str) -> PathBuf {
        self.write(&format!("assets/minecraft/items/{item_id}.json"), json)
    }

    /// Write the model file behind `model_ref`.
    pub fn write_model(&self, model_ref: &str, json: &str) -> PathBuf {
        self.write(&model_file_path(model_ref), json)
    }

    /// Write a flat model with a single `layer0` texture.
    pub fn write_flat_model(&self, model_ref: &str, layer0: &str) -> PathBuf {
        let json = serde_json::json!({
            "parent": "minecraft:item/generated",
            "textures": { "layer0": layer0 }
        });
        self.write_model(model_ref, &json.to_string())
    }

    /// Write placeholder PNG bytes for `texture_ref`.
    pub fn write_texture(&self, texture_ref: &str) -> PathBuf {
        self.write(&texture_file_path(texture_ref), "\u{89}PNG")
    }

    /// Write `pack.mcmeta` with a string description.
    pub fn write_metadata(&self, description: &str) -> PathBuf {
        let json = serde_json::json!({
            "pack": { "pack_format": 46, "description": description }
        });
        self.write("pack.mcmeta", &json.to_string())
    }

    /// Read a pack-relative file as text.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join(rel))
            .unwrap_or_else(|err| panic!("read {rel}: {err}"))
    }

    /// Whether a pack-relative file exists.
    pub fn exists(&self, rel: &str) -> bool {
        self.root.join(rel).exists()
    }
}

impl Drop for TempPack {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}
