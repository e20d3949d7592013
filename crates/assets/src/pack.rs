//! Whole-pack chores run once before any item is converted.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::loader::ITEMS_DIR;
use crate::AssetError;

/// Pack metadata file at the pack root.
pub const PACK_METADATA_FILE: &str = "pack.mcmeta";

/// Copy everything the backport does not regenerate from `source` into `output`.
///
/// Root-level files (`pack.mcmeta`, `pack.png`, ...) and every namespace under `assets/` are
/// copied, except each namespace's `items/` directory. Returns the number of files copied.
pub fn copy_base_assets(source: &Path, output: &Path) -> Result<usize, AssetError> {
    fs::create_dir_all(output).map_err(|err| AssetError::io(output, err))?;
    let mut copied = 0;

    let entries = fs::read_dir(source).map_err(|err| AssetError::io(source, err))?;
    for entry in entries {
        let entry = entry.map_err(|err| AssetError::io(source, err))?;
        let path = entry.path();
        if path.is_file() {
            copy_file(&path, &output.join(entry.file_name()))?;
            copied += 1;
        }
    }

    let assets = source.join("assets");
    if !assets.is_dir() {
        warn!("{} has no assets directory", source.display());
        return Ok(copied);
    }

    // depth 1 = namespace, depth 2 = asset kind (models, textures, items, ...)
    let walker = WalkDir::new(&assets)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            !(entry.depth() == 2 && entry.file_type().is_dir() && entry.file_name() == ITEMS_DIR)
        });

    for entry in walker {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(&assets).to_path_buf();
            AssetError::io(path, err.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(source)
            .unwrap_or_else(|_| entry.path());
        copy_file(entry.path(), &output.join(rel))?;
        copied += 1;
    }

    debug!("copied {copied} base asset files");
    Ok(copied)
}

fn copy_file(from: &Path, to: &Path) -> Result<(), AssetError> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(|err| AssetError::io(parent, err))?;
    }
    fs::copy(from, to).map_err(|err| AssetError::io(from, err))?;
    Ok(())
}

/// Append `attribution` to `pack.description` in the metadata at `path`.
///
/// Returns `Ok(false)` when the file is absent or already attributed.
pub fn rewrite_pack_metadata(path: &Path, attribution: &str) -> Result<bool, AssetError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("no {} to attribute", path.display());
            return Ok(false);
        }
        Err(err) => return Err(AssetError::io(path, err)),
    };
    let mut meta: Value = serde_json::from_str(&contents).map_err(|source| AssetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if !append_attribution(&mut meta, attribution) {
        return Ok(false);
    }

    let json = serde_json::to_string_pretty(&meta)?;
    fs::write(path, json).map_err(|err| AssetError::io(path, err))?;
    Ok(true)
}

/// Mutate `meta.pack.description` in place. Idempotent; returns whether anything changed.
///
/// Plain-string descriptions get a new line appended; text-component descriptions (object or
/// array) get a string component pushed.
pub fn append_attribution(meta: &mut Value, attribution: &str) -> bool {
    let Some(pack) = meta.get_mut("pack").and_then(Value::as_object_mut) else {
        return false;
    };
    let suffix = format!("\n{attribution}");

    let description = pack
        .entry("description")
        .or_insert_with(|| Value::String(String::new()));

    if description.is_object() {
        if component_mentions(description, attribution) {
            return false;
        }
        let original = description.take();
        *description = Value::Array(vec![original, Value::String(suffix)]);
        return true;
    }

    match description {
        Value::String(text) => {
            if text.contains(attribution) {
                return false;
            }
            if text.is_empty() {
                text.push_str(attribution);
            } else {
                text.push_str(&suffix);
            }
        }
        Value::Array(components) => {
            if components.iter().any(|c| component_mentions(c, attribution)) {
                return false;
            }
            components.push(Value::String(suffix));
        }
        other => {
            *other = Value::String(attribution.to_string());
        }
    }
    true
}

fn component_mentions(component: &Value, needle: &str) -> bool {
    match component {
        Value::String(text) => text.contains(needle),
        Value::Object(map) => {
            map.get("text")
                .and_then(Value::as_str)
                .is_some_and(|text| text.contains(needle))
                || map
                    .get("extra")
                    .and_then(Value::as_array)
                    .is_some_and(|extra| extra.iter().any(|c| component_mentions(c, needle)))
        }
        Value::Array(parts) => parts.iter().any(|c| component_mentions(c, needle)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    const ATTRIBUTION: &str = "Backported by mcbackport";

    fn unique_temp_root(tag: &str) -> PathBuf {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("mcbackport_pack_{tag}_{timestamp}"))
    }

    #[test]
    fn string_description_is_appended_once() {
        let mut meta = json!({ "pack": { "pack_format": 46, "description": "Cool books" } });
        assert!(append_attribution(&mut meta, ATTRIBUTION));
        assert_eq!(
            meta["pack"]["description"],
            format!("Cool books\n{ATTRIBUTION}")
        );
        assert!(!append_attribution(&mut meta, ATTRIBUTION));
        assert_eq!(
            meta["pack"]["description"],
            format!("Cool books\n{ATTRIBUTION}")
        );
    }

    #[test]
    fn component_array_gets_pushed() {
        let mut meta = json!({ "pack": { "description": [{ "text": "Books", "color": "gold" }] } });
        assert!(append_attribution(&mut meta, ATTRIBUTION));
        let parts = meta["pack"]["description"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1], format!("\n{ATTRIBUTION}"));
        assert!(!append_attribution(&mut meta, ATTRIBUTION));
    }

    #[test]
    fn single_component_becomes_array() {
        let mut meta = json!({ "pack": { "description": { "text": "Books" } } });
        assert!(append_attribution(&mut meta, ATTRIBUTION));
        assert_eq!(meta["pack"]["description"][0]["text"], "Books");
        assert!(!append_attribution(&mut meta, ATTRIBUTION));
    }

    #[test]
    fn missing_pack_section_is_untouched() {
        let mut meta = json!({ "filter": {} });
        assert!(!append_attribution(&mut meta, ATTRIBUTION));
    }

    #[test]
    fn base_asset_copy_skips_items() {
        let source = unique_temp_root("src");
        let output = unique_temp_root("out");
        fs::create_dir_all(source.join("assets/minecraft/items")).unwrap();
        fs::create_dir_all(source.join("assets/minecraft/models/item")).unwrap();
        fs::create_dir_all(source.join("assets/custom/items")).unwrap();
        fs::write(source.join(PACK_METADATA_FILE), r#"{"pack":{"description":"x"}}"#).unwrap();
        fs::write(source.join("assets/minecraft/items/book.json"), "{}").unwrap();
        fs::write(source.join("assets/custom/items/rune.json"), "{}").unwrap();
        fs::write(source.join("assets/minecraft/models/item/book.json"), "{}").unwrap();

        let copied = copy_base_assets(&source, &output).expect("copy");
        assert_eq!(copied, 2);
        assert!(output.join(PACK_METADATA_FILE).is_file());
        assert!(output.join("assets/minecraft/models/item/book.json").is_file());
        assert!(!output.join("assets/minecraft/items").exists());
        assert!(!output.join("assets/custom/items").exists());

        assert!(rewrite_pack_metadata(&output.join(PACK_METADATA_FILE), ATTRIBUTION).unwrap());
        assert!(!rewrite_pack_metadata(&output.join(PACK_METADATA_FILE), ATTRIBUTION).unwrap());

        fs::remove_dir_all(&source).ok();
        fs::remove_dir_all(&output).ok();
    }
}
