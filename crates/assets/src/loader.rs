use std::fs;
use std::path::{Path, PathBuf};

use crate::{AssetError, ItemDefinition};

/// Item definition directory under each namespace.
pub const ITEMS_DIR: &str = "items";

/// Load an item definition from the provided JSON file path.
pub fn item_from_file(path: &Path) -> Result<ItemDefinition, AssetError> {
    let data = fs::read_to_string(path).map_err(|source| AssetError::io(path, source))?;
    serde_json::from_str(&data).map_err(|source| AssetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load an item definition from an in-memory JSON string.
pub fn item_from_str(input: &str) -> Result<ItemDefinition, AssetError> {
    Ok(serde_json::from_str(input)?)
}

/// List `assets/minecraft/items/*.json` under `pack_root`, sorted by path.
///
/// A pack without an items directory has nothing to backport and yields an empty list.
pub fn discover_item_files(pack_root: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let dir = pack_root.join("assets").join("minecraft").join(ITEMS_DIR);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(AssetError::io(dir, err)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| AssetError::io(&dir, source))?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
