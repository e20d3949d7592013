#![warn(missing_docs)]
//! Resource-pack input side: item definition schema, read-only pack lookups, and the
//! whole-pack chores (base asset copy, `pack.mcmeta` attribution).

mod loader;
mod lookup;
mod pack;
mod schema;

pub use loader::{discover_item_files, item_from_file, item_from_str, ITEMS_DIR};
pub use lookup::{primary_texture, FsPack, PackLookup};
pub use pack::{append_attribution, copy_base_assets, rewrite_pack_metadata, PACK_METADATA_FILE};
pub use schema::{ConditionNode, ItemDefinition, ModelLeaf, ModelNode, SelectCase, SelectNode};

use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while reading or writing pack files.
#[derive(Debug, Error)]
pub enum AssetError {
    /// IO failure on a specific path.
    #[error("failed to access {path}: {source}")]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// JSON that could not be parsed into the expected shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// In-memory JSON that could not be parsed.
    #[error("failed to parse item definition: {0}")]
    Json(#[from] serde_json::Error),
}

impl AssetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
