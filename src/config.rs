use serde::Deserialize;
use std::{fs, path::Path};
use tracing::warn;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "backport.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackportConfig {
    /// Delete the output directory before a run.
    pub clear_output: bool,
    /// Appended to the pack description.
    pub attribution: String,
    /// Prefix for derived output directory names.
    pub output_prefix: String,
    /// Maximum length of the sanitized pack name (prefix excluded).
    pub max_output_name_len: usize,
}

impl Default for BackportConfig {
    fn default() -> Self {
        Self {
            clear_output: true,
            attribution: "Backported by mcbackport".to_string(),
            output_prefix: "backport_".to_string(),
            max_output_name_len: 32,
        }
    }
}

impl BackportConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<BackportConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    BackportConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                BackportConfig::default()
            }
        }
    }
}
