//! Generator settings loaded from TOML.
//!
//! ```toml
//! blank_scale = "double_log2"   # or "log2" (default)
//! rng_seed = 42                 # optional; omit for a fresh set every run
//! output_dir = "problem-sets"   # where exported sets are written
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::problem_engine::BlankScale;

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub blank_scale: BlankScale,
    pub rng_seed: Option<u64>,
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            blank_scale: BlankScale::default(),
            rng_seed: None,
            output_dir: PathBuf::from("."),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cfg = Self::from_toml_str(&std::fs::read_to_string(path)?)?;
        info!(path = %path.display(), blank_scale = ?cfg.blank_scale, "loaded generator config");
        Ok(cfg)
    }
}
