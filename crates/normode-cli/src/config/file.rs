use crate::error::{CliError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(rename = "animation-steps")]
    pub animation_steps: Option<usize>,
    #[serde(rename = "displacement-scale")]
    pub displacement_scale: Option<f64>,
    #[serde(rename = "show-connections")]
    pub show_connections: Option<bool>,
    #[serde(rename = "bonds-per-type", default)]
    pub bonds_per_type: HashMap<String, usize>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
