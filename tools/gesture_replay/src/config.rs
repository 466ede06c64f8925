use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use touch_gestures::GestureConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    gestures: GestureConfig,
}

pub fn load_config(path: Option<&Path>) -> Result<GestureConfig> {
    let Some(path) = path else {
        return Ok(GestureConfig::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let config = parse_config(&text).with_context(|| format!("invalid config {}", path.display()))?;
    log::debug!("loaded gesture config from {}: {config:?}", path.display());
    Ok(config)
}

pub fn parse_config(text: &str) -> Result<GestureConfig> {
    let file: ConfigFile = toml::from_str(text)?;
    Ok(file.gestures)
}
