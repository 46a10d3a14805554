//! Arena configuration loading
//!
//! Any field left out of the TOML file keeps its built-in default.

use anyhow::{Context, Result};
use game_core::Config;
use std::path::Path;

/// Load the arena config from `path`, or the defaults when no path is given
pub fn load(path: Option<&Path>, fps_override: Option<u32>) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            parse(&text).with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(fps) = fps_override {
        config.target_fps = fps;
    }

    config.validate().context("Invalid arena configuration")?;
    Ok(config)
}

fn parse(text: &str) -> Result<Config> {
    Ok(toml::from_str(text)?)
}
