//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;
pub mod output;

use std::path::Path;

use numex_core::NumexConfig;

/// Load the config from `--config`, else the default file, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<NumexConfig> {
    if let Some(path) = config_path {
        return Ok(NumexConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        Ok(NumexConfig::from_file(&default_path)?)
    } else {
        Ok(NumexConfig::default())
    }
}
