use std::env;
use std::path::{Path, PathBuf};

use crate::config::{ConfigError, VisualizerConfig};

pub const ENV_VISUALIZER: &str = "DEPVIZ_VISUALIZER";
pub const ENV_OUTPUT: &str = "DEPVIZ_OUTPUT";
pub const ENV_PIP: &str = "DEPVIZ_PIP";

/// Reads, overrides from the environment, and validates a config file.
/// `.toml` files are parsed as TOML, everything else as JSON.
pub fn load_config(path: &Path) -> Result<VisualizerConfig, ConfigError> {
    let mut config = parse_config_file(path)?;
    apply_env_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

pub fn parse_config_file(path: &Path) -> Result<VisualizerConfig, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

pub fn apply_env_overrides(config: &mut VisualizerConfig) {
    apply_overrides_from(config, |key| env::var(key).ok());
}

fn apply_overrides_from(config: &mut VisualizerConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(path) = lookup(ENV_VISUALIZER) {
        config.visualizer_path = PathBuf::from(path);
    }
    if let Some(path) = lookup(ENV_OUTPUT) {
        config.output_path = PathBuf::from(path);
    }
    if let Some(pip) = lookup(ENV_PIP) {
        config.pip = pip;
    }
}
