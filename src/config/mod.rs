pub mod resolve;

pub use resolve::{apply_env_overrides, load_config};

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::core::package::PackageName;

pub const DEFAULT_PIP: &str = "pip";
pub const GRAPH_FILE_NAME: &str = "dependency_graph.mmd";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Deserialize)]
pub struct VisualizerConfig {
    pub visualizer_path: PathBuf,
    pub package_path: PathBuf,
    pub output_path: PathBuf,
    pub repository_url: String,
    #[serde(default = "default_pip")]
    pub pip: String,
}

fn default_pip() -> String {
    DEFAULT_PIP.to_string()
}

impl VisualizerConfig {
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("visualizer_path", self.visualizer_path.as_os_str().is_empty()),
            ("package_path", self.package_path.as_os_str().is_empty()),
            ("output_path", self.output_path.as_os_str().is_empty()),
            ("pip", self.pip.trim().is_empty()),
        ];
        for (key, empty) in required {
            if empty {
                return Err(ConfigError::Invalid(format!("'{}' must not be empty", key)));
            }
        }
        Ok(())
    }

    pub fn root_package(&self) -> PackageName {
        PackageName::from_package_path(&self.package_path)
    }

    pub fn graph_file(&self) -> PathBuf {
        self.output_path.join(GRAPH_FILE_NAME)
    }

    /// `<output_path>.png`, a sibling of the output directory.
    pub fn image_file(&self) -> PathBuf {
        let mut raw = self.output_path.clone().into_os_string();
        raw.push(".png");
        PathBuf::from(raw)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::{ConfigError, VisualizerConfig};

    fn sample() -> VisualizerConfig {
        VisualizerConfig {
            visualizer_path: PathBuf::from("/usr/bin/mmdc"),
            package_path: PathBuf::from("/srv/venv/lib/site-packages/requests"),
            output_path: PathBuf::from("out/graph"),
            repository_url: "https://example.com/requests.git".to_string(),
            pip: "pip".to_string(),
        }
    }

    #[test]
    fn derives_paths_from_output_path() {
        let config = sample();
        assert_eq!(config.graph_file(), PathBuf::from("out/graph/dependency_graph.mmd"));
        assert_eq!(config.image_file(), PathBuf::from("out/graph.png"));
        assert_eq!(config.root_package().as_str(), "requests");
    }

    #[test]
    fn rejects_empty_required_paths() {
        let mut config = sample();
        config.visualizer_path = PathBuf::new();
        let err = config.validate().expect_err("empty visualizer");
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("visualizer_path")));
        assert!(sample().validate().is_ok());
    }
}
