use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum DepvizError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("dependency source '{source_id}' unavailable: {reason}")]
    DependencySourceUnavailable { source_id: String, reason: String },
    #[error("renderer {program} failed ({status}): {stderr}")]
    RenderFailed {
        program: PathBuf,
        status: String,
        stderr: String,
    },
    #[error("failed to write {path}: {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DepvizError>;
