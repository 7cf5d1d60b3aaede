use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{DepvizError, Result};
use crate::render::GraphRenderer;

/// Mermaid command line renderer, invoked as `<program> -i <graph> -o <image>`.
#[derive(Debug, Clone)]
pub struct MermaidCli {
    program: PathBuf,
}

impl MermaidCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl GraphRenderer for MermaidCli {
    fn render(&self, graph_file: &Path, image_file: &Path) -> Result<()> {
        debug!(
            program = %self.program.display(),
            input = %graph_file.display(),
            output = %image_file.display(),
            "invoking renderer"
        );
        let output = Command::new(&self.program)
            .arg("-i")
            .arg(graph_file)
            .arg("-o")
            .arg(image_file)
            .output()
            .map_err(|err| DepvizError::RenderFailed {
                program: self.program.clone(),
                status: "not started".to_string(),
                stderr: err.to_string(),
            })?;
        if output.status.success() {
            return Ok(());
        }
        Err(DepvizError::RenderFailed {
            program: self.program.clone(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
