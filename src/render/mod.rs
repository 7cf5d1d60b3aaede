pub mod mermaid_cli;

pub use mermaid_cli::MermaidCli;

use std::path::Path;

use crate::error::Result;

/// Turns a written graph document into an image.
pub trait GraphRenderer {
    fn render(&self, graph_file: &Path, image_file: &Path) -> Result<()>;
}
