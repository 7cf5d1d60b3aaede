use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::VisualizerConfig;
use crate::core::package::PackageName;
use crate::error::{DepvizError, Result};
use crate::graph::builder::{build_graph, scan_records, ParseWarning};
use crate::graph::ops::find_cycles;
use crate::graph::viz::render_mermaid;
use crate::graph::DependencyGraph;
use crate::render::{GraphRenderer, MermaidCli};
use crate::source::{DependencySource, PipFreezeSource};

/// A graph built from one listing, before anything is written.
#[derive(Debug)]
pub struct BuiltGraph {
    pub root: PackageName,
    pub record_count: usize,
    pub graph: DependencyGraph,
    pub warnings: Vec<ParseWarning>,
    pub cycles: Vec<Vec<PackageName>>,
}

#[derive(Debug)]
pub struct RunSummary {
    pub root: PackageName,
    pub record_count: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub graph_file: PathBuf,
    pub image_file: Option<PathBuf>,
    pub warnings: Vec<ParseWarning>,
}

/// Listing -> graph -> Mermaid file -> image, with the listing and the
/// renderer supplied from outside.
pub struct Visualizer {
    config: VisualizerConfig,
    source: Box<dyn DependencySource>,
    renderer: Option<Box<dyn GraphRenderer>>,
}

impl Visualizer {
    /// `pip freeze` as the source and the configured visualizer as renderer.
    pub fn from_config(config: VisualizerConfig) -> Self {
        let source: Box<dyn DependencySource> =
            Box::new(PipFreezeSource::new(config.pip.clone()));
        let renderer: Box<dyn GraphRenderer> =
            Box::new(MermaidCli::new(config.visualizer_path.clone()));
        Self {
            config,
            source,
            renderer: Some(renderer),
        }
    }

    pub fn new(
        config: VisualizerConfig,
        source: Box<dyn DependencySource>,
        renderer: Option<Box<dyn GraphRenderer>>,
    ) -> Self {
        Self {
            config,
            source,
            renderer,
        }
    }

    pub fn with_source(mut self, source: Box<dyn DependencySource>) -> Self {
        self.source = source;
        self
    }

    pub fn without_renderer(mut self) -> Self {
        self.renderer = None;
        self
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn collect(&self) -> Result<BuiltGraph> {
        let root = self.config.root_package();
        let records = self.source.list()?;
        if records.is_empty() {
            warn!(source = self.source.id(), "no dependencies found");
        }

        let warnings = scan_records(&records);
        for warning in &warnings {
            warn!(%warning, "accepted malformed dependency record");
        }

        let graph = build_graph(&root, &records);
        let cycles = find_cycles(&graph);
        for cycle in &cycles {
            let members: Vec<&str> = cycle.iter().map(PackageName::as_str).collect();
            warn!(members = ?members, "dependency cycle");
        }
        debug!(
            root = %root,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );

        Ok(BuiltGraph {
            root,
            record_count: records.len(),
            graph,
            warnings,
            cycles,
        })
    }

    pub fn run(&self) -> Result<RunSummary> {
        let built = self.collect()?;
        let document = render_mermaid(&built.graph);
        let graph_file = self.config.graph_file();
        write_graph_document(&graph_file, &document)?;
        info!(path = %graph_file.display(), "graph document written");

        let image_file = match &self.renderer {
            Some(renderer) => {
                let image_file = self.config.image_file();
                renderer.render(&graph_file, &image_file)?;
                info!(path = %image_file.display(), "graph rendered");
                Some(image_file)
            }
            None => None,
        };

        Ok(RunSummary {
            root: built.root,
            record_count: built.record_count,
            node_count: built.graph.node_count(),
            edge_count: built.graph.edge_count(),
            graph_file,
            image_file,
            warnings: built.warnings,
        })
    }
}

/// Writes `document` to `path`, creating missing parent directories.
pub fn write_graph_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| DepvizError::OutputWriteFailed {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, document).map_err(|source| DepvizError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
