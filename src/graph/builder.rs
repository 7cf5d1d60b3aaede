use std::fmt;

use crate::core::package::{DependencyRecord, PackageName};
use crate::graph::DependencyGraph;

/// Supplies the dependency records of a package discovered during expansion.
pub trait TransitiveSource {
    fn dependencies_of(&self, name: &PackageName) -> Vec<DependencyRecord>;
}

/// Freeze listings are flat, so nothing past the root has known dependencies.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTransitive;

impl TransitiveSource for NoTransitive {
    fn dependencies_of(&self, _name: &PackageName) -> Vec<DependencyRecord> {
        Vec::new()
    }
}

pub fn build_graph(root: &PackageName, records: &[DependencyRecord]) -> DependencyGraph {
    build_graph_with(root, records, &NoTransitive)
}

/// Depth-first expansion from `root`. Each name is expanded at most once;
/// later occurrences only contribute an edge.
pub fn build_graph_with(
    root: &PackageName,
    records: &[DependencyRecord],
    source: &dyn TransitiveSource,
) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    let root_deps: Vec<PackageName> = records.iter().map(DependencyRecord::name).collect();
    let mut stack: Vec<PackageName> = root_deps.iter().rev().cloned().collect();
    graph.insert(root.clone(), root_deps);

    while let Some(current) = stack.pop() {
        if graph.contains(&current) {
            continue;
        }
        let deps: Vec<PackageName> = source
            .dependencies_of(&current)
            .iter()
            .map(DependencyRecord::name)
            .collect();
        // reversed so siblings pop in source order
        stack.extend(deps.iter().rev().cloned());
        graph.insert(current, deps);
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    EmptyName { record: String },
    RepeatedDelimiter { record: String },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName { record } => {
                write!(f, "record {:?} has an empty package name", record)
            }
            Self::RepeatedDelimiter { record } => {
                write!(f, "record {:?} has more than one '==', split on the first", record)
            }
        }
    }
}

/// Flags records the builder accepts but that are probably not what the
/// listing meant. Nothing is rejected.
pub fn scan_records(records: &[DependencyRecord]) -> Vec<ParseWarning> {
    let mut warnings = Vec::new();
    for record in records {
        if record.name().as_str().is_empty() {
            warnings.push(ParseWarning::EmptyName {
                record: record.raw().to_string(),
            });
        } else if record.delimiter_count() > 1 {
            warnings.push(ParseWarning::RepeatedDelimiter {
                record: record.raw().to_string(),
            });
        }
    }
    warnings
}
