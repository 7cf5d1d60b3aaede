use std::str::FromStr;

use serde::Serialize;

use crate::core::package::PackageName;
use crate::error::DepvizError;
use crate::graph::ops::find_cycles;
use crate::graph::DependencyGraph;

pub const MERMAID_HEADER: &str = "graph TD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Mermaid,
    Dot,
    Tree,
    Json,
}

impl FromStr for GraphFormat {
    type Err = DepvizError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "mermaid" | "mmd" => Ok(Self::Mermaid),
            "dot" => Ok(Self::Dot),
            "tree" => Ok(Self::Tree),
            "json" => Ok(Self::Json),
            _ => Err(DepvizError::Other(anyhow::anyhow!(format!(
                "unknown graph format '{}' (expected mermaid, dot, tree or json)",
                input
            )))),
        }
    }
}

pub fn render(graph: &DependencyGraph, format: GraphFormat) -> Result<String, DepvizError> {
    match format {
        GraphFormat::Mermaid => Ok(render_mermaid(graph)),
        GraphFormat::Dot => Ok(render_dot(graph)),
        GraphFormat::Tree => Ok(render_tree(graph)),
        GraphFormat::Json => serde_json::to_string_pretty(&GraphJson::from(graph))
            .map_err(|err| DepvizError::Other(anyhow::Error::new(err))),
    }
}

/// Mermaid flowchart, one `parent --> child` line per edge in insertion
/// order. Nodes without dependencies contribute no line. No trailing newline.
pub fn render_mermaid(graph: &DependencyGraph) -> String {
    let mut lines = vec![MERMAID_HEADER.to_string()];
    for (node, deps) in graph.iter() {
        for dep in deps {
            lines.push(format!("    {} --> {}", node, dep));
        }
    }
    lines.join("\n")
}

pub fn render_dot(graph: &DependencyGraph) -> String {
    let mut out = String::from("digraph depviz {\n");
    for node in graph.nodes() {
        out.push_str(&format!("  \"{}\";\n", escape_dot_label(node.as_str())));
    }
    for (from, deps) in graph.iter() {
        for dep in deps {
            out.push_str(&format!(
                "  \"{}\" -> \"{}\";\n",
                escape_dot_label(from.as_str()),
                escape_dot_label(dep.as_str())
            ));
        }
    }
    out.push_str("}\n");
    out
}

/// Indented tree from the first node. Edges back into the current path are
/// marked `(cycle)` instead of being followed.
pub fn render_tree(graph: &DependencyGraph) -> String {
    let mut out = String::new();
    let Some(root) = graph.nodes().next() else {
        return out;
    };
    out.push_str(root.as_str());
    out.push('\n');
    let mut path = vec![root.clone()];
    render_tree_children(root, graph, "", &mut path, &mut out);
    out
}

fn render_tree_children(
    node: &PackageName,
    graph: &DependencyGraph,
    prefix: &str,
    path: &mut Vec<PackageName>,
    out: &mut String,
) {
    let children = graph.dependencies_of(node).unwrap_or_default();
    for (idx, child) in children.iter().enumerate() {
        let is_last = idx + 1 == children.len();
        out.push_str(prefix);
        out.push_str(if is_last { "`-- " } else { "|-- " });
        out.push_str(child.as_str());
        if path.iter().any(|name| name == child) {
            out.push_str(" (cycle)");
            out.push('\n');
            continue;
        }
        out.push('\n');
        path.push(child.clone());
        let mut next_prefix = prefix.to_string();
        if is_last {
            next_prefix.push_str("    ");
        } else {
            next_prefix.push_str("|   ");
        }
        render_tree_children(child, graph, &next_prefix, path, out);
        path.pop();
    }
}

fn escape_dot_label(label: &str) -> String {
    label.replace('"', "\\\"")
}

#[derive(Debug, Serialize)]
pub struct GraphJson {
    pub root: Option<PackageName>,
    pub nodes: Vec<GraphJsonNode>,
    pub edges: Vec<GraphJsonEdge>,
    pub cycles: Vec<Vec<PackageName>>,
}

#[derive(Debug, Serialize)]
pub struct GraphJsonNode {
    pub name: PackageName,
    pub dependencies: Vec<PackageName>,
}

#[derive(Debug, Serialize)]
pub struct GraphJsonEdge {
    pub from: PackageName,
    pub to: PackageName,
}

impl From<&DependencyGraph> for GraphJson {
    fn from(graph: &DependencyGraph) -> Self {
        let nodes = graph
            .iter()
            .map(|(name, deps)| GraphJsonNode {
                name: name.clone(),
                dependencies: deps.to_vec(),
            })
            .collect();
        let edges = graph
            .iter()
            .flat_map(|(from, deps)| {
                deps.iter().map(move |to| GraphJsonEdge {
                    from: from.clone(),
                    to: to.clone(),
                })
            })
            .collect();
        Self {
            root: graph.nodes().next().cloned(),
            nodes,
            edges,
            cycles: find_cycles(graph),
        }
    }
}
