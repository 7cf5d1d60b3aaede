use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::core::package::PackageName;
use crate::graph::DependencyGraph;

pub type PackageIndex = HashMap<PackageName, NodeIndex>;

pub fn to_petgraph(graph: &DependencyGraph) -> (DiGraph<PackageName, ()>, PackageIndex) {
    let mut out = DiGraph::with_capacity(graph.node_count(), graph.edge_count());
    let mut indices = HashMap::with_capacity(graph.node_count());
    for name in graph.nodes() {
        let idx = out.add_node(name.clone());
        indices.insert(name.clone(), idx);
    }
    for (from, deps) in graph.iter() {
        let Some(&from_idx) = indices.get(from) else {
            continue;
        };
        for dep in deps {
            if let Some(&to_idx) = indices.get(dep) {
                out.add_edge(from_idx, to_idx, ());
            }
        }
    }
    (out, indices)
}

/// Strongly connected components with more than one member, plus single
/// packages that list themselves.
pub fn find_cycles(graph: &DependencyGraph) -> Vec<Vec<PackageName>> {
    let (pg, _) = to_petgraph(graph);
    let mut cycles = Vec::new();
    for scc in tarjan_scc(&pg) {
        let is_cycle = scc.len() > 1 || pg.contains_edge(scc[0], scc[0]);
        if !is_cycle {
            continue;
        }
        let mut members: Vec<PackageName> = scc.iter().map(|&idx| pg[idx].clone()).collect();
        members.sort();
        cycles.push(members);
    }
    cycles.sort();
    cycles
}

#[cfg(test)]
mod tests {
    use crate::core::package::PackageName;
    use crate::graph::ops::{find_cycles, to_petgraph};
    use crate::graph::DependencyGraph;

    fn name(value: &str) -> PackageName {
        PackageName::new(value)
    }

    #[test]
    fn acyclic_graph_has_no_cycles() {
        let mut graph = DependencyGraph::new();
        graph.insert(name("app"), vec![name("a"), name("b")]);
        graph.insert(name("a"), vec![name("b")]);
        graph.insert(name("b"), Vec::new());
        assert!(find_cycles(&graph).is_empty());
    }

    #[test]
    fn finds_self_loops_and_longer_cycles() {
        let mut graph = DependencyGraph::new();
        graph.insert(name("app"), vec![name("app"), name("x")]);
        graph.insert(name("x"), vec![name("y")]);
        graph.insert(name("y"), vec![name("x")]);

        let cycles = find_cycles(&graph);
        assert_eq!(cycles, vec![vec![name("app")], vec![name("x"), name("y")]]);
    }

    #[test]
    fn petgraph_view_mirrors_edge_count() {
        let mut graph = DependencyGraph::new();
        graph.insert(name("app"), vec![name("a"), name("a")]);
        graph.insert(name("a"), Vec::new());
        let (pg, indices) = to_petgraph(&graph);
        assert_eq!(pg.node_count(), 2);
        assert_eq!(pg.edge_count(), 2);
        assert!(indices.contains_key(&name("a")));
    }
}
