use std::collections::HashMap;

use crate::core::package::PackageName;

pub mod builder;
pub mod ops;
pub mod viz;

/// Adjacency mapping from a package to its direct dependencies.
///
/// Keys iterate in insertion order. Edge lists keep source order and may
/// contain duplicates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    order: Vec<PackageName>,
    edges: HashMap<PackageName, Vec<PackageName>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` with its dependency list. Returns `false` and leaves the
    /// graph untouched when `name` is already a key.
    pub fn insert(&mut self, name: PackageName, deps: Vec<PackageName>) -> bool {
        if self.edges.contains_key(&name) {
            return false;
        }
        self.order.push(name.clone());
        self.edges.insert(name, deps);
        true
    }

    pub fn contains(&self, name: &PackageName) -> bool {
        self.edges.contains_key(name)
    }

    pub fn dependencies_of(&self, name: &PackageName) -> Option<&[PackageName]> {
        self.edges.get(name).map(Vec::as_slice)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PackageName> {
        self.order.iter()
    }

    /// `(node, dependencies)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&PackageName, &[PackageName])> {
        self.order.iter().map(move |name| {
            let deps = self.edges.get(name).map(Vec::as_slice).unwrap_or_default();
            (name, deps)
        })
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}
