//! Generalized network analyzer.
//!
//! An analyzer borrows an already-built graph, snapshots its vertex identity
//! set and count at construction, and exposes read-only access to the graph
//! for downstream result extraction. It never mutates the graph it was given.

use crate::graph::{Identified, IdentityGraph, VertexId};

/// A read-only view over an identity graph, snapshotted at construction.
///
/// The snapshot captures the vertex identities and count as of the moment
/// the analyzer was created; result extraction goes back through
/// [`NetworkAnalyzer::graph`]. Works for any vertex and edge payload kinds.
///
/// # Example
///
/// ```rust
/// use streamorder::analysis::NetworkAnalyzer;
/// use streamorder::graph::StrahlerTree;
///
/// let mut tree = StrahlerTree::new();
/// tree.add_edge(1, 2);
///
/// let analyzer = NetworkAnalyzer::new(tree.graph());
/// assert_eq!(analyzer.vertex_count(), 2);
/// ```
#[derive(Debug)]
pub struct NetworkAnalyzer<'g, V, E = ()> {
    graph: &'g IdentityGraph<V, E>,
    vertex_ids: Vec<VertexId>,
    vertex_count: usize,
}

impl<'g, V: Identified, E> NetworkAnalyzer<'g, V, E> {
    /// Creates an analyzer over the given graph, snapshotting its vertex
    /// identities and count.
    pub fn new(graph: &'g IdentityGraph<V, E>) -> Self {
        let mut vertex_ids: Vec<VertexId> = graph.vertex_ids().collect();
        vertex_ids.sort_unstable();
        Self {
            graph,
            vertex_count: vertex_ids.len(),
            vertex_ids,
        }
    }

    /// Returns the analyzed graph.
    pub fn graph(&self) -> &'g IdentityGraph<V, E> {
        self.graph
    }

    /// Returns the snapshotted vertex identities, in ascending order.
    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertex_ids
    }

    /// Returns the snapshotted vertex count.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}
