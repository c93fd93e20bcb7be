//! Strahler tree: the identity-addressed container specialized for
//! stream-order classification.
//!
//! Wraps an [`IdentityGraph`] of [`StrahlerVertex`] payloads, tracks a single
//! designated root, and offers an identity-only edge insertion that
//! auto-creates endpoints. Edges are oriented child to parent: from a
//! tributary toward the confluence it feeds, converging on the root.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::error::{Error, Result};
use crate::graph::identity::{Identified, IdentityGraph, VertexId};

/// A vertex of a stream network: an identity plus its Strahler order.
///
/// The order starts unset and is assigned once per vertex when
/// [`classify`](crate::analysis::classify) runs over the completed network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrahlerVertex {
    id: VertexId,
    order: Option<u32>,
}

impl StrahlerVertex {
    /// Returns this vertex's identity.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the assigned Strahler order, or `None` if classification has
    /// not reached this vertex yet.
    pub fn order(&self) -> Option<u32> {
        self.order
    }

    /// Returns the assigned order, surfacing the unclassified state as an
    /// error instead of a sentinel.
    pub fn require_order(&self) -> Result<u32> {
        self.order.ok_or(Error::Unclassified { id: self.id })
    }

    pub(crate) fn set_order(&mut self, order: u32) {
        self.order = Some(order);
    }
}

impl Identified for StrahlerVertex {
    fn with_id(id: VertexId) -> Self {
        Self { id, order: None }
    }

    fn id(&self) -> VertexId {
        self.id
    }
}

/// A directed multigraph of stream segments converging toward a root.
///
/// Built incrementally from raw `(source_id, target_id)` arc pairs; the
/// graph stays mutable during construction and becomes read-mostly once
/// classification runs. The root designation is a back-reference by identity
/// into the vertex set, never a second ownership slot.
///
/// # Example
///
/// ```rust
/// use streamorder::graph::StrahlerTree;
///
/// let mut tree = StrahlerTree::new();
///
/// // Two headwater streams meet at 3, which feeds the outlet 4.
/// tree.add_edge(1, 3);
/// tree.add_edge(2, 3);
/// tree.add_edge(3, 4);
/// tree.set_root(4)?;
///
/// assert_eq!(tree.vertex_count(), 4);
/// assert_eq!(tree.root_id(), Some(4));
/// # Ok::<(), streamorder::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StrahlerTree {
    graph: IdentityGraph<StrahlerVertex>,
    root: Option<VertexId>,
}

impl StrahlerTree {
    /// Creates a new empty tree with no root designated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new tree with pre-allocated capacity.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            graph: IdentityGraph::with_capacity(vertices, edges),
            root: None,
        }
    }

    /// Inserts a directed edge from `source_id` to `target_id`, creating
    /// either endpoint that does not exist yet.
    ///
    /// This is the bulk-ingestion entry point for arc streams: after the
    /// call both endpoints exist exactly once and one new edge connects
    /// them. Repeating a pair adds a parallel edge and no vertices.
    pub fn add_edge(&mut self, source_id: VertexId, target_id: VertexId) -> EdgeIndex {
        self.ensure_vertex(source_id);
        self.ensure_vertex(target_id);

        // Both endpoints exist now, so the identity-level insert cannot fail.
        match self.graph.add_edge(source_id, target_id, ()) {
            Ok(edge) => edge,
            Err(_) => unreachable!("endpoints were just created"),
        }
    }

    fn ensure_vertex(&mut self, id: VertexId) {
        if !self.graph.contains(id) {
            let _ = self.graph.create_vertex(id);
        }
    }

    /// Creates a vertex explicitly, without connecting it.
    ///
    /// Useful for pre-registering an outlet or an isolated gauge point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateIdentity`] if the identity is registered.
    pub fn create_vertex(&mut self, id: VertexId) -> Result<NodeIndex> {
        self.graph.create_vertex(id)
    }

    /// Designates the vertex with the given identity as the root.
    ///
    /// Overwrites any previous designation; the previously designated vertex
    /// stays in the graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] if no vertex has this identity; the
    /// network must be built before its outlet can be designated.
    pub fn set_root(&mut self, id: VertexId) -> Result<()> {
        if !self.graph.contains(id) {
            return Err(Error::MissingVertex { id });
        }
        self.root = Some(id);
        Ok(())
    }

    /// Returns the designated root vertex, or `None` while none is set.
    ///
    /// An unset root is a normal state for a network under construction.
    pub fn root(&self) -> Option<&StrahlerVertex> {
        self.graph.vertex(self.root?)
    }

    /// Returns the identity of the designated root, if any.
    pub fn root_id(&self) -> Option<VertexId> {
        self.root
    }

    /// Gets the vertex with the given identity.
    pub fn vertex(&self, id: VertexId) -> Option<&StrahlerVertex> {
        self.graph.vertex(id)
    }

    /// Returns `true` if a vertex with the given identity is present.
    pub fn contains(&self, id: VertexId) -> bool {
        self.graph.contains(id)
    }

    /// Iterates over the headwaters: vertices with no incoming edges.
    ///
    /// These are the sources of the network and always classify as order 1.
    pub fn headwaters(&self) -> impl Iterator<Item = &StrahlerVertex> {
        self.graph
            .vertices()
            .filter(|v| self.graph.incoming(v.id()).next().is_none())
    }

    /// Iterates over the tributaries feeding `id`, one per incoming edge.
    ///
    /// A parallel channel contributes one occurrence per edge.
    pub fn tributaries(&self, id: VertexId) -> impl Iterator<Item = &StrahlerVertex> {
        self.graph.incoming(id)
    }

    /// Iterates over all vertices of the network.
    pub fn vertices(&self) -> impl Iterator<Item = &StrahlerVertex> {
        self.graph.vertices()
    }

    /// Returns the number of vertices in the network.
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Returns the number of edges in the network.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the network has no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Returns the underlying identity graph.
    pub fn graph(&self) -> &IdentityGraph<StrahlerVertex> {
        &self.graph
    }

    pub(crate) fn graph_mut(&mut self) -> &mut IdentityGraph<StrahlerVertex> {
        &mut self.graph
    }
}
