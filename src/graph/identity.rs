//! Identity-addressed directed multigraph built on petgraph.
//!
//! Provides a directed graph structure whose vertices are created and looked
//! up through caller-supplied integer identities, so callers building a
//! network from external data (arc tables that reference endpoints by numeric
//! id) never need to hold vertex references themselves.

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Caller-supplied vertex identity, unique within a graph instance.
pub type VertexId = i64;

/// Vertex payloads that carry their own identity.
///
/// The container allocates payloads through [`Identified::with_id`] and reads
/// the identity back through [`Identified::id`]; the identity is assigned at
/// creation and never changes afterwards.
pub trait Identified {
    /// Allocates a fresh payload tagged with `id`.
    fn with_id(id: VertexId) -> Self;

    /// Returns the identity this payload was created under.
    fn id(&self) -> VertexId;
}

/// A directed multigraph addressed by integer vertex identities.
///
/// The graph uses petgraph's `DiGraph` internally, paired with a map from
/// identity to node index for O(1) lookup. Every identity maps to exactly one
/// vertex; creating a second vertex under a registered identity is an error,
/// never a silent deduplication. Parallel edges and self-loops are permitted.
///
/// Structural mutation goes through the identity API only, so the identity
/// map and the vertex set cannot diverge; [`IdentityGraph::inner`] exposes
/// the underlying graph immutably for algorithm interop.
///
/// # Example
///
/// ```rust
/// use streamorder::graph::{IdentityGraph, StrahlerVertex};
///
/// let mut graph: IdentityGraph<StrahlerVertex> = IdentityGraph::new();
/// graph.create_vertex(1)?;
/// graph.create_vertex(2)?;
/// graph.add_edge(1, 2, ())?;
///
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), streamorder::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct IdentityGraph<V, E = ()> {
    /// The underlying directed graph
    graph: DiGraph<V, E>,
    /// Maps vertex identities to their node indices for O(1) lookup
    indices: HashMap<VertexId, NodeIndex>,
}

impl<V: Identified, E> Default for IdentityGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Identified, E> IdentityGraph<V, E> {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            indices: HashMap::new(),
        }
    }

    /// Creates a new graph with pre-allocated capacity.
    ///
    /// Use this when the approximate number of vertices and edges is known
    /// up front to avoid reallocations during bulk construction.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(vertices, edges),
            indices: HashMap::with_capacity(vertices),
        }
    }

    /// Creates a new vertex under the given identity.
    ///
    /// Allocates `V::with_id(id)`, registers it in the identity map, and adds
    /// it to the vertex set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateIdentity`] if `id` is already registered.
    /// The failed attempt leaves the graph untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use streamorder::graph::{IdentityGraph, StrahlerVertex};
    /// use streamorder::Error;
    ///
    /// let mut graph: IdentityGraph<StrahlerVertex> = IdentityGraph::new();
    /// graph.create_vertex(7)?;
    ///
    /// assert_eq!(graph.create_vertex(7), Err(Error::DuplicateIdentity { id: 7 }));
    /// assert_eq!(graph.vertex_count(), 1);
    /// # Ok::<(), streamorder::Error>(())
    /// ```
    pub fn create_vertex(&mut self, id: VertexId) -> Result<NodeIndex> {
        if self.indices.contains_key(&id) {
            return Err(Error::DuplicateIdentity { id });
        }

        let idx = self.graph.add_node(V::with_id(id));
        self.indices.insert(id, idx);
        Ok(idx)
    }

    /// Gets a reference to the vertex with the given identity.
    ///
    /// Absence is an expected outcome while a network is under construction,
    /// not an error.
    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.indices
            .get(&id)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    /// Gets a mutable reference to the vertex with the given identity.
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut V> {
        let idx = *self.indices.get(&id)?;
        self.graph.node_weight_mut(idx)
    }

    /// Returns `true` if a vertex with the given identity is present.
    ///
    /// The identity map is the system of record for membership; under the
    /// container's invariants it cannot disagree with the vertex set.
    pub fn contains(&self, id: VertexId) -> bool {
        self.indices.contains_key(&id)
    }

    /// Returns the node index registered for the given identity.
    pub fn index_of(&self, id: VertexId) -> Option<NodeIndex> {
        self.indices.get(&id).copied()
    }

    /// Adds a directed edge between two vertices already in the graph.
    ///
    /// Parallel edges between the same ordered pair are permitted and remain
    /// distinct. This layer does not auto-create vertices; the identity-only
    /// ingestion convenience that does lives on
    /// [`StrahlerTree`](crate::graph::StrahlerTree).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] naming the first absent endpoint if
    /// either identity is not registered. Fails before any state change.
    pub fn add_edge(
        &mut self,
        source_id: VertexId,
        target_id: VertexId,
        weight: E,
    ) -> Result<EdgeIndex> {
        let source = self
            .index_of(source_id)
            .ok_or(Error::MissingVertex { id: source_id })?;
        let target = self
            .index_of(target_id)
            .ok_or(Error::MissingVertex { id: target_id })?;

        Ok(self.graph.add_edge(source, target, weight))
    }

    /// Iterates over the vertices with an edge pointing at `id`.
    ///
    /// Yields one payload reference per incoming edge, so a vertex connected
    /// by parallel edges appears once per edge. An absent identity yields an
    /// empty iterator.
    pub fn incoming(&self, id: VertexId) -> impl Iterator<Item = &V> {
        self.neighbors(id, Direction::Incoming)
    }

    /// Iterates over the vertices that `id` points at, one per outgoing edge.
    pub fn outgoing(&self, id: VertexId) -> impl Iterator<Item = &V> {
        self.neighbors(id, Direction::Outgoing)
    }

    fn neighbors(&self, id: VertexId, dir: Direction) -> impl Iterator<Item = &V> {
        self.index_of(id).into_iter().flat_map(move |idx| {
            self.graph.edges_directed(idx, dir).filter_map(move |edge| {
                let endpoint = match dir {
                    Direction::Incoming => edge.source(),
                    Direction::Outgoing => edge.target(),
                };
                self.graph.node_weight(endpoint)
            })
        })
    }

    /// Iterates over all vertex payloads.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.graph.node_weights()
    }

    /// Iterates over all registered vertex identities.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.indices.keys().copied()
    }

    /// Returns the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns the underlying petgraph graph for read-only algorithm interop.
    pub fn inner(&self) -> &DiGraph<V, E> {
        &self.graph
    }
}
