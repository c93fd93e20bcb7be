//! Strahler stream-order classification.
//!
//! Assigns each vertex of a completed [`StrahlerTree`] its Strahler order in
//! a single bottom-up pass, and extracts order statistics (stream counts per
//! order, Strahler number, Horton bifurcation ratios) from the classified
//! network.

use petgraph::algo::toposort;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

use crate::analysis::NetworkAnalyzer;
use crate::error::{Error, Result};
use crate::graph::{StrahlerTree, StrahlerVertex};

/// Assigns Strahler orders to every vertex of the tree.
///
/// Vertices are processed in topological order of the child-to-parent edge
/// relation, so each vertex is classified only after all of its tributaries
/// are. The classical Strahler rule applies:
///
/// - a vertex with no tributaries (a headwater) gets order 1;
/// - with `m` the maximum order among its incoming edges, a vertex gets
///   `m + 1` when two or more incoming edges attain `m` (a confluence of
///   equally-ranked branches), and `m` otherwise (a single dominant
///   tributary propagates its order unchanged).
///
/// Each incoming edge contributes its source's order separately, so a
/// parallel channel counts twice and can form a confluence with itself.
///
/// Re-running classification over the same network reassigns the same
/// orders; the pass performs no I/O and always terminates on acyclic input.
///
/// # Errors
///
/// Returns [`Error::CyclicNetwork`] naming a vertex on the cycle if the
/// tributary relation is cyclic (self-loops included). No orders are
/// assigned in that case.
///
/// # Example
///
/// ```rust
/// use streamorder::analysis::classify;
/// use streamorder::graph::StrahlerTree;
///
/// let mut tree = StrahlerTree::new();
/// tree.add_edge(1, 3);
/// tree.add_edge(2, 3);
/// tree.add_edge(3, 4);
/// tree.set_root(4)?;
///
/// classify(&mut tree)?;
/// assert_eq!(tree.vertex(3).unwrap().order(), Some(2));
/// assert_eq!(tree.root().unwrap().order(), Some(2));
/// # Ok::<(), streamorder::Error>(())
/// ```
pub fn classify(tree: &mut StrahlerTree) -> Result<()> {
    let inner = tree.graph().inner();

    let sorted = toposort(inner, None).map_err(|cycle| {
        let id = inner
            .node_weight(cycle.node_id())
            .map(StrahlerVertex::id)
            .unwrap_or_default();
        Error::CyclicNetwork { id }
    })?;

    // Orders are computed into a scratch map first; tributaries always
    // precede their parent in `sorted`, so every lookup hits.
    let mut orders = HashMap::with_capacity(sorted.len());
    for idx in sorted {
        let mut max = 0u32;
        let mut attaining = 0usize;
        for edge in inner.edges_directed(idx, Direction::Incoming) {
            let tributary = orders[&edge.source()];
            if tributary > max {
                max = tributary;
                attaining = 1;
            } else if tributary == max {
                attaining += 1;
            }
        }

        let order = match attaining {
            0 => 1,
            1 => max,
            _ => max + 1,
        };
        orders.insert(idx, order);
    }

    let ids: Vec<_> = orders
        .iter()
        .filter_map(|(&idx, &order)| inner.node_weight(idx).map(|v| (v.id(), order)))
        .collect();
    for (id, order) in ids {
        if let Some(vertex) = tree.graph_mut().vertex_mut(id) {
            vertex.set_order(order);
        }
    }

    Ok(())
}

/// Order statistics of a classified stream network.
///
/// Holds the number of streams of each order, extracted through a
/// [`NetworkAnalyzer`] snapshot of the classified tree. Each vertex counts
/// as one stream of its order; in drainage terms this is the segment count
/// Horton's laws are stated over.
///
/// # Example
///
/// ```rust
/// use streamorder::analysis::{classify, NetworkAnalyzer, OrderSummary};
/// use streamorder::graph::StrahlerTree;
///
/// let mut tree = StrahlerTree::new();
/// tree.add_edge(1, 3);
/// tree.add_edge(2, 3);
/// tree.add_edge(3, 4);
/// classify(&mut tree)?;
///
/// let analyzer = NetworkAnalyzer::new(tree.graph());
/// let summary = OrderSummary::from_analyzer(&analyzer)?;
/// assert_eq!(summary.strahler_number(), 2);
/// assert_eq!(summary.streams_of_order(1), 2);
/// assert_eq!(summary.streams_of_order(2), 2);
/// # Ok::<(), streamorder::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSummary {
    /// Number of streams per order; index 0 holds order 1.
    counts: Vec<usize>,
}

impl OrderSummary {
    /// Builds the summary from an analyzer over a classified network.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unclassified`] naming the first snapshotted vertex
    /// that carries no order.
    pub fn from_analyzer(analyzer: &NetworkAnalyzer<'_, StrahlerVertex>) -> Result<Self> {
        let mut counts: Vec<usize> = Vec::new();

        for &id in analyzer.vertex_ids() {
            let order = match analyzer.graph().vertex(id) {
                Some(vertex) => vertex.require_order()?,
                None => return Err(Error::MissingVertex { id }),
            };
            let slot = order as usize - 1;
            if counts.len() <= slot {
                counts.resize(slot + 1, 0);
            }
            counts[slot] += 1;
        }

        Ok(Self { counts })
    }

    /// Returns the network's Strahler number: the highest order attained.
    ///
    /// An empty network has Strahler number 0.
    pub fn strahler_number(&self) -> u32 {
        self.counts.len() as u32
    }

    /// Returns the number of streams of the given order.
    pub fn streams_of_order(&self, order: u32) -> usize {
        if order == 0 {
            return 0;
        }
        self.counts.get(order as usize - 1).copied().unwrap_or(0)
    }

    /// Iterates over `(order, stream_count)` pairs in ascending order.
    pub fn orders(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(slot, &count)| (slot as u32 + 1, count))
    }

    /// Returns Horton's bifurcation ratios `N_k / N_{k+1}` for consecutive
    /// orders, lowest order first.
    ///
    /// Empty for networks with fewer than two orders.
    pub fn bifurcation_ratios(&self) -> Vec<f64> {
        self.counts
            .windows(2)
            .map(|pair| {
                if pair[1] == 0 {
                    0.0
                } else {
                    pair[0] as f64 / pair[1] as f64
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_of(tree: &StrahlerTree, id: i64) -> Option<u32> {
        tree.vertex(id).and_then(StrahlerVertex::order)
    }

    #[test]
    fn test_single_vertex_is_order_one() {
        let mut tree = StrahlerTree::new();
        tree.create_vertex(1).unwrap();

        classify(&mut tree).unwrap();
        assert_eq!(order_of(&tree, 1), Some(1));
    }

    // The classical (increment only on equal-order confluence) rule:
    // leaves A=1, B=2 feed C; leaf D=3 and C feed the root R=4.
    // C merges two order-1 streams, so C = 2. R receives D (order 1) and
    // C (order 2); only one tributary attains the maximum, so R = 2, not 3.
    #[test]
    fn test_confluence_increments_and_single_tributary_propagates() {
        let mut tree = StrahlerTree::new();
        tree.add_edge(1, 10); // A -> C
        tree.add_edge(2, 10); // B -> C
        tree.add_edge(3, 20); // D -> R
        tree.add_edge(10, 20); // C -> R
        tree.set_root(20).unwrap();

        classify(&mut tree).unwrap();

        assert_eq!(order_of(&tree, 1), Some(1));
        assert_eq!(order_of(&tree, 2), Some(1));
        assert_eq!(order_of(&tree, 3), Some(1));
        assert_eq!(order_of(&tree, 10), Some(2));
        assert_eq!(tree.root().unwrap().order(), Some(2));
    }

    #[test]
    fn test_chain_propagates_without_increment() {
        let mut tree = StrahlerTree::new();
        tree.add_edge(1, 2);
        tree.add_edge(2, 3);
        tree.add_edge(3, 4);

        classify(&mut tree).unwrap();
        for id in 1..=4 {
            assert_eq!(order_of(&tree, id), Some(1));
        }
    }

    #[test]
    fn test_two_equal_confluences_build_order_three() {
        let mut tree = StrahlerTree::new();
        // Two order-2 branches meet at the outlet.
        tree.add_edge(1, 5);
        tree.add_edge(2, 5);
        tree.add_edge(3, 6);
        tree.add_edge(4, 6);
        tree.add_edge(5, 7);
        tree.add_edge(6, 7);
        tree.set_root(7).unwrap();

        classify(&mut tree).unwrap();
        assert_eq!(order_of(&tree, 5), Some(2));
        assert_eq!(order_of(&tree, 6), Some(2));
        assert_eq!(order_of(&tree, 7), Some(3));
    }

    #[test]
    fn test_asymmetric_confluence_takes_dominant_order() {
        let mut tree = StrahlerTree::new();
        tree.add_edge(1, 4);
        tree.add_edge(2, 4); // 4 is order 2
        tree.add_edge(3, 5);
        tree.add_edge(4, 5); // order 1 meets order 2: no increment

        classify(&mut tree).unwrap();
        assert_eq!(order_of(&tree, 5), Some(2));
    }

    #[test]
    fn test_parallel_channels_form_a_confluence() {
        let mut tree = StrahlerTree::new();
        tree.add_edge(1, 2);
        tree.add_edge(1, 2);

        classify(&mut tree).unwrap();
        // Both edges carry order 1 into vertex 2, so the maximum is
        // attained twice and the order increments.
        assert_eq!(order_of(&tree, 2), Some(2));
    }

    #[test]
    fn test_cycle_fails_classification() {
        let mut tree = StrahlerTree::new();
        tree.add_edge(1, 2);
        tree.add_edge(2, 3);
        tree.add_edge(3, 1);

        let err = classify(&mut tree).unwrap_err();
        assert!(matches!(err, Error::CyclicNetwork { .. }));
        assert_eq!(order_of(&tree, 1), None);
    }

    #[test]
    fn test_self_loop_fails_classification() {
        let mut tree = StrahlerTree::new();
        tree.add_edge(1, 1);

        let err = classify(&mut tree).unwrap_err();
        assert_eq!(err, Error::CyclicNetwork { id: 1 });
    }

    #[test]
    fn test_reclassification_is_deterministic() {
        let mut tree = StrahlerTree::new();
        tree.add_edge(1, 3);
        tree.add_edge(2, 3);

        classify(&mut tree).unwrap();
        let first = order_of(&tree, 3);
        classify(&mut tree).unwrap();
        assert_eq!(order_of(&tree, 3), first);
        assert_eq!(first, Some(2));
    }

    #[test]
    fn test_disconnected_fragments_are_classified_too() {
        let mut tree = StrahlerTree::new();
        tree.add_edge(1, 2);
        tree.add_edge(10, 12);
        tree.add_edge(11, 12);
        tree.set_root(2).unwrap();

        classify(&mut tree).unwrap();
        assert_eq!(order_of(&tree, 2), Some(1));
        assert_eq!(order_of(&tree, 12), Some(2));
    }

    #[test]
    fn test_summary_counts_streams_per_order() {
        let mut tree = StrahlerTree::new();
        tree.add_edge(1, 5);
        tree.add_edge(2, 5);
        tree.add_edge(3, 6);
        tree.add_edge(4, 6);
        tree.add_edge(5, 7);
        tree.add_edge(6, 7);
        classify(&mut tree).unwrap();

        let analyzer = NetworkAnalyzer::new(tree.graph());
        let summary = OrderSummary::from_analyzer(&analyzer).unwrap();

        assert_eq!(summary.strahler_number(), 3);
        assert_eq!(summary.streams_of_order(1), 4);
        assert_eq!(summary.streams_of_order(2), 2);
        assert_eq!(summary.streams_of_order(3), 1);
        assert_eq!(summary.streams_of_order(4), 0);
        assert_eq!(
            summary.orders().collect::<Vec<_>>(),
            vec![(1, 4), (2, 2), (3, 1)]
        );
    }

    #[test]
    fn test_summary_bifurcation_ratios() {
        let mut tree = StrahlerTree::new();
        tree.add_edge(1, 5);
        tree.add_edge(2, 5);
        tree.add_edge(3, 6);
        tree.add_edge(4, 6);
        tree.add_edge(5, 7);
        tree.add_edge(6, 7);
        classify(&mut tree).unwrap();

        let analyzer = NetworkAnalyzer::new(tree.graph());
        let summary = OrderSummary::from_analyzer(&analyzer).unwrap();

        assert_eq!(summary.bifurcation_ratios(), vec![2.0, 2.0]);
    }

    #[test]
    fn test_summary_requires_classified_network() {
        let mut tree = StrahlerTree::new();
        tree.add_edge(1, 2);

        let analyzer = NetworkAnalyzer::new(tree.graph());
        let err = OrderSummary::from_analyzer(&analyzer).unwrap_err();
        assert_eq!(err, Error::Unclassified { id: 1 });
    }

    #[test]
    fn test_summary_of_empty_network() {
        let tree = StrahlerTree::new();
        let analyzer = NetworkAnalyzer::new(tree.graph());
        let summary = OrderSummary::from_analyzer(&analyzer).unwrap();

        assert_eq!(summary.strahler_number(), 0);
        assert_eq!(summary.streams_of_order(1), 0);
        assert!(summary.bifurcation_ratios().is_empty());
    }
}
