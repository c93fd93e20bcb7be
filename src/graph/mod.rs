//! Graph module for stream-network modeling.
//!
//! Provides the identity-addressed [`IdentityGraph`] container and the
//! [`StrahlerTree`] specialization used for stream-order classification.
//!
//! # Example
//!
//! ```rust
//! use streamorder::graph::StrahlerTree;
//!
//! let mut tree = StrahlerTree::new();
//! tree.add_edge(1, 3);
//! tree.add_edge(2, 3);
//! tree.set_root(3)?;
//!
//! assert_eq!(tree.vertex_count(), 3);
//! assert_eq!(tree.edge_count(), 2);
//! # Ok::<(), streamorder::Error>(())
//! ```

mod identity;
mod strahler_tree;

pub use identity::{Identified, IdentityGraph, VertexId};
pub use strahler_tree::{StrahlerTree, StrahlerVertex};
