//! streamorder - Strahler stream-order classification for directed drainage
//! networks.
//!
//! This crate provides an identity-addressed directed multigraph for building
//! stream networks from raw arc data, and the Strahler classification that
//! assigns each branch its hierarchical order.
//!
//! # Example
//!
//! ```rust
//! use streamorder::analysis::classify;
//! use streamorder::graph::StrahlerTree;
//!
//! let mut tree = StrahlerTree::new();
//!
//! // Arcs run from tributary to confluence, converging on the outlet.
//! tree.add_edge(1, 3);
//! tree.add_edge(2, 3);
//! tree.add_edge(3, 5);
//! tree.add_edge(4, 5);
//! tree.set_root(5)?;
//!
//! classify(&mut tree)?;
//! assert_eq!(tree.vertex(3).unwrap().order(), Some(2));
//! assert_eq!(tree.root().unwrap().order(), Some(2));
//! # Ok::<(), streamorder::Error>(())
//! ```

pub mod analysis;
pub mod error;
pub mod graph;

pub use error::{Error, Result};
