//! Network analysis: the generalized analyzer and Strahler classification.
//!
//! [`classify`] assigns Strahler orders bottom-up over a completed
//! [`StrahlerTree`](crate::graph::StrahlerTree); [`NetworkAnalyzer`]
//! snapshots a graph for read-only result extraction; [`OrderSummary`]
//! derives per-order stream counts, the network's Strahler number, and
//! Horton bifurcation ratios from a classified network.

mod analyzer;
mod strahler;

pub use analyzer::NetworkAnalyzer;
pub use strahler::{classify, OrderSummary};
