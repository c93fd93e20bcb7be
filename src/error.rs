//! Error types shared across the crate.
//!
//! Every fallible operation surfaces one of these variants directly to its
//! caller; nothing is retried or swallowed internally. Each variant names the
//! vertex identity involved so callers can report or repair the offending
//! part of the network.

use crate::graph::VertexId;

/// Errors raised while building or classifying a stream network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A vertex was created under an identity that is already registered.
    ///
    /// The container never deduplicates silently; the failed call leaves the
    /// graph untouched.
    #[error("vertex {id} has already been added")]
    DuplicateIdentity {
        /// The identity that was registered twice.
        id: VertexId,
    },

    /// An operation referenced an identity that is not present in the graph.
    ///
    /// Recoverable: create the vertex first, then retry.
    #[error("vertex {id} does not exist")]
    MissingVertex {
        /// The identity that could not be resolved.
        id: VertexId,
    },

    /// The tributary relation contains a cycle, so no bottom-up ordering of
    /// the network exists. Fatal to the classification run.
    #[error("stream network contains a cycle through vertex {id}")]
    CyclicNetwork {
        /// One vertex on the detected cycle.
        id: VertexId,
    },

    /// A stream order was requested from a vertex that classification has
    /// not reached yet.
    #[error("vertex {id} has no stream order; classification has not completed")]
    Unclassified {
        /// The vertex that is still waiting for an order.
        id: VertexId,
    },
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_vertex() {
        assert_eq!(
            Error::DuplicateIdentity { id: 12 }.to_string(),
            "vertex 12 has already been added"
        );
        assert_eq!(
            Error::MissingVertex { id: -3 }.to_string(),
            "vertex -3 does not exist"
        );
        assert_eq!(
            Error::CyclicNetwork { id: 7 }.to_string(),
            "stream network contains a cycle through vertex 7"
        );
        assert_eq!(
            Error::Unclassified { id: 9 }.to_string(),
            "vertex 9 has no stream order; classification has not completed"
        );
    }
}
