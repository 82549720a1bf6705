//! Error types for graph construction, queries, and the scratch collections.
//!
//! Misuse (malformed input, double registration, empty-queue access) and the
//! expected "no path" outcome are kept as distinct variants so callers can
//! match on the recoverable case without string inspection.

use thiserror::Error;

/// Why an edge was refused at graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidEdgeReason {
    /// The weight is negative, infinite, or NaN.
    BadWeight,
    /// The first endpoint is not in the vertex set.
    UnknownVertexA,
    /// The second endpoint is not in the vertex set.
    UnknownVertexB,
}

impl core::fmt::Display for InvalidEdgeReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BadWeight => f.write_str("weight is negative or not finite"),
            Self::UnknownVertexA => f.write_str("first endpoint is not a vertex of the graph"),
            Self::UnknownVertexB => f.write_str("second endpoint is not a vertex of the graph"),
        }
    }
}

/// Errors raised by [`Graph`](crate::graph::Graph) construction and queries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An input edge was malformed. Fatal for the constructor call.
    #[error("invalid edge at position {index}: {reason}")]
    InvalidEdge {
        /// Position of the edge in the input sequence.
        index: usize,
        /// What was wrong with it.
        reason: InvalidEdgeReason,
    },

    /// The same vertex appeared twice in the vertex input.
    #[error("duplicate vertex at position {index}")]
    DuplicateVertex {
        /// Position of the second occurrence.
        index: usize,
    },

    /// A query named a vertex that is not part of the graph.
    #[error("vertex is not part of the graph")]
    UnknownVertex,

    /// The endpoints lie in different connected components.
    #[error("no path exists between the requested vertices")]
    NoPathExists,
}

impl GraphError {
    /// Returns `true` for the recoverable "disconnected endpoints" outcome.
    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPathExists)
    }
}

/// Errors raised by [`BrandedDisjointSet`](crate::collections::BrandedDisjointSet).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DisjointSetError {
    /// `make_set` was called twice for the same item.
    #[error("item is already registered in the disjoint set")]
    AlreadyRegistered,

    /// The item was never passed to `make_set`.
    #[error("item is not registered in the disjoint set")]
    Unregistered,

    /// `union` was called on two items that already share a representative.
    #[error("items already belong to the same set")]
    AlreadyJoined,
}

/// Errors raised by [`BrandedDaryHeap`](crate::collections::BrandedDaryHeap).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek_min` or `remove_min` on an empty heap.
    #[error("priority queue is empty")]
    Empty,

    /// The item does not compare equal to itself and cannot be ordered.
    #[error("item cannot be ordered")]
    InvalidItem,
}

/// Result alias for graph operations.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
