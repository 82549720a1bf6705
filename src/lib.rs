//! # `spanpath` - Spanning Trees and Shortest Paths over Branded Scratch Space
//!
//! An in-memory, immutable, undirected weighted graph answering two queries:
//! minimum spanning forest (Kruskal) and single-pair shortest path
//! (Dijkstra). Graphs may be disconnected and may contain self-loops and
//! parallel edges.
//!
//! ## Architecture
//!
//! Leaves first:
//!
//! 1. **Ghost tokens** (`GhostToken<'brand>`): zero-sized, lifetime-branded
//!    capabilities. Each query opens a fresh token scope, so its scratch
//!    structures cannot outlive the call or mix with another call's.
//! 2. **Branded collections**: `BrandedDaryHeap` (4-ary min-heap without
//!    decrease-key) and `BrandedDisjointSet` (union by rank, path compression).
//! 3. **Graph**: vertex index, adjacency lists of edge positions, and an
//!    ascending-weight edge order computed once at construction.
//!
//! ## Invariants
//!
//! - Every edge endpoint is a vertex of the graph; construction fails otherwise.
//! - Edge weights are finite and non-negative.
//! - The graph is never mutated after construction; queries only read it, so
//!   concurrent queries against one `Graph` need no locking.
//!
//! ## Example
//!
//! ```rust
//! use spanpath::graph::{Graph, WeightedEdge};
//!
//! let graph = Graph::new(
//!     vec!["A", "B", "C"],
//!     vec![
//!         WeightedEdge::new("A", "B", 1.0),
//!         WeightedEdge::new("B", "C", 2.0),
//!         WeightedEdge::new("A", "C", 3.0),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(graph.minimum_spanning_tree().total_weight(), 3.0);
//! assert_eq!(graph.shortest_path(&"A", &"C").unwrap().cost(), 3.0);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;
pub mod token;

pub use collections::{BrandedDaryHeap, BrandedDisjointSet};
pub use error::{DisjointSetError, GraphError, HeapError, InvalidEdgeReason};
pub use graph::{Edge, Graph, ShortestPath, SpanningForest, WeightedEdge};
pub use token::GhostToken;

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // Tokens and brands are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);
    assert!(mem::size_of::<token::InvariantLifetime<'static>>() == 0);

    // Branding adds nothing on top of the backing vector.
    assert!(mem::size_of::<BrandedDaryHeap<'static, u64>>() == mem::size_of::<Vec<u64>>());
};
