//! Undirected weighted graphs and the queries they answer.
//!
//! - `edge`: the [`Edge`] capability and the plain [`WeightedEdge`]
//! - `adjacency`: [`Graph`] construction and read-only accessors
//! - `mst`: minimum spanning forest (Kruskal) and component counting
//! - `shortest_path`: single-pair shortest path (Dijkstra)

pub mod adjacency;
pub mod edge;
pub mod mst;
pub mod shortest_path;


pub use adjacency::Graph;
pub use edge::{Edge, WeightedEdge};
pub use mst::SpanningForest;
pub use shortest_path::ShortestPath;
