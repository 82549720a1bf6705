//! Branded scratch collections used by the graph queries.
//!
//! - `disjoint_set`: union-find over hashable items
//! - `dary_heap`: min-priority queue with a configurable fan-out
//! - `top_k`: bounded selection built on the heap

pub mod dary_heap;
pub mod disjoint_set;
pub mod top_k;

pub use dary_heap::{ActiveDaryHeap, BrandedDaryHeap, DEFAULT_ARITY};
pub use disjoint_set::{ActiveDisjointSet, BrandedDisjointSet};
pub use top_k::top_k_sort;
