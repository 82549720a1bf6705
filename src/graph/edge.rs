//! Undirected weighted edges.

use core::cmp::Ordering;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// The capability a graph needs from its edge type.
///
/// An edge joins `vertex_a` and `vertex_b` (possibly the same vertex) with a
/// weight. Orientation carries no meaning: the graph stores the edge on both
/// endpoints and walks it in either direction.
pub trait Edge<V> {
    /// Weight type. Graphs accept only finite, non-negative weights.
    type Weight: Float;

    /// First endpoint.
    fn vertex_a(&self) -> &V;

    /// Second endpoint.
    fn vertex_b(&self) -> &V;

    /// Edge weight.
    fn weight(&self) -> Self::Weight;

    /// Returns the endpoint opposite `known`, or `None` if `known` is not an
    /// endpoint. A self-loop returns its single vertex.
    fn other_vertex(&self, known: &V) -> Option<&V>
    where
        V: PartialEq,
    {
        if self.vertex_a() == known {
            Some(self.vertex_b())
        } else if self.vertex_b() == known {
            Some(self.vertex_a())
        } else {
            None
        }
    }

    /// Orders two edges by weight.
    ///
    /// Total for every edge a [`Graph`](super::Graph) accepts, since NaN
    /// weights are rejected at construction.
    fn cmp_weight(&self, other: &Self) -> Ordering
    where
        Self: Sized,
    {
        self.weight()
            .partial_cmp(&other.weight())
            .unwrap_or(Ordering::Equal)
    }
}

/// A plain `(a, b, weight)` edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<V, W = f64> {
    a: V,
    b: V,
    weight: W,
}

impl<V, W> WeightedEdge<V, W> {
    /// Creates an edge between `a` and `b`.
    pub const fn new(a: V, b: V, weight: W) -> Self {
        Self { a, b, weight }
    }

    /// Returns both endpoints.
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.a, &self.b)
    }

    /// Returns `true` if both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.a == self.b
    }
}

impl<V, W: Float> Edge<V> for WeightedEdge<V, W> {
    type Weight = W;

    fn vertex_a(&self) -> &V {
        &self.a
    }

    fn vertex_b(&self) -> &V {
        &self.b
    }

    fn weight(&self) -> W {
        self.weight
    }
}
