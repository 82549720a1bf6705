//! Single-pair shortest paths via Dijkstra's algorithm.
//!
//! Each vertex moves from unvisited to frontier to finalized. The frontier is
//! a 4-ary min-heap without decrease-key: a cheaper route pushes a fresh entry
//! and the superseded one is dropped when popped for an already finalized
//! vertex. The search stops as soon as the target is finalized.

use crate::collections::BrandedDaryHeap;
use crate::error::{GraphError, Result};
use crate::graph::adjacency::Graph;
use crate::graph::edge::Edge;
use crate::GhostToken;
use core::hash::Hash;
use num_traits::{Float, Zero};

/// The edges of a shortest path, from the edge leaving `start` to the edge
/// entering `end`.
#[derive(Debug, Clone)]
pub struct ShortestPath<'g, E, W> {
    edges: Vec<&'g E>,
    cost: W,
}

impl<'g, E, W: Copy> ShortestPath<'g, E, W> {
    /// The path's edges in travel order.
    pub fn edges(&self) -> &[&'g E] {
        &self.edges
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` for the empty path from a vertex to itself.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the path's edge weights.
    pub fn cost(&self) -> W {
        self.cost
    }

    /// Consumes the path and returns its edges.
    pub fn into_edges(self) -> Vec<&'g E> {
        self.edges
    }
}

/// Best known route into one vertex.
#[derive(Debug, Clone, Copy)]
struct VertexState<W> {
    cost: W,
    /// Edge position used to reach the vertex on the best route so far.
    via: Option<usize>,
    finalized: bool,
}

/// Heap entry. Ordered by cost, then vertex index.
#[derive(Debug, PartialEq, PartialOrd)]
struct Frontier<W> {
    cost: W,
    vertex: usize,
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
{
    /// Returns a cheapest path from `start` to `end`.
    ///
    /// A vertex to itself is the empty path, returned before any lookup.
    /// Otherwise an endpoint outside the graph yields
    /// [`GraphError::UnknownVertex`], and endpoints in different components
    /// yield [`GraphError::NoPathExists`].
    ///
    /// ```rust
    /// use spanpath::graph::{Graph, WeightedEdge};
    ///
    /// let graph = Graph::new(
    ///     vec!["a", "b", "c"],
    ///     vec![
    ///         WeightedEdge::new("a", "b", 1.0),
    ///         WeightedEdge::new("b", "c", 1.0),
    ///         WeightedEdge::new("a", "c", 5.0),
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// let path = graph.shortest_path(&"a", &"c").unwrap();
    /// assert_eq!(path.len(), 2);
    /// assert_eq!(path.cost(), 2.0);
    /// ```
    pub fn shortest_path(&self, start: &V, end: &V) -> Result<ShortestPath<'_, E, E::Weight>> {
        if start == end {
            return Ok(ShortestPath {
                edges: Vec::new(),
                cost: E::Weight::zero(),
            });
        }
        let source = self.vertex_index(start).ok_or(GraphError::UnknownVertex)?;
        let target = self.vertex_index(end).ok_or(GraphError::UnknownVertex)?;

        let states = GhostToken::new(|mut token| self.relax(&mut token, source, target));
        if !states[target].finalized {
            #[cfg(feature = "tracing")]
            tracing::debug!(source, target, "no path between components");
            return Err(GraphError::NoPathExists);
        }

        let mut edges = Vec::new();
        let mut current = target;
        while let Some(position) = states[current].via {
            edges.push(self.edge_at(position));
            current = self.opposite(position, current);
        }
        edges.reverse();

        Ok(ShortestPath {
            edges,
            cost: states[target].cost,
        })
    }

    /// Runs the relaxation loop until `target` is finalized or the frontier
    /// drains, and returns the per-vertex records.
    fn relax<'brand>(
        &self,
        token: &mut GhostToken<'brand>,
        source: usize,
        target: usize,
    ) -> Vec<VertexState<E::Weight>> {
        let unvisited = VertexState {
            cost: E::Weight::infinity(),
            via: None,
            finalized: false,
        };
        let mut states = vec![unvisited; self.num_vertices()];
        states[source].cost = E::Weight::zero();

        let mut frontier: BrandedDaryHeap<'brand, Frontier<E::Weight>> =
            BrandedDaryHeap::with_capacity(self.num_vertices());
        push(&mut frontier, token, E::Weight::zero(), source);

        #[cfg(feature = "tracing")]
        let (mut finalized, mut stale) = (0usize, 0usize);

        while !states[target].finalized {
            let Ok(Frontier { vertex, .. }) = frontier.remove_min(token) else {
                break;
            };
            if states[vertex].finalized {
                #[cfg(feature = "tracing")]
                {
                    stale += 1;
                }
                continue;
            }
            states[vertex].finalized = true;
            #[cfg(feature = "tracing")]
            {
                finalized += 1;
            }

            let base = states[vertex].cost;
            for &position in self.incident(vertex) {
                let next = self.opposite(position, vertex);
                if states[next].finalized {
                    continue;
                }
                let candidate = base + self.edge_at(position).weight();
                // A cost that overflowed to infinity still reaches an
                // untouched vertex.
                if candidate < states[next].cost || states[next].via.is_none() {
                    states[next].cost = candidate;
                    states[next].via = Some(position);
                    push(&mut frontier, token, candidate, next);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            finalized,
            stale,
            reached = states[target].finalized,
            "relaxation finished"
        );

        states
    }
}

fn push<'brand, W: Float>(
    frontier: &mut BrandedDaryHeap<'brand, Frontier<W>>,
    token: &mut GhostToken<'brand>,
    cost: W,
    vertex: usize,
) {
    // Sums of finite non-negative weights saturate at infinity, never NaN.
    if let Err(err) = frontier.insert(token, Frontier { cost, vertex }) {
        unreachable!("relaxed cost cannot be ordered: {err}");
    }
}
