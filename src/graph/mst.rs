//! Minimum spanning forest via Kruskal's algorithm.
//!
//! Edges are replayed in the graph's cached ascending-weight order against a
//! union-find opened for the duration of one call. An edge is kept when its
//! endpoints still have different representatives. Self-loops never qualify
//! because both endpoints always share a representative.

use crate::collections::{ActiveDisjointSet, BrandedDisjointSet};
use crate::error::DisjointSetError;
use crate::graph::adjacency::Graph;
use crate::graph::edge::Edge;
use crate::GhostToken;
use core::hash::Hash;
use num_traits::Zero;

/// The edges chosen by [`Graph::minimum_spanning_tree`].
///
/// For a connected graph this is a spanning tree; otherwise it is one tree
/// per connected component, with `num_vertices - components` edges in total.
#[derive(Debug, Clone)]
pub struct SpanningForest<'g, E, W> {
    edges: Vec<&'g E>,
    total_weight: W,
}

impl<'g, E, W: Copy> SpanningForest<'g, E, W> {
    /// The chosen edges, in the order they were accepted (ascending weight).
    pub fn edges(&self) -> &[&'g E] {
        &self.edges
    }

    /// Number of chosen edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if no edge was chosen.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the chosen edges' weights.
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    /// Returns `true` if this exact edge (by identity, not value) was chosen.
    ///
    /// Parallel edges with equal endpoints and weight are distinct entities.
    pub fn contains(&self, edge: &E) -> bool {
        self.edges.iter().any(|chosen| core::ptr::eq(*chosen, edge))
    }

    /// Consumes the forest and returns the chosen edges.
    pub fn into_edges(self) -> Vec<&'g E> {
        self.edges
    }
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
{
    /// Returns a minimum spanning forest of the graph.
    ///
    /// When several spanning trees share the minimum weight, the one returned
    /// is determined by the cached edge order (ascending weight, then input
    /// position).
    ///
    /// ```rust
    /// use spanpath::graph::{Graph, WeightedEdge};
    ///
    /// let graph = Graph::new(
    ///     vec!['a', 'b', 'c'],
    ///     vec![
    ///         WeightedEdge::new('a', 'b', 1.0),
    ///         WeightedEdge::new('b', 'c', 2.0),
    ///         WeightedEdge::new('a', 'c', 3.0),
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// let mst = graph.minimum_spanning_tree();
    /// assert_eq!(mst.len(), 2);
    /// assert_eq!(mst.total_weight(), 3.0);
    /// ```
    pub fn minimum_spanning_tree(&self) -> SpanningForest<'_, E, E::Weight> {
        let forest = GhostToken::new(|mut token| self.kruskal(&mut token));
        match forest {
            Ok(forest) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    edges = forest.len(),
                    "minimum spanning forest built"
                );
                forest
            }
            Err(err) => unreachable!("every vertex is registered exactly once: {err}"),
        }
    }

    /// Returns the number of connected components.
    ///
    /// An isolated vertex is a component of its own, so an edgeless graph has
    /// `num_vertices` components.
    pub fn connected_components(&self) -> usize {
        let components = GhostToken::new(|mut token| {
            let mut sets = BrandedDisjointSet::with_capacity(self.num_vertices());
            let mut active = ActiveDisjointSet::new(&mut sets, &mut token);
            for vertex in 0..self.num_vertices() {
                active.make_set(vertex)?;
            }
            for position in 0..self.num_edges() {
                let (a, b) = self.endpoints_at(position);
                if !active.same_set(&a, &b)? {
                    active.union(&a, &b)?;
                }
            }
            Ok::<_, DisjointSetError>(active.set_count())
        });
        match components {
            Ok(count) => count,
            Err(err) => unreachable!("every vertex is registered exactly once: {err}"),
        }
    }

    fn kruskal<'brand>(
        &self,
        token: &mut GhostToken<'brand>,
    ) -> Result<SpanningForest<'_, E, E::Weight>, DisjointSetError> {
        let mut sets: BrandedDisjointSet<'brand, &V> =
            BrandedDisjointSet::with_capacity(self.num_vertices());
        for vertex in self.vertices() {
            sets.make_set(token, vertex)?;
        }

        let mut edges = Vec::with_capacity(self.num_vertices().saturating_sub(1));
        let mut total_weight = E::Weight::zero();
        for &position in self.sorted_positions() {
            let edge = self.edge_at(position);
            let a = edge.vertex_a();
            let b = edge.vertex_b();
            if sets.find_set(token, a)? != sets.find_set(token, b)? {
                sets.union(token, a, b)?;
                total_weight = total_weight + edge.weight();
                edges.push(edge);
            }
        }

        Ok(SpanningForest {
            edges,
            total_weight,
        })
    }
}
