//! An immutable, undirected, weighted multigraph built from an edge list.
//!
//! Vertices are caller-chosen hashable values mapped to dense indices; each
//! vertex owns the list of incident edge positions. Every edge lives once in
//! `edges` and is referenced from both endpoints' lists (once, for a
//! self-loop). The ascending-weight order of all edges is computed at
//! construction and shared by every spanning-tree query.

use crate::collections::top_k_sort;
use crate::error::{GraphError, InvalidEdgeReason, Result};
use crate::graph::edge::Edge;
use core::borrow::Borrow;
use core::hash::Hash;
use num_traits::{Float, Zero};
use std::collections::HashMap;

/// An undirected weighted graph, possibly disconnected, with self-loops and
/// parallel edges allowed.
///
/// The graph cannot be modified after construction, so any number of queries
/// may run against it concurrently.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n + m \log m)\) | Indexes vertices, validates edges, sorts once |
/// | `num_vertices`/`num_edges` | \(O(1)\) | |
/// | `incident_edges`/`degree` | \(O(1)\) | One hash lookup |
/// | `minimum_spanning_tree` | \(O(m\,\alpha(n))\) | Reuses the cached sort |
/// | `shortest_path` | \(O(m \log_4 m)\) | Lazy deletion, no decrease-key |
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    /// Incident edge positions per vertex index.
    adjacency: Vec<Vec<usize>>,
    edges: Vec<E>,
    /// Vertex indices of each edge's endpoints, parallel to `edges`.
    endpoints: Vec<(usize, usize)>,
    /// Edge positions in ascending weight order; ties keep input order.
    sorted: Vec<usize>,
}

/// Sort key for the cached edge order: weight first, then input position.
#[derive(PartialEq, PartialOrd)]
struct SortKey<W> {
    weight: W,
    position: usize,
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Edge<V>,
{
    /// Builds a graph from a vertex sequence and an edge sequence.
    ///
    /// Fails with [`GraphError::DuplicateVertex`] if a vertex repeats, and with
    /// [`GraphError::InvalidEdge`] if an edge has a negative or non-finite
    /// weight or names a vertex outside `vertices`.
    pub fn new(vertices: Vec<V>, edges: Vec<E>) -> Result<Self> {
        let mut index = HashMap::with_capacity(vertices.len());
        for (position, vertex) in vertices.iter().enumerate() {
            if index.insert(vertex.clone(), position).is_some() {
                #[cfg(feature = "tracing")]
                tracing::warn!(position, "rejected duplicate vertex");
                return Err(GraphError::DuplicateVertex { index: position });
            }
        }

        let mut adjacency = vec![Vec::new(); vertices.len()];
        let mut endpoints = Vec::with_capacity(edges.len());
        for (position, edge) in edges.iter().enumerate() {
            let (a, b) = Self::validate(&index, position, edge)?;
            adjacency[a].push(position);
            if a != b {
                adjacency[b].push(position);
            }
            endpoints.push((a, b));
        }

        let keys = edges.iter().enumerate().map(|(position, edge)| SortKey {
            weight: edge.weight(),
            position,
        });
        let sorted = match top_k_sort(edges.len(), keys) {
            Ok(keys) => keys.into_iter().map(|key| key.position).collect(),
            Err(err) => unreachable!("validated weights always order: {err}"),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            "graph constructed"
        );

        Ok(Self {
            vertices,
            index,
            adjacency,
            edges,
            endpoints,
            sorted,
        })
    }

    /// Builds a graph from unordered collections, such as sets.
    ///
    /// The collections are drained into sequences in iteration order and
    /// passed to [`Graph::new`].
    pub fn from_sets<IV, IE>(vertices: IV, edges: IE) -> Result<Self>
    where
        IV: IntoIterator<Item = V>,
        IE: IntoIterator<Item = E>,
    {
        Self::new(vertices.into_iter().collect(), edges.into_iter().collect())
    }

    fn validate(
        index: &HashMap<V, usize>,
        position: usize,
        edge: &E,
    ) -> Result<(usize, usize)> {
        let invalid = |reason| {
            #[cfg(feature = "tracing")]
            tracing::warn!(position, %reason, "rejected edge");
            GraphError::InvalidEdge {
                index: position,
                reason,
            }
        };

        let weight = edge.weight();
        if !weight.is_finite() || weight < E::Weight::zero() {
            return Err(invalid(InvalidEdgeReason::BadWeight));
        }
        let a = *index
            .get(edge.vertex_a())
            .ok_or_else(|| invalid(InvalidEdgeReason::UnknownVertexA))?;
        let b = *index
            .get(edge.vertex_b())
            .ok_or_else(|| invalid(InvalidEdgeReason::UnknownVertexB))?;
        Ok((a, b))
    }

    /// Returns `true` if `vertex` belongs to the graph.
    pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(vertex)
    }

    /// Returns the edges incident to `vertex`, in input order.
    ///
    /// A self-loop appears once.
    pub fn incident_edges<Q>(&self, vertex: &Q) -> Result<impl ExactSizeIterator<Item = &E> + '_>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let id = self.vertex_index(vertex).ok_or(GraphError::UnknownVertex)?;
        Ok(self.adjacency[id].iter().map(move |&e| &self.edges[e]))
    }

    /// Returns the number of edges incident to `vertex`.
    pub fn degree<Q>(&self, vertex: &Q) -> Result<usize>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let id = self.vertex_index(vertex).ok_or(GraphError::UnknownVertex)?;
        Ok(self.adjacency[id].len())
    }

    pub(crate) fn vertex_index<Q>(&self, vertex: &Q) -> Option<usize>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(vertex).copied()
    }
}

impl<V, E> Graph<V, E> {
    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges, counting parallel edges and self-loops.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the vertices in input order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns the edges in input order.
    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// Returns all edges in ascending weight order.
    ///
    /// Edges of equal weight keep their input order.
    pub fn sorted_edges(&self) -> impl ExactSizeIterator<Item = &E> + '_ {
        self.sorted.iter().map(move |&e| &self.edges[e])
    }

    pub(crate) fn sorted_positions(&self) -> &[usize] {
        &self.sorted
    }

    pub(crate) fn incident(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    pub(crate) fn edge_at(&self, position: usize) -> &E {
        &self.edges[position]
    }

    pub(crate) fn endpoints_at(&self, position: usize) -> (usize, usize) {
        self.endpoints[position]
    }

    /// The endpoint of edge `position` opposite vertex index `from`.
    pub(crate) fn opposite(&self, position: usize, from: usize) -> usize {
        let (a, b) = self.endpoints[position];
        if a == from {
            b
        } else {
            a
        }
    }
}
