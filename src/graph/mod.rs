//! Ordered, directed, weighted multigraph.
//!
//! Vertical split:
//! - `storage`: node registry + edge index
//! - `mutate`: insertion, replacement, merging, erasure
//! - `cursor`: flattening bidirectional edge cursor
//! - `iter`: borrowing edge iterator
//! - `report`: `Display` / `Debug` rendering
//! - `serde_impl`: flat serde representation
//! - `tests`: module tests

mod cursor;
mod iter;
mod mutate;
mod report;
mod serde_impl;
mod storage;

pub use cursor::{EdgeCursor, EdgeRef, EdgeValue};
pub use iter::Iter;

use crate::error::{GraphError, GraphResult};
use storage::{EdgeEntry, EdgeIndex};

/// A directed, weighted graph with ordered nodes and ordered multi-edges.
///
/// Nodes are distinct values of `N`. An edge connects two existing nodes and
/// carries a weight of `E`; several edges may join the same ordered pair as
/// long as their weights differ, and self-loops are allowed.
///
/// Nodes are kept in ascending order, and the outgoing edges of each node in
/// ascending `(destination, weight)` order. [`iter`](Self::iter) and the
/// [`EdgeCursor`] visit edges in ascending `(source, destination, weight)`
/// order.
///
/// Node handles are reference counted without atomics, so a graph is neither
/// `Send` nor `Sync`.
pub struct Graph<N, E> {
    pub(crate) index: EdgeIndex<N, E>,
}

impl<N, E> Graph<N, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            index: EdgeIndex::new(),
        }
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Number of edges. Walks every edge set.
    pub fn edge_count(&self) -> usize {
        self.index.edge_count()
    }

    /// Borrowing iterator over every edge in traversal order.
    pub fn iter(&self) -> Iter<'_, N, E> {
        Iter::new(self.index.iter(), self.index.edge_count())
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Graph<N, E> {
    /// Returns `true` if `value` is a node.
    #[inline]
    pub fn is_node(&self, value: &N) -> bool {
        self.index.contains(value)
    }

    /// Returns `true` if at least one edge runs from `src` to `dst`.
    ///
    /// A missing endpoint is not an error here; it simply means "not connected".
    pub fn is_connected(&self, src: &N, dst: &N) -> bool {
        self.index
            .outgoing(src)
            .is_some_and(|edges| edges_to(edges, dst).next().is_some())
    }

    /// All node values in ascending order.
    pub fn nodes(&self) -> Vec<N> {
        self.index
            .iter()
            .map(|(node, _)| node.value().clone())
            .collect()
    }

    /// Weights of every `src -> dst` edge in ascending order.
    ///
    /// Empty if both nodes exist but are not connected.
    ///
    /// # Errors
    /// [`GraphError::Weights`] if `src` or `dst` is not a node.
    pub fn weights(&self, src: &N, dst: &N) -> GraphResult<Vec<E>> {
        let edges = self
            .index
            .outgoing(src)
            .filter(|_| self.index.contains(dst))
            .ok_or(GraphError::Weights)?;
        Ok(edges_to(edges, dst).map(|edge| edge.weight.clone()).collect())
    }

    /// Cursor at the `src -> dst` edge with `weight`.
    ///
    /// Returns the end cursor if either endpoint is missing or no such edge
    /// exists.
    pub fn find(&self, src: &N, dst: &N, weight: &E) -> EdgeCursor<N, E> {
        let (Some((source, edges)), Some(to)) = (self.index.entry(src), self.index.canonical(dst)) else {
            return EdgeCursor::end();
        };
        let probe = EdgeEntry::new(to.clone(), weight.clone());
        match edges.get(&probe) {
            Some(edge) => EdgeCursor::at(source.clone(), edge.clone()),
            None => EdgeCursor::end(),
        }
    }

    /// Distinct destinations reachable in one step from `src`, ascending.
    ///
    /// # Errors
    /// [`GraphError::Connections`] if `src` is not a node.
    pub fn connections(&self, src: &N) -> GraphResult<Vec<N>> {
        let edges = self.index.outgoing(src).ok_or(GraphError::Connections)?;
        let mut out: Vec<N> = edges.iter().map(|edge| edge.to.value().clone()).collect();
        // Edge sets are sorted by destination first, so duplicates are adjacent.
        out.dedup();
        Ok(out)
    }

    /// Cursor at the first edge, or the end cursor if there are no edges.
    pub fn begin(&self) -> EdgeCursor<N, E> {
        EdgeCursor::first(&self.index)
    }

    /// The one-past-the-last cursor.
    #[inline]
    pub fn end(&self) -> EdgeCursor<N, E> {
        EdgeCursor::end()
    }
}

/// Edges of one (sorted) set whose destination is `dst`.
fn edges_to<'a, N: Ord, E>(
    edges: &'a storage::EdgeSet<N, E>,
    dst: &'a N,
) -> impl Iterator<Item = &'a EdgeEntry<N, E>> + 'a {
    edges
        .iter()
        .skip_while(move |edge| edge.to.value() < dst)
        .take_while(move |edge| edge.to.value() == dst)
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Clone for Graph<N, E> {
    /// Deep copy: nodes and edges are duplicated and the copy's edges point at
    /// the copy's own node handles.
    fn clone(&self) -> Self {
        Self {
            index: self.index.deep_clone(),
        }
    }
}

impl<N: Ord + Clone, E: Ord + Clone> FromIterator<N> for Graph<N, E> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Extend<N> for Graph<N, E> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for value in iter {
            self.insert_node(value);
        }
    }
}

impl<N: Ord + Clone, E: Ord + Clone, const K: usize> From<[N; K]> for Graph<N, E> {
    fn from(values: [N; K]) -> Self {
        values.into_iter().collect()
    }
}

impl<N: PartialEq, E: PartialEq> PartialEq for Graph<N, E> {
    /// Same nodes in the same order, and per node the same ordered sequence of
    /// `(destination, weight)` pairs.
    fn eq(&self, other: &Self) -> bool {
        self.index.len() == other.index.len()
            && self
                .index
                .iter()
                .zip(other.index.iter())
                .all(|((node, edges), (other_node, other_edges))| {
                    node == other_node && edges == other_edges
                })
    }
}

impl<N: Eq, E: Eq> Eq for Graph<N, E> {}

impl<'a, N, E> IntoIterator for &'a Graph<N, E> {
    type Item = EdgeRef<'a, N, E>;
    type IntoIter = Iter<'a, N, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
