//! Flattening edge cursor.
//!
//! The edge index is a map of ordered sets; the cursor presents it as one
//! ordered sequence of `(source, destination, weight)` triples. A position is
//! an explicit state machine, `Edge(source, edge)` or `End`, holding owned
//! handles rather than borrowed iterators. Each step re-derives its neighbour
//! from the graph with range queries, so a cursor can be handed back to the
//! graph for erasure and stepping never reads freed state.

use std::fmt;
use std::ops::Bound;

use serde::{Deserialize, Serialize};

use super::storage::{EdgeEntry, EdgeIndex, NodeHandle};
use super::Graph;

/// Borrowed view of one edge as a `(from, to, weight)` triple.
#[derive(Serialize)]
pub struct EdgeRef<'a, N, E> {
    /// Source node.
    pub from: &'a N,
    /// Destination node.
    pub to: &'a N,
    /// Edge weight.
    pub weight: &'a E,
}

impl<'a, N, E> EdgeRef<'a, N, E> {
    #[inline]
    pub(crate) fn new(from: &'a NodeHandle<N>, edge: &'a EdgeEntry<N, E>) -> Self {
        Self {
            from: from.value(),
            to: edge.to.value(),
            weight: &edge.weight,
        }
    }

    /// Unpacks the triple.
    #[inline]
    pub fn into_tuple(self) -> (&'a N, &'a N, &'a E) {
        (self.from, self.to, self.weight)
    }

    /// Clones the triple into an owned [`EdgeValue`].
    pub fn to_value(&self) -> EdgeValue<N, E>
    where
        N: Clone,
        E: Clone,
    {
        EdgeValue {
            from: self.from.clone(),
            to: self.to.clone(),
            weight: self.weight.clone(),
        }
    }
}

impl<N, E> Clone for EdgeRef<'_, N, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, E> Copy for EdgeRef<'_, N, E> {}

impl<N: PartialEq, E: PartialEq> PartialEq for EdgeRef<'_, N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.weight == other.weight
    }
}

impl<N: Eq, E: Eq> Eq for EdgeRef<'_, N, E> {}

impl<N: fmt::Debug, E: fmt::Debug> fmt::Debug for EdgeRef<'_, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeRef")
            .field("from", self.from)
            .field("to", self.to)
            .field("weight", self.weight)
            .finish()
    }
}

/// Owned `(from, to, weight)` triple.
///
/// Field order gives the derived ordering the same shape as traversal order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeValue<N, E> {
    /// Source node.
    pub from: N,
    /// Destination node.
    pub to: N,
    /// Edge weight.
    pub weight: E,
}

impl<N, E> EdgeValue<N, E> {
    /// Builds a triple.
    pub fn new(from: N, to: N, weight: E) -> Self {
        Self { from, to, weight }
    }
}

impl<N, E> From<(N, N, E)> for EdgeValue<N, E> {
    fn from((from, to, weight): (N, N, E)) -> Self {
        Self { from, to, weight }
    }
}

pub(crate) enum Position<N, E> {
    Edge {
        source: NodeHandle<N>,
        edge: EdgeEntry<N, E>,
    },
    End,
}

/// A bidirectional position over every edge of a [`Graph`].
///
/// Obtained from [`Graph::begin`], [`Graph::end`] or [`Graph::find`] and moved
/// with [`move_next`](Self::move_next) / [`move_prev`](Self::move_prev). The
/// cursor owns its position, so it does not borrow the graph between steps.
///
/// Inserting or removing nodes or edges invalidates a live cursor, except for
/// the cursor returned by [`Graph::erase_edge_at`]. Stepping an invalidated
/// cursor is memory-safe and continues from the nearest position by value, but
/// which edge it lands on is unspecified.
pub struct EdgeCursor<N, E> {
    pub(super) position: Position<N, E>,
}

impl<N, E> EdgeCursor<N, E> {
    /// The one-past-the-last position.
    #[inline]
    pub(crate) fn end() -> Self {
        Self {
            position: Position::End,
        }
    }

    #[inline]
    pub(crate) fn at(source: NodeHandle<N>, edge: EdgeEntry<N, E>) -> Self {
        Self {
            position: Position::Edge { source, edge },
        }
    }

    /// Returns `true` at the one-past-the-last position.
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }

    /// The edge under the cursor, or `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<EdgeRef<'_, N, E>> {
        match &self.position {
            Position::Edge { source, edge } => Some(EdgeRef::new(source, edge)),
            Position::End => None,
        }
    }

    /// Owned copy of the edge under the cursor, or `None` at the end position.
    pub fn to_value(&self) -> Option<EdgeValue<N, E>>
    where
        N: Clone,
        E: Clone,
    {
        self.get().map(|edge| edge.to_value())
    }
}

impl<N: Ord, E: Ord + Clone> EdgeCursor<N, E> {
    /// Cursor at the first edge of `index`, or the end position.
    pub(crate) fn first(index: &EdgeIndex<N, E>) -> Self {
        let first = index
            .iter()
            .find_map(|(source, edges)| edges.first().map(|edge| (source, edge)));
        Self::from_slot(first)
    }

    fn from_slot(slot: Option<(&NodeHandle<N>, &EdgeEntry<N, E>)>) -> Self {
        match slot {
            Some((source, edge)) => Self::at(source.clone(), edge.clone()),
            None => Self::end(),
        }
    }

    /// Advances to the next edge in traversal order.
    ///
    /// Leaves the current source once its edges are exhausted, skipping
    /// sources without outgoing edges. Past the last edge the cursor becomes
    /// the end position; advancing the end position does nothing.
    pub fn move_next(&mut self, graph: &Graph<N, E>) {
        let Position::Edge { source, edge } = &self.position else {
            return;
        };
        let next = successor(&graph.index, source.value(), edge);
        *self = Self::from_slot(next);
    }

    /// Retreats to the previous edge in traversal order.
    ///
    /// From the end position this lands on the last edge. At the first edge,
    /// or on a graph without edges, the cursor stays where it is.
    pub fn move_prev(&mut self, graph: &Graph<N, E>) {
        let prev = match &self.position {
            Position::Edge { source, edge } => predecessor(&graph.index, source.value(), edge),
            Position::End => last(&graph.index),
        };
        if prev.is_some() {
            *self = Self::from_slot(prev);
        }
    }
}

fn successor<'g, N: Ord, E: Ord>(
    index: &'g EdgeIndex<N, E>,
    source: &N,
    edge: &EdgeEntry<N, E>,
) -> Option<(&'g NodeHandle<N>, &'g EdgeEntry<N, E>)> {
    let within = index.entry(source).and_then(|(handle, edges)| {
        edges
            .range::<EdgeEntry<N, E>, _>((Bound::Excluded(edge), Bound::Unbounded))
            .next()
            .map(|next| (handle, next))
    });
    within.or_else(|| {
        index
            .sources_after(source)
            .find_map(|(handle, edges)| edges.first().map(|first| (handle, first)))
    })
}

fn predecessor<'g, N: Ord, E: Ord>(
    index: &'g EdgeIndex<N, E>,
    source: &N,
    edge: &EdgeEntry<N, E>,
) -> Option<(&'g NodeHandle<N>, &'g EdgeEntry<N, E>)> {
    let within = index.entry(source).and_then(|(handle, edges)| {
        edges
            .range::<EdgeEntry<N, E>, _>((Bound::Unbounded, Bound::Excluded(edge)))
            .next_back()
            .map(|prev| (handle, prev))
    });
    within.or_else(|| {
        index
            .sources_before(source)
            .rev()
            .find_map(|(handle, edges)| edges.last().map(|last| (handle, last)))
    })
}

fn last<N: Ord, E: Ord>(index: &EdgeIndex<N, E>) -> Option<(&NodeHandle<N>, &EdgeEntry<N, E>)> {
    index
        .iter()
        .rev()
        .find_map(|(handle, edges)| edges.last().map(|last| (handle, last)))
}

impl<N, E: Clone> Clone for EdgeCursor<N, E> {
    fn clone(&self) -> Self {
        match &self.position {
            Position::Edge { source, edge } => Self::at(source.clone(), edge.clone()),
            Position::End => Self::end(),
        }
    }
}

impl<N: PartialEq, E: PartialEq> PartialEq for EdgeCursor<N, E> {
    /// Two cursors are equal when both are at the end, or both designate the
    /// same source and the same edge.
    fn eq(&self, other: &Self) -> bool {
        match (&self.position, &other.position) {
            (Position::End, Position::End) => true,
            (
                Position::Edge { source, edge },
                Position::Edge {
                    source: other_source,
                    edge: other_edge,
                },
            ) => source == other_source && edge == other_edge,
            _ => false,
        }
    }
}

impl<N: Eq, E: Eq> Eq for EdgeCursor<N, E> {}

impl<N: fmt::Debug, E: fmt::Debug> fmt::Debug for EdgeCursor<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(edge) => f.debug_tuple("EdgeCursor").field(&edge).finish(),
            None => f.write_str("EdgeCursor(End)"),
        }
    }
}
