//! Insertion, replacement, merging and erasure.
//!
//! Every precondition is checked before the first write, so a failing call
//! leaves the graph untouched. Calls that re-point or drop edges across the
//! whole index end with a full invariant audit in debug builds; `insert_edge`
//! checks only the handle it stored.

// Counters below only feed `graph_event!`.
#![cfg_attr(not(feature = "tracing"), allow(unused_variables, unused_assignments))]

use super::cursor::{EdgeCursor, Position};
use super::storage::{EdgeEntry, EdgeSet, NodeHandle};
use super::Graph;
use crate::error::{GraphError, GraphResult};

impl<N: Ord + Clone, E: Ord + Clone> Graph<N, E> {
    /// Adds `value` as a node with no outgoing edges.
    ///
    /// Returns `false`, changing nothing, if `value` is already a node.
    pub fn insert_node(&mut self, value: N) -> bool {
        let inserted = self.index.insert(value).is_some();
        if inserted {
            graph_event!(trace, nodes = self.index.len(), "node inserted");
        }
        inserted
    }

    /// Adds the edge `src -> dst` with `weight`.
    ///
    /// Returns `Ok(false)`, changing nothing, if that exact edge already exists.
    ///
    /// # Errors
    /// [`GraphError::InsertEdge`] if `src` or `dst` is not a node.
    pub fn insert_edge(&mut self, src: &N, dst: &N, weight: E) -> GraphResult<bool> {
        let to = self.index.canonical(dst).cloned().ok_or(GraphError::InsertEdge)?;
        let edges = self.index.outgoing_mut(src).ok_or(GraphError::InsertEdge)?;
        let inserted = edges.insert(EdgeEntry::new(to.clone(), weight));
        if inserted {
            graph_event!(trace, "edge inserted");
        }
        self.index.audit_handle(&to);
        Ok(inserted)
    }

    /// Renames `old` to `new`, carrying every edge along.
    ///
    /// Edges leaving or entering `old` are re-pointed at `new`; a self-loop on
    /// `old` becomes a self-loop on `new`. Returns `Ok(false)`, changing
    /// nothing, if `new` is already a node.
    ///
    /// # Errors
    /// [`GraphError::ReplaceNode`] if `old` is not a node.
    pub fn replace_node(&mut self, old: &N, new: N) -> GraphResult<bool> {
        if !self.index.contains(old) {
            return Err(GraphError::ReplaceNode);
        }
        let Some(handle) = self.index.insert(new) else {
            return Ok(false);
        };
        let redirected = self.redirect(old, &handle);
        graph_event!(debug, redirected, "node replaced");
        self.index.audit();
        Ok(true)
    }

    /// Folds `old` into the existing node `new`, then removes `old`.
    ///
    /// Every edge touching `old` is redirected to `new`, self-loops included.
    /// A redirected edge that duplicates one `new` already has is dropped and
    /// the existing edge is kept. Merging a node into itself does nothing.
    ///
    /// # Errors
    /// [`GraphError::MergeReplaceNode`] if `old` or `new` is not a node.
    pub fn merge_replace_node(&mut self, old: &N, new: &N) -> GraphResult<()> {
        let handle = self
            .index
            .canonical(new)
            .cloned()
            .filter(|_| self.index.contains(old))
            .ok_or(GraphError::MergeReplaceNode)?;
        if old == new {
            return Ok(());
        }
        let redirected = self.redirect(old, &handle);
        graph_event!(debug, redirected, "node merged");
        self.index.audit();
        Ok(())
    }

    /// Moves every edge touching `old` onto `new`, then unregisters `old`.
    ///
    /// `new` must already be registered. Returns how many edges were moved,
    /// counting the ones that collapsed into an existing duplicate.
    fn redirect(&mut self, old: &N, new: &NodeHandle<N>) -> usize {
        let Some((old_handle, outgoing)) = self.index.remove(old) else {
            return 0;
        };
        let retarget = |to: NodeHandle<N>| if to.ptr_eq(&old_handle) { new.clone() } else { to };

        let mut redirected = outgoing.len();
        let moved: Vec<_> = outgoing
            .into_iter()
            .map(|edge| EdgeEntry::new(retarget(edge.to), edge.weight))
            .collect();
        if let Some(edges) = self.index.outgoing_mut(new.value()) {
            edges.extend(moved);
        }

        for edges in self.index.edge_sets_mut() {
            if !edges.iter().any(|edge| edge.to.ptr_eq(&old_handle)) {
                continue;
            }
            let (incoming, kept): (EdgeSet<N, E>, EdgeSet<N, E>) = std::mem::take(edges)
                .into_iter()
                .partition(|edge| edge.to.ptr_eq(&old_handle));
            *edges = kept;
            redirected += incoming.len();
            edges.extend(
                incoming
                    .into_iter()
                    .map(|edge| EdgeEntry::new(new.clone(), edge.weight)),
            );
        }
        redirected
    }

    /// Removes `value`, its outgoing edges, and every edge that targets it.
    ///
    /// Returns `false` if `value` is not a node.
    pub fn erase_node(&mut self, value: &N) -> bool {
        let Some((handle, outgoing)) = self.index.remove(value) else {
            return false;
        };
        let mut removed = outgoing.len();
        for edges in self.index.edge_sets_mut() {
            let before = edges.len();
            edges.retain(|edge| !edge.to.ptr_eq(&handle));
            removed += before - edges.len();
        }
        graph_event!(debug, removed, "node erased");
        self.index.audit();
        true
    }

    /// Removes the edge `src -> dst` with `weight`.
    ///
    /// Returns `Ok(false)` if no such edge exists.
    ///
    /// # Errors
    /// [`GraphError::EraseEdge`] if `src` or `dst` is not a node.
    pub fn erase_edge(&mut self, src: &N, dst: &N, weight: &E) -> GraphResult<bool> {
        let to = self.index.canonical(dst).cloned().ok_or(GraphError::EraseEdge)?;
        let edges = self.index.outgoing_mut(src).ok_or(GraphError::EraseEdge)?;
        let removed = edges.remove(&EdgeEntry::new(to, weight.clone()));
        if removed {
            graph_event!(trace, "edge erased");
        }
        Ok(removed)
    }

    /// Removes the edge under `cursor` and returns a cursor at the next edge.
    ///
    /// Erasing at the end position does nothing and returns the end cursor.
    pub fn erase_edge_at(&mut self, cursor: EdgeCursor<N, E>) -> EdgeCursor<N, E> {
        let mut next = cursor.clone();
        next.move_next(self);
        if let Position::Edge { source, edge } = &cursor.position {
            if let Some(edges) = self.index.outgoing_mut(source.value()) {
                edges.remove(edge);
            }
        }
        next
    }

    /// Removes every edge in the half-open traversal range `[from, to)`.
    ///
    /// Returns a cursor at `to`'s position. If `to` does not follow `from`,
    /// erasure stops at the end of the traversal.
    pub fn erase_edge_range(&mut self, from: EdgeCursor<N, E>, to: &EdgeCursor<N, E>) -> EdgeCursor<N, E> {
        let mut cursor = from;
        let mut removed = 0usize;
        while cursor != *to && !cursor.is_end() {
            cursor = self.erase_edge_at(cursor);
            removed += 1;
        }
        graph_event!(debug, removed, "edge range erased");
        cursor
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.index.clear();
        graph_event!(debug, "graph cleared");
    }
}
