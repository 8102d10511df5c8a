//! Borrowing edge iterator over the flattened index.

use std::collections::{btree_map, btree_set};
use std::iter::FusedIterator;

use super::cursor::EdgeRef;
use super::storage::{EdgeEntry, EdgeSet, NodeHandle};

type Front<'a, N, E> = (&'a NodeHandle<N>, btree_set::Iter<'a, EdgeEntry<N, E>>);

/// Borrowing iterator over every edge, in traversal order.
///
/// Yields the same sequence as stepping an [`EdgeCursor`](super::EdgeCursor)
/// from `begin` to `end`, and the reverse sequence from the back.
pub struct Iter<'a, N, E> {
    sources: btree_map::Iter<'a, NodeHandle<N>, EdgeSet<N, E>>,
    front: Option<Front<'a, N, E>>,
    back: Option<Front<'a, N, E>>,
    remaining: usize,
}

impl<'a, N, E> Iter<'a, N, E> {
    pub(super) fn new(sources: btree_map::Iter<'a, NodeHandle<N>, EdgeSet<N, E>>, len: usize) -> Self {
        Self {
            sources,
            front: None,
            back: None,
            remaining: len,
        }
    }
}

impl<'a, N, E> Iterator for Iter<'a, N, E> {
    type Item = EdgeRef<'a, N, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((source, edges)) = &mut self.front {
                if let Some(edge) = edges.next() {
                    self.remaining -= 1;
                    return Some(EdgeRef::new(*source, edge));
                }
            }
            match self.sources.next() {
                Some((source, edges)) => self.front = Some((source, edges.iter())),
                None => break,
            }
        }
        // Sources exhausted: drain whatever the back half already opened.
        let (source, edges) = self.back.as_mut()?;
        let edge = edges.next()?;
        self.remaining -= 1;
        Some(EdgeRef::new(*source, edge))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N, E> DoubleEndedIterator for Iter<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((source, edges)) = &mut self.back {
                if let Some(edge) = edges.next_back() {
                    self.remaining -= 1;
                    return Some(EdgeRef::new(*source, edge));
                }
            }
            match self.sources.next_back() {
                Some((source, edges)) => self.back = Some((source, edges.iter())),
                None => break,
            }
        }
        let (source, edges) = self.front.as_mut()?;
        let edge = edges.next_back()?;
        self.remaining -= 1;
        Some(EdgeRef::new(*source, edge))
    }
}

impl<N, E> ExactSizeIterator for Iter<'_, N, E> {}

impl<N, E> FusedIterator for Iter<'_, N, E> {}

impl<N, E> Clone for Iter<'_, N, E> {
    fn clone(&self) -> Self {
        Self {
            sources: self.sources.clone(),
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}
