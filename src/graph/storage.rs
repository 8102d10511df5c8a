//! Node registry and edge index.
//!
//! The registry is the ordered key set of the edge index: a value is a node
//! exactly when it owns an entry in the index, possibly an empty one. Edge
//! destinations are clones of the registry's handle, never private copies.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::btree_map::{self, Range};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::Bound;
use std::rc::Rc;

/// Shared handle to a node value.
///
/// Ordering and equality delegate to the value. Identity (`ptr_eq`) is what the
/// canonical-handle invariant is audited against.
pub(crate) struct NodeHandle<N>(Rc<N>);

impl<N> NodeHandle<N> {
    #[inline]
    pub(crate) fn new(value: N) -> Self {
        Self(Rc::new(value))
    }

    #[inline]
    pub(crate) fn value(&self) -> &N {
        &self.0
    }

    #[inline]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<N> Clone for NodeHandle<N> {
    #[inline]
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<N: PartialEq> PartialEq for NodeHandle<N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<N: Eq> Eq for NodeHandle<N> {}

impl<N: PartialOrd> PartialOrd for NodeHandle<N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (*self.0).partial_cmp(&*other.0)
    }
}

impl<N: Ord> Ord for NodeHandle<N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (*self.0).cmp(&*other.0)
    }
}

impl<N> Borrow<N> for NodeHandle<N> {
    #[inline]
    fn borrow(&self) -> &N {
        &self.0
    }
}

impl<N: fmt::Debug> fmt::Debug for NodeHandle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (*self.0).fmt(f)
    }
}

/// An outgoing edge: destination handle plus weight.
///
/// Ordered by destination value, then weight, which makes `(to, weight)` the
/// duplicate key within one source's edge set.
pub(crate) struct EdgeEntry<N, E> {
    pub(crate) to: NodeHandle<N>,
    pub(crate) weight: E,
}

impl<N, E> EdgeEntry<N, E> {
    #[inline]
    pub(crate) fn new(to: NodeHandle<N>, weight: E) -> Self {
        Self { to, weight }
    }
}

impl<N, E: Clone> Clone for EdgeEntry<N, E> {
    fn clone(&self) -> Self {
        Self {
            to: self.to.clone(),
            weight: self.weight.clone(),
        }
    }
}

impl<N: PartialEq, E: PartialEq> PartialEq for EdgeEntry<N, E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to == other.to && self.weight == other.weight
    }
}

impl<N: Eq, E: Eq> Eq for EdgeEntry<N, E> {}

impl<N: Ord, E: Ord> PartialOrd for EdgeEntry<N, E> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, E: Ord> Ord for EdgeEntry<N, E> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.to
            .cmp(&other.to)
            .then_with(|| self.weight.cmp(&other.weight))
    }
}

impl<N: fmt::Debug, E: fmt::Debug> fmt::Debug for EdgeEntry<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Edge").field(&self.to).field(&self.weight).finish()
    }
}

/// Outgoing edges of one source node.
pub(crate) type EdgeSet<N, E> = BTreeSet<EdgeEntry<N, E>>;

/// Ordered mapping from node handle to its outgoing edge set.
pub(crate) struct EdgeIndex<N, E> {
    map: BTreeMap<NodeHandle<N>, EdgeSet<N, E>>,
}

impl<N, E> EdgeIndex<N, E> {
    pub(crate) fn new() -> Self {
        Self { map: BTreeMap::new() }
    }

    /// Number of nodes in the registry.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.map.values().map(BTreeSet::len).sum()
    }

    #[inline]
    pub(crate) fn iter(&self) -> btree_map::Iter<'_, NodeHandle<N>, EdgeSet<N, E>> {
        self.map.iter()
    }

    #[inline]
    pub(crate) fn edge_sets_mut(&mut self) -> btree_map::ValuesMut<'_, NodeHandle<N>, EdgeSet<N, E>> {
        self.map.values_mut()
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}

impl<N: Ord, E: Ord> EdgeIndex<N, E> {
    #[inline]
    pub(crate) fn contains(&self, value: &N) -> bool {
        self.map.contains_key(value)
    }

    /// The registry's handle for `value`.
    #[inline]
    pub(crate) fn canonical(&self, value: &N) -> Option<&NodeHandle<N>> {
        self.map.get_key_value(value).map(|(handle, _)| handle)
    }

    #[inline]
    pub(crate) fn entry(&self, value: &N) -> Option<(&NodeHandle<N>, &EdgeSet<N, E>)> {
        self.map.get_key_value(value)
    }

    #[inline]
    pub(crate) fn outgoing(&self, value: &N) -> Option<&EdgeSet<N, E>> {
        self.map.get(value)
    }

    #[inline]
    pub(crate) fn outgoing_mut(&mut self, value: &N) -> Option<&mut EdgeSet<N, E>> {
        self.map.get_mut(value)
    }

    /// Registers `value` with an empty edge set.
    ///
    /// Returns the new canonical handle, or `None` if `value` was already a node.
    pub(crate) fn insert(&mut self, value: N) -> Option<NodeHandle<N>> {
        if self.map.contains_key(&value) {
            return None;
        }
        let handle = NodeHandle::new(value);
        self.map.insert(handle.clone(), BTreeSet::new());
        Some(handle)
    }

    /// Unregisters `value`, handing back its handle and outgoing edges.
    ///
    /// Edges elsewhere that still target the node are left for the caller.
    #[inline]
    pub(crate) fn remove(&mut self, value: &N) -> Option<(NodeHandle<N>, EdgeSet<N, E>)> {
        self.map.remove_entry(value)
    }

    /// Sources strictly after `value`, in ascending order.
    #[inline]
    pub(crate) fn sources_after(&self, value: &N) -> Range<'_, NodeHandle<N>, EdgeSet<N, E>> {
        self.map
            .range::<N, _>((Bound::Excluded(value), Bound::Unbounded))
    }

    /// Sources strictly before `value`, in ascending order.
    #[inline]
    pub(crate) fn sources_before(&self, value: &N) -> Range<'_, NodeHandle<N>, EdgeSet<N, E>> {
        self.map
            .range::<N, _>((Bound::Unbounded, Bound::Excluded(value)))
    }

    /// Checks one destination handle against the registry in debug builds.
    #[inline]
    pub(crate) fn audit_handle(&self, handle: &NodeHandle<N>) {
        debug_assert!(
            self.canonical(handle.value())
                .is_some_and(|canonical| canonical.ptr_eq(handle)),
            "graph invariant violated: edge holds a non-canonical node handle"
        );
    }

    /// Checks the registry/index invariants in debug builds. Walks every edge.
    pub(crate) fn audit(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        for edge in self.map.values().flatten() {
            let canonical = self.canonical(edge.to.value());
            debug_assert!(
                canonical.is_some(),
                "graph invariant violated: edge targets a node missing from the registry"
            );
            debug_assert!(
                canonical.is_some_and(|handle| handle.ptr_eq(&edge.to)),
                "graph invariant violated: edge holds a non-canonical node handle"
            );
        }
    }
}

impl<N, E> Default for EdgeIndex<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Ord + Clone, E: Ord + Clone> EdgeIndex<N, E> {
    /// Duplicates every node and edge with fresh handles.
    ///
    /// The copy shares no `Rc` with `self`; destinations are re-canonicalized
    /// against the copy's own registry.
    pub(crate) fn deep_clone(&self) -> Self {
        let mut copy = Self::new();
        for source in self.map.keys() {
            copy.insert(source.value().clone());
        }
        for (source, edges) in &self.map {
            let cloned: EdgeSet<N, E> = edges
                .iter()
                .filter_map(|edge| {
                    copy.canonical(edge.to.value())
                        .map(|to| EdgeEntry::new(to.clone(), edge.weight.clone()))
                })
                .collect();
            if let Some(slot) = copy.outgoing_mut(source.value()) {
                *slot = cloned;
            }
        }
        copy.audit();
        copy
    }
}
