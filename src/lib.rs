//! # `ordgraph` - Ordered Weighted Multigraph
//!
//! A generic container for directed, weighted graphs that allow several edges
//! between the same ordered pair of nodes, provided their weights differ.
//! Self-loops are permitted.
//!
//! ## Data Model
//!
//! - **Node registry**: every distinct node value is stored exactly once, behind a
//!   shared reference-counted handle.
//! - **Edge index**: each node owns an ordered set of outgoing edges. An edge is a
//!   `(destination handle, weight)` pair; the source is implied by the set that
//!   holds it.
//! - **Edge cursor**: a detached, bidirectional position over the edge index seen
//!   as one flat sequence of `(source, destination, weight)` triples.
//!
//! ## Ordering Guarantees
//!
//! Nothing depends on insertion order. Nodes are ordered by value, and the edges
//! of a node are ordered by `(destination, weight)`. Full traversal therefore
//! visits edges in ascending `(source, destination, weight)` order, and sources
//! without outgoing edges contribute nothing.
//!
//! ## Invariants
//!
//! **Invariant 1 (Registry/Index agreement)**: a value is a node exactly when it
//! owns an entry in the edge index, possibly empty.
//!
//! **Invariant 2 (Canonical handles)**: every edge destination is the registry's
//! own handle for that value, never a private copy.
//!
//! **Invariant 3 (No duplicate edges)**: no source holds two edges with the same
//! destination and weight.
//!
//! Every mutator re-establishes these before returning; debug builds audit them.
//!
//! ## Errors
//!
//! Referencing a missing node where the operation requires it is a
//! [`GraphError`]. Anticipated outcomes such as "already present" or "not found"
//! are reported as `bool`.
//!
//! ## Example
//!
//! ```rust
//! use ordgraph::Graph;
//!
//! let mut g: Graph<&str, i32> = Graph::from(["a", "b", "c"]);
//! g.insert_edge(&"a", &"b", 1)?;
//! g.insert_edge(&"b", &"a", 2)?;
//! g.insert_edge(&"a", &"c", 3)?;
//!
//! assert!(g.replace_node(&"a", "x")?);
//! assert_eq!(g.nodes(), vec!["b", "c", "x"]);
//! assert!(g.is_connected(&"x", &"b"));
//!
//! let triples: Vec<_> = g.iter().map(|e| e.to_value()).collect();
//! assert_eq!(triples.len(), 3);
//! # Ok::<(), ordgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod graph;

pub use error::{GraphError, GraphResult};
pub use graph::{EdgeCursor, EdgeRef, EdgeValue, Graph, Iter};
