//! Textual report (`Display`) and `Debug` rendering.

use std::fmt;

use super::Graph;

impl<N: fmt::Display, E: fmt::Display> fmt::Display for Graph<N, E> {
    /// Human-readable report, one block per node in ascending order:
    ///
    /// ```text
    /// 2 (
    ///   1 | 1
    ///   4 | 2
    /// )
    /// ```
    ///
    /// A node without outgoing edges prints an empty block.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, edges) in self.index.iter() {
            writeln!(f, "{} (", node.value())?;
            for edge in edges {
                writeln!(f, "  {} | {}", edge.to.value(), edge.weight)?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

impl<N: fmt::Debug, E: fmt::Debug> fmt::Debug for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.index.iter().map(|(node, edges)| {
                let pairs: Vec<_> = edges.iter().map(|edge| (edge.to.value(), &edge.weight)).collect();
                (node, pairs)
            }))
            .finish()
    }
}
