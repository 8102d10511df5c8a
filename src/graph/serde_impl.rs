//! Flat serde representation: `{ "nodes": [..], "edges": [{from, to, weight}, ..] }`.
//!
//! Deserializing replays the content through `insert_node` / `insert_edge`, so
//! the usual invariants apply: duplicates collapse and an edge naming an unknown
//! node is rejected.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cursor::{EdgeRef, EdgeValue};
use super::Graph;

#[derive(Serialize)]
struct GraphView<'a, N, E> {
    nodes: Vec<&'a N>,
    edges: Vec<EdgeRef<'a, N, E>>,
}

#[derive(Deserialize)]
struct GraphRepr<N, E> {
    nodes: Vec<N>,
    edges: Vec<EdgeValue<N, E>>,
}

impl<N: Serialize, E: Serialize> Serialize for Graph<N, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GraphView {
            nodes: self.index.iter().map(|(node, _)| node.value()).collect(),
            edges: self.iter().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de, N, E> Deserialize<'de> for Graph<N, E>
where
    N: Ord + Clone + Deserialize<'de>,
    E: Ord + Clone + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GraphRepr::<N, E>::deserialize(deserializer)?;
        let mut graph: Graph<N, E> = repr.nodes.into_iter().collect();
        for edge in repr.edges {
            graph
                .insert_edge(&edge.from, &edge.to, edge.weight)
                .map_err(serde::de::Error::custom)?;
        }
        Ok(graph)
    }
}
