//! Constructors, modifiers and accessors of `Graph`.

use ordgraph::{EdgeValue, Graph, GraphError};

type G = Graph<&'static str, i32>;

fn abc() -> G {
    let mut g = G::from(["a", "b", "c"]);
    assert!(g.insert_edge(&"a", &"b", 1).unwrap());
    assert!(g.insert_edge(&"b", &"a", 2).unwrap());
    assert!(g.insert_edge(&"a", &"c", 3).unwrap());
    g
}

fn triples<N: Ord + Clone, E: Ord + Clone>(g: &Graph<N, E>) -> Vec<(N, N, E)> {
    g.iter()
        .map(|e| {
            let EdgeValue { from, to, weight } = e.to_value();
            (from, to, weight)
        })
        .collect()
}

// ---- constructors ----

#[test]
fn default_graph_is_empty() {
    let g = G::new();
    assert!(g.is_empty());
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(G::default(), g);
}

#[test]
fn from_array_and_iterator() {
    assert_eq!(G::from(["a"]).nodes(), vec!["a"]);
    assert_eq!(G::from(["c", "a", "b", "a"]).nodes(), vec!["a", "b", "c"]);

    let values = vec!["a", "b", "c"];
    let g: G = values.iter().copied().collect();
    assert_eq!(g.nodes(), values);

    let mut g = G::new();
    g.extend(["b", "a"]);
    assert_eq!(g.nodes(), vec!["a", "b"]);
}

#[test]
fn move_leaves_source_empty() {
    let mut g1 = G::from(["a", "b", "c"]);
    g1.insert_edge(&"a", &"b", 1).unwrap();
    g1.insert_edge(&"b", &"c", 2).unwrap();
    let before = g1.clone();

    let g2 = std::mem::take(&mut g1);

    assert!(g1.is_empty());
    assert_eq!(g2, before);
    assert_eq!(g2.nodes(), vec!["a", "b", "c"]);
    assert!(g2.is_connected(&"a", &"b"));
    assert!(g2.is_connected(&"b", &"c"));
}

#[test]
fn copy_is_equal_and_independent() {
    let g1 = abc();
    let mut g2 = g1.clone();
    assert_eq!(g1, g2);

    g2.insert_node("d");
    g2.insert_edge(&"d", &"a", 7).unwrap();
    assert!(g2.erase_edge(&"a", &"b", &1).unwrap());
    assert!(g2.replace_node(&"c", "z").unwrap());

    assert_ne!(g1, g2);
    assert_eq!(g1, abc());
    assert!(g1.is_connected(&"a", &"b"));
    assert!(g1.is_node(&"c"));
    assert!(!g1.is_node(&"d"));
}

// ---- insert_node / insert_edge ----

#[test]
fn insert_node_rejects_duplicates() {
    let mut g = G::new();
    assert!(g.insert_node("a"));
    assert!(g.insert_node("b"));
    assert!(g.is_node(&"a"));
    assert!(!g.insert_node("a"));
    assert_eq!(g.nodes(), vec!["a", "b"]);
}

#[test]
fn insert_edge_requires_both_nodes() {
    let mut g = abc();
    let before = g.clone();
    assert_eq!(g.insert_edge(&"a", &"x", 3), Err(GraphError::InsertEdge));
    assert_eq!(g.insert_edge(&"x", &"a", 3), Err(GraphError::InsertEdge));
    assert_eq!(
        g.insert_edge(&"a", &"x", 3).unwrap_err().to_string(),
        "cannot call Graph::insert_edge when either src or dst node does not exist"
    );
    assert_eq!(g, before);
}

#[test]
fn insert_edge_twice_is_rejected() {
    let mut g = abc();
    assert!(!g.insert_edge(&"a", &"b", 1).unwrap());
    assert!(!g.insert_edge(&"b", &"a", 2).unwrap());
    assert!(!g.insert_edge(&"a", &"c", 3).unwrap());
    assert_eq!(g.weights(&"a", &"b").unwrap(), vec![1]);
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn multi_edges_and_self_loops() {
    let mut g = abc();
    assert!(g.insert_edge(&"a", &"b", 10).unwrap());
    assert!(g.insert_edge(&"a", &"b", -5).unwrap());
    assert!(g.insert_edge(&"c", &"c", 0).unwrap());
    assert_eq!(g.weights(&"a", &"b").unwrap(), vec![-5, 1, 10]);
    assert!(g.is_connected(&"c", &"c"));
}

// ---- replace_node ----

#[test]
fn replace_node_requires_old() {
    let mut g = abc();
    let err = g.replace_node(&"x", "y").unwrap_err();
    assert_eq!(err, GraphError::ReplaceNode);
    assert_eq!(err.to_string(), "cannot call Graph::replace_node on a node that doesn't exist");
    assert_eq!(g, abc());
}

#[test]
fn replace_node_moves_edges() {
    let mut g = abc();
    assert!(g.replace_node(&"a", "x").unwrap());
    assert!(!g.replace_node(&"b", "c").unwrap());

    assert_eq!(g.nodes(), vec!["b", "c", "x"]);
    assert!(g.is_connected(&"x", &"b"));
    assert!(g.is_connected(&"b", &"x"));
    assert!(g.is_connected(&"x", &"c"));
    assert_eq!(triples(&g), vec![("b", "x", 2), ("x", "b", 1), ("x", "c", 3)]);
}

#[test]
fn replace_node_keeps_self_loops() {
    let mut g = G::from(["a", "b"]);
    g.insert_edge(&"a", &"a", 4).unwrap();
    g.insert_edge(&"a", &"b", 1).unwrap();
    assert!(g.replace_node(&"a", "z").unwrap());

    assert!(g.is_connected(&"z", &"z"));
    assert!(!g.is_node(&"a"));
    assert_eq!(triples(&g), vec![("z", "b", 1), ("z", "z", 4)]);
}

#[test]
fn replace_node_with_existing_target_changes_nothing() {
    let mut g = abc();
    assert!(!g.replace_node(&"a", "a").unwrap());
    assert!(!g.replace_node(&"a", "b").unwrap());
    assert_eq!(g, abc());
}

// ---- merge_replace_node ----

#[test]
fn merge_replace_node_requires_both() {
    let mut g = abc();
    let msg = "cannot call Graph::merge_replace_node on old or new data if they don't exist in the graph";
    assert_eq!(g.merge_replace_node(&"a", &"y").unwrap_err().to_string(), msg);
    assert_eq!(g.merge_replace_node(&"y", &"b").unwrap_err().to_string(), msg);
    assert_eq!(g, abc());
}

#[test]
fn merge_replace_node_redirects_edges() {
    let mut g = abc();
    g.merge_replace_node(&"a", &"c").unwrap();

    assert_eq!(g.nodes(), vec!["b", "c"]);
    assert!(g.is_connected(&"c", &"b"));
    assert!(g.is_connected(&"b", &"c"));
    assert!(g.is_connected(&"c", &"c"));
    assert_eq!(triples(&g), vec![("b", "c", 2), ("c", "b", 1), ("c", "c", 3)]);
}

#[test]
fn merge_replace_node_collapses_duplicates() {
    let mut g = G::from(["a", "b", "c", "d"]);
    g.insert_edge(&"a", &"b", 1).unwrap();
    g.insert_edge(&"a", &"b", 2).unwrap();
    g.insert_edge(&"b", &"b", 1).unwrap();
    g.insert_edge(&"c", &"a", 3).unwrap();
    g.insert_edge(&"c", &"b", 3).unwrap();
    g.insert_edge(&"d", &"d", 4).unwrap();

    g.merge_replace_node(&"a", &"b").unwrap();

    assert_eq!(g.nodes(), vec!["b", "c", "d"]);
    assert_eq!(triples(&g), vec![("b", "b", 1), ("b", "b", 2), ("c", "b", 3), ("d", "d", 4)]);
}

#[test]
fn merge_replace_node_into_itself_is_noop() {
    let mut g = abc();
    g.merge_replace_node(&"a", &"a").unwrap();
    assert_eq!(g, abc());
}

// ---- erase_node / erase_edge / clear ----

#[test]
fn erase_node_drops_incident_edges() {
    let mut g = abc();
    assert!(!g.erase_node(&"x"));
    assert!(g.erase_node(&"b"));

    assert_eq!(g.nodes(), vec!["a", "c"]);
    assert_eq!(g.connections(&"a").unwrap(), vec!["c"]);
    assert_eq!(triples(&g), vec![("a", "c", 3)]);
}

#[test]
fn erase_edge_requires_both_nodes() {
    let mut g = abc();
    let msg = "cannot call Graph::erase_edge on src or dst if they don't exist in the graph";
    assert_eq!(g.erase_edge(&"a", &"x", &1).unwrap_err().to_string(), msg);
    assert_eq!(g.erase_edge(&"x", &"c", &1).unwrap_err().to_string(), msg);
}

#[test]
fn erase_edge_by_value() {
    let mut g = abc();
    assert!(g.erase_edge(&"a", &"b", &1).unwrap());
    assert!(!g.erase_edge(&"b", &"a", &1).unwrap());
    assert!(!g.erase_edge(&"a", &"b", &1).unwrap());

    assert!(!g.is_connected(&"a", &"b"));
    assert_eq!(g.connections(&"a").unwrap(), vec!["c"]);
}

#[test]
fn clear_empties_the_graph() {
    let mut g = abc();
    g.clear();
    assert!(g.is_empty());
    assert_eq!(g.iter().count(), 0);
    assert!(g.begin().is_end());
}

// ---- accessors ----

#[test]
fn is_connected_tolerates_missing_nodes() {
    let g = abc();
    assert!(g.is_connected(&"a", &"b"));
    assert!(g.is_connected(&"a", &"c"));
    assert!(g.is_connected(&"b", &"a"));
    assert!(!g.is_connected(&"b", &"c"));
    assert!(!g.is_connected(&"c", &"a"));
    assert!(!g.is_connected(&"c", &"b"));
    assert!(!g.is_connected(&"x", &"a"));
    assert!(!g.is_connected(&"a", &"x"));
}

#[test]
fn nodes_are_sorted() {
    assert_eq!(abc().nodes(), vec!["a", "b", "c"]);
    assert!(G::new().nodes().is_empty());
}

#[test]
fn weights_are_sorted_and_checked() {
    let mut g = abc();
    g.insert_edge(&"a", &"b", 10).unwrap();
    assert_eq!(g.weights(&"a", &"b").unwrap(), vec![1, 10]);
    assert!(g.weights(&"b", &"b").unwrap().is_empty());
    assert_eq!(g.weights(&"a", &"x"), Err(GraphError::Weights));
    assert_eq!(g.weights(&"x", &"a"), Err(GraphError::Weights));
}

#[test]
fn find_returns_cursor_or_end() {
    let g = abc();
    let found = g.find(&"a", &"b", &1);
    assert_ne!(found, g.end());
    assert_eq!(found.to_value(), Some(EdgeValue::new("a", "b", 1)));
    assert_ne!(g.find(&"b", &"a", &2), g.end());
    assert_eq!(g.find(&"a", &"b", &10), g.end());
    assert_eq!(g.find(&"x", &"b", &1), g.end());
    assert_eq!(g.find(&"c", &"a", &1), g.end());
}

#[test]
fn connections_are_distinct_and_sorted() {
    let mut g = abc();
    g.insert_edge(&"a", &"b", 7).unwrap();
    assert_eq!(g.connections(&"a").unwrap(), vec!["b", "c"]);
    assert_eq!(g.connections(&"b").unwrap(), vec!["a"]);
    assert!(g.connections(&"c").unwrap().is_empty());
    assert_eq!(g.connections(&"x"), Err(GraphError::Connections));
}

#[test]
fn equality_compares_nodes_and_edges() {
    let mut g1 = G::from(["a", "b", "c"]);
    let mut g2 = G::from(["c", "b", "a"]);
    for g in [&mut g1, &mut g2] {
        g.insert_edge(&"b", &"b", 1).unwrap();
        g.insert_edge(&"b", &"a", 2).unwrap();
        g.insert_edge(&"b", &"c", 3).unwrap();
    }
    assert_eq!(g1, g2);
    assert_eq!(G::new(), G::default());

    g2.insert_edge(&"b", &"c", 4).unwrap();
    assert_ne!(g1, g2);
    assert_ne!(G::from(["a"]), G::from(["b"]));
}

#[test]
fn works_with_owned_strings() {
    let mut g: Graph<String, i64> = ["hello", "how", "are", "you?"].iter().map(|s| s.to_string()).collect();
    let hello = "hello".to_string();
    let are = "are".to_string();
    g.insert_edge(&hello, &are, 8).unwrap();
    g.insert_edge(&hello, &are, 2).unwrap();
    assert_eq!(g.weights(&hello, &are).unwrap(), vec![2, 8]);
    assert!(g.replace_node(&are, "were".to_string()).unwrap());
    assert_eq!(g.connections(&hello).unwrap(), vec!["were".to_string()]);
}
