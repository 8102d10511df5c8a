//! Builds a small word graph, prints it, then drains its edges with a cursor range.
//!
//! Run with `RUST_LOG=ordgraph=debug cargo run --example client --features tracing`
//! to see the mutation events.

use anyhow::Result;
use ordgraph::Graph;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let words = ["hello", "how", "are", "you?"].map(String::from);
    let mut g: Graph<String, i32> = Graph::from(words);

    let edges = [
        ("hello", "how", 5),
        ("hello", "are", 8),
        ("hello", "are", 2),
        ("how", "you?", 1),
        ("how", "hello", 4),
        ("are", "you?", 3),
    ];
    for (src, dst, weight) in edges {
        g.insert_edge(&src.to_string(), &dst.to_string(), weight)?;
    }

    print!("{g}");
    println!();

    let start = g.begin();
    let end = g.end();
    let next = g.erase_edge_range(start, &end);
    debug_assert!(next.is_end());

    println!("{} edges left", g.edge_count());
    g.insert_edge(&"how".to_string(), &"are".to_string(), 7)?;
    for edge in &g {
        println!("{} -> {} (weight {})", edge.from, edge.to, edge.weight);
    }

    Ok(())
}
