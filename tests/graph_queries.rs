//! End-to-end queries through the public API.

use serde::Deserialize;
use spanpath::{Edge, Graph, GraphError, InvalidEdgeReason, WeightedEdge};
use std::collections::HashSet;
use std::thread;

#[derive(Deserialize)]
struct Fixture {
    vertices: Vec<String>,
    edges: Vec<WeightedEdge<String>>,
}

const CITIES: &str = r#"{
    "vertices": ["seattle", "portland", "boise", "spokane", "reno", "juneau"],
    "edges": [
        {"a": "seattle",  "b": "portland", "weight": 174.0},
        {"a": "seattle",  "b": "spokane",  "weight": 279.0},
        {"a": "portland", "b": "boise",    "weight": 430.0},
        {"a": "spokane",  "b": "boise",    "weight": 290.0},
        {"a": "portland", "b": "reno",     "weight": 550.0},
        {"a": "boise",    "b": "reno",     "weight": 420.0},
        {"a": "seattle",  "b": "seattle",  "weight": 0.0}
    ]
}"#;

fn cities() -> anyhow::Result<Graph<String, WeightedEdge<String>>> {
    let fixture: Fixture = serde_json::from_str(CITIES)?;
    Ok(Graph::new(fixture.vertices, fixture.edges)?)
}

fn names<'a>(edges: &[&'a WeightedEdge<String>]) -> Vec<(&'a str, &'a str)> {
    edges
        .iter()
        .map(|e| (e.vertex_a().as_str(), e.vertex_b().as_str()))
        .collect()
}

#[test]
fn fixture_counts() -> anyhow::Result<()> {
    let graph = cities()?;
    assert_eq!(graph.num_vertices(), 6);
    assert_eq!(graph.num_edges(), 7);
    assert_eq!(graph.connected_components(), 2);
    Ok(())
}

#[test]
fn fixture_spanning_forest() -> anyhow::Result<()> {
    let graph = cities()?;
    let mst = graph.minimum_spanning_tree();

    // juneau is isolated: 6 vertices, 2 components.
    assert_eq!(mst.len(), 4);
    assert_eq!(mst.total_weight(), 174.0 + 279.0 + 290.0 + 420.0);
    assert_eq!(
        names(mst.edges()),
        vec![
            ("seattle", "portland"),
            ("seattle", "spokane"),
            ("spokane", "boise"),
            ("boise", "reno"),
        ]
    );
    Ok(())
}

#[test]
fn fixture_shortest_paths() -> anyhow::Result<()> {
    let graph = cities()?;
    let seattle = String::from("seattle");
    let reno = String::from("reno");
    let juneau = String::from("juneau");

    let path = graph.shortest_path(&seattle, &reno)?;
    assert_eq!(path.cost(), 724.0);
    assert_eq!(names(path.edges()), vec![("seattle", "portland"), ("portland", "reno")]);

    // Reversed query walks the same edges in the other direction.
    let back = graph.shortest_path(&reno, &seattle)?;
    assert_eq!(back.cost(), 724.0);
    assert_eq!(names(back.edges()), vec![("portland", "reno"), ("seattle", "portland")]);

    let err = graph.shortest_path(&seattle, &juneau).unwrap_err();
    assert!(err.is_no_path());

    assert!(graph.shortest_path(&juneau, &juneau)?.is_empty());
    Ok(())
}

#[test]
fn path_edges_chain_from_start_to_end() -> anyhow::Result<()> {
    let graph = cities()?;
    let start = String::from("spokane");
    let end = String::from("reno");
    let path = graph.shortest_path(&start, &end)?;

    let mut at = &start;
    let mut total = 0.0;
    for edge in path.edges() {
        at = edge
            .other_vertex(at)
            .ok_or_else(|| anyhow::anyhow!("path is not contiguous at {at}"))?;
        total += edge.weight();
    }
    assert_eq!(at, &end);
    assert_eq!(total, path.cost());
    Ok(())
}

#[test]
fn construction_fails_before_queries() {
    let err = Graph::new(
        vec![1, 2, 3],
        vec![WeightedEdge::new(1, 2, 1.0), WeightedEdge::new(3, 4, 1.0)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        GraphError::InvalidEdge {
            index: 1,
            reason: InvalidEdgeReason::UnknownVertexB
        }
    );

    let err = Graph::new(vec![1, 2], vec![WeightedEdge::new(1, 2, -0.5)]).unwrap_err();
    assert!(matches!(
        err,
        GraphError::InvalidEdge {
            reason: InvalidEdgeReason::BadWeight,
            ..
        }
    ));
    assert!(err.to_string().contains("position 0"));
}

#[test]
fn set_constructor_matches_sequence_constructor() -> anyhow::Result<()> {
    let vertices: HashSet<char> = "abcd".chars().collect();
    let edges = vec![
        WeightedEdge::new('a', 'b', 3.0),
        WeightedEdge::new('b', 'c', 1.0),
        WeightedEdge::new('c', 'd', 1.0),
        WeightedEdge::new('a', 'd', 1.0),
    ];

    let from_sets = Graph::from_sets(vertices, edges.clone())?;
    let from_seq = Graph::new(vec!['a', 'b', 'c', 'd'], edges)?;

    assert_eq!(from_sets.num_vertices(), from_seq.num_vertices());
    assert_eq!(
        from_sets.minimum_spanning_tree().total_weight(),
        from_seq.minimum_spanning_tree().total_weight()
    );
    assert_eq!(from_sets.shortest_path(&'a', &'b')?.cost(), 3.0);
    assert_eq!(from_seq.shortest_path(&'a', &'c')?.cost(), 2.0);
    Ok(())
}

#[test]
fn concurrent_queries_share_one_graph() -> anyhow::Result<()> {
    let graph = &cities()?;
    let seattle = &String::from("seattle");
    let reno = &String::from("reno");

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(move || {
                    let mst = graph.minimum_spanning_tree().total_weight();
                    let path = graph.shortest_path(seattle, reno).map(|p| p.cost());
                    (mst, path)
                })
            })
            .collect();

        for handle in handles {
            let (mst, path) = handle.join().expect("query thread panicked");
            assert_eq!(mst, 1163.0);
            assert_eq!(path, Ok(724.0));
        }
    });
    Ok(())
}
