use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use petgraph::graph::{NodeIndex, UnGraph};
use spanpath::{Graph, WeightedEdge};

/// A `side x side` grid with pseudo-random weights plus a few long chords.
fn grid(side: usize) -> (Vec<usize>, Vec<WeightedEdge<usize>>) {
    let vertices: Vec<usize> = (0..side * side).collect();
    let mut edges = Vec::new();
    let weight = |i: usize| ((i.wrapping_mul(2_654_435_761) >> 7) % 97) as f64 + 1.0;

    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            if col + 1 < side {
                edges.push(WeightedEdge::new(v, v + 1, weight(edges.len())));
            }
            if row + 1 < side {
                edges.push(WeightedEdge::new(v, v + side, weight(edges.len())));
            }
        }
    }
    for v in (0..vertices.len()).step_by(side + 1) {
        let far = (v * 7 + 3) % vertices.len();
        edges.push(WeightedEdge::new(v, far, weight(edges.len()) * 3.0));
    }
    (vertices, edges)
}

fn to_petgraph(n: usize, edges: &[WeightedEdge<usize>]) -> UnGraph<(), f64> {
    let mut g = UnGraph::<(), f64>::with_capacity(n, edges.len());
    for _ in 0..n {
        g.add_node(());
    }
    for e in edges {
        let (a, b) = e.endpoints();
        g.add_edge(NodeIndex::new(*a), NodeIndex::new(*b), spanpath::Edge::weight(e));
    }
    g
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_construction");
    for side in [16, 64] {
        let (vertices, edges) = grid(side);
        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| black_box(Graph::new(vertices.clone(), edges.clone()).unwrap()));
        });
    }
    group.finish();
}

fn bench_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimum_spanning_tree");
    for side in [16, 64] {
        let (vertices, edges) = grid(side);
        let reference = to_petgraph(vertices.len(), &edges);
        let graph = Graph::new(vertices, edges).unwrap();

        group.bench_with_input(BenchmarkId::new("spanpath", side), &side, |b, _| {
            b.iter(|| black_box(graph.minimum_spanning_tree().total_weight()));
        });
        group.bench_with_input(BenchmarkId::new("petgraph", side), &side, |b, _| {
            b.iter(|| black_box(petgraph::algo::min_spanning_tree(&reference).count()));
        });
    }
    group.finish();
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    for side in [16, 64] {
        let (vertices, edges) = grid(side);
        let n = vertices.len();
        let reference = to_petgraph(n, &edges);
        let graph = Graph::new(vertices, edges).unwrap();
        let (start, end) = (0, n - 1);

        group.bench_with_input(BenchmarkId::new("spanpath", side), &side, |b, _| {
            b.iter(|| black_box(graph.shortest_path(&start, &end).unwrap().cost()));
        });
        group.bench_with_input(BenchmarkId::new("petgraph", side), &side, |b, _| {
            b.iter(|| {
                black_box(petgraph::algo::dijkstra(
                    &reference,
                    NodeIndex::new(start),
                    Some(NodeIndex::new(end)),
                    |e| *petgraph::visit::EdgeRef::weight(&e),
                ))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_mst, bench_shortest_path);
criterion_main!(benches);
