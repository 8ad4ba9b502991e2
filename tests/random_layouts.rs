/// Checks the search strategies on many random layouts: every returned path is a real walk
/// from start to goal, breadth-first never uses more connections than the others, and the
/// complete strategies agree on whether a route exists.
use campus_nav::geometry::Point;
use campus_nav::{Algorithm, Graph, PlaceId, PlaceRecord};
use rand::prelude::*;

fn random_layout(n: usize, rng: &mut StdRng) -> (Vec<String>, Vec<Point>) {
    let keys = (0..n).map(|i| format!("P{i}")).collect();
    let positions = (0..n)
        .map(|_| Point::new(rng.random_range(0.0..20.0), rng.random_range(0.0..20.0)))
        .collect();
    (keys, positions)
}

fn random_graph(n: usize, rng: &mut StdRng) -> Graph {
    let (keys, positions) = random_layout(n, rng);
    let records: Vec<PlaceRecord> = keys
        .iter()
        .zip(positions)
        .map(|(key, position)| PlaceRecord::new(key, key, position))
        .collect();
    Graph::build(&records, 5.0).unwrap()
}

fn assert_valid_walk(graph: &Graph, path: &[PlaceId], start: PlaceId, goal: PlaceId) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for step in path.windows(2) {
        assert!(graph.weight(step[0], step[1]).is_some(), "{:?} is not a connection", step);
    }
}

#[test]
fn random_layouts() {
    const N_LAYOUTS: usize = 200;
    let mut rng = StdRng::seed_from_u64(0);

    for _ in 0..N_LAYOUTS {
        let n = rng.random_range(2..16);
        let graph = random_graph(n, &mut rng);

        for start in graph.places().iter().map(|place| place.id) {
            for goal in graph.places().iter().map(|place| place.id) {
                let bfs = Algorithm::BreadthFirst.search(&graph, start, goal);
                let dfs = Algorithm::DepthFirst.search(&graph, start, goal);
                let heuristic = Algorithm::GreedyHeuristic.search(&graph, start, goal);
                let nearest = Algorithm::GreedyNearestNeighbor.search(&graph, start, goal);

                // complete searches agree on reachability
                assert_eq!(bfs.is_empty(), dfs.is_empty());
                assert_eq!(bfs.is_empty(), heuristic.is_empty());
                if bfs.is_empty() {
                    assert!(nearest.is_empty());
                    continue;
                }

                for path in [&bfs, &dfs, &heuristic, &nearest] {
                    if path.is_empty() {
                        continue;
                    }
                    assert_valid_walk(&graph, path, start, goal);
                    assert!(bfs.len() <= path.len());
                }
            }
        }
    }
}

#[test]
fn graph_matches_threshold_rule() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let graph = random_graph(20, &mut rng);
        for a in graph.places() {
            for b in graph.places() {
                let connected = graph.weight(a.id, b.id).is_some();
                let close = a.id != b.id && a.position.distance(&b.position) < 5.0;
                assert_eq!(connected, close);
            }
        }
    }
}
