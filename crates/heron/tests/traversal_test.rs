use heron::graphlib::{Digraph, EdgeWeightedGraph, Graph, GraphOptions};
use heron::{BreadthFirstPaths, Cycle, DepthFirstPaths, DirectedCycle, Error, graphlib};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn tiny_connected_graph() -> Graph {
    Graph::from_edges(
        6,
        &[
            (0, 5),
            (2, 4),
            (2, 3),
            (1, 2),
            (0, 1),
            (3, 4),
            (3, 5),
            (0, 2),
        ],
    )
    .unwrap()
}

fn assert_is_walk(g: &Graph, path: &[usize]) {
    for pair in path.windows(2) {
        assert!(
            g.adj(pair[0]).contains(&pair[1]),
            "{}-{} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn depth_first_paths_follow_adjacency_order() {
    let g = tiny_connected_graph();
    let dfs = DepthFirstPaths::new(&g, 0).unwrap();

    assert_eq!(dfs.source(), 0);
    assert_eq!(dfs.count(), 6);
    assert_eq!(dfs.path_to(4), Some(vec![0, 5, 3, 2, 4]));
    assert_eq!(dfs.path_to(1), Some(vec![0, 5, 3, 2, 1]));
    assert_eq!(dfs.path_to(0), Some(vec![0]));
    for v in 0..6 {
        assert_is_walk(&g, &dfs.path_to(v).unwrap());
    }
}

#[test]
fn breadth_first_paths_use_fewest_edges() {
    let g = tiny_connected_graph();
    let bfs = BreadthFirstPaths::new(&g, 0).unwrap();

    let dist: Vec<Option<usize>> = (0..6).map(|v| bfs.dist_to(v)).collect();
    assert_eq!(
        dist,
        vec![Some(0), Some(1), Some(1), Some(2), Some(2), Some(1)]
    );
    assert_eq!(bfs.path_to(3), Some(vec![0, 5, 3]));
    assert_eq!(bfs.path_to(4), Some(vec![0, 2, 4]));

    let dfs = DepthFirstPaths::new(&g, 0).unwrap();
    for v in 0..6 {
        let shortest = bfs.path_to(v).unwrap();
        assert_is_walk(&g, &shortest);
        assert_eq!(shortest.len(), bfs.dist_to(v).unwrap() + 1);
        assert!(shortest.len() <= dfs.path_to(v).unwrap().len());
    }
}

#[test]
fn unreachable_vertices_have_no_path() {
    let g = Graph::from_edges(4, &[(0, 1), (2, 3)]).unwrap();
    let dfs = DepthFirstPaths::new(&g, 0).unwrap();
    let bfs = BreadthFirstPaths::new(&g, 0).unwrap();

    assert_eq!(dfs.count(), 2);
    assert!(!dfs.has_path_to(3));
    assert_eq!(dfs.path_to(3), None);
    assert!(!bfs.has_path_to(2));
    assert_eq!(bfs.dist_to(2), None);
    assert_eq!(bfs.path_to(2), None);
    assert!(!bfs.has_path_to(99));
}

#[test]
fn directed_paths_respect_edge_direction() {
    let g = Digraph::from_edges(3, &[(0, 1), (2, 1)]).unwrap();
    let dfs = DepthFirstPaths::new(&g, 0).unwrap();
    assert!(dfs.has_path_to(1));
    assert!(!dfs.has_path_to(2));

    let bfs = BreadthFirstPaths::new(&g, 2).unwrap();
    assert_eq!(bfs.path_to(1), Some(vec![2, 1]));
    assert_eq!(bfs.path_to(0), None);
}

#[test]
fn source_out_of_range_is_an_error() {
    let g = Graph::new(3);
    let expected = Error::Graph(graphlib::Error::VertexOutOfRange {
        vertex: 3,
        vertex_count: 3,
    });
    assert_eq!(DepthFirstPaths::new(&g, 3).unwrap_err(), expected);
    assert_eq!(BreadthFirstPaths::new(&g, 3).unwrap_err(), expected);
}

#[test]
fn long_paths_do_not_exhaust_the_call_stack() {
    let n = 200_000;
    let edges: Vec<(usize, usize)> = (0..n - 1).map(|v| (v, v + 1)).collect();
    let g = Digraph::from_edges(n, &edges).unwrap();

    let dfs = DepthFirstPaths::new(&g, 0).unwrap();
    assert_eq!(dfs.count(), n);
    assert_eq!(dfs.path_to(n - 1).map(|p| p.len()), Some(n));
    assert!(!DirectedCycle::new(&g).has_cycle());
}

#[test]
fn undirected_cycle_is_a_closed_walk() {
    let g = tiny_connected_graph();
    let finder = Cycle::new(&g);
    assert!(finder.has_cycle());

    let cycle = finder.cycle().unwrap();
    assert!(cycle.len() >= 4);
    assert_eq!(cycle.first(), cycle.last());
    assert_is_walk(&g, cycle);
}

#[test]
fn trees_have_no_undirected_cycle() {
    let g = Graph::from_edges(5, &[(0, 1), (1, 2), (1, 3), (3, 4)]).unwrap();
    let finder = Cycle::new(&g);
    assert!(!finder.has_cycle());
    assert_eq!(finder.cycle(), None);
    assert!(!Cycle::new(&Graph::new(0)).has_cycle());
}

#[test]
fn parallel_edges_and_self_loops_are_cycles() {
    let parallel = Graph::from_edges(3, &[(1, 2), (0, 1), (0, 1)]).unwrap();
    let cycle = Cycle::new(&parallel).cycle().map(<[usize]>::to_vec);
    assert_eq!(cycle, Some(vec![1, 0, 1]));

    let self_loop = Graph::from_edges(2, &[(0, 1), (1, 1)]).unwrap();
    assert_eq!(Cycle::new(&self_loop).cycle(), Some(&[1, 1][..]));

    let weighted = EdgeWeightedGraph::from_edges(2, &[(0, 1, 1.0), (1, 0, 2.0)]).unwrap();
    assert!(Cycle::new(&weighted).has_cycle());
}

#[test]
fn simple_graphs_reject_the_edges_that_would_make_trivial_cycles() {
    let mut g = Graph::with_options(2, GraphOptions::simple());
    g.add_edge(0, 1).unwrap();
    assert!(g.add_edge(1, 0).is_err());
    assert!(g.add_edge(1, 1).is_err());
    assert!(!Cycle::new(&g).has_cycle());
}

#[test]
fn directed_cycle_through_three_vertices() {
    let g = Digraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
    let finder = DirectedCycle::new(&g);
    assert!(finder.has_cycle());

    let cycle = finder.cycle().unwrap();
    assert_eq!(cycle.len(), 4);
    assert_eq!(cycle.first(), cycle.last());
    let mut members = cycle[..3].to_vec();
    members.sort_unstable();
    assert_eq!(members, vec![0, 1, 2]);
    for pair in cycle.windows(2) {
        assert!(g.adj(pair[0]).contains(&pair[1]));
    }
}

#[test]
fn directed_self_loop_is_a_cycle() {
    let g = Digraph::from_edges(2, &[(0, 1), (1, 1)]).unwrap();
    assert_eq!(DirectedCycle::new(&g).cycle(), Some(&[1, 1][..]));
}

#[test]
fn cross_edges_are_not_directed_cycles() {
    // 0 -> 1 -> 2 and 0 -> 2: vertex 2 is revisited but never while on the stack.
    let g = Digraph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
    assert!(!DirectedCycle::new(&g).has_cycle());
}

#[test]
fn breadth_first_paths_are_never_longer_than_depth_first_ones() {
    let mut rng = StdRng::seed_from_u64(23);
    for round in 0..100 {
        let n = rng.gen_range(1..30);
        let mut g = Graph::new(n);
        for _ in 0..rng.gen_range(0..2 * n) {
            g.add_edge(rng.gen_range(0..n), rng.gen_range(0..n)).unwrap();
        }
        let source = rng.gen_range(0..n);

        let dfs = DepthFirstPaths::new(&g, source).unwrap();
        let bfs = BreadthFirstPaths::new(&g, source).unwrap();
        for v in 0..n {
            assert_eq!(dfs.has_path_to(v), bfs.has_path_to(v), "round {round}, vertex {v}");
            let (Some(deep), Some(short)) = (dfs.path_to(v), bfs.path_to(v)) else {
                continue;
            };
            assert_is_walk(&g, &deep);
            assert_is_walk(&g, &short);
            assert_eq!(short.first(), Some(&source));
            assert_eq!(short.last(), Some(&v));
            assert_eq!(short.len(), bfs.dist_to(v).unwrap() + 1);
            assert!(short.len() <= deep.len(), "round {round}, vertex {v}");
        }
    }
}
