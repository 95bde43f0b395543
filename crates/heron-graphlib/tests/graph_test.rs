use heron_graphlib::{Digraph, Error, Graph, GraphOptions, Neighbors, Reversible, Undirected};

#[test]
fn undirected_edges_are_recorded_at_both_endpoints() {
    let g = Graph::from_edges(4, &[(0, 1), (1, 2), (0, 3)]).unwrap();

    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.adj(0), &[1, 3]);
    assert_eq!(g.adj(1), &[0, 2]);
    assert_eq!(g.adj(2), &[1]);
    assert_eq!(g.adj(3), &[0]);
}

#[test]
fn every_undirected_adjacency_has_a_mirror_entry() {
    let g = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 0), (3, 4), (1, 1), (0, 1)]).unwrap();

    for v in 0..g.vertex_count() {
        for &w in g.adj(v) {
            let forward = g.adj(v).iter().filter(|&&x| x == w).count();
            let backward = g.adj(w).iter().filter(|&&x| x == v).count();
            assert_eq!(forward, backward, "asymmetric adjacency {v}-{w}");
        }
    }
}

#[test]
fn self_loops_and_parallel_edges_are_kept_by_default() {
    let g = Graph::from_edges(2, &[(0, 0), (0, 1), (0, 1)]).unwrap();

    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.adj(0), &[0, 0, 1, 1]);
    assert_eq!(g.degree(0), 4);
}

#[test]
fn incident_entries_share_the_edge_id_of_their_edge() {
    let g = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 1)]).unwrap();

    let at_one: Vec<(usize, usize)> = g.incident(1).collect();
    assert_eq!(at_one, vec![(0, 0), (2, 1), (0, 2)]);
    let at_zero: Vec<(usize, usize)> = g.incident(0).collect();
    assert_eq!(at_zero, vec![(1, 0), (1, 2)]);
}

#[test]
fn simple_options_reject_self_loops_and_parallel_edges() {
    let mut g = Graph::with_options(3, GraphOptions::simple());
    g.add_edge(0, 1).unwrap();

    assert_eq!(g.add_edge(1, 0), Err(Error::ParallelEdge { v: 1, w: 0 }));
    assert_eq!(g.add_edge(2, 2), Err(Error::SelfLoop { vertex: 2 }));
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.adj(2), &[] as &[usize]);
}

#[test]
fn out_of_range_vertices_are_rejected_and_read_as_empty() {
    let mut g = Graph::new(2);
    assert_eq!(
        g.add_edge(0, 2),
        Err(Error::VertexOutOfRange {
            vertex: 2,
            vertex_count: 2
        })
    );
    assert_eq!(g.edge_count(), 0);
    assert!(g.adj(0).is_empty());
    assert_eq!(g.neighbors(7).count(), 0);
}

#[test]
fn directed_edges_are_recorded_once() {
    let g = Digraph::from_edges(3, &[(0, 1), (0, 2), (2, 1)]).unwrap();

    assert_eq!(g.adj(0), &[1, 2]);
    assert!(g.adj(1).is_empty());
    assert_eq!(g.adj(2), &[1]);
    assert_eq!(g.outdegree(0), 2);
    assert_eq!(g.indegree(1), 2);
    assert_eq!(g.indegree(0), 0);
}

#[test]
fn reverse_flips_every_edge() {
    let g = Digraph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
    let r = g.reverse();

    assert_eq!(r.edge_count(), g.edge_count());
    assert_eq!(r.adj(0), &[2]);
    assert_eq!(r.adj(1), &[0]);
    assert_eq!(r.adj(2), &[1]);
    assert_eq!(r.adj(3), &[2]);
    assert_eq!(r.indegree(2), 2);
}

#[test]
fn display_lists_adjacency_per_vertex() {
    let g = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    assert_eq!(g.to_string(), "3 vertices, 2 edges\n0: 1\n1: 0 2\n2: 1\n");

    let d = Digraph::from_edges(2, &[(1, 0)]).unwrap();
    assert_eq!(d.to_string(), "2 vertices, 1 edges\n0 ->\n1 -> 0\n");
}
