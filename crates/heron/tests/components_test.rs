use heron::graphlib::{Digraph, EdgeWeightedDigraph, Graph};
use heron::{ConnectedComponents, KosarajuScc};

fn tiny_graph() -> Graph {
    Graph::from_edges(
        13,
        &[
            (0, 5),
            (4, 3),
            (0, 1),
            (9, 12),
            (6, 4),
            (5, 4),
            (0, 2),
            (11, 12),
            (9, 10),
            (0, 6),
            (7, 8),
            (9, 11),
            (5, 3),
        ],
    )
    .unwrap()
}

fn tiny_digraph() -> Digraph {
    Digraph::from_edges(
        13,
        &[
            (4, 2),
            (2, 3),
            (3, 2),
            (6, 0),
            (0, 1),
            (2, 0),
            (11, 12),
            (12, 9),
            (9, 10),
            (9, 11),
            (7, 9),
            (10, 12),
            (11, 4),
            (4, 3),
            (3, 5),
            (6, 8),
            (8, 6),
            (5, 4),
            (0, 5),
            (6, 4),
            (6, 9),
            (7, 6),
        ],
    )
    .unwrap()
}

#[test]
fn connected_components_are_numbered_by_smallest_vertex() {
    let cc = ConnectedComponents::new(&tiny_graph());

    assert_eq!(cc.count(), 3);
    assert_eq!(cc.id(0), Some(0));
    assert_eq!(cc.id(8), Some(1));
    assert_eq!(cc.id(12), Some(2));
    assert_eq!(cc.id(13), None);
    assert_eq!(cc.size(3), Some(7));
    assert_eq!(cc.size(7), Some(2));
    assert_eq!(cc.size(10), Some(4));

    assert!(cc.connected(3, 6));
    assert!(!cc.connected(6, 7));
    assert!(!cc.connected(0, 13));
    assert_eq!(
        cc.components(),
        vec![
            vec![0, 1, 2, 3, 4, 5, 6],
            vec![7, 8],
            vec![9, 10, 11, 12]
        ]
    );
}

#[test]
fn isolated_vertices_are_their_own_components() {
    let cc = ConnectedComponents::new(&Graph::from_edges(4, &[(1, 2)]).unwrap());
    assert_eq!(cc.count(), 3);
    assert_eq!(cc.components(), vec![vec![0], vec![1, 2], vec![3]]);
    assert_eq!(ConnectedComponents::new(&Graph::new(0)).count(), 0);
}

#[test]
fn strong_components_of_a_tiny_digraph() {
    let scc = KosarajuScc::new(&tiny_digraph());
    assert_eq!(scc.count(), 5);

    let mut groups = scc.components();
    groups.sort();
    assert_eq!(
        groups,
        vec![
            vec![0, 2, 3, 4, 5],
            vec![1],
            vec![6, 8],
            vec![7],
            vec![9, 10, 11, 12],
        ]
    );

    assert!(scc.connected(0, 3));
    assert!(scc.connected(9, 12));
    assert!(scc.connected(6, 8));
    assert!(!scc.connected(6, 7));
    assert!(!scc.connected(1, 0));
    assert_eq!(scc.size(11), Some(4));
    assert_eq!(scc.id(13), None);
}

#[test]
fn strong_components_need_mutual_reachability() {
    // A DAG has only singleton strong components.
    let dag = Digraph::from_edges(4, &[(0, 1), (1, 2), (0, 3), (3, 2)]).unwrap();
    let scc = KosarajuScc::new(&dag);
    assert_eq!(scc.count(), 4);
    assert!(!scc.connected(0, 2));

    let ring = Digraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    assert_eq!(KosarajuScc::new(&ring).count(), 1);
}

#[test]
fn strong_components_ignore_weights() {
    let g = EdgeWeightedDigraph::from_edges(3, &[(0, 1, 2.5), (1, 0, -1.0), (1, 2, 0.0)]).unwrap();
    let scc = KosarajuScc::new(&g);
    assert_eq!(scc.count(), 2);
    assert!(scc.connected(0, 1));
    assert!(!scc.connected(1, 2));
}
