use super::{LightestFirst, MinimumSpanningTree};
use crate::graphlib::{Edge, EdgeWeightedGraph};
use crate::union_find::UnionFind;
use std::collections::BinaryHeap;

/// Kruskal's algorithm: take edges lightest first, keeping each one that joins two different
/// trees of the forest built so far.
///
/// Edges of equal weight are taken in unspecified order.
#[derive(Debug, Clone)]
pub struct KruskalMst {
    edges: Vec<Edge>,
}

impl KruskalMst {
    pub fn new(g: &EdgeWeightedGraph) -> Self {
        let n = g.vertex_count();
        let target = n.saturating_sub(1);
        let mut pq: BinaryHeap<LightestFirst> = g.edges().into_iter().map(LightestFirst).collect();
        let mut uf = UnionFind::new(n);
        let mut edges: Vec<Edge> = Vec::with_capacity(target);

        while edges.len() < target {
            let Some(LightestFirst(e)) = pq.pop() else {
                break;
            };
            let v = e.either();
            if matches!(uf.union(v, e.other(v)), Ok(true)) {
                edges.push(e);
            }
        }

        tracing::debug!(
            vertices = n,
            tree_edges = edges.len(),
            components = uf.count(),
            "kruskal spanning forest computed"
        );
        Self { edges }
    }
}

impl MinimumSpanningTree for KruskalMst {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
