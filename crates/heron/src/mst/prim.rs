//! Prim's algorithm, grown from vertex 0.

use super::{LightestFirst, MinimumSpanningTree};
use crate::graphlib::{Edge, EdgeWeightedGraph};
use crate::index_pq::IndexMinPq;
use std::collections::BinaryHeap;

/// Lazy Prim: every edge leaving the tree goes on a heap; edges whose endpoints have both joined
/// the tree in the meantime are discarded when they surface.
#[derive(Debug, Clone)]
pub struct PrimLazyMst {
    edges: Vec<Edge>,
}

impl PrimLazyMst {
    pub fn new(g: &EdgeWeightedGraph) -> Self {
        let n = g.vertex_count();
        let target = n.saturating_sub(1);
        let mut marked: Vec<bool> = vec![false; n];
        let mut pq: BinaryHeap<LightestFirst> = BinaryHeap::new();
        let mut edges: Vec<Edge> = Vec::with_capacity(target);
        let mut stale = 0usize;

        if n > 0 {
            scan(g, 0, &mut marked, &mut pq);
        }
        while edges.len() < target {
            let Some(LightestFirst(e)) = pq.pop() else {
                break;
            };
            let v = e.either();
            let w = e.other(v);
            if marked[v] && marked[w] {
                stale += 1;
                continue;
            }
            edges.push(e);
            let next = if marked[v] { w } else { v };
            scan(g, next, &mut marked, &mut pq);
        }

        tracing::debug!(
            vertices = n,
            tree_edges = edges.len(),
            stale,
            "lazy prim spanning tree computed"
        );
        Self { edges }
    }
}

fn scan(g: &EdgeWeightedGraph, v: usize, marked: &mut [bool], pq: &mut BinaryHeap<LightestFirst>) {
    marked[v] = true;
    for e in g.adj(v) {
        if !marked[e.other(v)] {
            pq.push(LightestFirst(*e));
        }
    }
}

impl MinimumSpanningTree for PrimLazyMst {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Eager Prim: the queue holds one entry per non-tree vertex, keyed by the lightest edge known to
/// connect it to the tree, and that key is decreased in place when a lighter edge shows up.
#[derive(Debug, Clone)]
pub struct PrimEagerMst {
    edges: Vec<Edge>,
}

impl PrimEagerMst {
    pub fn new(g: &EdgeWeightedGraph) -> Self {
        let n = g.vertex_count();
        let mut marked: Vec<bool> = vec![false; n];
        let mut edge_to: Vec<Option<Edge>> = vec![None; n];
        let mut pq: IndexMinPq<f64> = IndexMinPq::new(n);
        let mut edges: Vec<Edge> = Vec::with_capacity(n.saturating_sub(1));

        if n > 0 {
            let seeded = pq.insert(0, 0.0);
            debug_assert!(seeded.is_ok());
        }
        while let Ok(v) = pq.del_min() {
            marked[v] = true;
            if let Some(e) = edge_to[v] {
                edges.push(e);
            }
            for e in g.adj(v) {
                let w = e.other(v);
                if marked[w] {
                    continue;
                }
                let lighter = edge_to[w].is_none_or(|best| e.weight < best.weight);
                if !lighter {
                    continue;
                }
                edge_to[w] = Some(*e);
                let queued = if pq.contains(w) {
                    pq.decrease_key(w, e.weight)
                } else {
                    pq.insert(w, e.weight)
                };
                debug_assert!(queued.is_ok(), "frontier update for {w} rejected: {queued:?}");
            }
        }

        tracing::debug!(
            vertices = n,
            tree_edges = edges.len(),
            "eager prim spanning tree computed"
        );
        Self { edges }
    }
}

impl MinimumSpanningTree for PrimEagerMst {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
