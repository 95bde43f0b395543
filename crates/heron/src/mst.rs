//! Minimum spanning trees of edge-weighted undirected graphs.
//!
//! Three strategies, one query surface ([`MinimumSpanningTree`]). All of them expect a connected
//! graph. On a disconnected one, Kruskal returns a spanning forest and the Prim variants return
//! the tree of vertex 0's component; either way [`MinimumSpanningTree::is_spanning`] is `false`.

use crate::error::{Error, Result};
use crate::graphlib::{Edge, EdgeWeightedGraph};
use crate::union_find::UnionFind;
use std::cmp::Ordering;

mod kruskal;
mod prim;

pub use kruskal::KruskalMst;
pub use prim::{PrimEagerMst, PrimLazyMst};

/// Heap entry ordering edges by weight, lightest on top of a `BinaryHeap`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LightestFirst(pub(crate) Edge);

impl PartialEq for LightestFirst {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LightestFirst {}

impl PartialOrd for LightestFirst {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LightestFirst {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp_weight(&self.0)
    }
}

pub trait MinimumSpanningTree {
    /// Tree edges in the order the algorithm added them.
    fn edges(&self) -> &[Edge];

    fn weight(&self) -> f64 {
        self.edges().iter().map(|e| e.weight).sum()
    }

    /// `true` when the tree has `V - 1` edges, i.e. `g` is connected and fully covered.
    fn is_spanning(&self, g: &EdgeWeightedGraph) -> bool {
        self.edges().len() + 1 == g.vertex_count().max(1)
    }

    /// Verifies that the tree is acyclic and satisfies the cut optimality conditions: for every
    /// tree edge `e`, no graph edge crossing the cut obtained by removing `e` is lighter than `e`.
    fn check(&self, g: &EdgeWeightedGraph) -> Result<()> {
        let n = g.vertex_count();
        let tree = self.edges();

        let mut uf = UnionFind::new(n);
        for e in tree {
            let v = e.either();
            if !uf.union(v, e.other(v))? {
                return Err(Error::CertificateViolation {
                    reason: format!("tree edge {e} closes a cycle"),
                });
            }
        }

        let graph_edges = g.edges();
        for (skip, e) in tree.iter().enumerate() {
            let mut uf = UnionFind::new(n);
            for (i, f) in tree.iter().enumerate() {
                if i != skip {
                    let x = f.either();
                    uf.union(x, f.other(x))?;
                }
            }

            let a = e.either();
            let b = e.other(a);
            for f in &graph_edges {
                let x = f.either();
                let y = f.other(x);
                let crosses = (uf.connected(x, a)? && uf.connected(y, b)?)
                    || (uf.connected(x, b)? && uf.connected(y, a)?);
                if crosses && f.weight < e.weight {
                    return Err(Error::CertificateViolation {
                        reason: format!("edge {f} is lighter than tree edge {e} across its cut"),
                    });
                }
            }
        }
        Ok(())
    }
}
