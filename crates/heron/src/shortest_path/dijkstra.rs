use super::{Objective, Relax, ShortestPathTree, ShortestPaths};
use crate::error::{Error, Result, check_source};
use crate::graphlib::{DirectedEdge, EdgeWeightedDigraph};
use crate::index_pq::IndexMinPq;

/// Dijkstra's algorithm: shortest paths from a source when every weight is non-negative.
///
/// The frontier is an [`IndexMinPq`] keyed by the best known distance. A vertex is settled when
/// it leaves the queue; its distance is final from then on.
#[derive(Debug, Clone)]
pub struct DijkstraSp {
    paths: ShortestPaths,
}

/// Search state that only lives while [`DijkstraSp::new`] runs.
struct Frontier {
    paths: ShortestPaths,
    pq: IndexMinPq<f64>,
}

impl DijkstraSp {
    /// Rejects graphs with a negative (or NaN) weight before doing any work.
    pub fn new(g: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        let n = g.vertex_count();
        check_source(source, n)?;
        if let Some(e) = g.edges().find(|e| e.weight < 0.0 || e.weight.is_nan()) {
            return Err(Error::NegativeWeight {
                from: e.from,
                to: e.to,
                weight: e.weight,
            });
        }

        let mut frontier = Frontier {
            paths: ShortestPaths::new(n, source, Objective::Shortest),
            pq: IndexMinPq::new(n),
        };
        frontier.pq.insert(source, 0.0)?;
        let mut settled = 0usize;
        while let Ok(v) = frontier.pq.del_min() {
            settled += 1;
            for e in g.adj(v) {
                frontier.relax(e);
            }
        }

        tracing::debug!(source, settled, "dijkstra shortest paths computed");
        Ok(Self {
            paths: frontier.paths,
        })
    }
}

impl Relax for Frontier {
    fn relax(&mut self, e: &DirectedEdge) -> bool {
        if !self.paths.relax_edge(e) {
            return false;
        }
        let w = e.to;
        let dist = self.paths.dist_to(w);
        let queued = if self.pq.contains(w) {
            self.pq.decrease_key(w, dist)
        } else {
            self.pq.insert(w, dist)
        };
        debug_assert!(queued.is_ok(), "frontier update for {w} rejected: {queued:?}");
        true
    }
}

impl ShortestPathTree for DijkstraSp {
    fn paths(&self) -> &ShortestPaths {
        &self.paths
    }
}
