//! Single-source shortest (and longest) paths in edge-weighted digraphs.
//!
//! All variants share one result structure, [`ShortestPaths`]: a distance and a last edge per
//! vertex. What differs is how edges get relaxed, which each variant expresses internally while
//! it runs. Queries go through [`ShortestPathTree`]; a finished result is read-only.
//!
//! ```compile_fail
//! use heron::shortest_path::Relax;
//! ```

use crate::error::{Error, Result};
use crate::graphlib::{DirectedEdge, EdgeWeightedDigraph};

mod acyclic;
mod cpm;
mod dijkstra;

pub use acyclic::{AcyclicLp, AcyclicSp};
pub use cpm::CriticalPathMethod;
pub use dijkstra::DijkstraSp;

/// Whether relaxation keeps the smaller or the larger distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    Shortest,
    Longest,
}

impl Objective {
    /// Distance of a vertex no path has reached yet.
    pub fn unreached(self) -> f64 {
        match self {
            Self::Shortest => f64::INFINITY,
            Self::Longest => f64::NEG_INFINITY,
        }
    }

    pub fn improves(self, candidate: f64, current: f64) -> bool {
        match self {
            Self::Shortest => candidate < current,
            Self::Longest => candidate > current,
        }
    }
}

/// Relaxation step of a shortest-path variant, used only while the variant is being built.
pub(crate) trait Relax {
    /// Tries to improve the distance of `e.to` through `e`; `true` when it did.
    fn relax(&mut self, e: &DirectedEdge) -> bool;
}

/// Distances and last edges from a single source.
///
/// `dist_to` starts at [`Objective::unreached`] everywhere but the source (0) and only ever moves
/// in the objective's direction.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: usize,
    objective: Objective,
    dist_to: Vec<f64>,
    edge_to: Vec<Option<DirectedEdge>>,
}

impl ShortestPaths {
    pub(crate) fn new(vertex_count: usize, source: usize, objective: Objective) -> Self {
        let mut dist_to: Vec<f64> = vec![objective.unreached(); vertex_count];
        dist_to[source] = 0.0;
        Self {
            source,
            objective,
            dist_to,
            edge_to: vec![None; vertex_count],
        }
    }

    pub(crate) fn relax_edge(&mut self, e: &DirectedEdge) -> bool {
        let candidate = self.dist_to[e.from] + e.weight;
        if !self.objective.improves(candidate, self.dist_to[e.to]) {
            return false;
        }
        self.dist_to[e.to] = candidate;
        self.edge_to[e.to] = Some(*e);
        true
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Unreachable and unknown vertices report [`Objective::unreached`].
    pub fn dist_to(&self, v: usize) -> f64 {
        self.dist_to
            .get(v)
            .copied()
            .unwrap_or(self.objective.unreached())
    }

    pub fn dist_to_all(&self) -> &[f64] {
        &self.dist_to
    }

    pub fn edge_to(&self, v: usize) -> Option<&DirectedEdge> {
        self.edge_to.get(v).and_then(Option::as_ref)
    }

    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to.get(v).is_some_and(|d| d.is_finite())
    }

    /// Edges from the source to `v`, in travel order. The source itself has an empty path.
    pub fn path_to(&self, v: usize) -> Option<Vec<DirectedEdge>> {
        if !self.has_path_to(v) {
            return None;
        }
        let path = self.walk_back(v);
        // Cyclic input to the acyclic variants can leave a loop in `edge_to`.
        debug_assert!(path.is_some(), "shortest path tree contains a cycle at {v}");
        path
    }

    /// Follows `edge_to` back from `v`. `None` when the walk revisits a vertex.
    fn walk_back(&self, v: usize) -> Option<Vec<DirectedEdge>> {
        let mut path: Vec<DirectedEdge> = Vec::new();
        let mut x = v;
        while let Some(e) = self.edge_to[x] {
            if path.len() == self.edge_to.len() {
                return None;
            }
            path.push(e);
            x = e.from;
        }
        path.reverse();
        Some(path)
    }

    /// Verifies the optimality conditions against `g`.
    ///
    /// Checks that the source has distance 0 and no last edge, that unreached vertices have no
    /// last edge, that every reached vertex has a path from the source whose weights sum to its
    /// distance, that no edge can be relaxed any further, and that every tree edge is tight
    /// (`dist_to[w] == dist_to[v] + weight`).
    pub fn check(&self, g: &EdgeWeightedDigraph) -> Result<()> {
        if g.vertex_count() != self.dist_to.len() {
            return Err(violation(format!(
                "graph has {} vertices, tree has {}",
                g.vertex_count(),
                self.dist_to.len()
            )));
        }
        if self.dist_to[self.source] != 0.0 || self.edge_to[self.source].is_some() {
            return Err(violation(format!(
                "source {} has a distance or last edge",
                self.source
            )));
        }

        let unreached = self.objective.unreached();
        for v in 0..self.dist_to.len() {
            if v != self.source && self.edge_to[v].is_none() && self.dist_to[v] != unreached {
                return Err(violation(format!(
                    "vertex {v} has distance {} but no last edge",
                    self.dist_to[v]
                )));
            }
        }

        for v in 0..self.dist_to.len() {
            if !self.dist_to[v].is_finite() {
                continue;
            }
            let Some(path) = self.walk_back(v) else {
                return Err(violation(format!("path to {v} loops without reaching the source")));
            };
            if path.first().is_some_and(|e| e.from != self.source) {
                return Err(violation(format!("path to {v} does not start at the source")));
            }
            let total: f64 = path.iter().fold(0.0, |acc, e| acc + e.weight);
            if total != self.dist_to[v] {
                return Err(violation(format!(
                    "path to {v} weighs {total}, distance is {}",
                    self.dist_to[v]
                )));
            }
        }

        for e in g.edges() {
            if !self.dist_to[e.from].is_finite() {
                continue;
            }
            let candidate = self.dist_to[e.from] + e.weight;
            if self.objective.improves(candidate, self.dist_to[e.to]) {
                return Err(violation(format!("edge {e} is not relaxed")));
            }
        }

        for (w, e) in self.edge_to.iter().enumerate() {
            let Some(e) = e else {
                continue;
            };
            if e.to != w {
                return Err(violation(format!("last edge {e} of vertex {w} ends elsewhere")));
            }
            if self.dist_to[e.from] + e.weight != self.dist_to[w] {
                return Err(violation(format!("tree edge {e} is not tight")));
            }
        }
        Ok(())
    }
}

fn violation(reason: String) -> Error {
    Error::CertificateViolation { reason }
}

/// Read access shared by every shortest-path variant.
pub trait ShortestPathTree {
    fn paths(&self) -> &ShortestPaths;

    fn source(&self) -> usize {
        self.paths().source()
    }

    fn dist_to(&self, v: usize) -> f64 {
        self.paths().dist_to(v)
    }

    fn has_path_to(&self, v: usize) -> bool {
        self.paths().has_path_to(v)
    }

    fn path_to(&self, v: usize) -> Option<Vec<DirectedEdge>> {
        self.paths().path_to(v)
    }

    fn check(&self, g: &EdgeWeightedDigraph) -> Result<()> {
        self.paths().check(g)
    }
}
