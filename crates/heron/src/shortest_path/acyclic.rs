use super::{Objective, Relax, ShortestPathTree, ShortestPaths};
use crate::error::{Result, check_source};
use crate::graphlib::{DirectedEdge, EdgeWeightedDigraph};
use crate::traversal::{DepthFirstOrder, Topological};

/// Relaxes every edge once, vertex by vertex in `order`.
fn relax_in_order<R: Relax>(sp: &mut R, g: &EdgeWeightedDigraph, order: &[usize]) {
    for &v in order {
        for e in g.adj(v) {
            sp.relax(e);
        }
    }
}

/// Shortest paths in an edge-weighted DAG; negative weights are fine.
///
/// The graph must be acyclic. `new` does not check this (a cyclic graph gives meaningless
/// distances); [`AcyclicSp::checked`] does.
#[derive(Debug, Clone)]
pub struct AcyclicSp {
    paths: ShortestPaths,
}

impl AcyclicSp {
    pub fn new(g: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        check_source(source, g.vertex_count())?;
        let order = DepthFirstOrder::new(g).into_reverse_post();
        Ok(Self::run(g, source, &order))
    }

    /// Like [`AcyclicSp::new`], but returns [`Error::NotADag`](crate::Error::NotADag) for a
    /// cyclic graph.
    pub fn checked(g: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        check_source(source, g.vertex_count())?;
        let order = Topological::try_order(g)?;
        Ok(Self::run(g, source, &order))
    }

    fn run(g: &EdgeWeightedDigraph, source: usize, order: &[usize]) -> Self {
        let mut sp = Self {
            paths: ShortestPaths::new(g.vertex_count(), source, Objective::Shortest),
        };
        relax_in_order(&mut sp, g, order);
        tracing::debug!(source, "acyclic shortest paths computed");
        sp
    }
}

impl Relax for AcyclicSp {
    fn relax(&mut self, e: &DirectedEdge) -> bool {
        self.paths.relax_edge(e)
    }
}

impl ShortestPathTree for AcyclicSp {
    fn paths(&self) -> &ShortestPaths {
        &self.paths
    }
}

/// Longest paths in an edge-weighted DAG. Unreached vertices sit at negative infinity.
///
/// Same acyclicity contract as [`AcyclicSp`].
#[derive(Debug, Clone)]
pub struct AcyclicLp {
    paths: ShortestPaths,
}

impl AcyclicLp {
    pub fn new(g: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        check_source(source, g.vertex_count())?;
        let order = DepthFirstOrder::new(g).into_reverse_post();
        Ok(Self::run(g, source, &order))
    }

    pub fn checked(g: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        check_source(source, g.vertex_count())?;
        let order = Topological::try_order(g)?;
        Ok(Self::run(g, source, &order))
    }

    fn run(g: &EdgeWeightedDigraph, source: usize, order: &[usize]) -> Self {
        let mut lp = Self {
            paths: ShortestPaths::new(g.vertex_count(), source, Objective::Longest),
        };
        relax_in_order(&mut lp, g, order);
        tracing::debug!(source, "acyclic longest paths computed");
        lp
    }
}

impl Relax for AcyclicLp {
    fn relax(&mut self, e: &DirectedEdge) -> bool {
        self.paths.relax_edge(e)
    }
}

impl ShortestPathTree for AcyclicLp {
    fn paths(&self) -> &ShortestPaths {
        &self.paths
    }
}
