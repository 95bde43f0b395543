#![forbid(unsafe_code)]

//! Classic graph algorithms over the containers in [`graphlib`].
//!
//! - [`traversal`]: depth-first and breadth-first paths, cycle detection, depth-first orders,
//!   topological sort, connected and strongly connected components.
//! - [`shortest_path`]: Dijkstra, shortest and longest paths in DAGs, critical path scheduling.
//! - [`mst`]: Kruskal and Prim (lazy and eager) minimum spanning trees.
//! - [`index_pq`] and [`union_find`]: the supporting data structures.
//!
//! Every depth-first search is iterative, so deep graphs do not grow the call stack.

pub use heron_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod index_pq;
pub mod mst;
pub mod shortest_path;
pub mod traversal;
pub mod union_find;

pub use error::{Error, Result};
pub use index_pq::IndexMinPq;
pub use mst::{KruskalMst, MinimumSpanningTree, PrimEagerMst, PrimLazyMst};
pub use shortest_path::{
    AcyclicLp, AcyclicSp, CriticalPathMethod, DijkstraSp, Objective, ShortestPathTree,
    ShortestPaths,
};
pub use traversal::{
    BreadthFirstPaths, ConnectedComponents, Cycle, DepthFirstOrder, DepthFirstPaths,
    DirectedCycle, KosarajuScc, Topological,
};
pub use union_find::UnionFind;
