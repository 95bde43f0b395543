#![forbid(unsafe_code)]

//! Graph containers used by `heron`.
//!
//! Four adjacency-list graph kinds over dense `usize` vertex ids:
//!
//! - [`Graph`] / [`Digraph`]: unweighted, undirected and directed.
//! - [`EdgeWeightedGraph`] / [`EdgeWeightedDigraph`]: adjacency lists of [`Edge`] /
//!   [`DirectedEdge`].
//!
//! plus label-addressed wrappers ([`SymbolGraph`], [`SymbolDigraph`]). Algorithms consume graphs
//! through the [`Neighbors`], [`Undirected`] and [`Reversible`] traits.

pub mod error;
pub mod graph;
pub mod symbol;
pub mod weighted;

pub use error::{Error, Result};
pub use graph::adjacency::{Neighbors, Reversible, Undirected};
pub use graph::{Digraph, Graph, GraphOptions};
pub use symbol::{LabelIndex, SymbolDigraph, SymbolGraph};
pub use weighted::{DirectedEdge, Edge, EdgeWeightedDigraph, EdgeWeightedGraph};
