//! Unweighted graph containers.
//!
//! Vertices are dense `usize` ids in `0..vertex_count()`, fixed at construction. Edges are only
//! ever added; there is no removal. Adjacency lists keep insertion order, which is the order in
//! which every traversal in `heron` visits neighbors.

use crate::error::{Result, check_vertex};
use crate::{Error, Neighbors, Reversible, Undirected};
use std::fmt;
use std::iter::{Copied, Zip};
use std::slice;

pub(crate) mod adjacency;
pub(crate) mod options;

pub use options::GraphOptions;

pub(crate) fn slice_or_empty<T>(lists: &[Vec<T>], v: usize) -> &[T] {
    lists.get(v).map_or(&[][..], Vec::as_slice)
}

/// Undirected graph.
///
/// Every edge `v-w` is recorded in both adjacency lists (a self-loop twice in the same list),
/// each entry tagged with the edge id, which is the edge's insertion index.
#[derive(Debug, Clone)]
pub struct Graph {
    options: GraphOptions,
    edge_count: usize,
    adj: Vec<Vec<usize>>,
    edge_ids: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Self::with_options(vertex_count, GraphOptions::default())
    }

    pub fn with_options(vertex_count: usize, options: GraphOptions) -> Self {
        Self {
            options,
            edge_count: 0,
            adj: vec![Vec::new(); vertex_count],
            edge_ids: vec![Vec::new(); vertex_count],
        }
    }

    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut g = Self::new(vertex_count);
        for &(v, w) in edges {
            g.add_edge(v, w)?;
        }
        Ok(g)
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        check_vertex(v, self.adj.len())?;
        check_vertex(w, self.adj.len())?;
        if v == w && !self.options.self_loops {
            return Err(Error::SelfLoop { vertex: v });
        }
        if !self.options.multigraph && self.adj[v].contains(&w) {
            return Err(Error::ParallelEdge { v, w });
        }

        let id = self.edge_count;
        self.adj[v].push(w);
        self.edge_ids[v].push(id);
        self.adj[w].push(v);
        self.edge_ids[w].push(id);
        self.edge_count += 1;
        Ok(())
    }

    pub fn adj(&self, v: usize) -> &[usize] {
        slice_or_empty(&self.adj, v)
    }

    /// Number of adjacency entries of `v`; a self-loop counts twice.
    pub fn degree(&self, v: usize) -> usize {
        self.adj(v).len()
    }
}

impl Neighbors for Graph {
    type Iter<'a> = Copied<slice::Iter<'a, usize>>;

    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors(&self, v: usize) -> Self::Iter<'_> {
        self.adj(v).iter().copied()
    }
}

impl Undirected for Graph {
    type Incident<'a> = Zip<Copied<slice::Iter<'a, usize>>, Copied<slice::Iter<'a, usize>>>;

    fn incident(&self, v: usize) -> Self::Incident<'_> {
        let ids = slice_or_empty(&self.edge_ids, v);
        self.adj(v).iter().copied().zip(ids.iter().copied())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count)?;
        for (v, list) in self.adj.iter().enumerate() {
            write!(f, "{v}:")?;
            for w in list {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Directed graph. Edge `v->w` is recorded only in `v`'s list.
#[derive(Debug, Clone)]
pub struct Digraph {
    options: GraphOptions,
    edge_count: usize,
    adj: Vec<Vec<usize>>,
    indegree: Vec<usize>,
}

impl Digraph {
    pub fn new(vertex_count: usize) -> Self {
        Self::with_options(vertex_count, GraphOptions::default())
    }

    pub fn with_options(vertex_count: usize, options: GraphOptions) -> Self {
        Self {
            options,
            edge_count: 0,
            adj: vec![Vec::new(); vertex_count],
            indegree: vec![0; vertex_count],
        }
    }

    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut g = Self::new(vertex_count);
        for &(v, w) in edges {
            g.add_edge(v, w)?;
        }
        Ok(g)
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        check_vertex(v, self.adj.len())?;
        check_vertex(w, self.adj.len())?;
        if v == w && !self.options.self_loops {
            return Err(Error::SelfLoop { vertex: v });
        }
        if !self.options.multigraph && self.adj[v].contains(&w) {
            return Err(Error::ParallelEdge { v, w });
        }

        self.adj[v].push(w);
        self.indegree[w] += 1;
        self.edge_count += 1;
        Ok(())
    }

    pub fn adj(&self, v: usize) -> &[usize] {
        slice_or_empty(&self.adj, v)
    }

    pub fn outdegree(&self, v: usize) -> usize {
        self.adj(v).len()
    }

    pub fn indegree(&self, v: usize) -> usize {
        self.indegree.get(v).copied().unwrap_or(0)
    }
}

impl Reversible for Digraph {
    fn reverse(&self) -> Self {
        let mut r = Self {
            options: self.options,
            edge_count: 0,
            adj: vec![Vec::new(); self.adj.len()],
            indegree: vec![0; self.adj.len()],
        };
        for (v, list) in self.adj.iter().enumerate() {
            for &w in list {
                r.adj[w].push(v);
                r.indegree[v] += 1;
                r.edge_count += 1;
            }
        }
        r
    }
}

impl Neighbors for Digraph {
    type Iter<'a> = Copied<slice::Iter<'a, usize>>;

    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors(&self, v: usize) -> Self::Iter<'_> {
        self.adj(v).iter().copied()
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count)?;
        for (v, list) in self.adj.iter().enumerate() {
            write!(f, "{v} ->")?;
            for w in list {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
