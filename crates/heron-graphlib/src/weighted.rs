//! Edge-weighted graph containers.

use crate::error::{Result, check_vertex};
use crate::graph::slice_or_empty;
use crate::{Error, GraphOptions, Neighbors, Reversible, Undirected};
use std::fmt;
use std::iter::Map;
use std::slice;

pub(crate) mod edge;

pub use edge::{DirectedEdge, Edge};

/// Undirected edge-weighted graph.
///
/// Edges are stored once; each endpoint's adjacency list holds the edge id. A self-loop puts its
/// id twice into the same list, like [`Graph`](crate::Graph).
#[derive(Debug, Clone)]
pub struct EdgeWeightedGraph {
    options: GraphOptions,
    edges: Vec<Edge>,
    adj: Vec<Vec<usize>>,
}

impl EdgeWeightedGraph {
    pub fn new(vertex_count: usize) -> Self {
        Self::with_options(vertex_count, GraphOptions::default())
    }

    pub fn with_options(vertex_count: usize, options: GraphOptions) -> Self {
        Self {
            options,
            edges: Vec::new(),
            adj: vec![Vec::new(); vertex_count],
        }
    }

    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Result<Self> {
        let mut g = Self::new(vertex_count);
        for &(v, w, weight) in edges {
            g.add_edge(Edge::new(v, w, weight))?;
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
        self.edges.len()
    }

    pub fn add_edge(&mut self, e: Edge) -> Result<()> {
        let v = e.either();
        let w = e.other(v);
        check_vertex(v, self.adj.len())?;
        check_vertex(w, self.adj.len())?;
        if v == w && !self.options.self_loops {
            return Err(Error::SelfLoop { vertex: v });
        }
        if !self.options.multigraph && self.adj[v].iter().any(|&id| self.edges[id].other(v) == w)
        {
            return Err(Error::ParallelEdge { v, w });
        }

        let id = self.edges.len();
        self.edges.push(e);
        self.adj[v].push(id);
        self.adj[w].push(id);
        Ok(())
    }

    pub fn edge(&self, id: usize) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Edges incident to `v`, in insertion order.
    pub fn adj(&self, v: usize) -> impl Iterator<Item = &Edge> + '_ {
        slice_or_empty(&self.adj, v)
            .iter()
            .map(move |&id| &self.edges[id])
    }

    pub fn degree(&self, v: usize) -> usize {
        slice_or_empty(&self.adj, v).len()
    }

    /// Every edge once, scanning vertices in order and reporting an edge only from its smaller
    /// endpoint. A self-loop is reported at the first of its two entries.
    pub fn edges(&self) -> Vec<Edge> {
        let mut out: Vec<Edge> = Vec::with_capacity(self.edges.len());
        for (v, ids) in self.adj.iter().enumerate() {
            let mut self_loop_entries = 0usize;
            for &id in ids {
                let e = self.edges[id];
                let w = e.other(v);
                if w > v {
                    out.push(e);
                } else if w == v {
                    if self_loop_entries % 2 == 0 {
                        out.push(e);
                    }
                    self_loop_entries += 1;
                }
            }
        }
        out
    }
}

pub struct OtherEndpoints<'a> {
    v: usize,
    ids: slice::Iter<'a, usize>,
    edges: &'a [Edge],
}

impl Iterator for OtherEndpoints<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let &id = self.ids.next()?;
        Some(self.edges[id].other(self.v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

pub struct IncidentEdges<'a> {
    v: usize,
    ids: slice::Iter<'a, usize>,
    edges: &'a [Edge],
}

impl Iterator for IncidentEdges<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        let &id = self.ids.next()?;
        Some((self.edges[id].other(self.v), id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl Neighbors for EdgeWeightedGraph {
    type Iter<'a> = OtherEndpoints<'a>;

    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors(&self, v: usize) -> Self::Iter<'_> {
        OtherEndpoints {
            v,
            ids: slice_or_empty(&self.adj, v).iter(),
            edges: &self.edges,
        }
    }
}

impl Undirected for EdgeWeightedGraph {
    type Incident<'a> = IncidentEdges<'a>;

    fn incident(&self, v: usize) -> Self::Incident<'_> {
        IncidentEdges {
            v,
            ids: slice_or_empty(&self.adj, v).iter(),
            edges: &self.edges,
        }
    }
}

impl fmt::Display for EdgeWeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count())?;
        for v in 0..self.adj.len() {
            write!(f, "{v}:")?;
            for e in self.adj(v) {
                write!(f, " {e},")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Directed edge-weighted graph.
#[derive(Debug, Clone)]
pub struct EdgeWeightedDigraph {
    options: GraphOptions,
    edge_count: usize,
    adj: Vec<Vec<DirectedEdge>>,
    indegree: Vec<usize>,
}

impl EdgeWeightedDigraph {
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

    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Result<Self> {
        let mut g = Self::new(vertex_count);
        for &(from, to, weight) in edges {
            g.add_edge(DirectedEdge::new(from, to, weight))?;
        }
        Ok(g)
    }

    /// Both orientations of every undirected edge.
    pub fn from_undirected(g: &EdgeWeightedGraph) -> Self {
        let mut out = Self::with_options(g.vertex_count(), g.options());
        for e in g.edges() {
            let v = e.either();
            let w = e.other(v);
            out.push(DirectedEdge::new(v, w, e.weight));
            if v != w {
                out.push(DirectedEdge::new(w, v, e.weight));
            }
        }
        out
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

    pub fn add_edge(&mut self, e: DirectedEdge) -> Result<()> {
        check_vertex(e.from, self.adj.len())?;
        check_vertex(e.to, self.adj.len())?;
        if e.from == e.to && !self.options.self_loops {
            return Err(Error::SelfLoop { vertex: e.from });
        }
        if !self.options.multigraph && self.adj[e.from].iter().any(|x| x.to == e.to) {
            return Err(Error::ParallelEdge { v: e.from, w: e.to });
        }
        self.push(e);
        Ok(())
    }

    fn push(&mut self, e: DirectedEdge) {
        self.adj[e.from].push(e);
        self.indegree[e.to] += 1;
        self.edge_count += 1;
    }

    pub fn adj(&self, v: usize) -> &[DirectedEdge] {
        slice_or_empty(&self.adj, v)
    }

    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge> + '_ {
        self.adj.iter().flatten()
    }

    pub fn outdegree(&self, v: usize) -> usize {
        self.adj(v).len()
    }

    pub fn indegree(&self, v: usize) -> usize {
        self.indegree.get(v).copied().unwrap_or(0)
    }
}

impl Reversible for EdgeWeightedDigraph {
    fn reverse(&self) -> Self {
        let mut r = Self::with_options(self.adj.len(), self.options);
        for e in self.edges() {
            r.push(e.reversed());
        }
        r
    }
}

fn edge_target(e: &DirectedEdge) -> usize {
    e.to
}

impl Neighbors for EdgeWeightedDigraph {
    type Iter<'a> = Map<slice::Iter<'a, DirectedEdge>, fn(&DirectedEdge) -> usize>;

    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors(&self, v: usize) -> Self::Iter<'_> {
        self.adj(v).iter().map(edge_target as fn(&DirectedEdge) -> usize)
    }
}

impl fmt::Display for EdgeWeightedDigraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count)?;
        for (v, list) in self.adj.iter().enumerate() {
            write!(f, "{v}:")?;
            for e in list {
                write!(f, " {e},")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
