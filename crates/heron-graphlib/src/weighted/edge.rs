//! Weighted edge types.

use std::cmp::Ordering;
use std::fmt;

/// Undirected weighted edge `v-w`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub v: usize,
    pub w: usize,
    pub weight: f64,
}

impl Edge {
    pub fn new(v: usize, w: usize, weight: f64) -> Self {
        Self { v, w, weight }
    }

    pub fn either(&self) -> usize {
        self.v
    }

    /// The endpoint opposite `vertex`. A `vertex` that is not an endpoint yields `v`.
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.v { self.w } else { self.v }
    }

    /// Total order on weights (`f64::total_cmp`), used by the spanning tree heaps.
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.2}", self.v, self.w, self.weight)
    }
}

/// Directed weighted edge `from->to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

impl DirectedEdge {
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }

    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:.2}", self.from, self.to, self.weight)
    }
}
