//! Weighted quick-union with path compression.

use crate::error::Result;
use crate::graphlib;

/// Disjoint sets over `0..n`.
///
/// Unions attach the smaller tree under the root of the larger one; `find` halves the path it
/// walks, pointing every other node at its grandparent.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of elements (fixed).
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn find(&mut self, p: usize) -> Result<usize> {
        self.validate(p)?;
        let mut i = p;
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        Ok(i)
    }

    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Merges the sets of `p` and `q`. Returns `false` when they were already one set.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let i = self.find(p)?;
        let j = self.find(q)?;
        if i == j {
            return Ok(false);
        }

        if self.size[i] < self.size[j] {
            self.parent[i] = j;
            self.size[j] += self.size[i];
        } else {
            self.parent[j] = i;
            self.size[i] += self.size[j];
        }
        self.count -= 1;
        Ok(true)
    }

    fn validate(&self, p: usize) -> Result<()> {
        if p < self.parent.len() {
            return Ok(());
        }
        Err(graphlib::Error::VertexOutOfRange {
            vertex: p,
            vertex_count: self.parent.len(),
        }
        .into())
    }
}
