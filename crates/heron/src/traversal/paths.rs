//! Single-source reachability and paths.

use super::{DfsEvent, depth_first, walk_back};
use crate::error::{Result, check_source};
use crate::graphlib::Neighbors;
use std::collections::VecDeque;

/// Vertices reachable from a source, with the depth-first tree as predecessor links.
#[derive(Debug, Clone)]
pub struct DepthFirstPaths {
    source: usize,
    marked: Vec<bool>,
    edge_to: Vec<Option<usize>>,
    count: usize,
}

impl DepthFirstPaths {
    pub fn new<G: Neighbors>(g: &G, source: usize) -> Result<Self> {
        let n = g.vertex_count();
        check_source(source, n)?;

        let mut marked: Vec<bool> = vec![false; n];
        let mut edge_to: Vec<Option<usize>> = vec![None; n];
        let mut count = 0usize;
        depth_first(g, source, &mut marked, |event| {
            if let DfsEvent::Discover { v, parent } = event {
                edge_to[v] = parent;
                count += 1;
            }
        });

        tracing::debug!(source, reached = count, "depth-first paths computed");
        Ok(Self {
            source,
            marked,
            edge_to,
            count,
        })
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn has_path_to(&self, v: usize) -> bool {
        self.marked.get(v).copied().unwrap_or(false)
    }

    /// Source first, `v` last. `None` when `v` is unreachable.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.has_path_to(v) {
            return None;
        }
        Some(walk_back(&self.edge_to, self.source, v))
    }

    /// Number of vertices reachable from the source, the source included.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Fewest-edge paths from a source.
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    source: usize,
    marked: Vec<bool>,
    edge_to: Vec<Option<usize>>,
    dist_to: Vec<usize>,
}

impl BreadthFirstPaths {
    pub fn new<G: Neighbors>(g: &G, source: usize) -> Result<Self> {
        let n = g.vertex_count();
        check_source(source, n)?;

        let mut marked: Vec<bool> = vec![false; n];
        let mut edge_to: Vec<Option<usize>> = vec![None; n];
        let mut dist_to: Vec<usize> = vec![usize::MAX; n];
        let mut queue: VecDeque<usize> = VecDeque::new();

        marked[source] = true;
        dist_to[source] = 0;
        queue.push_back(source);
        while let Some(v) = queue.pop_front() {
            for w in g.neighbors(v) {
                if marked[w] {
                    continue;
                }
                marked[w] = true;
                edge_to[w] = Some(v);
                dist_to[w] = dist_to[v] + 1;
                queue.push_back(w);
            }
        }

        tracing::debug!(source, "breadth-first paths computed");
        Ok(Self {
            source,
            marked,
            edge_to,
            dist_to,
        })
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn has_path_to(&self, v: usize) -> bool {
        self.marked.get(v).copied().unwrap_or(false)
    }

    /// Number of edges on a shortest path, `None` when unreachable.
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.has_path_to(v).then(|| self.dist_to[v])
    }

    /// Source first, `v` last; no other path from the source to `v` has fewer edges.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.has_path_to(v) {
            return None;
        }
        Some(walk_back(&self.edge_to, self.source, v))
    }
}
