//! Connected components (undirected) and strongly connected components (Kosaraju-Sharir).

use super::{DepthFirstOrder, DfsEvent, depth_first};
use crate::graphlib::{Neighbors, Reversible, Undirected};

/// Component ids assigned by depth-first passes started from `roots` in the given order.
#[derive(Debug, Clone)]
struct Labeling {
    id: Vec<usize>,
    size: Vec<usize>,
}

impl Labeling {
    fn run<G, I>(g: &G, roots: I) -> Self
    where
        G: Neighbors,
        I: IntoIterator<Item = usize>,
    {
        let n = g.vertex_count();
        let mut marked: Vec<bool> = vec![false; n];
        let mut id: Vec<usize> = vec![0; n];
        let mut size: Vec<usize> = Vec::new();

        for s in roots {
            if marked[s] {
                continue;
            }
            let label = size.len();
            let mut members = 0usize;
            depth_first(g, s, &mut marked, |event| {
                if let DfsEvent::Discover { v, .. } = event {
                    id[v] = label;
                    members += 1;
                }
            });
            size.push(members);
        }
        Self { id, size }
    }

    fn count(&self) -> usize {
        self.size.len()
    }

    fn id(&self, v: usize) -> Option<usize> {
        self.id.get(v).copied()
    }

    fn connected(&self, v: usize, w: usize) -> bool {
        match (self.id(v), self.id(w)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    fn components(&self) -> Vec<Vec<usize>> {
        let mut out: Vec<Vec<usize>> = self.size.iter().map(|&s| Vec::with_capacity(s)).collect();
        for (v, &c) in self.id.iter().enumerate() {
            out[c].push(v);
        }
        out
    }
}

/// Connected components of an undirected graph; `connected` is a constant-time id comparison.
#[derive(Debug, Clone)]
pub struct ConnectedComponents {
    labels: Labeling,
}

impl ConnectedComponents {
    pub fn new<G: Undirected>(g: &G) -> Self {
        let labels = Labeling::run(g, 0..g.vertex_count());
        tracing::debug!(components = labels.count(), "connected components computed");
        Self { labels }
    }

    pub fn count(&self) -> usize {
        self.labels.count()
    }

    /// Component id of `v`, numbered in order of each component's smallest vertex.
    pub fn id(&self, v: usize) -> Option<usize> {
        self.labels.id(v)
    }

    /// Number of vertices in `v`'s component.
    pub fn size(&self, v: usize) -> Option<usize> {
        self.id(v).map(|c| self.labels.size[c])
    }

    pub fn connected(&self, v: usize, w: usize) -> bool {
        self.labels.connected(v, w)
    }

    /// Vertices grouped by component id, ascending within each group.
    pub fn components(&self) -> Vec<Vec<usize>> {
        self.labels.components()
    }
}

/// Strongly connected components of a directed graph.
///
/// Roots are taken from the reverse postorder of the reversed graph; each depth-first pass over
/// `g` itself then stays inside exactly one strong component.
#[derive(Debug, Clone)]
pub struct KosarajuScc {
    labels: Labeling,
}

impl KosarajuScc {
    pub fn new<G: Neighbors + Reversible>(g: &G) -> Self {
        let order = DepthFirstOrder::new(&g.reverse()).into_reverse_post();
        let labels = Labeling::run(g, order);
        tracing::debug!(components = labels.count(), "strong components computed");
        Self { labels }
    }

    pub fn count(&self) -> usize {
        self.labels.count()
    }

    pub fn id(&self, v: usize) -> Option<usize> {
        self.labels.id(v)
    }

    pub fn size(&self, v: usize) -> Option<usize> {
        self.id(v).map(|c| self.labels.size[c])
    }

    /// `true` iff `v` and `w` are reachable from each other.
    pub fn connected(&self, v: usize, w: usize) -> bool {
        self.labels.connected(v, w)
    }

    pub fn components(&self) -> Vec<Vec<usize>> {
        self.labels.components()
    }
}
