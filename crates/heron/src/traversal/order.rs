//! Depth-first vertex orders and topological sorting.

use super::{DfsEvent, DirectedCycle, depth_first};
use crate::error::{Error, Result};
use crate::graphlib::Neighbors;

/// Preorder, postorder and reverse postorder of a depth-first search that starts a new tree at
/// every still-unmarked vertex, in vertex order.
#[derive(Debug, Clone)]
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
    reverse_post: Vec<usize>,
    pre_index: Vec<usize>,
    post_index: Vec<usize>,
}

impl DepthFirstOrder {
    pub fn new<G: Neighbors>(g: &G) -> Self {
        let n = g.vertex_count();
        let mut marked: Vec<bool> = vec![false; n];
        let mut pre: Vec<usize> = Vec::with_capacity(n);
        let mut post: Vec<usize> = Vec::with_capacity(n);
        let mut pre_index: Vec<usize> = vec![0; n];
        let mut post_index: Vec<usize> = vec![0; n];

        for s in 0..n {
            depth_first(g, s, &mut marked, |event| match event {
                DfsEvent::Discover { v, .. } => {
                    pre_index[v] = pre.len();
                    pre.push(v);
                }
                DfsEvent::Finish { v } => {
                    post_index[v] = post.len();
                    post.push(v);
                }
            });
        }

        let mut reverse_post = post.clone();
        reverse_post.reverse();
        Self {
            pre,
            post,
            reverse_post,
            pre_index,
            post_index,
        }
    }

    pub fn pre(&self) -> &[usize] {
        &self.pre
    }

    pub fn post(&self) -> &[usize] {
        &self.post
    }

    pub fn reverse_post(&self) -> &[usize] {
        &self.reverse_post
    }

    pub fn pre_index(&self, v: usize) -> Option<usize> {
        self.pre_index.get(v).copied()
    }

    pub fn post_index(&self, v: usize) -> Option<usize> {
        self.post_index.get(v).copied()
    }

    pub(crate) fn into_reverse_post(self) -> Vec<usize> {
        self.reverse_post
    }
}

/// Topological order of a directed graph, or the cycle that rules one out.
///
/// For every edge `v->w` of a DAG, `v` comes before `w` in [`order`](Self::order).
#[derive(Debug, Clone)]
pub struct Topological {
    order: Option<Vec<usize>>,
    rank: Vec<usize>,
    cycle: Option<Vec<usize>>,
}

impl Topological {
    pub fn new<G: Neighbors>(g: &G) -> Self {
        if let Some(cycle) = DirectedCycle::new(g).into_cycle() {
            tracing::debug!(?cycle, "topological sort: not a DAG");
            return Self {
                order: None,
                rank: Vec::new(),
                cycle: Some(cycle),
            };
        }

        let order = DepthFirstOrder::new(g).into_reverse_post();
        let mut rank: Vec<usize> = vec![0; order.len()];
        for (i, &v) in order.iter().enumerate() {
            rank[v] = i;
        }
        tracing::debug!(vertices = order.len(), "topological order computed");
        Self {
            order: Some(order),
            rank,
            cycle: None,
        }
    }

    /// The order, or [`Error::NotADag`] carrying a directed cycle.
    pub fn try_order<G: Neighbors>(g: &G) -> Result<Vec<usize>> {
        let t = Self::new(g);
        match (t.order, t.cycle) {
            (Some(order), _) => Ok(order),
            (None, cycle) => Err(Error::NotADag {
                cycle: cycle.unwrap_or_default(),
            }),
        }
    }

    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    pub fn is_dag(&self) -> bool {
        self.has_order()
    }

    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Position of `v` in the order; `None` for a cyclic graph or an unknown vertex.
    pub fn rank(&self, v: usize) -> Option<usize> {
        self.order.as_ref()?;
        self.rank.get(v).copied()
    }

    /// The directed cycle found when the graph is not a DAG.
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}
