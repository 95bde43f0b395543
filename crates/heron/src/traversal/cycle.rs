//! Cycle detection for undirected and directed graphs.

use super::Frame;
use crate::graphlib::{Neighbors, Undirected};

/// Finds a cycle in an undirected graph, if any.
///
/// A marked neighbor closes a cycle unless it is reached over the very edge the current vertex
/// was entered by. Edge identity (not the parent vertex) is compared, so two parallel edges form
/// a cycle of length two and a self-loop a cycle of length one.
#[derive(Debug, Clone)]
pub struct Cycle {
    cycle: Option<Vec<usize>>,
}

struct UndirectedFrame<I> {
    frame: Frame<I>,
    entered_by: Option<usize>,
}

impl Cycle {
    pub fn new<G: Undirected>(g: &G) -> Self {
        let n = g.vertex_count();
        let mut marked: Vec<bool> = vec![false; n];
        let mut edge_to: Vec<Option<usize>> = vec![None; n];

        for s in 0..n {
            if marked[s] {
                continue;
            }
            marked[s] = true;
            let mut stack: Vec<UndirectedFrame<G::Incident<'_>>> = vec![UndirectedFrame {
                frame: Frame {
                    v: s,
                    rest: g.incident(s),
                },
                entered_by: None,
            }];
            while let Some(top) = stack.last_mut() {
                let v = top.frame.v;
                let entered_by = top.entered_by;
                let Some((w, edge)) = top.frame.rest.next() else {
                    stack.pop();
                    continue;
                };
                if !marked[w] {
                    marked[w] = true;
                    edge_to[w] = Some(v);
                    stack.push(UndirectedFrame {
                        frame: Frame {
                            v: w,
                            rest: g.incident(w),
                        },
                        entered_by: Some(edge),
                    });
                } else if entered_by != Some(edge) {
                    let cycle = close_cycle(&edge_to, v, w);
                    tracing::debug!(len = cycle.len() - 1, "undirected cycle found");
                    return Self { cycle: Some(cycle) };
                }
            }
        }

        tracing::debug!(vertices = n, "no undirected cycle");
        Self { cycle: None }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// The cycle as a closed walk: first and last vertex are the same.
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}

/// Finds a directed cycle, stopping at the first one.
///
/// A neighbor that is marked and still on the current depth-first path is reached by a back
/// edge `v->w`; the cycle is `v->w` followed by the tree path from `w` down to `v`.
#[derive(Debug, Clone)]
pub struct DirectedCycle {
    cycle: Option<Vec<usize>>,
}

impl DirectedCycle {
    pub fn new<G: Neighbors>(g: &G) -> Self {
        let n = g.vertex_count();
        let mut marked: Vec<bool> = vec![false; n];
        let mut on_stack: Vec<bool> = vec![false; n];
        let mut edge_to: Vec<Option<usize>> = vec![None; n];

        for s in 0..n {
            if marked[s] {
                continue;
            }
            marked[s] = true;
            on_stack[s] = true;
            let mut stack: Vec<Frame<G::Iter<'_>>> = vec![Frame {
                v: s,
                rest: g.neighbors(s),
            }];
            while let Some(frame) = stack.last_mut() {
                let v = frame.v;
                let Some(w) = frame.rest.next() else {
                    on_stack[v] = false;
                    stack.pop();
                    continue;
                };
                if !marked[w] {
                    marked[w] = true;
                    on_stack[w] = true;
                    edge_to[w] = Some(v);
                    stack.push(Frame {
                        v: w,
                        rest: g.neighbors(w),
                    });
                } else if on_stack[w] {
                    let cycle = close_cycle(&edge_to, v, w);
                    tracing::debug!(len = cycle.len() - 1, "directed cycle found");
                    return Self { cycle: Some(cycle) };
                }
            }
        }

        tracing::debug!(vertices = n, "no directed cycle");
        Self { cycle: None }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// The cycle in edge direction, as a closed walk `[v, w, .., v]`.
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }

    pub(crate) fn into_cycle(self) -> Option<Vec<usize>> {
        self.cycle
    }
}

/// `[v, w, .., v]` where `w` is an ancestor of `v` (or `v` itself) in the search tree.
fn close_cycle(edge_to: &[Option<usize>], v: usize, w: usize) -> Vec<usize> {
    let mut cycle: Vec<usize> = Vec::new();
    let mut x = v;
    while x != w {
        cycle.push(x);
        let Some(prev) = edge_to[x] else {
            debug_assert!(false, "cycle walk left the search tree at {x}");
            break;
        };
        x = prev;
    }
    cycle.push(w);
    cycle.push(v);
    cycle.reverse();
    cycle
}
