//! Depth-first / breadth-first traversal and the analyses built on them.
//!
//! Every depth-first search here runs on an explicit stack of [`Frame`]s holding the vertex and
//! the rest of its neighbor iterator. The visiting order is exactly the recursive one (neighbors
//! in adjacency order, a vertex finishes after all its descendants), but the call stack stays
//! flat no matter how long the paths in the graph are.

use crate::graphlib::Neighbors;

mod components;
mod cycle;
mod order;
mod paths;

pub use components::{ConnectedComponents, KosarajuScc};
pub use cycle::{Cycle, DirectedCycle};
pub use order::{DepthFirstOrder, Topological};
pub use paths::{BreadthFirstPaths, DepthFirstPaths};

/// One suspended vertex of an iterative depth-first search.
pub(crate) struct Frame<I> {
    pub(crate) v: usize,
    pub(crate) rest: I,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DfsEvent {
    /// `v` was marked, reached from `parent` (`None` for the root).
    Discover { v: usize, parent: Option<usize> },
    /// All of `v`'s neighbors have been explored.
    Finish { v: usize },
}

/// Depth-first search from `root` over vertices not yet `marked`, reporting discoveries and
/// finishes in recursive order. Does nothing when `root` is already marked.
pub(crate) fn depth_first<G, F>(g: &G, root: usize, marked: &mut [bool], mut visit: F)
where
    G: Neighbors,
    F: FnMut(DfsEvent),
{
    if marked[root] {
        return;
    }
    marked[root] = true;
    visit(DfsEvent::Discover {
        v: root,
        parent: None,
    });

    let mut stack: Vec<Frame<G::Iter<'_>>> = vec![Frame {
        v: root,
        rest: g.neighbors(root),
    }];
    while let Some(frame) = stack.last_mut() {
        let v = frame.v;
        let Some(w) = frame.rest.next() else {
            stack.pop();
            visit(DfsEvent::Finish { v });
            continue;
        };
        if marked[w] {
            continue;
        }
        marked[w] = true;
        visit(DfsEvent::Discover { v: w, parent: Some(v) });
        stack.push(Frame {
            v: w,
            rest: g.neighbors(w),
        });
    }
}

/// Source-to-`v` vertex path read off a predecessor array.
pub(crate) fn walk_back(edge_to: &[Option<usize>], source: usize, v: usize) -> Vec<usize> {
    let mut path: Vec<usize> = vec![v];
    let mut x = v;
    while x != source {
        let Some(prev) = edge_to[x] else {
            debug_assert!(false, "predecessor chain broken at {x}");
            break;
        };
        path.push(prev);
        x = prev;
    }
    path.reverse();
    path
}
