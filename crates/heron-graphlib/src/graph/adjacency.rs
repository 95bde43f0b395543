//! Adjacency views the algorithms in `heron` are written against.
//!
//! Every graph kind, weighted or not, can be walked as plain vertex adjacency. Traversals only
//! need that much, so they stay generic over [`Neighbors`] and run unchanged on weighted graphs.

/// Dense vertex adjacency: vertices are `0..vertex_count()`.
pub trait Neighbors {
    type Iter<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize;

    /// Adjacent vertices of `v` in insertion order. Out-of-range vertices have no neighbors.
    fn neighbors(&self, v: usize) -> Self::Iter<'_>;
}

/// Undirected adjacency with edge identity.
///
/// Each item is `(w, edge_id)`. Both traversal entries of one undirected edge share the same
/// `edge_id`, so an algorithm can tell "the edge I came in on" apart from a parallel edge.
pub trait Undirected: Neighbors {
    type Incident<'a>: Iterator<Item = (usize, usize)>
    where
        Self: 'a;

    fn incident(&self, v: usize) -> Self::Incident<'_>;
}

/// Directed graphs that can produce a copy with every edge flipped.
pub trait Reversible: Sized {
    fn reverse(&self) -> Self;
}
