//! Graphs addressed by external labels instead of dense vertex ids.
//!
//! The label set is fixed when the graph is built: [`LabelIndex`] assigns ids in first-seen
//! order and never changes afterwards. The wrapped [`Graph`] / [`Digraph`] is what the
//! algorithms run on; results come back as ids and are mapped back with [`LabelIndex::name`].

use crate::error::Result;
use crate::{Digraph, Error, Graph, GraphOptions};
use rustc_hash::FxBuildHasher;
use std::fmt;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Bijection between labels and `0..len()`.
#[derive(Debug, Clone)]
pub struct LabelIndex<L> {
    names: Vec<L>,
    ids: HashMap<L, usize>,
}

impl<L> LabelIndex<L>
where
    L: Hash + Eq + Clone,
{
    /// Duplicate labels collapse onto the id of their first occurrence.
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
    {
        let mut names: Vec<L> = Vec::new();
        let mut ids: HashMap<L, usize> = HashMap::default();
        for label in labels {
            if ids.contains_key(&label) {
                continue;
            }
            ids.insert(label.clone(), names.len());
            names.push(label);
        }
        Self { names, ids }
    }

    pub fn index(&self, label: &L) -> Option<usize> {
        self.ids.get(label).copied()
    }

    pub fn name(&self, id: usize) -> Option<&L> {
        self.names.get(id)
    }

    pub fn contains(&self, label: &L) -> bool {
        self.ids.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn labels(&self) -> &[L] {
        &self.names
    }
}

impl<L> LabelIndex<L>
where
    L: Hash + Eq + Clone + fmt::Debug,
{
    fn require(&self, label: &L) -> Result<usize> {
        self.index(label).ok_or_else(|| Error::UnknownLabel {
            label: format!("{label:?}"),
        })
    }
}

/// Undirected graph over labels.
#[derive(Debug, Clone)]
pub struct SymbolGraph<L> {
    labels: LabelIndex<L>,
    graph: Graph,
}

impl<L> SymbolGraph<L>
where
    L: Hash + Eq + Clone + fmt::Debug,
{
    pub fn new<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
    {
        Self::with_options(labels, GraphOptions::default())
    }

    pub fn with_options<I>(labels: I, options: GraphOptions) -> Self
    where
        I: IntoIterator<Item = L>,
    {
        let labels = LabelIndex::from_labels(labels);
        let graph = Graph::with_options(labels.len(), options);
        Self { labels, graph }
    }

    pub fn add_edge(&mut self, v: &L, w: &L) -> Result<()> {
        let v = self.labels.require(v)?;
        let w = self.labels.require(w)?;
        self.graph.add_edge(v, w)
    }

    pub fn index(&self, label: &L) -> Option<usize> {
        self.labels.index(label)
    }

    pub fn name(&self, id: usize) -> Option<&L> {
        self.labels.name(id)
    }

    pub fn labels(&self) -> &LabelIndex<L> {
        &self.labels
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

impl<L> fmt::Display for SymbolGraph<L>
where
    L: Hash + Eq + Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_labeled(f, &self.labels, self.graph.edge_count(), ":", |v| {
            self.graph.adj(v)
        })
    }
}

/// Directed graph over labels.
#[derive(Debug, Clone)]
pub struct SymbolDigraph<L> {
    labels: LabelIndex<L>,
    digraph: Digraph,
}

impl<L> SymbolDigraph<L>
where
    L: Hash + Eq + Clone + fmt::Debug,
{
    pub fn new<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
    {
        Self::with_options(labels, GraphOptions::default())
    }

    pub fn with_options<I>(labels: I, options: GraphOptions) -> Self
    where
        I: IntoIterator<Item = L>,
    {
        let labels = LabelIndex::from_labels(labels);
        let digraph = Digraph::with_options(labels.len(), options);
        Self { labels, digraph }
    }

    pub fn add_edge(&mut self, from: &L, to: &L) -> Result<()> {
        let v = self.labels.require(from)?;
        let w = self.labels.require(to)?;
        self.digraph.add_edge(v, w)
    }

    pub fn index(&self, label: &L) -> Option<usize> {
        self.labels.index(label)
    }

    pub fn name(&self, id: usize) -> Option<&L> {
        self.labels.name(id)
    }

    pub fn labels(&self) -> &LabelIndex<L> {
        &self.labels
    }

    pub fn digraph(&self) -> &Digraph {
        &self.digraph
    }
}

impl<L> fmt::Display for SymbolDigraph<L>
where
    L: Hash + Eq + Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_labeled(f, &self.labels, self.digraph.edge_count(), " ->", |v| {
            self.digraph.adj(v)
        })
    }
}

fn write_labeled<'a, L, F>(
    f: &mut fmt::Formatter<'_>,
    labels: &LabelIndex<L>,
    edge_count: usize,
    separator: &str,
    adj: F,
) -> fmt::Result
where
    L: fmt::Display,
    F: Fn(usize) -> &'a [usize],
{
    writeln!(f, "{} vertices, {} edges", labels.names.len(), edge_count)?;
    for (v, name) in labels.names.iter().enumerate() {
        write!(f, "{name}{separator}")?;
        for &w in adj(v) {
            if let Some(other) = labels.names.get(w) {
                write!(f, " {other}")?;
            }
        }
        writeln!(f)?;
    }
    Ok(())
}
