//! Graph configuration options.

/// Edge admission rules shared by every graph kind.
///
/// The defaults accept everything: parallel edges and self-loops are stored as repeated or
/// self adjacency entries. Turning either flag off makes `add_edge` reject the edge instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    pub multigraph: bool,
    pub self_loops: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            multigraph: true,
            self_loops: true,
        }
    }
}

impl GraphOptions {
    /// Simple graphs: no parallel edges, no self-loops.
    pub fn simple() -> Self {
        Self {
            multigraph: false,
            self_loops: false,
        }
    }
}
