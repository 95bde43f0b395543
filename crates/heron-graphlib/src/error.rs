#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("self-loop on vertex {vertex} rejected (self_loops disabled)")]
    SelfLoop { vertex: usize },

    #[error("parallel edge {v}-{w} rejected (multigraph disabled)")]
    ParallelEdge { v: usize, w: usize },

    #[error("unknown vertex label: {label}")]
    UnknownLabel { label: String },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(Error::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}
