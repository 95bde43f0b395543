use crate::graphlib;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] graphlib::Error),

    #[error("negative edge weight {weight} on {from}->{to}")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    #[error("graph is not a DAG: directed cycle {cycle:?}")]
    NotADag { cycle: Vec<usize> },

    #[error("index {index} is out of range for a queue of capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[error("index {index} is already in the priority queue")]
    IndexAlreadyPresent { index: usize },

    #[error("index {index} is not in the priority queue")]
    IndexAbsent { index: usize },

    #[error("new key for index {index} does not strictly decrease its current key")]
    KeyNotDecreased { index: usize },

    #[error("priority queue is empty")]
    EmptyQueue,

    #[error("job {job} is out of range for a schedule of {job_count} jobs")]
    JobOutOfRange { job: usize, job_count: usize },

    #[error("certificate check failed: {reason}")]
    CertificateViolation { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_source(source: usize, vertex_count: usize) -> Result<()> {
    if source < vertex_count {
        Ok(())
    } else {
        Err(Error::Graph(graphlib::Error::VertexOutOfRange {
            vertex: source,
            vertex_count,
        }))
    }
}
