use super::{AcyclicLp, ShortestPathTree};
use crate::error::{Error, Result};
use crate::graphlib::{DirectedEdge, EdgeWeightedDigraph};

/// Critical path method for parallel job scheduling with precedence constraints.
///
/// `n` jobs become a `2n + 2` vertex DAG: job `i` is the edge `i -> i + n` weighted by its
/// duration, a global start `s = 2n` feeds every job start at weight 0, every job end feeds the
/// global finish `t = 2n + 1` at weight 0, and each constraint "`p` starts after `i` ends" is the
/// zero-weight edge `i + n -> p`. Longest paths from `s` are the earliest start times.
///
/// The constraints must be acyclic; a cyclic precedence relation produces a meaningless schedule.
#[derive(Debug, Clone)]
pub struct CriticalPathMethod {
    job_count: usize,
    lp: AcyclicLp,
}

impl CriticalPathMethod {
    /// `successors[i]` lists the jobs that cannot start before job `i` finishes. Jobs past the
    /// end of `successors` have no successors.
    pub fn new(durations: &[f64], successors: &[Vec<usize>]) -> Result<Self> {
        let n = durations.len();
        if successors.len() > n {
            return Err(Error::JobOutOfRange {
                job: successors.len() - 1,
                job_count: n,
            });
        }

        let s = 2 * n;
        let t = 2 * n + 1;
        let mut g = EdgeWeightedDigraph::new(2 * n + 2);
        for (i, &duration) in durations.iter().enumerate() {
            g.add_edge(DirectedEdge::new(s, i, 0.0))?;
            g.add_edge(DirectedEdge::new(i + n, t, 0.0))?;
            g.add_edge(DirectedEdge::new(i, i + n, duration))?;
        }
        for (i, next) in successors.iter().enumerate() {
            for &p in next {
                if p >= n {
                    return Err(Error::JobOutOfRange { job: p, job_count: n });
                }
                g.add_edge(DirectedEdge::new(i + n, p, 0.0))?;
            }
        }

        let lp = AcyclicLp::new(&g, s)?;
        tracing::debug!(
            jobs = n,
            finish = lp.dist_to(t),
            "critical path schedule computed"
        );
        Ok(Self { job_count: n, lp })
    }

    pub fn job_count(&self) -> usize {
        self.job_count
    }

    /// Earliest start time of job `i`.
    pub fn start_time(&self, i: usize) -> Option<f64> {
        (i < self.job_count).then(|| self.lp.dist_to(i))
    }

    /// Earliest time job `i` can be done.
    pub fn job_finish_time(&self, i: usize) -> Option<f64> {
        (i < self.job_count).then(|| self.lp.dist_to(i + self.job_count))
    }

    pub fn start_times(&self) -> Vec<f64> {
        (0..self.job_count).map(|i| self.lp.dist_to(i)).collect()
    }

    /// Completion time of the whole schedule: the latest job finish time, or 0 with no jobs.
    pub fn finish_time(&self) -> f64 {
        if self.job_count == 0 {
            return 0.0;
        }
        self.lp.dist_to(2 * self.job_count + 1)
    }

    /// Jobs on one longest chain, in execution order.
    pub fn critical_path(&self) -> Vec<usize> {
        let n = self.job_count;
        self.lp
            .path_to(2 * n + 1)
            .unwrap_or_default()
            .iter()
            .filter(|e| e.from < n && e.to == e.from + n)
            .map(|e| e.from)
            .collect()
    }
}
