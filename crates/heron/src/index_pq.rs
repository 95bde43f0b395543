//! Indexed min-priority queue.
//!
//! Keys are attached to external indices from a fixed universe `0..capacity`, so a caller can
//! lower the key of an index that is already queued instead of inserting a duplicate. Dijkstra
//! and eager Prim depend on this.

use crate::error::{Error, Result};
use std::cmp::Ordering;

/// Binary min-heap over indices `0..capacity`.
///
/// `pq` maps heap position to index, `qp` is its inverse (`None` for indices not queued) and
/// `keys` holds the current key per index. `qp[pq[i]] == Some(i)` for every occupied position.
/// Rejected operations leave all three arrays untouched.
#[derive(Debug, Clone)]
pub struct IndexMinPq<K> {
    pq: Vec<usize>,
    qp: Vec<Option<usize>>,
    keys: Vec<Option<K>>,
}

impl<K: PartialOrd> IndexMinPq<K> {
    pub fn new(capacity: usize) -> Self {
        Self {
            pq: Vec::with_capacity(capacity),
            qp: vec![None; capacity],
            keys: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.qp.len()
    }

    pub fn len(&self) -> usize {
        self.pq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pq.is_empty()
    }

    /// Out-of-range indices are never contained.
    pub fn contains(&self, i: usize) -> bool {
        self.qp.get(i).is_some_and(Option::is_some)
    }

    pub fn key_of(&self, i: usize) -> Option<&K> {
        self.keys.get(i).and_then(Option::as_ref)
    }

    pub fn insert(&mut self, i: usize, key: K) -> Result<()> {
        self.validate(i)?;
        if self.contains(i) {
            tracing::trace!(index = i, "index pq: insert of queued index rejected");
            return Err(Error::IndexAlreadyPresent { index: i });
        }
        let pos = self.pq.len();
        self.pq.push(i);
        self.qp[i] = Some(pos);
        self.keys[i] = Some(key);
        self.swim(pos);
        Ok(())
    }

    pub fn min_index(&self) -> Result<usize> {
        self.pq.first().copied().ok_or(Error::EmptyQueue)
    }

    pub fn min_key(&self) -> Result<&K> {
        let i = self.min_index()?;
        self.key_of(i).ok_or(Error::EmptyQueue)
    }

    /// Removes the minimum and returns its index.
    pub fn del_min(&mut self) -> Result<usize> {
        self.pop_min().map(|(i, _)| i)
    }

    /// Removes the minimum and returns its index together with its key.
    pub fn pop_min(&mut self) -> Result<(usize, K)> {
        let i = self.min_index()?;
        let key = self.remove_at(0);
        Ok((i, key.ok_or(Error::EmptyQueue)?))
    }

    /// Lowers the key of a queued index. The new key must compare strictly less.
    pub fn decrease_key(&mut self, i: usize, key: K) -> Result<()> {
        let pos = self.position(i)?;
        let decreases = self
            .key_of(i)
            .is_some_and(|current| key.partial_cmp(current) == Some(Ordering::Less));
        if !decreases {
            tracing::trace!(index = i, "index pq: decrease_key without a smaller key rejected");
            return Err(Error::KeyNotDecreased { index: i });
        }
        self.keys[i] = Some(key);
        self.swim(pos);
        Ok(())
    }

    /// Replaces the key of a queued index, in either direction.
    pub fn change_key(&mut self, i: usize, key: K) -> Result<()> {
        let pos = self.position(i)?;
        self.keys[i] = Some(key);
        self.swim(pos);
        if let Some(pos) = self.qp[i] {
            self.sink(pos);
        }
        Ok(())
    }

    /// Removes a queued index and returns its key.
    pub fn delete(&mut self, i: usize) -> Result<K> {
        let pos = self.position(i)?;
        self.remove_at(pos).ok_or(Error::IndexAbsent { index: i })
    }

    fn validate(&self, i: usize) -> Result<()> {
        if i < self.qp.len() {
            return Ok(());
        }
        tracing::trace!(index = i, capacity = self.qp.len(), "index pq: index out of range");
        Err(Error::IndexOutOfRange {
            index: i,
            capacity: self.qp.len(),
        })
    }

    fn position(&self, i: usize) -> Result<usize> {
        self.validate(i)?;
        self.qp[i].ok_or(Error::IndexAbsent { index: i })
    }

    fn remove_at(&mut self, pos: usize) -> Option<K> {
        let last = self.pq.len() - 1;
        self.swap(pos, last);
        let i = self.pq.pop()?;
        self.qp[i] = None;
        let key = self.keys[i].take();
        if pos < self.pq.len() {
            self.swim(pos);
            self.sink(pos);
        }
        key
    }

    fn greater(&self, a: usize, b: usize) -> bool {
        match (&self.keys[self.pq[a]], &self.keys[self.pq[b]]) {
            (Some(x), Some(y)) => x > y,
            _ => false,
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.pq.swap(a, b);
        self.qp[self.pq[a]] = Some(a);
        self.qp[self.pq[b]] = Some(b);
    }

    fn swim(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.greater(parent, pos) {
                break;
            }
            self.swap(parent, pos);
            pos = parent;
        }
    }

    fn sink(&mut self, mut pos: usize) {
        let n = self.pq.len();
        loop {
            let left = 2 * pos + 1;
            if left >= n {
                break;
            }
            let mut child = left;
            if left + 1 < n && self.greater(left, left + 1) {
                child = left + 1;
            }
            if !self.greater(pos, child) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }
}
