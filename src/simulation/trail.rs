//! Position history of a body, consumed by the renderer
//!
//! Points are kept in insertion order. A trail is unbounded unless it was
//! created with a capacity, in which case pushing onto a full trail evicts
//! the oldest point.

use std::collections::VecDeque;

use super::states::NVec2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<NVec2>,
    capacity: Option<usize>,
}

impl Trail {
    /// Trail that grows for the whole run
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Trail keeping only the most recent `capacity` points.
    /// Storage grows on demand, `capacity` is only the eviction limit.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            points: VecDeque::new(),
            capacity: Some(capacity),
        }
    }

    pub fn with_capacity(capacity: Option<usize>) -> Self {
        match capacity {
            Some(c) => Self::bounded(c),
            None => Self::unbounded(),
        }
    }

    pub fn push(&mut self, point: NVec2) {
        if let Some(cap) = self.capacity {
            if cap == 0 {
                return;
            }
            while self.points.len() >= cap {
                self.points.pop_front();
            }
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Oldest point first
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.back()
    }

    pub fn to_vec(&self) -> Vec<NVec2> {
        self.points.iter().copied().collect()
    }
}
