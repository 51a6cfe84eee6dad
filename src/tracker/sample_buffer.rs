//! Bounded, time-ordered history of ball observations.

use std::collections::VecDeque;

use crate::tracker::ball_information::BallInformation;

/// Upper bound on the up-front allocation; larger buffers grow on demand.
const PREALLOCATED_SAMPLES: usize = 64;

/// Oldest-first ring of recent sightings with a fixed capacity.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: VecDeque<BallInformation>,
    capacity: usize,
}

impl SampleBuffer {
    /// Create an empty buffer. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity.min(PREALLOCATED_SAMPLES)),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest one when full.
    pub fn push(&mut self, sample: BallInformation) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    #[inline]
    pub fn oldest(&self) -> Option<&BallInformation> {
        self.samples.front()
    }

    #[inline]
    pub fn newest(&self) -> Option<&BallInformation> {
        self.samples.back()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &BallInformation> {
        self.samples.iter()
    }
}
