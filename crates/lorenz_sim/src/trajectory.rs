//! Bounded trajectory buffer
//!
//! Points are kept in simulation order. Once the buffer holds `capacity`
//! points, each push evicts exactly the oldest one. Backed by a `VecDeque`
//! so both ends are O(1).

use std::collections::VecDeque;

use lorenz_math::Vec3;

/// Number of points the viewer keeps on screen
pub const DEFAULT_TRAJECTORY_CAPACITY: usize = 5000;

/// FIFO-bounded sequence of trajectory points
#[derive(Clone, Debug)]
pub struct Trajectory {
    points: VecDeque<Vec3>,
    capacity: usize,
}

impl Trajectory {
    /// Create an empty trajectory holding at most `capacity` points
    ///
    /// A capacity of zero is bumped to one so the latest point is always kept.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a point, evicting and returning the oldest if over capacity
    pub fn push(&mut self, point: Vec3) -> Option<Vec3> {
        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front()
        } else {
            None
        }
    }

    /// Number of stored points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no points are stored
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum number of stored points
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recently appended point
    pub fn latest(&self) -> Option<Vec3> {
        self.points.back().copied()
    }

    /// Oldest point still stored
    pub fn oldest(&self) -> Option<Vec3> {
        self.points.front().copied()
    }

    /// Point at `index` (0 = oldest)
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }

    /// Iterate points from oldest to newest
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.points.iter().copied()
    }

    /// Iterate adjacent pairs `(i, points[i], points[i + 1])`
    ///
    /// Yields nothing when fewer than two points are stored.
    pub fn segments(&self) -> impl Iterator<Item = (usize, Vec3, Vec3)> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .enumerate()
            .map(|(i, (a, b))| (i, *a, *b))
    }

    /// Number of adjacent pairs
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Remove all points
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TRAJECTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> Vec3 {
        Vec3::new(i as f32, 0.0, 0.0)
    }

    #[test]
    fn test_push_below_capacity() {
        let mut t = Trajectory::with_capacity(3);
        assert_eq!(t.push(p(0)), None);
        assert_eq!(t.push(p(1)), None);
        assert_eq!(t.len(), 2);
        assert_eq!(t.oldest(), Some(p(0)));
        assert_eq!(t.latest(), Some(p(1)));
    }

    #[test]
    fn test_eviction_is_fifo() {
        let mut t = Trajectory::with_capacity(3);
        for i in 0..3 {
            t.push(p(i));
        }
        assert_eq!(t.push(p(3)), Some(p(0)));
        assert_eq!(t.push(p(4)), Some(p(1)));
        assert_eq!(t.iter().collect::<Vec<_>>(), vec![p(2), p(3), p(4)]);
    }

    #[test]
    fn test_length_never_exceeds_capacity() {
        let mut t = Trajectory::with_capacity(10);
        for i in 0..100 {
            t.push(p(i));
            assert!(t.len() <= t.capacity());
        }
        assert_eq!(t.len(), 10);
        assert_eq!(t.oldest(), Some(p(90)));
        assert_eq!(t.latest(), Some(p(99)));
    }

    #[test]
    fn test_segments() {
        let mut t = Trajectory::with_capacity(4);
        assert_eq!(t.segments().count(), 0);

        t.push(p(0));
        assert_eq!(t.segments().count(), 0);
        assert_eq!(t.segment_count(), 0);

        t.push(p(1));
        t.push(p(2));
        let segs: Vec<_> = t.segments().collect();
        assert_eq!(segs, vec![(0, p(0), p(1)), (1, p(1), p(2))]);
        assert_eq!(t.segment_count(), 2);
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let mut t = Trajectory::with_capacity(0);
        t.push(p(0));
        t.push(p(1));
        assert_eq!(t.len(), 1);
        assert_eq!(t.latest(), Some(p(1)));
    }

    #[test]
    fn test_clear() {
        let mut t = Trajectory::default();
        t.push(p(0));
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.latest(), None);
        assert_eq!(t.capacity(), DEFAULT_TRAJECTORY_CAPACITY);
    }
}
