//! Bounded history of past Bloch vector positions.

use std::collections::{ VecDeque, vec_deque };
use crate::vector::Vec3;

/// Default number of points retained by a [`Trail`].
pub const TRAIL_CAPACITY: usize = 200;

/// First-in, first-out buffer of cartesian points in chronological order.
///
/// Once full, each [`append`][Self::append] evicts the oldest point.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    points: VecDeque<Vec3>,
    capacity: usize,
}

impl Default for Trail {
    fn default() -> Self { Self::new() }
}

impl Trail {
    /// Create a new, empty trail holding up to [`TRAIL_CAPACITY`] points.
    pub fn new() -> Self { Self::with_capacity(TRAIL_CAPACITY) }

    /// Create a new, empty trail holding up to `capacity` points.
    ///
    /// Storage grows as points are appended, so `capacity` only bounds it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { points: VecDeque::new(), capacity }
    }

    /// Add a point at the newest end, removing the oldest if the capacity is
    /// exceeded.
    pub fn append(&mut self, point: Vec3) {
        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Remove all points.
    pub fn clear(&mut self) { self.points.clear(); }

    /// Iterate over all points, oldest first.
    pub fn all(&self) -> vec_deque::Iter<'_, Vec3> { self.points.iter() }

    /// Return the most recently appended point.
    pub fn latest(&self) -> Option<&Vec3> { self.points.back() }

    /// Return the number of points currently held.
    pub fn len(&self) -> usize { self.points.len() }

    /// Return `true` if no points are held.
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Return the maximum number of points held.
    pub fn capacity(&self) -> usize { self.capacity }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a Vec3;
    type IntoIter = vec_deque::Iter<'a, Vec3>;

    fn into_iter(self) -> Self::IntoIter { self.all() }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use super::*;

    fn point(k: usize) -> Vec3 { Vec3::new(k as f64, 0.0, 0.0) }

    #[test]
    fn keeps_most_recent_in_order() {
        let mut trail = Trail::new();
        (0..500).for_each(|k| trail.append(point(k)));
        assert_eq!(trail.len(), TRAIL_CAPACITY);
        let kept: Vec<f64> = trail.all().map(|p| p.x()).collect();
        let expected: Vec<f64> = (300..500).map(|k| k as f64).collect();
        assert_eq!(kept, expected);
        assert!(trail.all().tuple_windows().all(|(a, b)| a.x() < b.x()));
        assert_eq!(trail.latest(), Some(&point(499)));
    }

    #[test]
    fn grows_until_full() {
        let mut trail = Trail::with_capacity(3);
        assert!(trail.is_empty());
        trail.append(point(0));
        trail.append(point(1));
        assert_eq!(trail.len(), 2);
        trail.append(point(2));
        trail.append(point(3));
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.all().next(), Some(&point(1)));
    }

    #[test]
    fn view_reflects_later_appends() {
        let mut trail = Trail::with_capacity(2);
        trail.append(point(0));
        assert_eq!(trail.all().count(), 1);
        trail.append(point(1));
        trail.append(point(2));
        let xs: Vec<f64> = (&trail).into_iter().map(|p| p.x()).collect();
        assert_eq!(xs, vec![1.0, 2.0]);
    }

    #[test]
    fn large_capacity_is_not_preallocated() {
        let mut trail = Trail::with_capacity(usize::MAX);
        (0..10).for_each(|k| trail.append(point(k)));
        assert_eq!(trail.len(), 10);
        assert_eq!(trail.capacity(), usize::MAX);
    }

    #[test]
    fn clear_empties() {
        let mut trail = Trail::new();
        (0..10).for_each(|k| trail.append(point(k)));
        trail.clear();
        assert!(trail.is_empty());
        assert_eq!(trail.all().next(), None);
        assert_eq!(trail.capacity(), TRAIL_CAPACITY);
    }
}
