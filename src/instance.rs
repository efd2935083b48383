//! Euclidean instances: node coordinates and random generation.

use rand::Rng;

/// Side length of the default sampling square `[0, 100] x [0, 100]`.
pub const DEFAULT_EXTENT: f64 = 100.0;

/// A node coordinate in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Samples `n` points uniformly in `[0, extent) x [0, extent)`.
pub fn random_points<R: Rng>(n: usize, extent: f64, rng: &mut R) -> Vec<Point> {
    (0..n)
        .map(|_| Point::new(rng.random_range(0.0..extent), rng.random_range(0.0..extent)))
        .collect()
}
