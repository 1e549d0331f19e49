//! Ordered boundary paths.

use serde::{Deserialize, Serialize};

use super::boundary::Segment;
use crate::core::Vertex;

/// An ordered sequence of lattice vertices.
///
/// Paths are closed: the edge from the last vertex back to the first is
/// implied and never stored.
///
/// ```
/// use grid_zones::core::Vertex;
/// use grid_zones::zones::BoundaryPath;
///
/// let path = BoundaryPath::new(vec![
///     Vertex::new(0, 0),
///     Vertex::new(1, 0),
///     Vertex::new(2, 0),
///     Vertex::new(2, 1),
///     Vertex::new(1, 1),
///     Vertex::new(0, 1),
/// ]);
///
/// assert_eq!(path.twice_signed_area(), 4);
/// assert_eq!(path.simplified().len(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryPath(Vec<Vertex>);

impl BoundaryPath {
    #[must_use]
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self(vertices)
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive vertex pairs, including the implied closing pair.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        let n = self.0.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Segment::new(self.0[i], self.0[(i + 1) % n]))
            .collect()
    }

    /// Twice the shoelace area.
    ///
    /// Positive when the path runs clockwise on screen (rows growing
    /// downward), negative when counter-clockwise.
    #[must_use]
    pub fn twice_signed_area(&self) -> i64 {
        let n = self.0.len();
        (0..n)
            .map(|i| {
                let a = self.0[i];
                let b = self.0[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum()
    }

    /// Enclosed area in cells (always non-negative).
    #[must_use]
    pub fn area(&self) -> u64 {
        self.twice_signed_area().unsigned_abs() / 2
    }

    /// Whether the path runs clockwise on screen.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.twice_signed_area() > 0
    }

    /// The same polygon with collinear vertices removed.
    ///
    /// Keeps the first surviving vertex as the start, so a path starting
    /// at a corner keeps that corner first.
    #[must_use]
    pub fn simplified(&self) -> Self {
        let n = self.0.len();
        if n < 3 {
            return self.clone();
        }
        let corners = (0..n)
            .filter(|&i| {
                let prev = self.0[(i + n - 1) % n];
                let cur = self.0[i];
                let next = self.0[(i + 1) % n];
                cross(prev, cur, next) != 0
            })
            .map(|i| self.0[i])
            .collect();
        Self(corners)
    }
}

/// z-component of `(cur - prev) x (next - cur)`.
pub(crate) fn cross(prev: Vertex, cur: Vertex, next: Vertex) -> i64 {
    let (ax, ay) = (cur.x - prev.x, cur.y - prev.y);
    let (bx, by) = (next.x - cur.x, next.y - cur.y);
    ax * by - ay * bx
}

impl From<Vec<Vertex>> for BoundaryPath {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self(vertices)
    }
}

impl From<BoundaryPath> for Vec<Vertex> {
    fn from(path: BoundaryPath) -> Self {
        path.0
    }
}
