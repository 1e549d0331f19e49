//! Grid and lattice coordinates.
//!
//! Two coordinate spaces are in play:
//!
//! - **Cell space** (`GridPos`): the integer `(col, row)` of a unit square.
//! - **Lattice space** (`Vertex`): the integer corners of those squares.
//!   Cell `(c, r)` has corners `(c, r)`, `(c + 1, r)`, `(c, r + 1)` and
//!   `(c + 1, r + 1)`, so lattice coordinates reach one unit further than
//!   cell coordinates. `Vertex` is `i64` so every corner of every `i32`
//!   cell is representable.
//!
//! Rows grow downward (screen convention). "Clockwise" in this crate
//! always means clockwise as drawn on screen.
//!
//! ## Coercion
//!
//! Callers hand in coordinates as `RawCoord`: integers, floats or text.
//! Floats are truncated toward zero, never rounded:
//!
//! ```
//! use grid_zones::core::RawCoord;
//!
//! assert_eq!(RawCoord::Float(2.9).truncate(), Some(2));
//! assert_eq!(RawCoord::Float(-2.9).truncate(), Some(-2));
//! assert_eq!(RawCoord::from("  7 ").truncate(), Some(7));
//! assert_eq!(RawCoord::Float(f64::NAN).truncate(), None);
//! ```

use serde::{Deserialize, Serialize};

/// Integer coordinate of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub col: i32,
    pub row: i32,
}

impl GridPos {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The cell at `(col + dc, row + dr)`, or `None` if it falls outside `i32`.
    #[must_use]
    pub fn offset(self, dc: i32, dr: i32) -> Option<Self> {
        Some(Self {
            col: self.col.checked_add(dc)?,
            row: self.row.checked_add(dr)?,
        })
    }

    /// Top-left corner of this cell.
    #[must_use]
    pub fn origin(self) -> Vertex {
        Vertex::new(i64::from(self.col), i64::from(self.row))
    }

    /// Corner at `(col + dx, row + dy)` with `dx, dy` in `0..=1`.
    #[must_use]
    pub fn corner(self, dx: i64, dy: i64) -> Vertex {
        let o = self.origin();
        Vertex::new(o.x + dx, o.y + dy)
    }

    /// Whether `other` shares a side with this cell.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        let dc = (i64::from(self.col) - i64::from(other.col)).abs();
        let dr = (i64::from(self.row) - i64::from(other.row)).abs();
        dc + dr == 1
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// A lattice vertex (corner point between cells).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}

impl Vertex {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Row-major ordering key: `(y, x)`.
    ///
    /// The smallest vertex under this key is the top-left-most one.
    #[must_use]
    pub const fn scan_key(self) -> (i64, i64) {
        (self.y, self.x)
    }
}

/// Vertices order row-major, like `scan_key`.
impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.scan_key().cmp(&other.scan_key())
    }
}

impl From<(i64, i64)> for Vertex {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which coordinate of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Col,
    Row,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Col => f.write_str("col"),
            Axis::Row => f.write_str("row"),
        }
    }
}

/// A coordinate as supplied by a caller, before coercion.
///
/// Deserializes from a JSON integer, float, or string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCoord {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawCoord {
    /// Coerce to a grid integer by truncation toward zero.
    ///
    /// Returns `None` for non-finite floats, text that is not an integer,
    /// and values outside the `i32` range.
    #[must_use]
    pub fn truncate(&self) -> Option<i32> {
        match self {
            RawCoord::Int(v) => i32::try_from(*v).ok(),
            RawCoord::Float(v) => {
                if !v.is_finite() {
                    return None;
                }
                let t = v.trunc();
                if t < f64::from(i32::MIN) || t > f64::from(i32::MAX) {
                    return None;
                }
                Some(t as i32)
            }
            RawCoord::Text(s) => s.trim().parse::<i32>().ok(),
        }
    }
}

impl std::fmt::Display for RawCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawCoord::Int(v) => write!(f, "{v}"),
            RawCoord::Float(v) => write!(f, "{v}"),
            RawCoord::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for RawCoord {
    fn from(v: i32) -> Self {
        RawCoord::Int(i64::from(v))
    }
}

impl From<i64> for RawCoord {
    fn from(v: i64) -> Self {
        RawCoord::Int(v)
    }
}

impl From<f64> for RawCoord {
    fn from(v: f64) -> Self {
        RawCoord::Float(v)
    }
}

impl From<&str> for RawCoord {
    fn from(v: &str) -> Self {
        RawCoord::Text(v.to_string())
    }
}

impl From<String> for RawCoord {
    fn from(v: String) -> Self {
        RawCoord::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_toward_zero() {
        assert_eq!(RawCoord::Float(3.99).truncate(), Some(3));
        assert_eq!(RawCoord::Float(-0.5).truncate(), Some(0));
        assert_eq!(RawCoord::Float(-1.5).truncate(), Some(-1));
        assert_eq!(RawCoord::Int(-4).truncate(), Some(-4));
    }

    #[test]
    fn test_truncate_rejects_malformed() {
        assert_eq!(RawCoord::Float(f64::INFINITY).truncate(), None);
        assert_eq!(RawCoord::Float(1e12).truncate(), None);
        assert_eq!(RawCoord::Int(i64::from(i32::MAX) + 1).truncate(), None);
        assert_eq!(RawCoord::from("3.5").truncate(), None);
        assert_eq!(RawCoord::from("north").truncate(), None);
    }

    #[test]
    fn test_deserialize_untagged() {
        let coords: Vec<RawCoord> = serde_json::from_str(r#"[1, 2.5, "3"]"#).unwrap();
        assert_eq!(
            coords,
            vec![RawCoord::Int(1), RawCoord::Float(2.5), RawCoord::Text("3".into())]
        );
    }

    #[test]
    fn test_offset_overflow_is_none() {
        assert_eq!(GridPos::new(i32::MAX, 0).offset(1, 0), None);
        assert_eq!(GridPos::new(0, 0).offset(-1, 0), Some(GridPos::new(-1, 0)));
    }

    #[test]
    fn test_corners() {
        let pos = GridPos::new(2, 5);
        assert_eq!(pos.origin(), Vertex::new(2, 5));
        assert_eq!(pos.corner(1, 1), Vertex::new(3, 6));
    }

    #[test]
    fn test_adjacency() {
        let pos = GridPos::new(0, 0);
        assert!(pos.is_adjacent(GridPos::new(1, 0)));
        assert!(pos.is_adjacent(GridPos::new(0, -1)));
        assert!(!pos.is_adjacent(GridPos::new(1, 1)));
        assert!(!pos.is_adjacent(pos));
    }
}
