//! Labeled grid cells.
//!
//! `RawCell` is what callers send; `Cell` is what the index stores after
//! coordinate coercion. The `(label, tag)` pair is the zone equality key.
//! Either part may be absent, and absent compares equal only to absent.
//!
//! ## Usage
//!
//! ```
//! use grid_zones::core::{Cell, GridPos, RawCell};
//!
//! let raw = RawCell::new(1.7, 2, Some("red"), Some("tomato"));
//! let cell = raw.coerce(0).unwrap();
//!
//! assert_eq!(cell.pos, GridPos::new(1, 2));
//! assert_eq!(cell.key(), Cell::new(GridPos::new(9, 9), Some("red"), Some("tomato")).key());
//! ```

use serde::{Deserialize, Serialize};

use super::coord::{Axis, GridPos, RawCoord};
use crate::error::{SegmentError, SegmentResult};

/// Equality key of a cell: `(label, tag)`.
pub type CellKey<'a> = (Option<&'a str>, Option<&'a str>);

/// A cell as supplied by a caller.
///
/// Accepts the field names used by existing clients: `x`/`y` for
/// `col`/`row`, `color` for `label` and `menuElementId` for `tag`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawCell {
    #[serde(alias = "x")]
    pub col: RawCoord,
    #[serde(alias = "y")]
    pub row: RawCoord,
    #[serde(default, alias = "color")]
    pub label: Option<String>,
    #[serde(default, alias = "menuElementId")]
    pub tag: Option<String>,
}

impl RawCell {
    pub fn new(
        col: impl Into<RawCoord>,
        row: impl Into<RawCoord>,
        label: Option<&str>,
        tag: Option<&str>,
    ) -> Self {
        Self {
            col: col.into(),
            row: row.into(),
            label: label.map(str::to_string),
            tag: tag.map(str::to_string),
        }
    }

    /// Coerce into an indexed `Cell`.
    ///
    /// `index` is the cell's position in the caller's input and is only
    /// used for error reporting.
    pub fn coerce(self, index: usize) -> SegmentResult<Cell> {
        let col = coerce_axis(&self.col, index, Axis::Col)?;
        let row = coerce_axis(&self.row, index, Axis::Row)?;
        Ok(Cell {
            pos: GridPos::new(col, row),
            label: self.label,
            tag: self.tag,
        })
    }
}

fn coerce_axis(coord: &RawCoord, index: usize, axis: Axis) -> SegmentResult<i32> {
    coord.truncate().ok_or_else(|| SegmentError::MalformedCoordinate {
        index,
        axis,
        value: coord.to_string(),
    })
}

/// An indexed cell with integer coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub pos: GridPos,
    pub label: Option<String>,
    pub tag: Option<String>,
}

impl Cell {
    pub fn new(pos: impl Into<GridPos>, label: Option<&str>, tag: Option<&str>) -> Self {
        Self {
            pos: pos.into(),
            label: label.map(str::to_string),
            tag: tag.map(str::to_string),
        }
    }

    /// The zone equality key.
    #[must_use]
    pub fn key(&self) -> CellKey<'_> {
        (self.label.as_deref(), self.tag.as_deref())
    }

    /// Whether two cells may belong to the same zone.
    #[must_use]
    pub fn matches(&self, other: &Cell) -> bool {
        self.key() == other.key()
    }
}

impl From<Cell> for RawCell {
    fn from(cell: Cell) -> Self {
        Self {
            col: cell.pos.col.into(),
            row: cell.pos.row.into(),
            label: cell.label,
            tag: cell.tag,
        }
    }
}
