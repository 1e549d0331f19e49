//! Spreadsheet-style cell references and element footprints.
//!
//! Clients label cells like spreadsheet coordinates (`A1`, `B3`, `AA10`)
//! and place rectangular elements in canvas units that cover whole cells.
//!
//! ```
//! use grid_zones::grid::{column_letters, location, Footprint, covered_cells};
//!
//! assert_eq!(column_letters(0), "A");
//! assert_eq!(column_letters(27), "AB");
//!
//! // Canvas positions are offset by one cell on both axes.
//! assert_eq!(location(0.0, 45.0, 20.0).to_string(), "B3");
//!
//! let cells = covered_cells(Footprint::new(20.0, 0.0, 40.0, 20.0), 20.0).unwrap();
//! assert_eq!(cells.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Cell, GridPos};
use crate::error::{SegmentError, SegmentResult};

/// Canvas units per cell used by clients.
pub const DEFAULT_CELL_SIZE: f64 = 20.0;

/// Largest number of cells a single element may cover.
pub const MAX_FOOTPRINT_CELLS: u64 = 1 << 20;

/// Spreadsheet column letters for a zero-based column index.
///
/// `0 -> A`, `25 -> Z`, `26 -> AA`. Negative indices have no letters.
#[must_use]
pub fn column_letters(index: i64) -> String {
    let mut letters = String::new();
    let mut col = index;
    while col >= 0 {
        letters.push(char::from(b'A' + (col % 26) as u8));
        col = col / 26 - 1;
    }
    letters.chars().rev().collect()
}

/// A cell reference like `B3`: column letters then row number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef(pub GridPos);

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", column_letters(i64::from(self.0.col)), self.0.row)
    }
}

/// References for a list of cells, in order.
pub fn cell_refs<'a, I>(cells: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Cell>,
{
    cells.into_iter().map(|c| CellRef(c.pos).to_string()).collect()
}

/// The reference of the cell under a canvas point.
///
/// Column and row are `floor(coord / cell_size) + 1`.
#[must_use]
pub fn location(x: f64, y: f64, cell_size: f64) -> CellRef {
    CellRef(GridPos::new(canvas_to_grid(x, cell_size), canvas_to_grid(y, cell_size)))
}

/// A rectangular element placed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Footprint {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Cells covered by an element, column by column.
///
/// The element covers `floor(width / cell_size)` columns and
/// `floor(height / cell_size)` rows starting at its `location`. Cells past
/// the edge of the grid coordinate range are left out.
///
/// # Errors
///
/// `SegmentError::FootprintTooLarge` if the element spans more than
/// `MAX_FOOTPRINT_CELLS` cells.
pub fn covered_cells(footprint: Footprint, cell_size: f64) -> SegmentResult<Vec<GridPos>> {
    let start = location(footprint.x, footprint.y, cell_size).0;
    let cols = span(footprint.width, cell_size);
    let rows = span(footprint.height, cell_size);

    let total = u64::from(cols.unsigned_abs()) * u64::from(rows.unsigned_abs());
    if total > MAX_FOOTPRINT_CELLS {
        return Err(SegmentError::FootprintTooLarge { cols, rows });
    }

    let mut cells = Vec::with_capacity(total as usize);
    for dc in 0..cols {
        for dr in 0..rows {
            if let Some(pos) = start.offset(dc, dr) {
                cells.push(pos);
            }
        }
    }
    Ok(cells)
}

fn canvas_to_grid(coord: f64, cell_size: f64) -> i32 {
    ((coord / cell_size).floor() as i32).saturating_add(1)
}

fn span(extent: f64, cell_size: f64) -> i32 {
    (extent / cell_size).floor().max(0.0) as i32
}
