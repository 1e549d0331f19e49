//! Sparse grid indexing.
//!
//! ## Key Types
//!
//! - `GridIndex`: coordinate -> cell lookup built once per segmentation call
//! - `CellRef`: spreadsheet-style cell reference (`B3`)
//! - `Footprint`: a canvas rectangle mapped onto the cells it covers

pub mod index;
pub mod reference;

pub use index::{index, GridIndex};
pub use reference::{
    cell_refs, column_letters, covered_cells, location, CellRef, Footprint, DEFAULT_CELL_SIZE,
    MAX_FOOTPRINT_CELLS,
};
