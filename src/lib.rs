//! # grid-zones
//!
//! Segments a sparse grid of labeled cells into zones and traces each
//! zone's boundary on the lattice of cell corners.
//!
//! ## Design Principles
//!
//! 1. **Pure**: a segmentation call reads its input and returns zones. No
//!    I/O, no shared state, no persistence. Independent calls may run on
//!    independent threads.
//!
//! 2. **Deterministic**: given the same cells and the same id generator,
//!    the output is identical, including vertex order.
//!
//! 3. **Never silently wrong**: boundaries that do not reduce to one simple
//!    polygon are traced as rings with holes, or reported through
//!    `BoundaryDiagnostics` and `BoundaryPolicy`.
//!
//! ## Quick Start
//!
//! ```
//! use grid_zones::{RawCell, SegmentConfig, SequentialIdGenerator, Vertex, ZoneSegmenter};
//!
//! let mut segmenter = ZoneSegmenter::with_ids(
//!     SegmentConfig::default(),
//!     SequentialIdGenerator::new("zone"),
//! );
//!
//! let zones = segmenter.segment_cells(vec![
//!     RawCell::new(0, 0, Some("red"), Some("x")),
//!     RawCell::new(1, 0, Some("red"), Some("x")),
//! ]).unwrap();
//!
//! assert_eq!(zones.len(), 1);
//! assert_eq!(
//!     zones[0].boundary.simplified().vertices(),
//!     &[Vertex::new(0, 0), Vertex::new(2, 0), Vertex::new(2, 1), Vertex::new(0, 1)]
//! );
//! ```
//!
//! ## Modules
//!
//! - `core`: coordinates, cells, zone ids, configuration
//! - `grid`: the coordinate index, cell references, element footprints
//! - `zones`: flood fill, boundary edges, boundary tracing, zones
//! - `error`: `SegmentError`

pub mod core;
pub mod error;
pub mod grid;
pub mod zones;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Axis, BoundaryPolicy, Cell, CellKey, GridPos, IdGenerator, RawCell, RawCoord,
    SeededIdGenerator, SegmentConfig, SequentialIdGenerator, Vertex, ZoneId,
};

pub use crate::error::{SegmentError, SegmentResult};

pub use crate::grid::{index, CellRef, Footprint, GridIndex};

pub use crate::zones::{
    analyze, flood_fill, order, segment, trace_rings, BoundaryDiagnostics, BoundaryEdge,
    BoundaryPath, BoundaryTracer, BoundaryTracerKind, Ring, RingKind, Segment, Side, Zone,
    ZoneSegmenter,
};
