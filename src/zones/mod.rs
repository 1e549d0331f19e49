//! Zone segmentation and boundary tracing.
//!
//! A zone is a maximal 4-connected set of cells with equal `(label, tag)`.
//! Segmentation runs in two steps that must agree exactly:
//!
//! 1. **Flood fill** (`segmenter`): groups cells and emits the unit edges
//!    where a zone meets empty space or a differently keyed cell.
//! 2. **Boundary ordering** (`trace`): turns each zone's edge set into
//!    vertex paths, either with the legacy single walk or with ring
//!    tracing that also recovers holes.
//!
//! ## Key Types
//!
//! - `ZoneSegmenter`: config + id source front end
//! - `Zone`: coverage, outer boundary, holes, diagnostics
//! - `BoundaryEdge` / `Side`: the static per-side edge table
//! - `BoundaryPath`: an ordered, implicitly closed vertex path
//! - `BoundaryTracerKind`: `Legacy` or `Rings`

pub mod boundary;
pub mod path;
pub mod trace;
pub mod zone;
pub mod segmenter;

pub use boundary::{BoundaryEdge, Segment, Side, SIDES};
pub use path::BoundaryPath;
pub use trace::{
    analyze, order, trace_rings, BoundaryDiagnostics, BoundaryTrace, BoundaryTracer,
    BoundaryTracerKind, Ring, RingKind,
};
pub use zone::Zone;
pub use segmenter::{flood_fill, segment, Region, ZoneSegmenter};
