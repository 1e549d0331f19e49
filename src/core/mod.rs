//! Core types: coordinates, cells, zone ids, configuration.
//!
//! Everything here is plain data; the algorithms live in `grid` and `zones`.

pub mod coord;
pub mod cell;
pub mod id;
pub mod config;

pub use coord::{Axis, GridPos, RawCoord, Vertex};
pub use cell::{Cell, CellKey, RawCell};
pub use id::{IdGenerator, SeededIdGenerator, SequentialIdGenerator, ZoneId};
pub use config::{BoundaryPolicy, SegmentConfig};
