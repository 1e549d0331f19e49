//! Error types for indexing and segmentation.

use thiserror::Error;

use crate::core::{Axis, ZoneId};
use crate::zones::BoundaryDiagnostics;

/// Result type for segmentation operations.
pub type SegmentResult<T> = Result<T, SegmentError>;

/// Errors that can occur while indexing cells or segmenting zones.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SegmentError {
    /// A cell coordinate could not be coerced to a grid integer.
    ///
    /// The whole call fails: dropping the cell would change the
    /// connectivity of its neighbors.
    #[error("cell {index}: {axis} coordinate {value:?} cannot be coerced to an integer")]
    MalformedCoordinate {
        /// Position of the offending cell in the input.
        index: usize,
        /// Which coordinate was malformed.
        axis: Axis,
        /// The value as supplied.
        value: String,
    },

    /// A zone boundary did not reduce to a single simple trace.
    ///
    /// Only raised under `BoundaryPolicy::Reject`.
    #[error("zone {zone}: irreducible boundary ({diagnostics})")]
    IrreducibleBoundary {
        /// The zone whose boundary was rejected.
        zone: ZoneId,
        /// What made the boundary irreducible.
        diagnostics: BoundaryDiagnostics,
    },

    /// An element footprint covers more cells than a reference list allows.
    #[error("footprint spans {cols} x {rows} cells")]
    FootprintTooLarge { cols: i32, rows: i32 },
}
