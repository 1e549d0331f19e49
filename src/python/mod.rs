//! Python bindings for grid-zones.
//!
//! This module exposes segmentation to the Python service that owns
//! persistence and the HTTP surface.
//!
//! # Quick Start
//!
//! ```python
//! import grid_zones as gz
//!
//! zones = gz.segment([
//!     (0, 0, "red", "tomato"),
//!     (1.6, 0, "red", "tomato"),   # truncated to column 1
//!     (5, 5, "green", "basil"),
//! ], seed=42)
//!
//! for zone in zones:
//!     print(zone.id, zone.label, zone.coverage, zone.boundary)
//! ```

use pyo3::prelude::*;

mod py_zones;

pub use py_zones::*;

/// grid_zones: sparse grid segmentation into zones with boundary polygons.
#[pymodule]
fn grid_zones(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyZone>()?;
    m.add_function(wrap_pyfunction!(segment, m)?)?;
    m.add_function(wrap_pyfunction!(py_column_letters, m)?)?;

    Ok(())
}
