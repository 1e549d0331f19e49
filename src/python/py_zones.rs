//! Zone segmentation bindings for Python.

use pyo3::prelude::*;

use crate::core::{
    BoundaryPolicy, RawCell, RawCoord, SeededIdGenerator, SegmentConfig, Vertex,
};
use crate::grid::{cell_refs, column_letters};
use crate::zones::{BoundaryPath, BoundaryTracerKind, Zone, ZoneSegmenter};

/// Python wrapper for Zone.
#[pyclass(name = "Zone")]
#[derive(Clone, Debug)]
pub struct PyZone(pub Zone);

fn path_points(path: &BoundaryPath) -> Vec<(i64, i64)> {
    path.vertices().iter().map(|&Vertex { x, y }| (x, y)).collect()
}

#[pymethods]
impl PyZone {
    /// Get the zone id.
    #[getter]
    fn id(&self) -> String {
        self.0.id.to_string()
    }

    #[getter]
    fn label(&self) -> Option<String> {
        self.0.label.clone()
    }

    #[getter]
    fn tag(&self) -> Option<String> {
        self.0.tag.clone()
    }

    /// Get member cells as `(col, row)` pairs.
    #[getter]
    fn coverage(&self) -> Vec<(i32, i32)> {
        self.0.coverage.iter().map(|c| (c.pos.col, c.pos.row)).collect()
    }

    /// Get member cells as spreadsheet references (`"B3"`).
    #[getter]
    fn cell_refs(&self) -> Vec<String> {
        cell_refs(&self.0.coverage)
    }

    /// Get the outer boundary as `(x, y)` lattice points.
    #[getter]
    fn boundary(&self) -> Vec<(i64, i64)> {
        path_points(&self.0.boundary)
    }

    /// Get hole boundaries, one point list per hole.
    #[getter]
    fn holes(&self) -> Vec<Vec<(i64, i64)>> {
        self.0.holes.iter().map(path_points).collect()
    }

    fn __len__(&self) -> usize {
        self.0.cell_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "Zone(id={}, label={:?}, cells={}, holes={})",
            self.0.id,
            self.0.label,
            self.0.cell_count(),
            self.0.holes.len()
        )
    }
}

fn coord_from_py(obj: &Bound<'_, PyAny>) -> PyResult<RawCoord> {
    if let Ok(v) = obj.extract::<i64>() {
        return Ok(RawCoord::Int(v));
    }
    if let Ok(v) = obj.extract::<f64>() {
        return Ok(RawCoord::Float(v));
    }
    if let Ok(v) = obj.extract::<String>() {
        return Ok(RawCoord::Text(v));
    }
    Ok(RawCoord::Text(obj.str()?.to_string()))
}

fn value_error(message: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(message.to_string())
}

/// Segment `(col, row, label, tag)` tuples into zones.
///
/// `tracer` is `"rings"` or `"legacy"`; `policy` is `"accept"`, `"warn"`
/// or `"reject"`. A `seed` makes zone ids reproducible.
#[pyfunction]
#[pyo3(signature = (cells, seed=None, tracer="rings", policy="warn"))]
pub fn segment<'py>(
    cells: Vec<(Bound<'py, PyAny>, Bound<'py, PyAny>, Option<String>, Option<String>)>,
    seed: Option<u64>,
    tracer: &str,
    policy: &str,
) -> PyResult<Vec<PyZone>> {
    let tracer: BoundaryTracerKind = tracer.parse().map_err(value_error)?;
    let policy: BoundaryPolicy = policy.parse().map_err(value_error)?;
    let config = SegmentConfig::default()
        .with_tracer(tracer)
        .with_boundary_policy(policy);

    let raw = cells
        .into_iter()
        .map(|(col, row, label, tag)| {
            Ok(RawCell {
                col: coord_from_py(&col)?,
                row: coord_from_py(&row)?,
                label,
                tag,
            })
        })
        .collect::<PyResult<Vec<_>>>()?;

    let ids = seed.map_or_else(SeededIdGenerator::from_entropy, SeededIdGenerator::new);
    let zones = ZoneSegmenter::with_ids(config, ids)
        .segment_cells(raw)
        .map_err(value_error)?;

    Ok(zones.into_iter().map(PyZone).collect())
}

/// Spreadsheet column letters for a zero-based column index.
#[pyfunction(name = "column_letters")]
pub fn py_column_letters(index: i64) -> String {
    column_letters(index)
}
