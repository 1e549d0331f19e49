//! The segmentation output unit.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::boundary::{BoundaryEdge, Segment};
use super::path::BoundaryPath;
use super::trace::BoundaryDiagnostics;
use crate::core::{Cell, CellKey, GridPos, ZoneId};

/// A maximal 4-connected set of cells sharing one `(label, tag)` key.
///
/// `boundary` is the outer polygon, clockwise on screen and starting at
/// its top-left corner. `holes` are traced only by the ring tracer; the
/// legacy tracer leaves them empty and records the problem in
/// `diagnostics` instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,

    /// Caller decoration; never set by segmentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    pub label: Option<String>,
    pub tag: Option<String>,

    /// Member cells in flood-fill order.
    pub coverage: Vec<Cell>,

    pub boundary: BoundaryPath,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holes: Vec<BoundaryPath>,

    /// Boundary edges in emission order.
    pub edges: Vec<BoundaryEdge>,

    pub diagnostics: BoundaryDiagnostics,
}

impl Zone {
    /// Attach a display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// The shared equality key of every member cell.
    #[must_use]
    pub fn key(&self) -> CellKey<'_> {
        (self.label.as_deref(), self.tag.as_deref())
    }

    /// Number of member cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.coverage.len()
    }

    #[must_use]
    pub fn contains(&self, pos: GridPos) -> bool {
        self.coverage.iter().any(|c| c.pos == pos)
    }

    /// Whether the zone has enclosed holes.
    #[must_use]
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// The emitted boundary edges as undirected segments.
    #[must_use]
    pub fn edge_segments(&self) -> FxHashSet<Segment> {
        self.edges.iter().map(|e| e.segment()).collect()
    }

    /// Segments of the outer boundary and every hole.
    #[must_use]
    pub fn traced_segments(&self) -> FxHashSet<Segment> {
        std::iter::once(&self.boundary)
            .chain(&self.holes)
            .flat_map(BoundaryPath::segments)
            .collect()
    }
}
