//! Boundary edges on the cell lattice.
//!
//! Each side of a cell maps to a fixed neighbor offset and a fixed pair of
//! lattice corners. The table is static: the four directions never change.
//!
//! | side   | neighbor  | edge vertices               |
//! |--------|-----------|-----------------------------|
//! | left   | `(-1, 0)` | `(x, y) -> (x, y+1)`        |
//! | right  | `(1, 0)`  | `(x+1, y) -> (x+1, y+1)`    |
//! | top    | `(0, -1)` | `(x, y) -> (x+1, y)`        |
//! | bottom | `(0, 1)`  | `(x+1, y+1) -> (x, y+1)`    |
//!
//! The bottom edge is listed right-to-left. Consumers that store edges as
//! vertex pairs rely on exactly this per-side order, so `vertices()` must
//! not be "normalized".
//!
//! `directed()` gives a second, fully consistent orientation: the member
//! cell always lies to the right of travel (clockwise on screen). Only the
//! left edge differs from the table above.

use serde::{Deserialize, Serialize};

use crate::core::{GridPos, Vertex};

/// One side of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Sides in neighbor scan order.
pub const SIDES: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

struct SideRule {
    offset: (i32, i32),
    /// Corner offsets in table order.
    edge: [(i64, i64); 2],
    /// Corner offsets with the cell on the right of travel.
    directed: [(i64, i64); 2],
}

static SIDE_RULES: [SideRule; 4] = [
    // Left
    SideRule {
        offset: (-1, 0),
        edge: [(0, 0), (0, 1)],
        directed: [(0, 1), (0, 0)],
    },
    // Right
    SideRule {
        offset: (1, 0),
        edge: [(1, 0), (1, 1)],
        directed: [(1, 0), (1, 1)],
    },
    // Top
    SideRule {
        offset: (0, -1),
        edge: [(0, 0), (1, 0)],
        directed: [(0, 0), (1, 0)],
    },
    // Bottom
    SideRule {
        offset: (0, 1),
        edge: [(1, 1), (0, 1)],
        directed: [(1, 1), (0, 1)],
    },
];

impl Side {
    fn rule(self) -> &'static SideRule {
        &SIDE_RULES[self as usize]
    }

    /// Offset from a cell to its neighbor across this side.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        self.rule().offset
    }

    /// The neighboring cell across this side, if representable.
    #[must_use]
    pub fn neighbor(self, pos: GridPos) -> Option<GridPos> {
        let (dc, dr) = self.offset();
        pos.offset(dc, dr)
    }
}

/// The unit edge on one side of a member cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundaryEdge {
    pub cell: GridPos,
    pub side: Side,
}

impl BoundaryEdge {
    #[must_use]
    pub const fn new(cell: GridPos, side: Side) -> Self {
        Self { cell, side }
    }

    /// Edge endpoints in per-side table order.
    #[must_use]
    pub fn vertices(self) -> (Vertex, Vertex) {
        let [a, b] = self.side.rule().edge;
        (self.cell.corner(a.0, a.1), self.cell.corner(b.0, b.1))
    }

    /// Edge endpoints oriented with the cell on the right of travel.
    #[must_use]
    pub fn directed(self) -> (Vertex, Vertex) {
        let [a, b] = self.side.rule().directed;
        (self.cell.corner(a.0, a.1), self.cell.corner(b.0, b.1))
    }

    /// Orientation-free form, for comparing edge sets.
    #[must_use]
    pub fn segment(self) -> Segment {
        let (a, b) = self.vertices();
        Segment::new(a, b)
    }
}

/// An undirected unit segment with endpoints in `(y, x)` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Segment(pub Vertex, pub Vertex);

impl Segment {
    #[must_use]
    pub fn new(a: Vertex, b: Vertex) -> Self {
        if a.scan_key() <= b.scan_key() {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}
