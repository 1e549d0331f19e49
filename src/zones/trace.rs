//! Boundary ordering: from an unordered edge set to vertex paths.
//!
//! Two strategies share the `BoundaryTracer` trait:
//!
//! - **Legacy** (`order`): one walk over the undirected edge graph that
//!   never steps straight back to the vertex it came from. Exact for a
//!   boundary that is a single simple loop. On a zone with a hole, or a
//!   boundary that touches itself at a corner, it returns a partial trace.
//!   `analyze` detects those cases so they are never silent.
//! - **Rings** (`trace_rings`): edges are oriented with the zone on the
//!   right of travel and followed preferring right turns, which keeps each
//!   ring hugging the cell it is currently tracing. Every edge lands in
//!   exactly one closed ring: outer rings run clockwise (positive area),
//!   holes counter-clockwise.
//!
//! Both start at the top-left-most vertex, so their output is canonical.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::boundary::BoundaryEdge;
use super::path::{cross, BoundaryPath};
use crate::core::Vertex;

// =============================================================================
// Diagnostics
// =============================================================================

/// Shape of a boundary edge graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundaryDiagnostics {
    pub edge_count: usize,
    pub vertex_count: usize,
    /// Connected components of the undirected edge graph.
    pub components: usize,
    /// Vertices with more than two incident edges.
    pub branch_vertices: usize,
    /// Vertices with exactly one incident edge.
    pub open_ends: usize,
}

impl BoundaryDiagnostics {
    /// Whether the edges form exactly one simple closed loop.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.components == 1 && self.branch_vertices == 0 && self.open_ends == 0
    }
}

impl std::fmt::Display for BoundaryDiagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} components, {} branch vertices, {} open ends",
            self.components, self.branch_vertices, self.open_ends
        )
    }
}

type Adjacency = FxHashMap<Vertex, SmallVec<[Vertex; 4]>>;

/// Undirected adjacency with each neighbor list sorted row-major.
fn adjacency(edges: &[BoundaryEdge]) -> Adjacency {
    let mut adj = Adjacency::default();
    for edge in edges {
        let (a, b) = edge.vertices();
        adj.entry(a).or_default().push(b);
        adj.entry(b).or_default().push(a);
    }
    for neighbors in adj.values_mut() {
        neighbors.sort_unstable();
    }
    adj
}

/// Inspect a boundary edge set for anything the legacy walk cannot handle.
#[must_use]
pub fn analyze(edges: &[BoundaryEdge]) -> BoundaryDiagnostics {
    let adj = adjacency(edges);

    let mut diagnostics = BoundaryDiagnostics {
        edge_count: edges.len(),
        vertex_count: adj.len(),
        ..Default::default()
    };

    for neighbors in adj.values() {
        match neighbors.len() {
            1 => diagnostics.open_ends += 1,
            n if n > 2 => diagnostics.branch_vertices += 1,
            _ => {}
        }
    }

    let mut seen: FxHashSet<Vertex> = FxHashSet::default();
    let mut stack = Vec::new();
    for &root in adj.keys() {
        if !seen.insert(root) {
            continue;
        }
        diagnostics.components += 1;
        stack.push(root);
        while let Some(v) = stack.pop() {
            for &n in &adj[&v] {
                if seen.insert(n) {
                    stack.push(n);
                }
            }
        }
    }

    diagnostics
}

// =============================================================================
// Legacy walk
// =============================================================================

/// Order a boundary edge set into a single vertex path.
///
/// Starts at the top-left-most vertex with one neighbor if there is one
/// (an open chain), otherwise at the top-left-most vertex. Each step moves
/// to the first neighbor that is not the previous vertex. Stops when no
/// such neighbor exists or when it would return to the start, which is
/// not repeated. A walk never takes more steps than there are edges.
///
/// ```
/// use grid_zones::core::{GridPos, Vertex};
/// use grid_zones::zones::{order, BoundaryEdge, SIDES};
///
/// let edges: Vec<_> = SIDES.iter().map(|&s| BoundaryEdge::new(GridPos::new(0, 0), s)).collect();
/// assert_eq!(
///     order(&edges),
///     vec![Vertex::new(0, 0), Vertex::new(1, 0), Vertex::new(1, 1), Vertex::new(0, 1)]
/// );
/// ```
#[must_use]
pub fn order(edges: &[BoundaryEdge]) -> Vec<Vertex> {
    let adj = adjacency(edges);

    let open_start = adj
        .iter()
        .filter(|(_, neighbors)| neighbors.len() == 1)
        .map(|(&v, _)| v)
        .min();
    let Some(start) = open_start.or_else(|| adj.keys().copied().min()) else {
        return Vec::new();
    };

    let mut ordered = vec![start];
    let mut prev: Option<Vertex> = None;
    let mut curr = start;

    for _ in 0..edges.len() {
        let next = adj[&curr].iter().copied().find(|&n| Some(n) != prev);
        match next {
            Some(n) if n != start => {
                ordered.push(n);
                prev = Some(curr);
                curr = n;
            }
            _ => break,
        }
    }

    ordered
}

// =============================================================================
// Ring tracing
// =============================================================================

/// Whether a ring bounds the zone from outside or encloses a hole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RingKind {
    Outer,
    Hole,
}

/// One traced boundary cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ring {
    pub kind: RingKind,
    pub path: BoundaryPath,
    /// False if the walk ran out of edges before returning to its start.
    pub closed: bool,
}

/// Split a boundary edge set into oriented rings.
///
/// Every edge is used exactly once. Rings come out in order of their
/// top-left-most starting edge, so a connected zone's outer ring is first.
#[must_use]
pub fn trace_rings(edges: &[BoundaryEdge]) -> Vec<Ring> {
    let directed: Vec<(Vertex, Vertex)> = edges.iter().map(|e| e.directed()).collect();

    let mut outgoing: FxHashMap<Vertex, SmallVec<[usize; 2]>> = FxHashMap::default();
    for (i, &(from, _)) in directed.iter().enumerate() {
        outgoing.entry(from).or_default().push(i);
    }

    let mut starts: Vec<usize> = (0..directed.len()).collect();
    starts.sort_unstable_by_key(|&i| directed[i]);

    let mut used = vec![false; directed.len()];
    let mut rings = Vec::new();

    for start in starts {
        if used[start] {
            continue;
        }

        let mut vertices = Vec::new();
        let mut closed = false;
        let mut cur = start;
        loop {
            used[cur] = true;
            let (from, to) = directed[cur];
            vertices.push(from);

            let next = outgoing.get(&to).and_then(|candidates| {
                candidates
                    .iter()
                    .copied()
                    .min_by_key(|&c| turn_rank(from, to, directed[c].1))
            });
            match next {
                Some(n) if n == start => {
                    closed = true;
                    break;
                }
                Some(n) if !used[n] => cur = n,
                _ => break,
            }
        }

        let path = BoundaryPath::new(vertices);
        let kind = if path.twice_signed_area() >= 0 {
            RingKind::Outer
        } else {
            RingKind::Hole
        };
        rings.push(Ring { kind, path, closed });
    }

    rings
}

/// Preference for leaving `via` toward `to` after arriving from `from`:
/// right turn, then straight, then left, then reversal.
fn turn_rank(from: Vertex, via: Vertex, to: Vertex) -> u8 {
    let c = cross(from, via, to);
    if c > 0 {
        0
    } else if c < 0 {
        2
    } else if to == from {
        3
    } else {
        1
    }
}

// =============================================================================
// Strategy selection
// =============================================================================

/// Result of ordering one zone's boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryTrace {
    /// Outer paths, largest first. Exactly one for a well-formed zone.
    pub outer: Vec<BoundaryPath>,
    pub holes: Vec<BoundaryPath>,
    /// Whether every edge is accounted for by a closed path and there is
    /// exactly one outer path.
    pub complete: bool,
}

/// A strategy for ordering boundary edges.
pub trait BoundaryTracer {
    fn trace(&self, edges: &[BoundaryEdge]) -> BoundaryTrace;
}

/// Selects which boundary ordering to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryTracerKind {
    /// Single non-backtracking walk; holes are reported, not traced.
    Legacy,
    /// Oriented ring tracing with holes as separate rings.
    #[default]
    Rings,
}

impl BoundaryTracer for BoundaryTracerKind {
    fn trace(&self, edges: &[BoundaryEdge]) -> BoundaryTrace {
        match *self {
            Self::Legacy => trace_legacy(edges),
            Self::Rings => trace_ring_set(edges),
        }
    }
}

impl std::str::FromStr for BoundaryTracerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "rings" => Ok(Self::Rings),
            other => Err(format!("unknown boundary tracer: {other}")),
        }
    }
}

fn trace_legacy(edges: &[BoundaryEdge]) -> BoundaryTrace {
    let path = BoundaryPath::new(order(edges));
    BoundaryTrace {
        outer: if path.is_empty() { Vec::new() } else { vec![path] },
        holes: Vec::new(),
        complete: analyze(edges).is_simple(),
    }
}

fn trace_ring_set(edges: &[BoundaryEdge]) -> BoundaryTrace {
    let rings = trace_rings(edges);
    let all_closed = rings.iter().all(|r| r.closed);

    let mut outer = Vec::new();
    let mut holes = Vec::new();
    for ring in rings {
        match ring.kind {
            RingKind::Outer => outer.push(ring.path),
            RingKind::Hole => holes.push(ring.path),
        }
    }
    outer.sort_by_key(|p| std::cmp::Reverse(p.twice_signed_area()));

    BoundaryTrace {
        complete: all_closed && outer.len() == 1,
        outer,
        holes,
    }
}
