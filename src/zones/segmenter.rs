//! Flood-fill segmentation of an indexed grid into zones.
//!
//! ## Algorithm
//!
//! Coordinates are visited in index order. Each unvisited coordinate seeds
//! a breadth-first fill; the seed's `(label, tag)` key is the zone key.
//! For every dequeued cell the four sides are checked in `SIDES` order:
//!
//! - neighbor absent from the grid: boundary edge
//! - neighbor present with a different key: boundary edge, not enqueued
//!   (it seeds its own zone later)
//! - neighbor present, same key, unvisited: marked and enqueued
//!
//! Each cell is dequeued exactly once, so a call is linear in the number
//! of cells. The collected edges are then ordered by the configured
//! `BoundaryTracer`.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::boundary::{BoundaryEdge, SIDES};
use super::trace::{analyze, BoundaryTracer};
use super::zone::Zone;
use crate::core::{
    BoundaryPolicy, GridPos, IdGenerator, RawCell, SeededIdGenerator, SegmentConfig,
};
use crate::error::{SegmentError, SegmentResult};
use crate::grid::GridIndex;

/// One flood-filled component, before boundary ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// Member coordinates in dequeue order; the first is the seed.
    pub cells: Vec<GridPos>,
    /// Boundary edges in emission order.
    pub edges: Vec<BoundaryEdge>,
}

/// Partition an index into 4-connected same-key regions.
#[must_use]
pub fn flood_fill(index: &GridIndex) -> Vec<Region> {
    let mut visited: FxHashSet<GridPos> = FxHashSet::default();
    let mut regions = Vec::new();

    for seed in index.positions() {
        if !visited.insert(seed) {
            continue;
        }
        regions.push(fill_from(index, seed, &mut visited));
    }

    regions
}

fn fill_from(index: &GridIndex, seed: GridPos, visited: &mut FxHashSet<GridPos>) -> Region {
    let mut cells = Vec::new();
    let mut edges = Vec::new();
    let mut queue = VecDeque::from([seed]);

    // Seed comes from the index, so the lookup cannot miss.
    let Some(base) = index.get(seed) else {
        return Region { cells, edges };
    };

    while let Some(pos) = queue.pop_front() {
        cells.push(pos);

        for side in SIDES {
            let neighbor = side.neighbor(pos).and_then(|n| index.get(n));
            match neighbor {
                Some(cell) if cell.matches(base) => {
                    if visited.insert(cell.pos) {
                        queue.push_back(cell.pos);
                    }
                }
                _ => edges.push(BoundaryEdge::new(pos, side)),
            }
        }
    }

    Region { cells, edges }
}

/// Segment an index into zones.
///
/// Zones come out in the order their seeds appear in the index. Ids are
/// drawn from `ids`, one per zone, in that order.
///
/// # Errors
///
/// `SegmentError::IrreducibleBoundary` if a zone's boundary cannot be fully
/// traced and `config.boundary_policy` is `Reject`.
pub fn segment<G: IdGenerator>(
    index: &GridIndex,
    config: &SegmentConfig,
    ids: &mut G,
) -> SegmentResult<Vec<Zone>> {
    let regions = flood_fill(index);
    let mut zones = Vec::with_capacity(regions.len());

    for region in regions {
        zones.push(build_zone(index, region, config, ids)?);
    }

    tracing::debug!(
        cells = index.len(),
        zones = zones.len(),
        tracer = ?config.tracer,
        "segmented grid"
    );

    Ok(zones)
}

fn build_zone<G: IdGenerator>(
    index: &GridIndex,
    region: Region,
    config: &SegmentConfig,
    ids: &mut G,
) -> SegmentResult<Zone> {
    let id = ids.next_id();
    let diagnostics = analyze(&region.edges);
    let mut trace = config.tracer.trace(&region.edges);

    if !trace.complete {
        match config.boundary_policy {
            BoundaryPolicy::Accept => {}
            BoundaryPolicy::Warn => tracing::warn!(
                zone = %id,
                cells = region.cells.len(),
                outer_paths = trace.outer.len(),
                %diagnostics,
                "zone boundary did not reduce to a single trace"
            ),
            BoundaryPolicy::Reject => {
                return Err(SegmentError::IrreducibleBoundary { zone: id, diagnostics });
            }
        }
    }

    let coverage: Vec<_> = region
        .cells
        .iter()
        .filter_map(|&pos| index.get(pos).cloned())
        .collect();
    let (label, tag) = coverage
        .first()
        .map(|c| (c.label.clone(), c.tag.clone()))
        .unwrap_or_default();

    let boundary = if trace.outer.is_empty() {
        Default::default()
    } else {
        trace.outer.swap_remove(0)
    };

    tracing::trace!(
        zone = %id,
        cells = coverage.len(),
        edges = region.edges.len(),
        holes = trace.holes.len(),
        "built zone"
    );

    Ok(Zone {
        id,
        display_name: None,
        label,
        tag,
        coverage,
        boundary,
        holes: trace.holes,
        edges: region.edges,
        diagnostics,
    })
}

/// Stateless segmentation front end carrying a config and an id source.
///
/// ## Usage
///
/// ```
/// use grid_zones::core::{RawCell, SequentialIdGenerator, SegmentConfig};
/// use grid_zones::zones::ZoneSegmenter;
///
/// let mut segmenter = ZoneSegmenter::with_ids(
///     SegmentConfig::default(),
///     SequentialIdGenerator::new("zone"),
/// );
///
/// let zones = segmenter.segment_cells(vec![
///     RawCell::new(0, 0, Some("red"), Some("x")),
///     RawCell::new(1, 0, Some("red"), Some("x")),
///     RawCell::new(5, 5, Some("red"), Some("x")),
/// ]).unwrap();
///
/// assert_eq!(zones.len(), 2);
/// assert_eq!(zones[0].id.as_str(), "zone-0");
/// assert_eq!(zones[0].cell_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct ZoneSegmenter<G = SeededIdGenerator> {
    config: SegmentConfig,
    ids: G,
}

impl ZoneSegmenter<SeededIdGenerator> {
    /// Default config, random UUID ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SegmentConfig::default())
    }

    /// Given config, random UUID ids.
    #[must_use]
    pub fn with_config(config: SegmentConfig) -> Self {
        Self::with_ids(config, SeededIdGenerator::from_entropy())
    }
}

impl Default for ZoneSegmenter<SeededIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> ZoneSegmenter<G> {
    /// Given config and id source.
    pub fn with_ids(config: SegmentConfig, ids: G) -> Self {
        Self { config, ids }
    }

    #[must_use]
    pub fn config(&self) -> &SegmentConfig {
        &self.config
    }

    /// Segment an already built index.
    pub fn segment(&mut self, index: &GridIndex) -> SegmentResult<Vec<Zone>> {
        segment(index, &self.config, &mut self.ids)
    }

    /// Index raw cells, then segment them. Empty input gives no zones.
    pub fn segment_cells<I>(&mut self, cells: I) -> SegmentResult<Vec<Zone>>
    where
        I: IntoIterator<Item = RawCell>,
    {
        let index = GridIndex::build(cells)?;
        self.segment(&index)
    }

    /// Recompute zones after adding cells to an existing zone.
    ///
    /// The zone's coverage is merged with `additions` (additions win on
    /// shared coordinates) and the merged set is segmented from scratch.
    /// Errors report positions within `additions`.
    pub fn resegment<I>(&mut self, zone: &Zone, additions: I) -> SegmentResult<Vec<Zone>>
    where
        I: IntoIterator<Item = RawCell>,
    {
        let mut index = GridIndex::from_cells(zone.coverage.iter().cloned());
        for (i, raw) in additions.into_iter().enumerate() {
            index.insert(raw.coerce(i)?);
        }
        self.segment(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, SequentialIdGenerator, Vertex};
    use crate::zones::boundary::Side;
    use crate::zones::BoundaryTracerKind;

    fn grid(cells: &[(i32, i32, &str)]) -> GridIndex {
        cells
            .iter()
            .map(|&(c, r, label)| Cell::new((c, r), Some(label), None))
            .collect()
    }

    fn segmenter(config: SegmentConfig) -> ZoneSegmenter<SequentialIdGenerator> {
        ZoneSegmenter::with_ids(config, SequentialIdGenerator::new("z"))
    }

    #[test]
    fn test_flood_fill_empty() {
        assert!(flood_fill(&GridIndex::new()).is_empty());
    }

    #[test]
    fn test_flood_fill_is_breadth_first() {
        // Plus shape seeded at the center: the four arms come before the tip.
        let index = grid(&[(1, 1, "a"), (0, 1, "a"), (2, 1, "a"), (1, 0, "a"), (1, 2, "a"), (3, 1, "a")]);
        let regions = flood_fill(&index);

        assert_eq!(regions.len(), 1);
        assert_eq!(
            regions[0].cells,
            vec![
                GridPos::new(1, 1),
                GridPos::new(0, 1),
                GridPos::new(2, 1),
                GridPos::new(1, 0),
                GridPos::new(1, 2),
                GridPos::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_edges_emitted_in_side_order() {
        let index = grid(&[(0, 0, "a")]);
        let regions = flood_fill(&index);
        let sides: Vec<_> = regions[0].edges.iter().map(|e| e.side).collect();
        assert_eq!(sides, vec![Side::Left, Side::Right, Side::Top, Side::Bottom]);
    }

    #[test]
    fn test_differing_neighbor_is_boundary() {
        let index = grid(&[(0, 0, "a"), (1, 0, "b")]);
        let regions = flood_fill(&index);

        assert_eq!(regions.len(), 2);
        assert!(regions[0]
            .edges
            .contains(&BoundaryEdge::new(GridPos::new(0, 0), Side::Right)));
        assert!(regions[1]
            .edges
            .contains(&BoundaryEdge::new(GridPos::new(1, 0), Side::Left)));
    }

    #[test]
    fn test_zone_order_follows_index() {
        let index = grid(&[(5, 5, "b"), (0, 0, "a"), (5, 6, "b")]);
        let zones = segmenter(SegmentConfig::default()).segment(&index).unwrap();

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].label.as_deref(), Some("b"));
        assert_eq!(zones[0].id.as_str(), "z-0");
        assert_eq!(zones[1].label.as_deref(), Some("a"));
        assert_eq!(zones[1].id.as_str(), "z-1");
    }

    #[test]
    fn test_ring_zone_policies() {
        let mut cells = Vec::new();
        for c in 0..3 {
            for r in 0..3 {
                if (c, r) != (1, 1) {
                    cells.push((c, r, "a"));
                }
            }
        }
        let index = grid(&cells);

        let legacy = SegmentConfig::default().with_tracer(BoundaryTracerKind::Legacy);

        let accepted = segmenter(legacy.clone().with_boundary_policy(BoundaryPolicy::Accept))
            .segment(&index)
            .unwrap();
        assert_eq!(accepted[0].diagnostics.components, 2);
        assert!(accepted[0].holes.is_empty());

        let rejected = segmenter(legacy.with_boundary_policy(BoundaryPolicy::Reject)).segment(&index);
        assert!(matches!(
            rejected,
            Err(SegmentError::IrreducibleBoundary { ref zone, .. }) if zone.as_str() == "z-0"
        ));

        let rings = segmenter(SegmentConfig::strict()).segment(&index).unwrap();
        assert_eq!(rings[0].holes.len(), 1);
        assert_eq!(
            rings[0].holes[0].simplified().vertices(),
            &[Vertex::new(1, 1), Vertex::new(1, 2), Vertex::new(2, 2), Vertex::new(2, 1)]
        );
    }

    /// Counts WARN events emitted while it is the default subscriber.
    #[derive(Default)]
    struct WarnCounter {
        warnings: std::sync::atomic::AtomicUsize,
    }

    impl tracing::Subscriber for WarnCounter {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }

        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

        fn event(&self, event: &tracing::Event<'_>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.warnings
                    .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }
        }

        fn enter(&self, _: &tracing::span::Id) {}

        fn exit(&self, _: &tracing::span::Id) {}
    }

    #[test]
    fn test_warn_policy_keeps_degraded_trace() {
        let mut cells = Vec::new();
        for c in 0..3 {
            for r in 0..3 {
                if (c, r) != (1, 1) {
                    cells.push((c, r, "a"));
                }
            }
        }
        let index = grid(&cells);
        let config = SegmentConfig::legacy().with_boundary_policy(BoundaryPolicy::Warn);

        let counter = std::sync::Arc::new(WarnCounter::default());
        let zones = tracing::subscriber::with_default(counter.clone(), || {
            segmenter(config).segment(&index)
        })
        .unwrap();

        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].boundary.len(), 12);
        assert_eq!(zones[0].diagnostics.components, 2);
        assert_eq!(counter.warnings.load(std::sync::atomic::Ordering::SeqCst), 1);

        // A simple zone under the same policy stays quiet.
        let quiet = std::sync::Arc::new(WarnCounter::default());
        tracing::subscriber::with_default(quiet.clone(), || {
            segmenter(SegmentConfig::legacy().with_boundary_policy(BoundaryPolicy::Warn))
                .segment(&grid(&[(0, 0, "a"), (1, 0, "a")]))
        })
        .unwrap();
        assert_eq!(quiet.warnings.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[test]
    fn test_resegment_merges_cells() {
        let mut seg = segmenter(SegmentConfig::default());
        let zones = seg
            .segment_cells(vec![RawCell::new(0, 0, Some("a"), None)])
            .unwrap();

        let merged = seg
            .resegment(&zones[0], vec![RawCell::new(1, 0, Some("a"), None)])
            .unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].cell_count(), 2);
        assert_eq!(merged[0].id.as_str(), "z-1");
        assert_eq!(
            merged[0].boundary.simplified().vertices(),
            &[Vertex::new(0, 0), Vertex::new(2, 0), Vertex::new(2, 1), Vertex::new(0, 1)]
        );
    }

    #[test]
    fn test_resegment_reports_addition_index() {
        let mut seg = segmenter(SegmentConfig::default());
        let zones = seg
            .segment_cells(vec![RawCell::new(0, 0, Some("a"), None)])
            .unwrap();

        let err = seg
            .resegment(&zones[0], vec![RawCell::new(f64::NAN, 0, None, None)])
            .unwrap_err();
        assert!(matches!(err, SegmentError::MalformedCoordinate { index: 0, .. }));
    }
}
