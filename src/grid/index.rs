//! Coordinate lookup for a sparse grid.
//!
//! The `GridIndex` maps each `GridPos` to the cell stored there. It
//! supports:
//! - Construction from raw caller input with coordinate coercion
//! - Last-write-wins insertion for duplicate coordinates
//! - Iteration in first-insertion order of each coordinate

use rustc_hash::FxHashMap;

use crate::core::{Cell, GridPos, RawCell};
use crate::error::SegmentResult;

/// Exclusively owned `(col, row) -> Cell` lookup.
///
/// Iteration order is the order in which each coordinate was first
/// inserted. Re-inserting a coordinate replaces its cell but keeps its
/// position in that order.
///
/// ## Usage
///
/// ```
/// use grid_zones::core::{GridPos, RawCell};
/// use grid_zones::grid::GridIndex;
///
/// let index = GridIndex::build(vec![
///     RawCell::new(0, 0, Some("red"), None),
///     RawCell::new(1.9, 0, Some("blue"), None),
///     RawCell::new(0, 0, Some("green"), None), // replaces the first cell
/// ]).unwrap();
///
/// assert_eq!(index.len(), 2);
/// assert_eq!(index.get(GridPos::new(0, 0)).unwrap().label.as_deref(), Some("green"));
/// assert!(index.contains(GridPos::new(1, 0)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridIndex {
    /// Cells in first-insertion order of their coordinate.
    cells: Vec<Cell>,

    /// Coordinate -> slot in `cells`.
    slots: FxHashMap<GridPos, usize>,
}

impl GridIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index raw caller input.
    ///
    /// Fails on the first cell whose coordinate cannot be coerced; no
    /// partial index is returned.
    pub fn build<I>(cells: I) -> SegmentResult<Self>
    where
        I: IntoIterator<Item = RawCell>,
    {
        let mut index = Self::new();
        for (i, raw) in cells.into_iter().enumerate() {
            index.insert(raw.coerce(i)?);
        }
        Ok(index)
    }

    /// Index cells whose coordinates are already integers.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut index = Self::new();
        index.extend(cells);
        index
    }

    /// Insert a cell, replacing any cell at the same coordinate.
    ///
    /// Returns the replaced cell, if any.
    pub fn insert(&mut self, cell: Cell) -> Option<Cell> {
        match self.slots.get(&cell.pos) {
            Some(&slot) => Some(std::mem::replace(&mut self.cells[slot], cell)),
            None => {
                self.slots.insert(cell.pos, self.cells.len());
                self.cells.push(cell);
                None
            }
        }
    }

    /// Get the cell at a coordinate.
    #[must_use]
    pub fn get(&self, pos: GridPos) -> Option<&Cell> {
        self.slots.get(&pos).map(|&slot| &self.cells[slot])
    }

    /// Check if a coordinate is occupied.
    #[must_use]
    pub fn contains(&self, pos: GridPos) -> bool {
        self.slots.contains_key(&pos)
    }

    /// Number of occupied coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Occupied coordinates in index order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.cells.iter().map(|c| c.pos)
    }

    /// Consume the index, returning its cells in index order.
    #[must_use]
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

impl Extend<Cell> for GridIndex {
    fn extend<T: IntoIterator<Item = Cell>>(&mut self, iter: T) {
        for cell in iter {
            self.insert(cell);
        }
    }
}

impl FromIterator<Cell> for GridIndex {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self::from_cells(iter)
    }
}

/// Index raw caller input. Shorthand for [`GridIndex::build`].
pub fn index<I>(cells: I) -> SegmentResult<GridIndex>
where
    I: IntoIterator<Item = RawCell>,
{
    GridIndex::build(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Axis;
    use crate::error::SegmentError;

    #[test]
    fn test_empty_input() {
        let index = GridIndex::build(Vec::new()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_truncates_not_rounds() {
        let index = GridIndex::build(vec![RawCell::new(0.99, -0.99, None, None)]).unwrap();
        assert!(index.contains(GridPos::new(0, 0)));
    }

    #[test]
    fn test_last_write_wins_keeps_position() {
        let index = GridIndex::build(vec![
            RawCell::new(0, 0, Some("a"), None),
            RawCell::new(1, 0, Some("b"), None),
            RawCell::new(0.5, 0, Some("c"), None),
        ])
        .unwrap();

        let labels: Vec<_> = index.iter().map(|c| c.label.as_deref()).collect();
        assert_eq!(labels, vec![Some("c"), Some("b")]);
    }

    #[test]
    fn test_insert_returns_replaced() {
        let mut index = GridIndex::new();
        assert_eq!(index.insert(Cell::new((2, 3), Some("a"), None)), None);

        let replaced = index.insert(Cell::new((2, 3), Some("b"), None));
        assert_eq!(replaced, Some(Cell::new((2, 3), Some("a"), None)));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_malformed_fails_whole_call() {
        let result = GridIndex::build(vec![
            RawCell::new(0, 0, Some("a"), None),
            RawCell::new("east", 0, Some("a"), None),
        ]);

        assert_eq!(
            result,
            Err(SegmentError::MalformedCoordinate {
                index: 1,
                axis: Axis::Col,
                value: "east".to_string(),
            })
        );
    }

    #[test]
    fn test_positions_in_insertion_order() {
        let index: GridIndex = vec![
            Cell::new((5, 5), None, None),
            Cell::new((-1, 2), None, None),
            Cell::new((0, 0), None, None),
        ]
        .into_iter()
        .collect();

        let positions: Vec<_> = index.positions().collect();
        assert_eq!(
            positions,
            vec![GridPos::new(5, 5), GridPos::new(-1, 2), GridPos::new(0, 0)]
        );
    }
}
