//! Square field of cell states addressed by `row * size + col`.
//!
//! The grid is the single mutable resource of one side of the game. Ship
//! cells are written only by the field generator, shot outcomes only by the
//! shot registry, and nothing ever reverts to `Water`.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::{BattleshipError, Result};

/// State of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Water,
    Ship,
    /// Hit cell of a ship that is still afloat.
    Debris,
    /// Cell of a fully sunk ship.
    Sunk,
    Miss,
}

impl Cell {
    pub const ALL: [Cell; 5] = [Cell::Water, Cell::Ship, Cell::Debris, Cell::Sunk, Cell::Miss];

    /// Character used when printing the cell.
    pub fn symbol(&self) -> char {
        match self {
            Cell::Water => '.',
            Cell::Ship => 'S',
            Cell::Debris => '@',
            Cell::Sunk => 'F',
            Cell::Miss => 'x',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cell::Water => "WATER",
            Cell::Ship => "SHIP",
            Cell::Debris => "DEBRIS",
            Cell::Sunk => "SUNKEN",
            Cell::Miss => "MISS",
        }
    }

    /// `true` for cells a shot has already landed on.
    pub fn is_shot(&self) -> bool {
        match self {
            Cell::Water | Cell::Ship => false,
            Cell::Debris | Cell::Sunk | Cell::Miss => true,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `size × size` grid of open water.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Water; size * size],
        }
    }

    /// Width (and height) of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Split a cell index into `(row, col)`.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn get(&self, index: usize) -> Result<Cell> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BattleshipError::OutOfBounds {
                index,
                cells: self.cells.len(),
            })
    }

    /// Cell at `(row, col)`, or `None` when outside the grid.
    pub fn at(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    pub fn set(&mut self, index: usize, cell: Cell) -> Result<()> {
        let cells = self.cells.len();
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(BattleshipError::OutOfBounds { index, cells })?;
        *slot = cell;
        Ok(())
    }

    /// Count cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Indices of the rectangle spanning rows `top..=bottom` and columns
    /// `left..=right`, grown by one cell on every side and clipped to the grid.
    pub(crate) fn inflated_rect(
        &self,
        top: usize,
        left: usize,
        bottom: usize,
        right: usize,
    ) -> impl Iterator<Item = usize> + '_ {
        let rows = top.saturating_sub(1)..(bottom + 2).min(self.size);
        let cols = left.saturating_sub(1)..(right + 2).min(self.size);
        rows.flat_map(move |r| cols.clone().map(move |c| r * self.size + c))
    }

    /// `true` if the 3×3 neighbourhood of `(col, row)` holds a `Sunk` cell.
    ///
    /// The placement buffer guarantees no other ship touches a sunk one, so
    /// these cells can be dropped from any search.
    pub fn is_adjacent_to_sunk_ship(&self, col: usize, row: usize) -> bool {
        self.inflated_rect(row, col, row, col)
            .any(|i| self.cells[i] == Cell::Sunk)
    }

    /// `true` once no intact ship cell remains.
    pub fn is_over(&self) -> bool {
        !self.cells.contains(&Cell::Ship)
    }
}

impl core::fmt::Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Grid {{ size: {} }}", self.size)?;
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

