//! Random fleet placement with a mandatory one-cell gap between ships.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::{BattleshipError, Result};
use crate::grid::{Cell, Grid};
use crate::ship::{fleet_lengths, Fleet, Orientation, Ship};

/// Cells of a `length` ship starting at `start`, or `None` when it would leave
/// the grid or its one-cell surround holds anything but water.
fn placement_at(grid: &Grid, start: usize, length: usize, orientation: Orientation) -> Option<Ship> {
    let size = grid.size();
    let (row, col) = grid.coords(start);
    let (bottom, right) = match orientation {
        Orientation::Horizontal => (row, col + length - 1),
        Orientation::Vertical => (row + length - 1, col),
    };
    if bottom >= size || right >= size {
        return None;
    }
    let clear = grid
        .inflated_rect(row, col, bottom, right)
        .all(|i| grid.cells()[i] == Cell::Water);
    clear.then(|| Ship::from_run(start, length, orientation, size))
}

/// Every legal placement of a `length` ship on the current grid.
pub fn candidate_placements(grid: &Grid, length: usize) -> Vec<Ship> {
    let mut candidates = Vec::new();
    if length == 0 {
        return candidates;
    }
    for start in 0..grid.len() {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            if let Some(ship) = placement_at(grid, start, length, orientation) {
                candidates.push(ship);
            }
        }
    }
    candidates
}

/// Build a field of `size × size` cells holding a full fleet whose longest
/// ship has `max_deck_length` decks.
///
/// Ships are placed longest first, each chosen uniformly from all legal
/// placements left on the grid. There is no backtracking: if any ship finds
/// no room the whole attempt fails and the caller may start over.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    max_deck_length: usize,
) -> Result<(Grid, Fleet)> {
    let mut grid = Grid::new(size);
    let mut ships = Vec::new();
    for length in fleet_lengths(max_deck_length) {
        let mut candidates = candidate_placements(&grid, length);
        if candidates.is_empty() {
            log::debug!(
                "no room left for a ship of length {} after placing {} ships",
                length,
                ships.len()
            );
            return Err(BattleshipError::FieldGeneration {
                size,
                max_deck_length,
            });
        }
        let ship = candidates.swap_remove(rng.random_range(0..candidates.len()));
        for &index in ship.cells() {
            grid.set(index, Cell::Ship)?;
        }
        ships.push(ship);
    }
    Ok((grid, Fleet::new(ships)))
}
