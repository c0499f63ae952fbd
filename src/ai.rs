// Hunt/target guessing logic for the opponent.
// Random search while idle, directional follow-up while hunting a damaged ship.

use alloc::vec::Vec;
use rand::Rng;

use crate::{
    common::{BattleshipError, Result, ShotResult},
    grid::{Cell, Grid},
};

/// Pick a uniformly random cell worth shooting at.
///
/// Candidates are intact ship cells and open water not touching a sunk ship.
/// Cells already shot are never candidates.
pub fn decide_random<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Result<usize> {
    let mut targets = Vec::new();
    for (index, cell) in grid.cells().iter().enumerate() {
        match cell {
            Cell::Miss | Cell::Debris | Cell::Sunk => continue,
            Cell::Ship => targets.push(index),
            Cell::Water => {
                let (row, col) = grid.coords(index);
                if !grid.is_adjacent_to_sunk_ship(col, row) {
                    targets.push(index);
                }
            }
        }
    }
    if targets.is_empty() {
        return Err(BattleshipError::NoTarget);
    }
    Ok(targets[rng.random_range(0..targets.len())])
}

/// Coordinates suspected to belong to the ship currently being hunted.
///
/// Empty means idle (random search), anything else means hunting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationPool {
    entries: Vec<(usize, usize)>,
}

impl RecommendationPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<(usize, usize)>) -> Self {
        Self { entries }
    }

    /// `(row, col)` pairs in probing order.
    pub fn entries(&self) -> &[(usize, usize)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_hunting(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Feed the outcome of a shot at `index` back into the pool.
    pub fn update(&mut self, grid: &Grid, index: usize, result: ShotResult) {
        match result {
            ShotResult::Miss => {}
            ShotResult::Sunk => self.clear(),
            ShotResult::Hit if self.entries.is_empty() => {
                self.entries = fresh_hit_neighbours(grid, index);
            }
            ShotResult::Hit => {
                self.entries = extend_along_axis(grid, &self.entries, index);
            }
        }
    }
}

/// The four axis neighbours of a first hit that could still hold ship.
fn fresh_hit_neighbours(grid: &Grid, index: usize) -> Vec<(usize, usize)> {
    let (row, col) = grid.coords(index);
    let neighbours = [
        (row.checked_add(1), Some(col)),
        (Some(row), col.checked_add(1)),
        (row.checked_sub(1), Some(col)),
        (Some(row), col.checked_sub(1)),
    ];
    neighbours
        .into_iter()
        .filter_map(|(r, c)| Some((r?, c?)))
        .filter(|&(r, c)| match grid.at(r, c) {
            Some(Cell::Water) | Some(Cell::Ship) => true,
            Some(Cell::Miss) | Some(Cell::Sunk) | Some(Cell::Debris) | None => false,
        })
        .collect()
}

/// Keep pool entries in line with the new hit and push one cell further past
/// the hit on the opposite side of each.
///
/// Entries sharing neither row nor column with the hit, and the hit itself,
/// are dropped.
fn extend_along_axis(grid: &Grid, pool: &[(usize, usize)], index: usize) -> Vec<(usize, usize)> {
    let (row, col) = grid.coords(index);
    let mut next = Vec::with_capacity(pool.len() * 2);
    for &(r, c) in pool {
        let same_row = r == row;
        let same_col = c == col;
        if same_row == same_col {
            continue;
        }
        next.push((r, c));
        let beyond = if same_row {
            let c = if c < col { col.checked_add(1) } else { col.checked_sub(1) };
            c.map(|c| (row, c))
        } else {
            let r = if r < row { row.checked_add(1) } else { row.checked_sub(1) };
            r.map(|r| (r, col))
        };
        if let Some((r, c)) = beyond.filter(|&(r, c)| grid.in_bounds(r, c)) {
            next.push((r, c));
        }
    }
    next
}

/// Functional form of [`RecommendationPool::update`].
pub fn update(
    grid: &Grid,
    pool: &RecommendationPool,
    index: usize,
    result: ShotResult,
) -> RecommendationPool {
    let mut next = pool.clone();
    next.update(grid, index, result);
    next
}

/// Pick a random pool entry that is still open and clear of sunk ships,
/// falling back to [`decide_random`] when none qualifies.
pub fn decide_recommended<R: Rng + ?Sized>(
    grid: &Grid,
    pool: &RecommendationPool,
    rng: &mut R,
) -> Result<usize> {
    let targets: Vec<usize> = pool
        .entries()
        .iter()
        .filter(|&&(r, c)| match grid.at(r, c) {
            Some(Cell::Water) | Some(Cell::Ship) => !grid.is_adjacent_to_sunk_ship(c, r),
            Some(Cell::Miss) | Some(Cell::Sunk) | Some(Cell::Debris) | None => false,
        })
        .map(|&(r, c)| grid.index(r, c))
        .collect();
    if targets.is_empty() {
        log::debug!(
            "could not decide according to recommendations {:?}",
            pool.entries()
        );
        return decide_random(grid, rng);
    }
    Ok(targets[rng.random_range(0..targets.len())])
}
