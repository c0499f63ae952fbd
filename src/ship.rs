//! Ship and fleet definitions.

use alloc::vec::Vec;
use core::fmt;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Ship lengths making up a full fleet, longest first: one ship of
/// `max_deck_length`, two of the next length down, and so on.
pub fn fleet_lengths(max_deck_length: usize) -> impl Iterator<Item = usize> {
    (1..=max_deck_length)
        .rev()
        .flat_map(move |len| core::iter::repeat(len).take(max_deck_length - len + 1))
}

/// A ship as the ordered list of grid indices it occupies.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<usize>,
}

impl Ship {
    /// Build a ship from the cell indices it covers.
    pub fn new(cells: Vec<usize>) -> Self {
        Self { cells }
    }

    /// Cells starting at `start` running `length` cells along `orientation`
    /// on a grid `size` wide. Bounds are the caller's concern.
    pub fn from_run(start: usize, length: usize, orientation: Orientation, size: usize) -> Self {
        let step = match orientation {
            Orientation::Horizontal => 1,
            Orientation::Vertical => size,
        };
        Self::new((0..length).map(|k| start + k * step).collect())
    }

    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Ship's deck length.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship {{ length: {}, cells: {:?} }}", self.len(), self.cells)
    }
}

/// All ships of one side. Never modified once generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new(ships: Vec<Ship>) -> Self {
        Self { ships }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Ship occupying `index`, if any.
    pub fn ship_at(&self, index: usize) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.contains(index))
    }

    /// Total number of cells covered by the fleet.
    pub fn deck_count(&self) -> usize {
        self.ships.iter().map(Ship::len).sum()
    }
}
