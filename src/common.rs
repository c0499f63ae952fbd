//! Common types for the game: shot outcomes and errors.

use thiserror::Error;

/// Outcome of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss,
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot destroyed the last intact cell of a ship.
    Sunk,
}

impl ShotResult {
    pub fn name(&self) -> &'static str {
        match self {
            ShotResult::Miss => "MISS",
            ShotResult::Hit => "HIT",
            ShotResult::Sunk => "SUNK",
        }
    }
}

/// Errors returned by field generation, targeting and shot registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleshipError {
    #[error("Could not generate field with given field size of {size} and max deck length of {max_deck_length}")]
    FieldGeneration { size: usize, max_deck_length: usize },
    #[error("Could not determine next random target")]
    NoTarget,
    #[error("Cell index {index} is outside a field of {cells} cells")]
    OutOfBounds { index: usize, cells: usize },
    #[error("Cell index {0} has already been shot")]
    AlreadyShot(usize),
    #[error("No ship in the fleet occupies cell index {0}")]
    UnknownShip(usize),
    #[error("Invalid field size of {0}")]
    InvalidFieldSize(usize),
    #[error("Invalid max deck length of {max_deck_length} for field size {size}")]
    InvalidDeckLength { size: usize, max_deck_length: usize },
    #[error("Invalid field size of {expected}, grid has size {actual}")]
    GridSizeMismatch { expected: usize, actual: usize },
    #[error("Game is already over")]
    GameOver,
}

pub type Result<T> = core::result::Result<T, BattleshipError>;
