use crate::common::BattleshipError;

pub const DEFAULT_FIELD_SIZE: usize = 10;
pub const DEFAULT_MAX_DECK_LENGTH: usize = 4;
/// Column labels run out after `Z`.
pub const MAX_FIELD_SIZE: usize = 26;
pub const COLUMNS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Settings for one game: field dimensions, fleet shape and presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub max_deck_length: usize,
    /// Reveal the opponent's ships when rendering.
    pub debug: bool,
    /// How many fresh field generations to attempt per side before giving up.
    pub generation_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_FIELD_SIZE,
            max_deck_length: DEFAULT_MAX_DECK_LENGTH,
            debug: false,
            generation_attempts: 1,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), BattleshipError> {
        if self.size == 0 || self.size > MAX_FIELD_SIZE {
            return Err(BattleshipError::InvalidFieldSize(self.size));
        }
        if self.max_deck_length == 0 || self.max_deck_length > self.size {
            return Err(BattleshipError::InvalidDeckLength {
                size: self.size,
                max_deck_length: self.max_deck_length,
            });
        }
        Ok(())
    }

    /// Number of ship cells a complete fleet occupies.
    pub fn total_ship_cells(&self) -> usize {
        crate::ship::fleet_lengths(self.max_deck_length).sum()
    }
}
