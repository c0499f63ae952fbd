#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{
    common::{BattleshipError, Result},
    config::COLUMNS,
    grid::{Cell, Grid},
};

/// Human-readable name of a cell index, e.g. `A1`.
pub fn cell_to_human(index: usize, size: usize) -> String {
    let (row, col) = (index / size, index % size);
    let letter = COLUMNS.as_bytes().get(col).map(|&b| b as char).unwrap_or('?');
    std::format!("{}{}", letter, row + 1)
}

/// One line per cell state: symbol and name.
pub fn legend() -> String {
    let mut out = String::from("Legend:\n");
    for cell in Cell::ALL {
        let _ = writeln!(out, "{} - {}", cell.symbol(), cell.name());
    }
    out
}

fn push_header(out: &mut String, size: usize) {
    out.push_str("    ");
    for letter in COLUMNS.chars().take(size) {
        out.push(letter);
        out.push(' ');
    }
}

fn push_row(out: &mut String, grid: &Grid, row: usize, show_ships: bool) {
    for col in 0..grid.size() {
        let cell = match grid.cells()[grid.index(row, col)] {
            Cell::Ship if !show_ships => Cell::Water,
            cell => cell,
        };
        out.push(cell.symbol());
        out.push(' ');
    }
}

/// Render both fields side by side: the player's on the left with ships
/// shown, the opponent's on the right with ships hidden unless
/// `show_opponent_ships` is set.
pub fn render_screen(player: &Grid, opponent: &Grid, show_opponent_ships: bool) -> Result<String> {
    let size = player.size();
    if size > COLUMNS.len() {
        return Err(BattleshipError::InvalidFieldSize(size));
    }
    if opponent.size() != size {
        return Err(BattleshipError::GridSizeMismatch {
            expected: size,
            actual: opponent.size(),
        });
    }
    let mut out = String::new();
    push_header(&mut out, size);
    push_header(&mut out, size);
    out.push('\n');
    for row in 0..size {
        let label = std::format!("{:<2}", row + 1);
        let _ = write!(out, "{}) ", label);
        push_row(&mut out, player, row, true);
        let _ = write!(out, "{}) ", label);
        push_row(&mut out, opponent, row, show_opponent_ships);
        out.push('\n');
    }
    out.push_str("    ^ Your field ^\n");
    Ok(out)
}
