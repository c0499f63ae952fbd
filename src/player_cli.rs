#![cfg(feature = "std")]

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::string::String;

use rand::rngs::SmallRng;
use thiserror::Error;

use crate::{config::COLUMNS, grid::Grid, player::Player};

/// Reasons a typed coordinate is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("Please enter only one column and row such as A3")]
    BadLength,
    #[error("Please enter letter for column and number for row")]
    BadFormat,
    #[error("Please enter valid column")]
    InvalidColumn,
    #[error("Please enter valid row")]
    InvalidRow,
    #[error("You have already shot a bullet here, pick somewhere else")]
    AlreadyShot,
}

/// Turn input such as `A3` into a cell index on `grid`.
pub fn parse_coordinate(input: &str, grid: &Grid) -> Result<usize, CoordinateError> {
    let placement = input.trim().to_ascii_uppercase();
    let len = placement.chars().count();
    if len == 0 || len > 3 {
        return Err(CoordinateError::BadLength);
    }
    let mut chars = placement.chars();
    let col_ch = chars.next().ok_or(CoordinateError::BadLength)?;
    let row_str = chars.as_str();
    if !col_ch.is_alphabetic() || row_str.is_empty() || !row_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoordinateError::BadFormat);
    }
    let col = COLUMNS
        .find(col_ch)
        .filter(|&c| c < grid.size())
        .ok_or(CoordinateError::InvalidColumn)?;
    let row = row_str
        .parse::<usize>()
        .ok()
        .and_then(|r| r.checked_sub(1))
        .filter(|&r| r < grid.size())
        .ok_or(CoordinateError::InvalidRow)?;
    let index = grid.index(row, col);
    if grid.cells()[index].is_shot() {
        return Err(CoordinateError::AlreadyShot);
    }
    Ok(index)
}

/// Human player typing coordinates on a terminal.
pub struct CliPlayer<R = BufReader<Stdin>, W = Stdout> {
    input: R,
    output: W,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self::with_io(BufReader::new(io::stdin()), io::stdout())
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt until a valid, unshot coordinate is entered.
    /// Returns `None` once input is exhausted.
    pub fn read_target(&mut self, grid: &Grid) -> io::Result<Option<usize>> {
        loop {
            write!(self.output, "Enter column and row such as A3: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_coordinate(&line, grid) {
                Ok(index) => return Ok(Some(index)),
                Err(CoordinateError::AlreadyShot) => {
                    writeln!(self.output, "{}", CoordinateError::AlreadyShot)?
                }
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng, target: &Grid) -> anyhow::Result<usize> {
        self.read_target(target)?
            .ok_or_else(|| anyhow::anyhow!("input closed before a target was chosen"))
    }
}
