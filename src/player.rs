#![cfg(feature = "std")]

use crate::{common::ShotResult, grid::Grid};
use rand::rngs::SmallRng;

/// Interface implemented by whoever fires at the opponent's field.
pub trait Player {
    /// Choose the next cell to fire at on `target`.
    fn select_target(&mut self, rng: &mut SmallRng, target: &Grid) -> anyhow::Result<usize>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: &Grid, _index: usize, _result: ShotResult) {}
}
