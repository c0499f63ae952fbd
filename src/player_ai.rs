use rand::Rng;

use crate::{
    ai::{self, RecommendationPool},
    common::{Result, ShotResult},
    grid::Grid,
};

/// Computer opponent running the hunt/target strategy.
#[derive(Debug, Clone, Default)]
pub struct AiPlayer {
    pool: RecommendationPool,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(&self) -> &RecommendationPool {
        &self.pool
    }

    /// Random search while idle, follow the pool while hunting.
    pub fn choose_target<R: Rng + ?Sized>(&self, rng: &mut R, target: &Grid) -> Result<usize> {
        if self.pool.is_hunting() {
            ai::decide_recommended(target, &self.pool, rng)
        } else {
            ai::decide_random(target, rng)
        }
    }

    /// Update the hunt after the shot at `index` resolved to `result`.
    pub fn record_result(&mut self, target: &Grid, index: usize, result: ShotResult) {
        self.pool.update(target, index, result);
    }
}

#[cfg(feature = "std")]
impl crate::player::Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut rand::rngs::SmallRng,
        target: &Grid,
    ) -> anyhow::Result<usize> {
        Ok(self.choose_target(rng, target)?)
    }

    fn handle_shot_result(&mut self, target: &Grid, index: usize, result: ShotResult) {
        self.record_result(target, index, result);
    }
}
