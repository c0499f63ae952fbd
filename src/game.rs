use alloc::vec::Vec;
use rand::Rng;

use crate::{
    common::{BattleshipError, Result, ShotResult},
    config::GameConfig,
    generator,
    grid::Grid,
    player_ai::AiPlayer,
    ship::Fleet,
    shot,
};

/// Current status of a game, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One side of the game: its field and the fleet hidden in it.
#[derive(Debug, Clone)]
pub struct Side {
    pub grid: Grid,
    pub fleet: Fleet,
}

impl Side {
    /// Generate a side, starting over up to `config.generation_attempts` times.
    pub fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        let attempts = config.generation_attempts.max(1);
        let mut last_err = BattleshipError::FieldGeneration {
            size: config.size,
            max_deck_length: config.max_deck_length,
        };
        for attempt in 1..=attempts {
            match generator::generate(rng, config.size, config.max_deck_length) {
                Ok((grid, fleet)) => return Ok(Self { grid, fleet }),
                Err(e) => {
                    log::warn!("field generation attempt {}/{} failed: {}", attempt, attempts, e);
                    last_err = e;
                }
            }
        }
        Err(last_err)
    }

    pub fn fire(&mut self, index: usize) -> Result<ShotResult> {
        shot::register_hit(&mut self.grid, &self.fleet, index)
    }
}

/// Two fields, the computer opponent and the turn bookkeeping between them.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    player: Side,
    opponent: Side,
    ai: AiPlayer,
    turn: usize,
    status: GameStatus,
}

impl GameSession {
    /// Validate `config` and generate both fields.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let player = Side::generate(&config, rng)?;
        let opponent = Side::generate(&config, rng)?;
        Ok(Self::from_sides(config, player, opponent))
    }

    /// Start a game from already prepared fields.
    pub fn from_sides(config: GameConfig, player: Side, opponent: Side) -> Self {
        Self {
            config,
            player,
            opponent,
            ai: AiPlayer::new(),
            turn: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The human player's own field.
    pub fn player_grid(&self) -> &Grid {
        &self.player.grid
    }

    /// The field the human player fires at.
    pub fn opponent_grid(&self) -> &Grid {
        &self.opponent.grid
    }

    pub fn ai(&self) -> &AiPlayer {
        &self.ai
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    fn ensure_in_progress(&self) -> Result<()> {
        match self.status {
            GameStatus::InProgress => Ok(()),
            GameStatus::Won | GameStatus::Lost => Err(BattleshipError::GameOver),
        }
    }

    /// Register a human shot at `index` on the opponent's field.
    ///
    /// A hit or sunk result means the human fires again; a miss hands the
    /// turn to [`GameSession::opponent_turn`].
    pub fn player_shot(&mut self, index: usize) -> Result<ShotResult> {
        self.ensure_in_progress()?;
        let result = self.opponent.fire(index)?;
        self.turn += 1;
        if result == ShotResult::Sunk && self.opponent.grid.is_over() {
            self.status = GameStatus::Won;
        }
        Ok(result)
    }

    /// Let the opponent fire until it misses or the human's fleet is gone.
    /// Returns every shot taken, in order.
    pub fn opponent_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<(usize, ShotResult)>> {
        self.ensure_in_progress()?;
        self.turn += 1;
        let mut shots = Vec::new();
        loop {
            let index = self.ai.choose_target(rng, &self.player.grid)?;
            let result = self.player.fire(index)?;
            self.ai.record_result(&self.player.grid, index, result);
            log::debug!("opponent fired at {} -> {:?}", index, result);
            shots.push((index, result));
            if self.player.grid.is_over() {
                self.status = GameStatus::Lost;
                break;
            }
            if result == ShotResult::Miss {
                break;
            }
        }
        Ok(shots)
    }
}

/// Summary of a computer-versus-computer game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SimReport {
    pub status: GameStatus,
    pub turns: usize,
    pub player_shots: usize,
    pub opponent_shots: usize,
}

/// Play a full game where the human side is driven by a second [`AiPlayer`].
pub fn simulate<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<SimReport> {
    let mut session = GameSession::new(config, rng)?;
    let mut stand_in = AiPlayer::new();
    let mut player_shots = 0;
    let mut opponent_shots = 0;
    while session.status() == GameStatus::InProgress {
        loop {
            let index = stand_in.choose_target(rng, session.opponent_grid())?;
            let result = session.player_shot(index)?;
            stand_in.record_result(session.opponent_grid(), index, result);
            player_shots += 1;
            if result == ShotResult::Miss || session.status() != GameStatus::InProgress {
                break;
            }
        }
        if session.status() == GameStatus::InProgress {
            opponent_shots += session.opponent_turn(rng)?.len();
        }
    }
    Ok(SimReport {
        status: session.status(),
        turns: session.turn(),
        player_shots,
        opponent_shots,
    })
}
