//! Game session state
//!
//! The session is the only mutable state in a running game. It owns its
//! random source so a seed fully determines where every dart lands.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::throw::perturb;
use crate::board::{BoardSpec, ScoreResult, resolve};
use crate::consts::{DEVIATION, THROWS_PER_GAME};

/// Shown before the first throw of a fresh session
pub const START_MESSAGE: &str = "Click the board to throw!";
/// Shown after a reset
pub const RESTART_MESSAGE: &str = "New game! Click the board to throw!";

/// Current phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Darts remain
    InProgress,
    /// All darts thrown, waiting for reset
    Finished,
}

/// A scored dart, recorded at its perturbed landing point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub point: Vec2,
    pub result: ScoreResult,
}

/// A fixed-length single-player game
#[derive(Debug, Clone)]
pub struct GameSession<R = Pcg32> {
    board: BoardSpec,
    throws_per_game: u32,
    deviation: u32,
    throws_remaining: u32,
    total_score: u32,
    /// Throw order
    hits: Vec<Hit>,
    last_shot: String,
    rng: R,
}

impl GameSession<Pcg32> {
    /// Create a session whose throws are reproducible from `seed`
    pub fn new(board: BoardSpec, throws_per_game: u32, deviation: u32, seed: u64) -> Self {
        Self::with_rng(board, throws_per_game, deviation, Pcg32::seed_from_u64(seed))
    }

    /// Standard board, 10 darts, 20px inaccuracy
    pub fn standard(seed: u64) -> Self {
        Self::new(BoardSpec::default(), THROWS_PER_GAME, DEVIATION, seed)
    }
}

impl<R: Rng> GameSession<R> {
    /// Create a session drawing throw inaccuracy from `rng`
    pub fn with_rng(board: BoardSpec, throws_per_game: u32, deviation: u32, rng: R) -> Self {
        log::info!(
            "New game: {} throws, deviation {}px",
            throws_per_game,
            deviation
        );
        Self {
            board,
            throws_per_game,
            deviation,
            throws_remaining: throws_per_game,
            total_score: 0,
            hits: Vec::new(),
            last_shot: START_MESSAGE.to_string(),
            rng,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.throws_remaining > 0 {
            GamePhase::InProgress
        } else {
            GamePhase::Finished
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == GamePhase::Finished
    }

    /// Throw a dart at `aim`.
    ///
    /// Returns the recorded hit, or `None` once the game is finished (the
    /// call is ignored).
    pub fn throw_dart(&mut self, aim: Vec2) -> Option<&Hit> {
        if self.is_finished() {
            log::debug!("Throw ignored, game is finished");
            return None;
        }

        let point = perturb(aim, self.deviation, &mut self.rng);
        let result = resolve(point, &self.board);
        log::debug!(
            "Throw at ({:.0}, {:.0}) landed at ({:.0}, {:.0}): {}",
            aim.x,
            aim.y,
            point.x,
            point.y,
            result.label
        );

        self.total_score += result.score;
        self.throws_remaining -= 1;
        self.last_shot = format!("{}: +{} points", result.label, result.score);
        self.hits.push(Hit { point, result });

        if self.is_finished() {
            log::info!("Game over, final score {}", self.total_score);
        }
        self.hits.last()
    }

    /// Start a new game with the same board and configuration
    pub fn reset(&mut self) {
        self.throws_remaining = self.throws_per_game;
        self.total_score = 0;
        self.hits.clear();
        self.last_shot = RESTART_MESSAGE.to_string();
        log::info!("Game reset");
    }

    #[inline]
    pub fn board(&self) -> &BoardSpec {
        &self.board
    }

    #[inline]
    pub fn throws_per_game(&self) -> u32 {
        self.throws_per_game
    }

    #[inline]
    pub fn deviation(&self) -> u32 {
        self.deviation
    }

    #[inline]
    pub fn throws_remaining(&self) -> u32 {
        self.throws_remaining
    }

    #[inline]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    #[inline]
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Description of the most recent throw
    #[inline]
    pub fn last_shot(&self) -> &str {
        &self.last_shot
    }

    /// HUD line with darts left and running total
    pub fn status_line(&self) -> String {
        format!(
            "Throws left: {}   Total: {}",
            self.throws_remaining, self.total_score
        )
    }

    /// Final banner, only once all darts are thrown
    pub fn game_over_line(&self) -> Option<String> {
        self.is_finished()
            .then(|| format!("Game Over! Final Score: {}", self.total_score))
    }
}
