//! Game state module - the session around the pure engine
//!
//! Owns the board, cumulative score and outcome status. Every accepted move
//! goes through `engine::shift`, spawns one random tile, and re-evaluates the
//! win/loss status. Rejected moves (terminal session, or a shift that changes
//! nothing) leave the session untouched.

use crate::core::{engine, rng::spawn_tile, snapshot::GameSnapshot, Board, SimpleRng};
use crate::types::{Direction, GameAction, GameStatus, WIN_TILE};

/// Complete game session state.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    score: u32,
    status: GameStatus,
    rng: SimpleRng,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Seed this episode started from.
    seed: u32,
}

impl GameState {
    /// Create a new session: empty board of the given size, two spawned
    /// tiles, score 0, in progress.
    pub fn new(size: usize, seed: u32) -> Self {
        let mut state = Self {
            board: Board::new(size),
            score: 0,
            status: GameStatus::InProgress,
            rng: SimpleRng::new(seed),
            episode_id: 0,
            seed,
        };
        state.seed_board();
        state
    }

    fn seed_board(&mut self) {
        spawn_tile(&mut self.board, &mut self.rng);
        spawn_tile(&mut self.board, &mut self.rng);
    }

    /// Build a session around an existing position with score 0.
    ///
    /// Status is evaluated immediately: a board already holding a win tile
    /// starts `Won`, a dead board starts `Lost`. Useful for scenario tests
    /// and for resuming externally constructed positions.
    pub fn from_board(board: Board, seed: u32) -> Self {
        let status = if board.has_tile(WIN_TILE) {
            GameStatus::Won
        } else if !engine::can_shift(&board) {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        Self {
            board,
            score: 0,
            status,
            rng: SimpleRng::new(seed),
            episode_id: 0,
            seed,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Apply one shift. Returns true if the board changed.
    ///
    /// No-ops (returning false) when the session is already Won or Lost, or
    /// when the shift leaves every cell in place; in both cases score, board
    /// and status stay untouched and nothing spawns.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if self.status.is_terminal() {
            return false;
        }

        let outcome = engine::shift(&self.board, direction);
        if !outcome.changed_from(&self.board) {
            return false;
        }

        self.board = outcome.board;
        self.score += outcome.score;
        spawn_tile(&mut self.board, &mut self.rng);

        // Win is checked before loss: a 2048 on a dead board still wins.
        self.status = if self.board.has_tile(WIN_TILE) {
            GameStatus::Won
        } else if !engine::can_shift(&self.board) {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        true
    }

    /// Start over: same size, fresh board and score, next episode.
    ///
    /// The new episode is seeded from the current rng state, so a restart
    /// chain is deterministic without replaying the same game.
    pub fn restart(&mut self) {
        let seed = self.rng.state();
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::new(self.board.size(), seed);
        self.episode_id = next_episode;
    }

    /// Apply an input-layer action.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Shift(direction) => self.apply_move(direction),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Fill a reusable snapshot with the current state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.board.size();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.score = self.score;
        out.status = self.status;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(crate::types::BOARD_SIZE, 1)
    }
}
