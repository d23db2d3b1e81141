//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board side length (the board is always square).
pub const BOARD_SIZE: usize = 4;

/// Reaching this tile value wins the game.
pub const WIN_TILE: u32 = 2048;

/// Values a spawned tile can take, each equally likely.
///
/// The original game draws 2 and 4 at 50/50, not the common 90/10 weighting.
/// Preserved deliberately for compatibility.
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// A shift direction for the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// Parse a direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Session outcome status.
///
/// `Won` and `Lost` are terminal: `apply_move` becomes a no-op and only a
/// restart produces a playable session again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "inProgress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Game actions as produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Shift(Direction),
    Restart,
}

impl GameAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Shift)
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Shift(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}
