use crate::types::GameStatus;

/// Plain-data view of a session, consumed by rendering and the tests.
///
/// Holds no references into the session, so the UI can keep one around
/// across frames without borrowing the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Side length of the board.
    pub size: usize,
    /// Row-major cell values; 0 is empty.
    pub cells: Vec<u32>,
    pub score: u32,
    pub status: GameStatus,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::InProgress
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            size: 0,
            cells: Vec::new(),
            score: 0,
            status: GameStatus::InProgress,
            episode_id: 0,
            seed: 0,
        }
    }
}
