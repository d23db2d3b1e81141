//! RNG module - deterministic randomness and tile spawning
//!
//! Tile spawning is the only non-deterministic part of the game, so it goes
//! through the [`RandomSource`] trait. Production play uses [`SimpleRng`]
//! (a seedable LCG); tests can substitute a scripted sequence and assert
//! exact spawn outcomes.

use crate::core::Board;
use crate::types::SPAWN_VALUES;

/// Source of uniform random picks for tile spawning.
pub trait RandomSource {
    /// Random value in range [0, max). `max` is never 0.
    fn next_range(&mut self, max: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (for reseeding a restarted game).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// A tile placed by [`spawn_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Place one new tile into a uniformly random empty cell.
///
/// The value is drawn from [`SPAWN_VALUES`] with equal probability. Returns
/// `None` without touching the rng when the board has no empty cell.
pub fn spawn_tile(board: &mut Board, rng: &mut dyn RandomSource) -> Option<Spawn> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let idx = empty[rng.next_range(empty.len() as u32) as usize];
    let value = SPAWN_VALUES[rng.next_range(SPAWN_VALUES.len() as u32) as usize];

    let size = board.size();
    let (row, col) = (idx / size, idx % size);
    board.set(row, col, value);
    Some(Spawn { row, col, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed sequence of picks.
    struct ScriptedSource {
        picks: Vec<u32>,
        next: usize,
    }

    impl ScriptedSource {
        fn new(picks: Vec<u32>) -> Self {
            Self { picks, next: 0 }
        }
    }

    impl RandomSource for ScriptedSource {
        fn next_range(&mut self, max: u32) -> u32 {
            let pick = self.picks[self.next];
            self.next += 1;
            pick % max
        }
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_spawn_fills_exactly_one_cell() {
        let mut board = Board::new(4);
        let mut rng = SimpleRng::new(7);

        let spawn = spawn_tile(&mut board, &mut rng).unwrap();
        assert!(SPAWN_VALUES.contains(&spawn.value));
        assert_eq!(board.empty_cells().len(), 15);
        assert_eq!(board.get(spawn.row, spawn.col), Some(spawn.value));
    }

    #[test]
    fn test_spawn_on_full_board_is_none() {
        let mut board = Board::from_rows(&[vec![2, 4], vec![8, 16]]);
        let mut rng = SimpleRng::new(1);
        assert_eq!(spawn_tile(&mut board, &mut rng), None);
    }

    #[test]
    fn test_spawn_scripted_outcome() {
        let mut board = Board::new(2);
        board.set(0, 0, 2);

        // Empty cells (flat order): [1, 2, 3]. Pick index 2 -> cell (1, 1);
        // then pick value index 1 -> 4.
        let mut source = ScriptedSource::new(vec![2, 1]);
        let spawn = spawn_tile(&mut board, &mut source).unwrap();
        assert_eq!(spawn, Spawn { row: 1, col: 1, value: 4 });
    }

    #[test]
    fn test_spawn_only_targets_empty_cells() {
        let mut board = Board::new(2);
        board.set(0, 0, 2);
        board.set(0, 1, 4);
        board.set(1, 0, 8);
        let mut rng = SimpleRng::new(99);

        let spawn = spawn_tile(&mut board, &mut rng).unwrap();
        assert_eq!((spawn.row, spawn.col), (1, 1));
        assert_eq!(board.get(0, 0), Some(2));
        assert_eq!(board.get(0, 1), Some(4));
        assert_eq!(board.get(1, 0), Some(8));
    }
}
