//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has zero
//! dependencies on UI or I/O, making it:
//!
//! - **Deterministic**: same seed produces the identical game
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: usable from any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: the square tile grid with transpose/mirror transforms
//! - [`engine`]: pure shift transitions, scoring, and the liveness check
//! - [`game_state`]: the session tying board, score, status, and spawning together
//! - [`rng`]: injectable randomness and the tile spawner
//! - [`snapshot`]: plain-data state view for rendering
//!
//! # Example
//!
//! ```
//! use tui_2048::core::GameState;
//! use tui_2048::types::{Direction, GameStatus};
//!
//! let mut game = GameState::new(4, 12345);
//! game.apply_move(Direction::Left);
//!
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

pub mod board;
pub mod engine;
pub mod game_state;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{can_shift, legal_shifts, shift, MoveOutcome};
pub use game_state::GameState;
pub use rng::{spawn_tile, RandomSource, SimpleRng, Spawn};
pub use snapshot::GameSnapshot;
