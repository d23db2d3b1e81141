//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the view draws into a plain
//! framebuffer of styled characters, and the renderer flushes that buffer to
//! the terminal. Keeping the view pure means the whole visual layout is
//! unit-testable without a tty.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
