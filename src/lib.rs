//! Terminal 2048.
//!
//! The crate is split the same way the binary runs: a pure [`core`] with the
//! board engine and the game session, an [`input`] keymap, and a [`term`]
//! rendering layer. Only `term::renderer` and the binary touch the terminal.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
