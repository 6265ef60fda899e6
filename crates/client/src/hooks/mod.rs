//! Hooks wiring the board controllers into the component tree.

pub mod use_board;

pub use use_board::{use_board_provider, BoardContext};
