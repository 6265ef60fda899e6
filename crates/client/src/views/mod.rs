//! View components for the application.

pub mod board;

pub use board::Board;
