//! Reusable UI components.

pub mod board;
pub mod ui;
