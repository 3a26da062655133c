//! Conway's Game of Life on a bounded, double-buffered grid.
//!
//! The [`Automaton`] owns the current and previous generation and exposes
//! the editing and render queries an interactive front end needs.

mod automaton;
mod grid;
mod history;
pub mod patterns;


pub use automaton::Automaton;
pub use grid::{Boundary, Grid, Viewport};
pub use history::CycleDetector;
