//! Enumeration and rendering of crack-free brick walls
//!
//! A wall is a stack of rows of bricks (each brick 1 to 4 units wide) where no two
//! vertically adjacent rows share an internal cut point. The engine generates every
//! row of a width, builds the row compatibility relation once, and then stacks rows
//! into every wall of the requested height.

#![forbid(unsafe_code)]

/// Row generation, compatibility checking, wall enumeration and background workers
pub mod algorithm;
/// Command-line interface, rendering, progress display and error handling
pub mod io;

pub use algorithm::rows::{Row, generate_rows};
pub use algorithm::walls::{Strategy, Wall, enumerate_walls, generate_walls};
pub use io::error::{AlgorithmError, Result};
