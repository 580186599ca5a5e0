//! Core types for grid mazes.
//!
//! - [`Point`]: 2D integer coordinates in screen orientation (y grows down).
//! - [`Dir`]: the four cardinal directions, in wall-mask bit order.
//! - [`Maze`]: a fixed-size grid where each cell stores which of its four
//!   edges are open (passable).
//!
//! Generation lives in `laby-gen`, search in `laby-paths` and bitmap output
//! in `laby-raster`; this crate only defines the shared data model.

mod geom;
mod maze;

pub use geom::{Dir, Point};
pub use maze::{Maze, MazeError};
