//! Shortest-path search over grid mazes.
//!
//! [`PathField`] owns a flat per-cell array of search nodes (cost-so-far,
//! estimated total, parent, closed flag) that is reused across queries, and
//! runs a best-first (A*) search over a maze's open edges via
//! [`PathField::astar_path`]. The Euclidean heuristic is admissible and
//! consistent on a 4-connected unit-cost grid, so returned paths are optimal
//! in length.

mod astar;
mod distance;
mod field;

pub use distance::{euclid, manhattan};
pub use field::PathField;
