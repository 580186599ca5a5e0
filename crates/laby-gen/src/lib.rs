//! Perfect-maze generation via randomized iterative backtracking.
//!
//! [`Backtracker`] carves a spanning tree of open edges into a fully walled
//! [`Maze`]: every cell ends up reachable from every other cell through
//! exactly one simple path. The random source is injected, so a seeded rng
//! reproduces the same maze.

use laby_core::{Dir, Maze, MazeError};
use rand::Rng;

/// Maze generator using the randomized-backtracker algorithm.
///
/// The walk keeps a stack of visited cells. At each step the four neighbor
/// directions of the stack top are scanned in rotation order starting from a
/// freshly drawn random offset; the first unvisited in-bounds neighbor is
/// carved into and pushed. Dead ends pop the stack. Each cell is entered
/// through exactly one edge, which is what makes the result a spanning tree.
///
/// The per-step random rotation offset (rather than a full shuffle) is part
/// of the algorithm's contract: it reduces directional bias without
/// eliminating it, and changing it would change the statistical shape of the
/// generated mazes.
pub struct Backtracker<R: Rng> {
    pub rng: R,
}

impl<R: Rng> Backtracker<R> {
    /// Create a generator around the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a perfect maze of the given dimensions.
    ///
    /// Zero or negative dimensions are rejected before generation starts.
    pub fn generate(&mut self, width: i32, height: i32) -> Result<Maze, MazeError> {
        let mut maze = Maze::new(width, height)?;
        self.carve(&mut maze);
        log::debug!(
            "carved {}x{} maze: {} open edges",
            width,
            height,
            maze.open_edge_count()
        );
        Ok(maze)
    }

    fn carve(&mut self, maze: &mut Maze) {
        let len = maze.cell_count();
        let mut visited = vec![false; len];
        let mut stack = Vec::with_capacity(len);

        visited[0] = true;
        stack.push(0usize);
        let mut remaining = len - 1;

        while let Some(&cur) = stack.last() {
            if remaining == 0 {
                break;
            }

            let p = maze.point(cur);
            let offset = self.rng.random_range(0..4u8);
            let mut advanced = false;

            for k in 0..4u8 {
                let d = Dir::from_index(offset + k);
                let q = p + d.delta();
                let Some(qi) = maze.idx(q) else {
                    continue;
                };
                if visited[qi] {
                    continue;
                }

                visited[qi] = true;
                maze.open(p, d);
                stack.push(qi);
                remaining -= 1;
                advanced = true;
                break;
            }

            if !advanced {
                stack.pop();
            }
        }
    }
}
