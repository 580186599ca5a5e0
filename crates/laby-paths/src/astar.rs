use std::collections::BinaryHeap;

use laby_core::{Dir, Maze, Point};

use crate::distance::euclid;
use crate::field::{NONE, OpenEntry, PathField};

impl PathField {
    /// Compute the shortest path from `from` to `to` over the maze's open
    /// edges (all steps cost 1).
    ///
    /// Returns the full path in source→target order, including both
    /// endpoints, or `None` if either endpoint is out of bounds or no path
    /// exists. On a perfect maze the latter cannot happen for in-bounds
    /// endpoints.
    ///
    /// The open set admits duplicate entries for a cell; stale entries are
    /// skipped when popped. Ties in estimated total cost are broken
    /// arbitrarily, so which of several equally short paths is returned is
    /// unspecified — the length is always optimal.
    pub fn astar_path(&mut self, maze: &Maze, from: Point, to: Point) -> Option<Vec<Point>> {
        let start = maze.idx(from)?;
        let goal = maze.idx(to)?;

        self.fit(maze);
        self.reset(start, euclid(from, to));

        if start == goal {
            return Some(vec![from]);
        }

        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        open.push(OpenEntry {
            idx: start,
            f: self.nodes[start].f,
        });

        let found = loop {
            let Some(current) = open.pop() else {
                break false;
            };
            let ci = current.idx;

            if ci == goal {
                break true;
            }
            // Stale duplicate of an already expanded cell.
            if self.nodes[ci].closed {
                continue;
            }
            self.nodes[ci].closed = true;

            let candidate = self.nodes[ci].g + 1.0;
            let cp = maze.point(ci);

            for d in Dir::ALL {
                if !maze.is_open(cp, d) {
                    continue;
                }
                let np = cp + d.delta();
                let Some(ni) = maze.idx(np) else {
                    continue;
                };

                let node = &mut self.nodes[ni];
                if candidate >= node.g {
                    continue;
                }
                node.g = candidate;
                node.f = candidate + euclid(np, to);
                node.parent = ci;
                if !node.closed {
                    open.push(OpenEntry { idx: ni, f: node.f });
                }
            }
        };

        if !found {
            return None;
        }

        // Walk the parent chain back to the source; it is a tree rooted at
        // the source, so this terminates.
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NONE {
            path.push(maze.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laby_gen::Backtracker;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    /// A 3x3 maze carved as a single serpentine corridor:
    ///
    /// ```text
    /// 0-1-2
    ///     |
    /// 5-4-3
    /// |
    /// 6-7-8
    /// ```
    fn serpentine() -> Maze {
        let mut m = Maze::new(3, 3).unwrap();
        m.open(Point::new(0, 0), Dir::East);
        m.open(Point::new(1, 0), Dir::East);
        m.open(Point::new(2, 0), Dir::South);
        m.open(Point::new(2, 1), Dir::West);
        m.open(Point::new(1, 1), Dir::West);
        m.open(Point::new(0, 1), Dir::South);
        m.open(Point::new(0, 2), Dir::East);
        m.open(Point::new(1, 2), Dir::East);
        m
    }

    /// Brute-force unweighted shortest-path oracle.
    fn bfs_dist(maze: &Maze, from: Point, to: Point) -> Option<usize> {
        let start = maze.idx(from)?;
        let goal = maze.idx(to)?;
        let mut dist = vec![usize::MAX; maze.cell_count()];
        let mut queue = VecDeque::new();
        dist[start] = 0;
        queue.push_back(start);
        while let Some(i) = queue.pop_front() {
            if i == goal {
                return Some(dist[i]);
            }
            let p = maze.point(i);
            for d in Dir::ALL {
                if !maze.is_open(p, d) {
                    continue;
                }
                let Some(ni) = maze.idx(p + d.delta()) else {
                    continue;
                };
                if dist[ni] == usize::MAX {
                    dist[ni] = dist[i] + 1;
                    queue.push_back(ni);
                }
            }
        }
        None
    }

    /// Every step of the path must cross an open edge between adjacent
    /// cells.
    fn assert_valid_path(maze: &Maze, path: &[Point]) {
        for w in path.windows(2) {
            let step = w[1] - w[0];
            let d = Dir::ALL
                .into_iter()
                .find(|d| d.delta() == step)
                .expect("path step is not a unit move");
            assert!(maze.is_open(w[0], d), "path crosses a wall at {}", w[0]);
        }
    }

    #[test]
    fn serpentine_exact_costs() {
        let maze = serpentine();
        let mut field = PathField::new(3, 3);

        let path = field
            .astar_path(&maze, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], Point::new(0, 0));
        assert_eq!(path[8], Point::new(2, 2));
        assert_valid_path(&maze, &path);
        assert_eq!(field.cost_to(Point::new(2, 2)), Some(8.0));

        let path = field
            .astar_path(&maze, Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(field.cost_to(Point::new(2, 0)), Some(2.0));
    }

    #[test]
    fn self_path_is_trivial() {
        let maze = serpentine();
        let mut field = PathField::new(3, 3);
        let c = Point::new(1, 1);
        assert_eq!(field.astar_path(&maze, c, c), Some(vec![c]));
    }

    #[test]
    fn out_of_bounds_endpoints_rejected() {
        let maze = serpentine();
        let mut field = PathField::new(3, 3);
        // target index = W*H, one past the last cell
        assert_eq!(
            field.astar_path(&maze, Point::new(0, 0), Point::new(0, 3)),
            None
        );
        assert_eq!(
            field.astar_path(&maze, Point::new(-1, 0), Point::new(2, 2)),
            None
        );
    }

    #[test]
    fn fully_walled_maze_has_no_path() {
        let maze = Maze::new(4, 4).unwrap();
        let mut field = PathField::new(4, 4);
        assert_eq!(
            field.astar_path(&maze, Point::new(0, 0), Point::new(3, 3)),
            None
        );
    }

    #[test]
    fn matches_bfs_oracle_on_generated_mazes() {
        for seed in 0..4 {
            let maze = Backtracker::new(StdRng::seed_from_u64(seed))
                .generate(12, 9)
                .unwrap();
            let mut field = PathField::new(12, 9);
            let from = Point::new(0, 0);
            for to in [Point::new(11, 8), Point::new(5, 4), Point::new(0, 8)] {
                let path = field.astar_path(&maze, from, to).unwrap();
                assert_valid_path(&maze, &path);
                assert_eq!(path.len() - 1, bfs_dist(&maze, from, to).unwrap());
            }
        }
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let maze = Backtracker::new(StdRng::seed_from_u64(7))
            .generate(10, 10)
            .unwrap();
        let mut field = PathField::new(10, 10);
        let from = Point::new(2, 3);
        let to = Point::new(9, 9);
        let first = field.astar_path(&maze, from, to).unwrap().len();
        for _ in 0..3 {
            assert_eq!(field.astar_path(&maze, from, to).unwrap().len(), first);
        }
    }

    #[test]
    fn seeded_scenario_3x3() {
        // Corner-to-corner on a 3x3 maze: maze-imposed detours can only
        // lengthen the path beyond the Manhattan lower bound of 4.
        let maze = Backtracker::new(StdRng::seed_from_u64(1234))
            .generate(3, 3)
            .unwrap();
        let mut field = PathField::new(3, 3);
        let path = field
            .astar_path(&maze, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert_valid_path(&maze, &path);
        assert!(path.len() - 1 >= 4);
        assert_eq!(path.len() - 1, bfs_dist(&maze, Point::new(0, 0), Point::new(2, 2)).unwrap());
        assert_eq!(field.cost_to(Point::new(2, 2)), Some((path.len() - 1) as f32));
    }

    #[test]
    fn field_refits_to_a_different_maze_size() {
        let small = Backtracker::new(StdRng::seed_from_u64(5))
            .generate(4, 4)
            .unwrap();
        let large = Backtracker::new(StdRng::seed_from_u64(5))
            .generate(8, 6)
            .unwrap();
        let mut field = PathField::new(4, 4);
        assert!(field.astar_path(&small, Point::new(0, 0), Point::new(3, 3)).is_some());
        assert!(field.astar_path(&large, Point::new(0, 0), Point::new(7, 5)).is_some());
        assert!(field.astar_path(&small, Point::new(3, 3), Point::new(0, 0)).is_some());
    }
}
