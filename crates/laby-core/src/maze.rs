//! The wall-mask maze grid.

use std::fmt;

use crate::{Dir, Point};

/// Errors raised when constructing a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height was zero or negative.
    InvalidSize { width: i32, height: i32 },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "invalid maze size {width}x{height}: dimensions must be positive")
            }
        }
    }
}

impl std::error::Error for MazeError {}

/// A fixed-size grid maze.
///
/// Each cell stores a 4-bit mask of open edges, addressed by [`Dir`]: bit
/// `d` set means the edge toward direction `d` is open (passable). Cells are
/// identified either by [`Point`] or by flat index `x + y * width`.
///
/// A freshly constructed maze has every edge closed; [`open`](Maze::open)
/// always opens both half-edges, so edge symmetry holds by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    width: i32,
    height: i32,
    cells: Vec<u8>,
}

impl Maze {
    /// Create a fully walled maze. Rejects zero or negative dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![0; (width as usize) * (height as usize)],
        })
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Convert a point to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Convert a flat index back to a point.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        debug_assert!(idx < self.cells.len());
        Point::new(idx as i32 % self.width, idx as i32 / self.width)
    }

    /// The open-edge mask of a cell, or 0 if out of bounds.
    #[inline]
    pub fn mask(&self, p: Point) -> u8 {
        match self.idx(p) {
            Some(i) => self.cells[i],
            None => 0,
        }
    }

    /// Whether the edge from `p` toward `d` is open.
    #[inline]
    pub fn is_open(&self, p: Point, d: Dir) -> bool {
        self.mask(p) & d.bit() != 0
    }

    /// Open the edge between `p` and its neighbor toward `d`, setting the
    /// matching bit on both sides. Returns `false` (and changes nothing) if
    /// either cell is out of bounds.
    pub fn open(&mut self, p: Point, d: Dir) -> bool {
        let q = p + d.delta();
        let (Some(pi), Some(qi)) = (self.idx(p), self.idx(q)) else {
            return false;
        };
        self.cells[pi] |= d.bit();
        self.cells[qi] |= d.opposite().bit();
        true
    }

    /// Number of open edges, counting each edge once.
    pub fn open_edge_count(&self) -> usize {
        let half_edges: u32 = self.cells.iter().map(|m| m.count_ones()).sum();
        (half_edges / 2) as usize
    }
}
