use laby_core::{Maze, Point};

/// Parent sentinel meaning "no predecessor".
pub(crate) const NONE: usize = usize::MAX;

/// Per-cell search metadata, re-initialized on every query.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchNode {
    /// Cheapest known cost from the source (g-score).
    pub(crate) g: f32,
    /// g plus the heuristic estimate to the target (f-score).
    pub(crate) f: f32,
    /// Predecessor on the best known path, or [`NONE`].
    pub(crate) parent: usize,
    /// Set once the cell has been expanded; its g is then final.
    pub(crate) closed: bool,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: f32::INFINITY,
            f: f32::INFINITY,
            parent: NONE,
            closed: false,
        }
    }
}

/// Open-set entry ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest f-score first. Ties in f are broken arbitrarily.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) f: f32,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f.total_cmp(&other.f).is_eq()
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so the heap pops the minimum f.
        other.f.total_cmp(&self.f)
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Reusable search state for shortest-path queries on one maze size.
///
/// The node array is allocated once from `width * height` and fully reset at
/// the start of every query, so repeated queries are idempotent and nothing
/// leaks from one search into the next.
pub struct PathField {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) nodes: Vec<SearchNode>,
}

impl PathField {
    /// Create a field sized for a `width x height` maze.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            nodes: vec![SearchNode::default(); (w as usize) * (h as usize)],
        }
    }

    /// Resize to match `maze` if its dimensions differ.
    pub(crate) fn fit(&mut self, maze: &Maze) {
        if self.width == maze.width() && self.height == maze.height() {
            return;
        }
        self.width = maze.width();
        self.height = maze.height();
        self.nodes.clear();
        self.nodes.resize(maze.cell_count(), SearchNode::default());
    }

    /// Clear all nodes, then seed the source with g = 0 and its heuristic
    /// estimate as f.
    pub(crate) fn reset(&mut self, source: usize, estimate: f32) {
        self.nodes.fill(SearchNode::default());
        let node = &mut self.nodes[source];
        node.g = 0.0;
        node.f = estimate;
    }

    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Cost-so-far of `p` recorded by the most recent query, or `None` if
    /// the cell was never reached (or is out of bounds).
    pub fn cost_to(&self, p: Point) -> Option<f32> {
        let i = self.idx(p)?;
        let g = self.nodes[i].g;
        g.is_finite().then_some(g)
    }
}
