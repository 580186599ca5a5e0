//! Rasterization of mazes and paths into byte bitmaps.
//!
//! Each cell occupies a `padding x padding` pixel block. [`wall_field`]
//! draws closed edges as 1-pixel lines, [`path_field`] draws a path as
//! straight segments between cell centers. Both produce a single-channel
//! [`Field`] (background 0, foreground 255), row-major with the origin at
//! the top left, sized `(width * padding) x (height * padding)` — opaque
//! byte buffers ready for a display layer to upload or encode.

use laby_core::{Dir, Maze, Point};

/// A single-channel byte bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Field {
    /// Create a zeroed field.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0; width * height],
            width,
            height,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw row-major pixel buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel value at (x, y); 0 if out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[y * self.width + x]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize) {
        debug_assert!(x < self.width && y < self.height);
        self.data[y * self.width + x] = 255;
    }
}

/// Rasterize the maze's walls.
///
/// For every cell block, a closed east edge becomes a vertical line on the
/// rightmost column and a closed south edge a horizontal line on the bottom
/// row, plus a one-pixel extension to the left of the south wall so corners
/// join up. The grid's outer north and west border is not drawn, matching
/// the classic look of this renderer.
pub fn wall_field(maze: &Maze, padding: usize) -> Field {
    assert!(padding > 0, "padding must be positive");
    let w = maze.width() as usize;
    let h = maze.height() as usize;
    let mut field = Field::new(w * padding, h * padding);
    let offs = padding - 1;

    for y in 0..h {
        for x in 0..w {
            let p = Point::new(x as i32, y as i32);
            let east_open = maze.is_open(p, Dir::East);
            let south_open = maze.is_open(p, Dir::South);
            let tx = x * padding;
            let ty = y * padding;

            if !south_open && tx > 0 {
                field.set(tx - 1, ty + offs);
            }
            for i in 0..padding {
                if !east_open {
                    field.set(tx + offs, ty + i);
                }
                if !south_open {
                    field.set(tx + i, ty + offs);
                }
            }
        }
    }

    field
}

/// Rasterize a path as pixel segments between the centers of consecutive
/// cells.
///
/// `size` is the maze size in cells; an empty path yields an empty field.
/// Consecutive path cells are expected to be grid-adjacent, giving straight
/// one-pixel-wide segments.
pub fn path_field(size: Point, padding: usize, path: &[Point]) -> Field {
    assert!(padding > 0, "padding must be positive");
    let mut field = Field::new(size.x.max(0) as usize * padding, size.y.max(0) as usize * padding);

    let center = |p: &Point| -> (usize, usize) {
        (
            p.x as usize * padding + padding / 2,
            p.y as usize * padding + padding / 2,
        )
    };

    let mut iter = path.iter();
    let Some(first) = iter.next() else {
        return field;
    };
    let (mut px, mut py) = center(first);
    field.set(px, py);

    for p in iter {
        let (x, y) = center(p);
        while px != x {
            px = if px < x { px + 1 } else { px - 1 };
            field.set(px, py);
        }
        while py != y {
            py = if py < y { py + 1 } else { py - 1 };
            field.set(px, py);
        }
    }

    field
}

/// Compose wall and path fields into an RGBA preview image.
///
/// Where the path field is set the pixel renders red; elsewhere a grayscale
/// value is derived from a 4-tap smoothed sample of the wall field, giving
/// softened wall edges. Returns a row-major RGBA buffer of the same pixel
/// dimensions as the inputs.
pub fn composite(walls: &Field, path: &Field) -> Vec<u8> {
    let w = walls.width();
    let h = walls.height();
    let mut rgba = vec![0u8; w * h * 4];

    for y in 0..h {
        for x in 0..w {
            let i = (y * w + x) * 4;
            if path.get(x, y) > 127 {
                rgba[i] = 255;
                rgba[i + 3] = 255;
                continue;
            }
            let taps = walls.get(x, y) as u32
                + walls.get(x + 1, y) as u32
                + walls.get(x, y + 1) as u32
                + walls.get(x + 1, y + 1) as u32;
            let t = taps as f32 / (4.0 * 255.0);
            let gray = (t * t * 0.75 * 255.0) as u8;
            rgba[i] = gray;
            rgba[i + 1] = gray;
            rgba[i + 2] = gray;
            rgba[i + 3] = 255;
        }
    }

    rgba
}
