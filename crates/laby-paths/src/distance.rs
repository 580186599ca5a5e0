use laby_core::Point;

/// Euclidean (L2) distance between two points.
///
/// Used as the A* heuristic: on a 4-connected unit-cost grid it never
/// overestimates the true remaining cost.
#[inline]
pub fn euclid(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x) as f32;
    let dy = (a.y - b.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclid_basics() {
        assert_eq!(euclid(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(euclid(Point::new(2, 2), Point::new(2, 2)), 0.0);
    }

    #[test]
    fn euclid_never_exceeds_manhattan() {
        let a = Point::new(-3, 7);
        for x in -5..5 {
            for y in -5..5 {
                let b = Point::new(x, y);
                assert!(euclid(a, b) <= manhattan(a, b) as f32 + 1e-4);
            }
        }
    }
}
