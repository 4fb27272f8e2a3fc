use kurbo::Point;

/// Full turn in radians. Edge and minutia angles live in `[0, PI2)`.
pub const PI2: f64 = 2.0 * std::f64::consts::PI;

/// Discrete pixel or block index coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Continuous center of the unit cell at this discrete coordinate.
    /// Grid-indexed artifacts (minutia positions, block indices) resolve
    /// to drawing coordinates through this rule and nowhere else.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.x) + 0.5, f64::from(self.y) + 0.5)
    }

    /// Iterates row-major over all points of a `self`-sized grid.
    pub fn grid(self) -> impl Iterator<Item = IntPoint> {
        let (w, h) = (self.x, self.y);
        (0..h).flat_map(move |y| (0..w).map(move |x| IntPoint::new(x, y)))
    }
}

impl std::fmt::Display for IntPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned pixel rectangle, used for block extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IntRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IntRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_center_is_half_cell_offset() {
        let at = IntPoint::new(3, 7);
        assert_eq!(at.center(), Point::new(3.5, 7.5));
    }

    #[test]
    fn cell_center_is_deterministic() {
        let at = IntPoint::new(12, 0);
        assert_eq!(at.center(), at.center());
    }

    #[test]
    fn grid_iterates_row_major() {
        let points: Vec<_> = IntPoint::new(2, 2).grid().collect();
        assert_eq!(
            points,
            vec![
                IntPoint::new(0, 0),
                IntPoint::new(1, 0),
                IntPoint::new(0, 1),
                IntPoint::new(1, 1),
            ]
        );
    }

    #[test]
    fn grid_of_empty_size_is_empty() {
        assert_eq!(IntPoint::new(0, 5).grid().count(), 0);
    }
}
