use crate::geometry::IntPoint;

/// Dense row-major matrix of real values, e.g. a decoded grayscale image
/// or a per-block contrast map.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DoubleMatrix {
    width: i32,
    height: i32,
    cells: Vec<f64>,
}

impl DoubleMatrix {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width >= 0 && height >= 0);
        Self {
            width,
            height,
            cells: vec![0.0; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> IntPoint {
        IntPoint::new(self.width, self.height)
    }

    pub fn get(&self, x: i32, y: i32) -> f64 {
        self.cells[self.offset(x, y)]
    }

    pub fn get_point(&self, at: IntPoint) -> f64 {
        self.get(at.x, at.y)
    }

    pub fn set(&mut self, x: i32, y: i32, value: f64) {
        let offset = self.offset(x, y);
        self.cells[offset] = value;
    }

    fn offset(&self, x: i32, y: i32) -> usize {
        assert!(x >= 0 && x < self.width && y >= 0 && y < self.height);
        (self.width * y + x) as usize
    }
}

/// Dense row-major matrix of two-state values, e.g. a binarized image.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BooleanMatrix {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl BooleanMatrix {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width >= 0 && height >= 0);
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> IntPoint {
        IntPoint::new(self.width, self.height)
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        self.cells[self.offset(x, y)]
    }

    pub fn set(&mut self, x: i32, y: i32, value: bool) {
        let offset = self.offset(x, y);
        self.cells[offset] = value;
    }

    fn offset(&self, x: i32, y: i32) -> usize {
        assert!(x >= 0 && x < self.width && y >= 0 && y < self.height);
        (self.width * y + x) as usize
    }
}

/// Dense row-major matrix of small categorical values, rendered through a
/// palette lookup supplied by the visualization that owns it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IntMatrix {
    width: i32,
    height: i32,
    cells: Vec<u8>,
}

impl IntMatrix {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width >= 0 && height >= 0);
        Self {
            width,
            height,
            cells: vec![0; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.cells[self.offset(x, y)]
    }

    pub fn set(&mut self, x: i32, y: i32, value: u8) {
        let offset = self.offset(x, y);
        self.cells[offset] = value;
    }

    fn offset(&self, x: i32, y: i32) -> usize {
        assert!(x >= 0 && x < self.width && y >= 0 && y < self.height);
        (self.width * y + x) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_matrix_round_trips_cells() {
        let mut matrix = DoubleMatrix::new(3, 2);
        matrix.set(2, 1, 0.25);
        assert_eq!(matrix.get(2, 1), 0.25);
        assert_eq!(matrix.get(0, 0), 0.0);
        assert_eq!(matrix.get_point(IntPoint::new(2, 1)), 0.25);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_get_panics() {
        DoubleMatrix::new(2, 2).get(2, 0);
    }

    #[test]
    fn boolean_matrix_defaults_to_false() {
        let matrix = BooleanMatrix::new(4, 4);
        assert!(!matrix.get(3, 3));
    }

    #[test]
    fn int_matrix_round_trips_cells() {
        let mut matrix = IntMatrix::new(2, 2);
        matrix.set(1, 0, 7);
        assert_eq!(matrix.get(1, 0), 7);
    }
}
