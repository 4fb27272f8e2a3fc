//! Composition buffers: single-canvas fragment accumulation and the
//! dual-subject split layout.

use crate::error::VizResult;
use crate::geometry::IntPoint;
use crate::markers::{embed_jpeg, embed_png};
use crate::pixmap::Pixmap;
use crate::svg::{Fragment, VectorImage};

/// Accumulates marker fragments over an optional embedded raster base
/// layer. Fragments keep call order: later adds paint over earlier ones.
/// Coordinates are in the same unit space as the embedded raster's pixel
/// grid; no implicit scaling happens between markers and background.
#[derive(Clone, Debug)]
pub struct VectorBuffer {
    size: IntPoint,
    fragments: Vec<Fragment>,
}

impl VectorBuffer {
    pub fn new(size: IntPoint) -> Self {
        Self {
            size,
            fragments: Vec::new(),
        }
    }

    /// Embeds a rendered raster as the background layer, preserving its
    /// alpha channel. Call before adding markers.
    pub fn embed_png(mut self, pixmap: &Pixmap) -> VizResult<Self> {
        self.fragments.push(embed_png(pixmap)?);
        Ok(self)
    }

    /// Embeds a rendered raster as an opaque photographic background
    /// layer. Call before adding markers.
    pub fn embed_jpeg(mut self, pixmap: &Pixmap) -> VizResult<Self> {
        self.fragments.push(embed_jpeg(pixmap)?);
        Ok(self)
    }

    pub fn add(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn extend(&mut self, fragments: impl IntoIterator<Item = Fragment>) {
        self.fragments.extend(fragments);
    }

    /// Final vector scene: background (if any) first, then markers in
    /// the order they were added.
    pub fn render(self) -> VectorImage {
        VectorImage::new(self.size, self.fragments)
    }
}

/// Horizontal gap between the two subjects of a split canvas, in pixels.
pub const SPLIT_GAP: i32 = 20;

/// Side-by-side layout of two same-or-different-sized subjects on one
/// shared canvas. Each subject owns an independent coordinate offset;
/// cross-subject correspondence lines compute both endpoints in local
/// space and remap each through its own side.
#[derive(Clone, Debug)]
pub struct SplitBuffer {
    canvas: IntPoint,
    right_offset: f64,
    fragments: Vec<Fragment>,
}

impl SplitBuffer {
    pub fn new(left: IntPoint, right: IntPoint) -> Self {
        Self {
            canvas: IntPoint::new(left.x + SPLIT_GAP + right.x, left.y.max(right.y)),
            right_offset: f64::from(left.x + SPLIT_GAP),
            fragments: Vec::new(),
        }
    }

    pub fn left_x(&self, x: f64) -> f64 {
        x
    }

    pub fn left_y(&self, y: f64) -> f64 {
        y
    }

    pub fn right_x(&self, x: f64) -> f64 {
        x + self.right_offset
    }

    pub fn right_y(&self, y: f64) -> f64 {
        y
    }

    pub fn add(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Final shared-canvas scene.
    pub fn content(self) -> VectorImage {
        VectorImage::new(self.canvas, self.fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn buffer_preserves_call_order_after_base_layer() {
        let base = Pixmap::new(4, 4);
        let mut buffer = VectorBuffer::new(IntPoint::new(4, 4))
            .embed_png(&base)
            .unwrap();
        buffer.add(Fragment::circle(Point::new(1.0, 1.0), 1.0, "red"));
        buffer.add(Fragment::circle(Point::new(2.0, 2.0), 1.0, "blue"));
        let scene = buffer.render();
        assert_eq!(scene.fragments().len(), 3);
        assert!(matches!(scene.fragments()[0], Fragment::Image { .. }));
        assert!(matches!(
            &scene.fragments()[1],
            Fragment::Circle { fill, .. } if fill == "red"
        ));
    }

    #[test]
    fn split_remap_is_pure_translation() {
        let split = SplitBuffer::new(IntPoint::new(100, 80), IntPoint::new(60, 120));
        for x in [0.0, 17.5, 99.0] {
            assert_eq!(split.left_x(x), x);
            assert_eq!(split.right_x(x), x + 120.0);
        }
        assert_eq!(split.left_y(33.0), 33.0);
        assert_eq!(split.right_y(33.0), 33.0);
    }

    #[test]
    fn split_offsets_leave_room_for_left_subject_and_gap() {
        let left = IntPoint::new(100, 80);
        let right = IntPoint::new(60, 120);
        let split = SplitBuffer::new(left, right);
        let left_offset = split.left_x(0.0);
        let right_offset = split.right_x(0.0);
        assert!(right_offset - left_offset >= f64::from(left.x + SPLIT_GAP));
    }

    #[test]
    fn split_canvas_fits_both_subjects() {
        let split = SplitBuffer::new(IntPoint::new(100, 80), IntPoint::new(60, 120));
        let canvas = split.content().size();
        assert_eq!(canvas, IntPoint::new(180, 120));
    }
}
