//! Renderable image models and their terminal visualizations.

use crate::matrix::{BooleanMatrix, DoubleMatrix, IntMatrix};
use crate::pixmap::Pixmap;
use crate::svg::VectorImage;

/// Renderable wrapper around one matrix- or scene-shaped artifact. Each
/// variant knows how to become either a pixel buffer (raster variants)
/// or a scene graph (vector variant).
#[derive(Clone, Debug)]
pub enum ImageModel {
    /// Real-valued matrix in the caller-specified `min..=max` range,
    /// linearly rescaled to brightness 0..=255.
    Grayscale {
        matrix: DoubleMatrix,
        min: f64,
        max: f64,
    },
    /// Two-state matrix rendered with fixed background and foreground
    /// colors.
    Binary {
        matrix: BooleanMatrix,
        zero: u32,
        one: u32,
    },
    /// Categorical matrix rendered through a palette lookup supplied by
    /// the specific visualization. Cell values index into the palette;
    /// a value outside it means the artifact and the visualization
    /// disagree on schema and rendering fails fast.
    Palette { matrix: IntMatrix, palette: Vec<u32> },
    /// Already-composed vector scene.
    Vector(VectorImage),
}

impl ImageModel {
    /// Pure, deterministic rendering into the terminal form. The source
    /// artifact is consumed, never mutated.
    pub fn render(self) -> Visualization {
        match self {
            Self::Grayscale { matrix, min, max } => {
                let mut pixmap = Pixmap::with_size(matrix.size());
                for at in matrix.size().grid() {
                    let rescaled = (matrix.get_point(at) - min) / (max - min);
                    let brightness = (255.0 * rescaled).round().clamp(0.0, 255.0) as u32;
                    pixmap.set_point(at, Pixmap::gray(brightness));
                }
                Visualization::Raster(pixmap)
            }
            Self::Binary { matrix, zero, one } => {
                let mut pixmap = Pixmap::with_size(matrix.size());
                for at in matrix.size().grid() {
                    let color = if matrix.get(at.x, at.y) { one } else { zero };
                    pixmap.set_point(at, color);
                }
                Visualization::Raster(pixmap)
            }
            Self::Palette { matrix, palette } => {
                let mut pixmap = Pixmap::new(matrix.width(), matrix.height());
                for at in pixmap.size().grid() {
                    pixmap.set_point(at, palette[matrix.get(at.x, at.y) as usize]);
                }
                Visualization::Raster(pixmap)
            }
            Self::Vector(scene) => Visualization::Vector(scene),
        }
    }
}

/// Finished output of one visualizer: a pixel buffer ready for PNG/JPEG
/// encoding, or a scene graph ready for SVG serialization.
#[derive(Clone, Debug)]
pub enum Visualization {
    Raster(Pixmap),
    Vector(VectorImage),
}

impl Visualization {
    pub fn raster(&self) -> Option<&Pixmap> {
        match self {
            Self::Raster(pixmap) => Some(pixmap),
            Self::Vector(_) => None,
        }
    }

    pub fn vector(&self) -> Option<&VectorImage> {
        match self {
            Self::Raster(_) => None,
            Self::Vector(scene) => Some(scene),
        }
    }
}
