//! Domain records captured by the extraction and matching pipeline.
//!
//! These arrive through the archive in already-deserialized form; nothing
//! here is computed by this crate beyond trivial coordinate resolution.

use kurbo::Point;

use crate::geometry::{IntPoint, IntRect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MinutiaType {
    Ending,
    Bifurcation,
}

/// Ridge feature point: grid position, direction angle, and type tag.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Minutia {
    pub position: IntPoint,
    pub direction: f64,
    pub minutia_type: MinutiaType,
}

impl Minutia {
    /// Drawing center, resolved from the grid position by the cell-center
    /// rule.
    pub fn center(&self) -> Point {
        self.position.center()
    }
}

/// One subject's extracted features: image size plus minutia list.
/// Indexed structures (edges, pairings) dereference into `minutiae`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Template {
    pub size: IntPoint,
    pub minutiae: Vec<Minutia>,
}

/// Geometric shape of a directed edge between two minutiae of one
/// subject: its length plus the edge angle relative to each endpoint's
/// own minutia direction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeShape {
    pub length: f64,
    pub reference_angle: f64,
    pub neighbor_angle: f64,
}

/// Edge whose endpoints are indices into a subject's minutia list.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IndexedEdge {
    pub shape: EdgeShape,
    pub reference: usize,
    pub neighbor: usize,
}

/// One bucket of the matcher's edge hash: the bucket key and every
/// indexed edge hashed into it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeHashEntry {
    pub hash: u32,
    pub edges: Vec<IndexedEdge>,
}

/// Which subject of a match a dual-indexed structure is projected onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MatchSide {
    Probe,
    Candidate,
}

/// Correspondence between one probe minutia and one candidate minutia,
/// each as an index into its subject's minutia list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MinutiaPair {
    pub probe: usize,
    pub candidate: usize,
}

impl MinutiaPair {
    pub fn side(&self, side: MatchSide) -> usize {
        match side {
            MatchSide::Probe => self.probe,
            MatchSide::Candidate => self.candidate,
        }
    }
}

/// Paired edge in the pairing graph: endpoint correspondences at both
/// ends of the edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EdgePair {
    pub from: MinutiaPair,
    pub to: MinutiaPair,
}

/// Correspondence structure of one match attempt: the root pair that
/// seeded it, the tree edges that extended it, and the support edges
/// that corroborate it without extending it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PairingGraph {
    pub root: MinutiaPair,
    pub tree: Vec<EdgePair>,
    pub support: Vec<EdgePair>,
}

/// Block decomposition of an image: total pixel size plus the pixel
/// boundaries of block columns and rows. Boundary vectors hold one more
/// element than there are blocks along that axis.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BlockGrid {
    pixels: IntPoint,
    x: Vec<i32>,
    y: Vec<i32>,
}

impl BlockGrid {
    pub fn new(pixels: IntPoint, x: Vec<i32>, y: Vec<i32>) -> Self {
        assert!(x.len() >= 2 && y.len() >= 2);
        Self { pixels, x, y }
    }

    /// Evenly sized grid covering `pixels` with blocks of roughly
    /// `block` pixels; the last block along each axis absorbs the
    /// remainder.
    pub fn regular(pixels: IntPoint, block: i32) -> Self {
        assert!(block > 0);
        let axis = |total: i32| -> Vec<i32> {
            let count = (total / block).max(1);
            let mut bounds: Vec<i32> = (0..count).map(|i| i * block).collect();
            bounds.push(total);
            bounds
        };
        Self::new(pixels, axis(pixels.x), axis(pixels.y))
    }

    /// Total pixel dimensions of the decomposed image.
    pub fn pixels(&self) -> IntPoint {
        self.pixels
    }

    /// Block counts along each axis.
    pub fn blocks(&self) -> IntPoint {
        IntPoint::new(self.x.len() as i32 - 1, self.y.len() as i32 - 1)
    }

    /// Pixel extent of the block at discrete block coordinate `at`.
    pub fn block(&self, at: IntPoint) -> IntRect {
        let (x, y) = (at.x as usize, at.y as usize);
        IntRect::new(
            self.x[x],
            self.y[y],
            self.x[x + 1] - self.x[x],
            self.y[y + 1] - self.y[y],
        )
    }
}
