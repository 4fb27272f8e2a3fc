#![forbid(unsafe_code)]

//! Diagnostic visualizations of the internal state of a fingerprint
//! feature-extraction and matching pipeline.
//!
//! The pipeline itself is an external collaborator. It records named,
//! typed artifacts (images, block maps, minutia templates, edge tables,
//! pairing graphs) into an [`Archive`]; this crate turns those artifacts
//! into inspectable pictures, either raster ([`Pixmap`]) or vector
//! ([`VectorImage`]). Rendering is pull-based: callers ask the resolver
//! (or a session [`Gallery`]) for one [`ArtifactKey`] at a time.

pub mod archive;
pub mod buffer;
pub mod color;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod markers;
pub mod matrix;
pub mod model;
pub mod pixmap;
pub mod svg;
pub mod types;
pub mod visualizer;

pub use archive::{Archive, Artifact, ArtifactKey};
pub use buffer::{SplitBuffer, VectorBuffer};
pub use error::{VizError, VizResult};
pub use gallery::Gallery;
pub use geometry::{IntPoint, IntRect};
pub use matrix::{BooleanMatrix, DoubleMatrix, IntMatrix};
pub use model::{ImageModel, Visualization};
pub use pixmap::Pixmap;
pub use svg::{Fragment, VectorImage};
pub use types::{
    BlockGrid, EdgeHashEntry, EdgePair, EdgeShape, IndexedEdge, MatchSide, Minutia, MinutiaPair,
    MinutiaType, PairingGraph, Template,
};
pub use visualizer::{Visualizer, resolve};
