//! Visualizer capability set, registry, and on-demand resolver.

use std::collections::BTreeSet;

use tracing::debug;

use crate::archive::{Archive, ArtifactKey};
use crate::buffer::VectorBuffer;
use crate::error::{VizError, VizResult};
use crate::markers;
use crate::model::{ImageModel, Visualization};
use crate::pixmap::Pixmap;
use crate::types::MatchSide;

/// Renders one named visualization from archived artifacts.
///
/// Implementations declare the full set of keys they will fetch before
/// fetching any of them; the resolver validates the declaration against
/// the archive before the render body runs.
pub trait Visualizer {
    /// Key this visualizer renders.
    fn key(&self) -> ArtifactKey;

    /// Every archive key the render will fetch, including its own.
    fn dependencies(&self) -> BTreeSet<ArtifactKey>;

    fn render(&self, archive: &Archive) -> VizResult<Visualization>;
}

/// Renders the visualization registered for `key` from `archive`.
///
/// An unregistered key is a configuration error. A missing dependency is
/// reported as unavailable for this capture; other keys of the same
/// archive still render.
#[tracing::instrument(skip(archive))]
pub fn resolve(key: ArtifactKey, archive: &Archive) -> VizResult<Visualization> {
    let visualizer = registered(key).ok_or(VizError::Unregistered(key))?;
    render_checked(visualizer.as_ref(), archive)
}

/// Validates a visualizer's declared dependencies against the archive,
/// then renders.
pub fn render_checked(
    visualizer: &dyn Visualizer,
    archive: &Archive,
) -> VizResult<Visualization> {
    for dependency in visualizer.dependencies() {
        if !archive.contains(dependency) {
            debug!(key = %visualizer.key(), missing = %dependency, "dependency unavailable");
            return Err(VizError::Unavailable(dependency));
        }
    }
    debug!(key = %visualizer.key(), "rendering");
    visualizer.render(archive)
}

fn registered(key: ArtifactKey) -> Option<Box<dyn Visualizer>> {
    match key {
        ArtifactKey::DecodedImage => Some(Box::new(DecodedImageView)),
        ArtifactKey::Contrast => Some(Box::new(ContrastView)),
        ArtifactKey::Binarized => Some(Box::new(BinarizedView)),
        ArtifactKey::ProbeTemplate | ArtifactKey::CandidateTemplate => {
            Some(Box::new(TemplateView { key }))
        }
        ArtifactKey::EdgeHash => Some(Box::new(EdgeHashView)),
        ArtifactKey::Pairing => Some(Box::new(PairingView {
            side: MatchSide::Probe,
        })),
        ArtifactKey::Roots => Some(Box::new(RootsView)),
        // Raw block geometry has no picture of its own; it only feeds
        // other visualizations.
        ArtifactKey::Blocks => None,
    }
}

/// Decoded input image, values in 0..=1, as a grayscale raster.
pub struct DecodedImageView;

impl Visualizer for DecodedImageView {
    fn key(&self) -> ArtifactKey {
        ArtifactKey::DecodedImage
    }

    fn dependencies(&self) -> BTreeSet<ArtifactKey> {
        BTreeSet::from([ArtifactKey::DecodedImage])
    }

    fn render(&self, archive: &Archive) -> VizResult<Visualization> {
        let matrix = archive.grayscale(ArtifactKey::DecodedImage)?.clone();
        Ok(ImageModel::Grayscale {
            matrix,
            min: 0.0,
            max: 1.0,
        }
        .render())
    }
}

/// Per-block contrast over the decoded image: each block gets a veil
/// whose opacity tracks its missing contrast.
pub struct ContrastView;

impl Visualizer for ContrastView {
    fn key(&self) -> ArtifactKey {
        ArtifactKey::Contrast
    }

    fn dependencies(&self) -> BTreeSet<ArtifactKey> {
        BTreeSet::from([
            ArtifactKey::Contrast,
            ArtifactKey::Blocks,
            ArtifactKey::DecodedImage,
        ])
    }

    fn render(&self, archive: &Archive) -> VizResult<Visualization> {
        let blocks = archive.blocks(ArtifactKey::Blocks)?;
        let contrast = archive.grayscale(ArtifactKey::Contrast)?;
        let base = render_grayscale_base(archive)?;
        let mut buffer = VectorBuffer::new(blocks.pixels()).embed_jpeg(&base)?;
        for at in blocks.blocks().grid() {
            buffer.add(markers::mark_contrast(
                blocks.block(at),
                contrast.get_point(at),
            ));
        }
        Ok(Visualization::Vector(buffer.render()))
    }
}

fn render_grayscale_base(archive: &Archive) -> VizResult<Pixmap> {
    let matrix = archive.grayscale(ArtifactKey::DecodedImage)?.clone();
    let rendered = ImageModel::Grayscale {
        matrix,
        min: 0.0,
        max: 1.0,
    }
    .render();
    match rendered {
        Visualization::Raster(pixmap) => Ok(pixmap),
        Visualization::Vector(_) => unreachable!("grayscale model renders raster"),
    }
}

pub const BINARIZED_BACKGROUND: u32 = 0xffff_ffff;
pub const BINARIZED_FOREGROUND: u32 = 0xff00_0000;

/// Binarized ridge image: foreground ridges in black on white.
pub struct BinarizedView;

impl Visualizer for BinarizedView {
    fn key(&self) -> ArtifactKey {
        ArtifactKey::Binarized
    }

    fn dependencies(&self) -> BTreeSet<ArtifactKey> {
        BTreeSet::from([ArtifactKey::Binarized])
    }

    fn render(&self, archive: &Archive) -> VizResult<Visualization> {
        let matrix = archive.boolean(ArtifactKey::Binarized)?.clone();
        Ok(ImageModel::Binary {
            matrix,
            zero: BINARIZED_BACKGROUND,
            one: BINARIZED_FOREGROUND,
        }
        .render())
    }
}

/// Minutia positions of one subject's template as point markers.
pub struct TemplateView {
    pub key: ArtifactKey,
}

impl Visualizer for TemplateView {
    fn key(&self) -> ArtifactKey {
        self.key
    }

    fn dependencies(&self) -> BTreeSet<ArtifactKey> {
        BTreeSet::from([self.key])
    }

    fn render(&self, archive: &Archive) -> VizResult<Visualization> {
        let template = archive.template(self.key)?;
        let mut buffer = VectorBuffer::new(template.size);
        buffer.extend(markers::mark_minutia_positions(template));
        Ok(Visualization::Vector(buffer.render()))
    }
}

/// Spatial index structure of the probe's edge hash.
pub struct EdgeHashView;

impl Visualizer for EdgeHashView {
    fn key(&self) -> ArtifactKey {
        ArtifactKey::EdgeHash
    }

    fn dependencies(&self) -> BTreeSet<ArtifactKey> {
        BTreeSet::from([ArtifactKey::EdgeHash, ArtifactKey::ProbeTemplate])
    }

    fn render(&self, archive: &Archive) -> VizResult<Visualization> {
        let hash = archive.edge_hash(ArtifactKey::EdgeHash)?;
        let template = archive.template(ArtifactKey::ProbeTemplate)?;
        let mut buffer = VectorBuffer::new(template.size);
        buffer.extend(markers::mark_hash(hash, template));
        Ok(Visualization::Vector(buffer.render()))
    }
}

/// Pairing graph projected onto one subject. The registry serves the
/// probe-side projection; the gallery renders the candidate side through
/// the same checked path.
pub struct PairingView {
    pub side: MatchSide,
}

impl PairingView {
    fn template_key(&self) -> ArtifactKey {
        match self.side {
            MatchSide::Probe => ArtifactKey::ProbeTemplate,
            MatchSide::Candidate => ArtifactKey::CandidateTemplate,
        }
    }
}

impl Visualizer for PairingView {
    fn key(&self) -> ArtifactKey {
        ArtifactKey::Pairing
    }

    fn dependencies(&self) -> BTreeSet<ArtifactKey> {
        BTreeSet::from([ArtifactKey::Pairing, self.template_key()])
    }

    fn render(&self, archive: &Archive) -> VizResult<Visualization> {
        let pairing = archive.pairing(ArtifactKey::Pairing)?;
        let template = archive.template(self.template_key())?;
        let mut buffer = VectorBuffer::new(template.size);
        buffer.extend(markers::mark_pairing(pairing, self.side, template));
        Ok(Visualization::Vector(buffer.render()))
    }
}

/// Root correspondences across both subjects on a split canvas.
pub struct RootsView;

impl Visualizer for RootsView {
    fn key(&self) -> ArtifactKey {
        ArtifactKey::Roots
    }

    fn dependencies(&self) -> BTreeSet<ArtifactKey> {
        BTreeSet::from([
            ArtifactKey::Roots,
            ArtifactKey::ProbeTemplate,
            ArtifactKey::CandidateTemplate,
        ])
    }

    fn render(&self, archive: &Archive) -> VizResult<Visualization> {
        let roots = archive.roots(ArtifactKey::Roots)?;
        let probe = archive.template(ArtifactKey::ProbeTemplate)?;
        let candidate = archive.template(ArtifactKey::CandidateTemplate)?;
        Ok(Visualization::Vector(markers::mark_roots(
            roots, probe, candidate,
        )))
    }
}
