//! Read-only keyed store of pipeline artifacts for one capture session.

use std::collections::BTreeMap;

use crate::error::{VizError, VizResult};
use crate::matrix::{BooleanMatrix, DoubleMatrix};
use crate::types::{BlockGrid, EdgeHashEntry, MinutiaPair, PairingGraph, Template};

/// Names one piece of pipeline-internal state. The key carries the
/// expected artifact type as part of its identity; typed archive
/// accessors enforce the pairing.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum ArtifactKey {
    DecodedImage,
    Blocks,
    Contrast,
    Binarized,
    ProbeTemplate,
    CandidateTemplate,
    EdgeHash,
    Pairing,
    Roots,
}

impl std::fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::DecodedImage => "decoded-image",
            Self::Blocks => "blocks",
            Self::Contrast => "contrast",
            Self::Binarized => "binarized",
            Self::ProbeTemplate => "probe-template",
            Self::CandidateTemplate => "candidate-template",
            Self::EdgeHash => "edge-hash",
            Self::Pairing => "pairing",
            Self::Roots => "roots",
        };
        f.write_str(name)
    }
}

/// One captured artifact in already-deserialized, typed form.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Artifact {
    Grayscale(DoubleMatrix),
    Boolean(BooleanMatrix),
    Blocks(BlockGrid),
    Template(Template),
    EdgeHash(Vec<EdgeHashEntry>),
    Pairing(PairingGraph),
    Roots(Vec<MinutiaPair>),
}

/// Immutable snapshot of everything one pipeline run captured. Populated
/// once by the capture mechanism, then read-only for the lifetime of the
/// rendering session: a lookup for a given key always yields the same
/// artifact.
#[derive(Clone, Debug, Default)]
pub struct Archive {
    artifacts: BTreeMap<ArtifactKey, Artifact>,
}

impl Archive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Population-time entry point for the capture mechanism. Renderers
    /// only ever hold `&Archive`.
    pub fn insert(&mut self, key: ArtifactKey, artifact: Artifact) {
        self.artifacts.insert(key, artifact);
    }

    pub fn contains(&self, key: ArtifactKey) -> bool {
        self.artifacts.contains_key(&key)
    }

    pub fn get(&self, key: ArtifactKey) -> Option<&Artifact> {
        self.artifacts.get(&key)
    }

    pub fn grayscale(&self, key: ArtifactKey) -> VizResult<&DoubleMatrix> {
        match self.require(key)? {
            Artifact::Grayscale(matrix) => Ok(matrix),
            _ => Err(VizError::schema(key, "grayscale matrix")),
        }
    }

    pub fn boolean(&self, key: ArtifactKey) -> VizResult<&BooleanMatrix> {
        match self.require(key)? {
            Artifact::Boolean(matrix) => Ok(matrix),
            _ => Err(VizError::schema(key, "boolean matrix")),
        }
    }

    pub fn blocks(&self, key: ArtifactKey) -> VizResult<&BlockGrid> {
        match self.require(key)? {
            Artifact::Blocks(grid) => Ok(grid),
            _ => Err(VizError::schema(key, "block grid")),
        }
    }

    pub fn template(&self, key: ArtifactKey) -> VizResult<&Template> {
        match self.require(key)? {
            Artifact::Template(template) => Ok(template),
            _ => Err(VizError::schema(key, "template")),
        }
    }

    pub fn edge_hash(&self, key: ArtifactKey) -> VizResult<&[EdgeHashEntry]> {
        match self.require(key)? {
            Artifact::EdgeHash(entries) => Ok(entries),
            _ => Err(VizError::schema(key, "edge hash")),
        }
    }

    pub fn pairing(&self, key: ArtifactKey) -> VizResult<&PairingGraph> {
        match self.require(key)? {
            Artifact::Pairing(pairing) => Ok(pairing),
            _ => Err(VizError::schema(key, "pairing graph")),
        }
    }

    pub fn roots(&self, key: ArtifactKey) -> VizResult<&[MinutiaPair]> {
        match self.require(key)? {
            Artifact::Roots(roots) => Ok(roots),
            _ => Err(VizError::schema(key, "root pair list")),
        }
    }

    fn require(&self, key: ArtifactKey) -> VizResult<&Artifact> {
        self.get(key).ok_or(VizError::Unavailable(key))
    }
}

impl FromIterator<(ArtifactKey, Artifact)> for Archive {
    fn from_iter<I: IntoIterator<Item = (ArtifactKey, Artifact)>>(iter: I) -> Self {
        Self {
            artifacts: iter.into_iter().collect(),
        }
    }
}
