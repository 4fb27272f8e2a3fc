//! Session-level grouping of visualizations for one end-to-end match:
//! one probe, one candidate, their images and templates.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::archive::{Archive, ArtifactKey};
use crate::error::VizResult;
use crate::model::Visualization;
use crate::types::MatchSide;
use crate::visualizer::{PairingView, render_checked, resolve};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Slot {
    Resolved(ArtifactKey),
    CandidatePairing,
}

/// Named, no-argument accessors over one capture session's archive. Each
/// accessor is independently lazy and idempotent: the first successful
/// render is cached for the session, failures are reported as-is and
/// retried on the next call (renders are pure, so retrying is safe).
pub struct Gallery {
    archive: Archive,
    cache: RefCell<BTreeMap<Slot, Visualization>>,
}

impl Gallery {
    pub fn new(archive: Archive) -> Self {
        Self {
            archive,
            cache: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    pub fn decoded_image(&self) -> VizResult<Visualization> {
        self.resolved(ArtifactKey::DecodedImage)
    }

    pub fn contrast(&self) -> VizResult<Visualization> {
        self.resolved(ArtifactKey::Contrast)
    }

    pub fn binarized(&self) -> VizResult<Visualization> {
        self.resolved(ArtifactKey::Binarized)
    }

    pub fn probe_template(&self) -> VizResult<Visualization> {
        self.resolved(ArtifactKey::ProbeTemplate)
    }

    pub fn candidate_template(&self) -> VizResult<Visualization> {
        self.resolved(ArtifactKey::CandidateTemplate)
    }

    pub fn edge_hash(&self) -> VizResult<Visualization> {
        self.resolved(ArtifactKey::EdgeHash)
    }

    pub fn probe_pairing(&self) -> VizResult<Visualization> {
        self.resolved(ArtifactKey::Pairing)
    }

    pub fn candidate_pairing(&self) -> VizResult<Visualization> {
        self.cached(Slot::CandidatePairing, || {
            render_checked(
                &PairingView {
                    side: MatchSide::Candidate,
                },
                &self.archive,
            )
        })
    }

    pub fn roots(&self) -> VizResult<Visualization> {
        self.resolved(ArtifactKey::Roots)
    }

    fn resolved(&self, key: ArtifactKey) -> VizResult<Visualization> {
        self.cached(Slot::Resolved(key), || resolve(key, &self.archive))
    }

    fn cached(
        &self,
        slot: Slot,
        render: impl FnOnce() -> VizResult<Visualization>,
    ) -> VizResult<Visualization> {
        if let Some(hit) = self.cache.borrow().get(&slot) {
            return Ok(hit.clone());
        }
        let rendered = render()?;
        self.cache.borrow_mut().insert(slot, rendered.clone());
        Ok(rendered)
    }
}
