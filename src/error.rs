use crate::archive::ArtifactKey;

pub type VizResult<T> = Result<T, VizError>;

#[derive(thiserror::Error, Debug)]
pub enum VizError {
    /// Requested key has no registered visualizer. Configuration error,
    /// fatal to the request that asked for it.
    #[error("no visualizer registered for {0}")]
    Unregistered(ArtifactKey),

    /// A declared dependency is absent from the archive, usually because
    /// the pipeline stage that produces it never ran or its capture was
    /// disabled. Other visualizations of the same archive still render.
    #[error("artifact unavailable for this capture: {0}")]
    Unavailable(ArtifactKey),

    /// The archive holds the key but under a different artifact variant
    /// than the visualizer expects. The archive and the visualizer
    /// disagree on schema; drawing anything from it would be garbage.
    #[error("artifact {key} does not hold {expected}")]
    Schema {
        key: ArtifactKey,
        expected: &'static str,
    },

    /// Raster codec fault. Not retried; bad environment, not bad data.
    #[error("raster encoding failed: {0}")]
    Encoding(#[from] image::ImageError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VizError {
    pub fn unavailable(key: ArtifactKey) -> Self {
        Self::Unavailable(key)
    }

    pub fn schema(key: ArtifactKey, expected: &'static str) -> Self {
        Self::Schema { key, expected }
    }
}
