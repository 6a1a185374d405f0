use derive_more::Display;
use glam::Vec2;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display)]
pub enum Error {
    /// Configuration values that can never produce a mesh.
    #[display("invalid fov configuration: {_0}")]
    InvalidConfiguration(String),

    /// Facing direction has no angle and no fallback was given.
    #[display("invalid fov query: facing {_0} has no direction")]
    InvalidQuery(Vec2),

    /// The occlusion oracle failed, no mesh was produced.
    #[display("occlusion query failed on ray {ray}: {source}")]
    OracleFailure { ray: usize, source: anyhow::Error },
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OracleFailure { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
