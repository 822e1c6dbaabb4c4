use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),
}
