//! Error types for Warden

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WardenError {
    #[error("error parsing cellblock manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("no cellblocks defined in config")]
    EmptyManifest,

    #[error("block number {0} has no image")]
    MissingImage(usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WardenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_reports_position() {
        let err = WardenError::MissingImage(2);
        assert_eq!(err.to_string(), "block number 2 has no image");
    }

    #[test]
    fn test_empty_manifest_message() {
        let err = WardenError::EmptyManifest;
        assert_eq!(err.to_string(), "no cellblocks defined in config");
    }
}
