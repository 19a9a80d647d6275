//! Errors raised at the configuration and export boundary.
//!
//! Wave synthesis itself never fails; only loading, validating and writing
//! files can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OceanError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] ron::Error),

    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, OceanError>;
