//! Error types for tiertip-overlay

use thiserror::Error;
use tiertip_core::{CatalogError, ConfigError};

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("canvas size {width}x{height} is not drawable")]
    InvalidSize { width: u32, height: u32 },

    #[error("i/o error")]
    Io(#[from] std::io::Error),

    #[error("failed to encode png")]
    Png(#[from] png::EncodingError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
