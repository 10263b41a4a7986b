//! Error types for tiertip-core

use thiserror::Error;

/// Errors while loading the mod catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse mod catalog")]
    Parse(#[from] toml::de::Error),

    #[error("mod record '{key}' has an empty group")]
    EmptyGroup { key: String },

    #[error("duplicate mod record '{key}'")]
    DuplicateKey { key: String },
}

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}

/// Why the fast-mods panel was dropped for a frame
#[derive(Debug, Error, PartialEq)]
pub enum FastModsError {
    #[error("anchor rectangle is not drawable: {x} {y} {w} {h}")]
    InvalidAnchor { x: f32, y: f32, w: f32, h: f32 },

    #[error("text measurement for '{text}' was not finite")]
    NonFiniteMeasure { text: String },

    #[error("badge {index} produced degenerate geometry")]
    DegenerateBadge { index: usize },
}

/// Errors writing the system clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable(#[source] arboard::Error),

    #[error("failed to write clipboard")]
    Write(#[source] arboard::Error),
}
