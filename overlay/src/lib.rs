//! Tiertip Overlay Library
//!
//! CPU rasterization of the tooltip engine's display lists.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 tiertip-core                        │
//! │     AdvancedTooltip → DisplayList (draw commands)   │
//! ├─────────────────────────────────────────────────────┤
//! │                    canvas                           │
//! │   Canvas: TextMeasure + RenderSurface (tiny-skia)   │
//! ├─────────────────────────────────────────────────────┤
//! │                    renderer                         │
//! │       cosmic-text shaping + glyph blitting          │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod canvas;
pub mod error;
pub mod renderer;
pub mod sample;
pub mod utils;

// Re-export commonly used types
pub use canvas::{Canvas, DEFAULT_FONT_SIZE};
pub use error::PreviewError;
pub use renderer::Renderer;
