//! Color and pixel conversions for tiny-skia

use tiertip_core::Rect;
use tiny_skia::{Color, Pixmap};

/// Convert [u8; 4] RGBA array to tiny_skia Color
#[inline]
pub fn color_from_rgba(rgba: [u8; 4]) -> Color {
    Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// tiny-skia rect, `None` for empty or non-finite boxes
pub fn skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    if !(rect.w > 0.0 && rect.h > 0.0) {
        return None;
    }
    tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.w, rect.h)
}

/// Straight-alpha RGBA bytes of a premultiplied pixmap
pub fn demultiplied_rgba(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}
