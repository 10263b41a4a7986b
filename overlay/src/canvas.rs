//! Raster surface the display list is painted onto

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};
use tiertip_core::{Pos, Rect, RenderSurface, Size, TextAnchor, TextMeasure};
use tiertip_types::Color;

use crate::error::PreviewError;
use crate::renderer::Renderer;
use crate::utils::{color_from_rgba, demultiplied_rgba, skia_rect};

/// Default base font size in pixels
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Pixmap plus a text renderer at a fixed base font size
pub struct Canvas {
    renderer: Renderer,
    pixmap: Pixmap,
    font_size: f32,
}

impl Canvas {
    pub fn new(width: u32, height: u32, font_size: f32) -> Result<Self, PreviewError> {
        let pixmap = Pixmap::new(width, height).ok_or(PreviewError::InvalidSize { width, height })?;
        Ok(Self {
            renderer: Renderer::new(),
            pixmap,
            font_size,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color_from_rgba(color));
    }

    /// Straight-alpha RGBA pixel at (x, y)
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some([p.red(), p.green(), p.blue(), p.alpha()])
    }

    pub fn save_png(&self, path: &Path) -> Result<(), PreviewError> {
        let file = File::create(path)?;
        let mut encoder = png::Encoder::new(BufWriter::new(file), self.width(), self.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&demultiplied_rgba(&self.pixmap))?;
        writer.finish()?;
        Ok(())
    }
}

impl TextMeasure for Canvas {
    fn measure(&mut self, text: &str) -> Size {
        self.measure_scaled(text, 1.0)
    }

    fn measure_scaled(&mut self, text: &str, scale: f32) -> Size {
        let (w, h) = self.renderer.measure_text(text, self.font_size * scale);
        Size::new(w, h)
    }
}

impl RenderSurface for Canvas {
    fn draw_text(
        &mut self,
        text: &str,
        pos: Pos,
        color: Color,
        anchor: TextAnchor,
        scale: f32,
    ) -> Size {
        let size = self.measure_scaled(text, scale);
        let origin = match anchor {
            TextAnchor::TopLeft => pos,
            TextAnchor::RightCenter => Pos::new(pos.x - size.w, pos.y - size.h / 2.0),
        };

        self.renderer.draw_text(
            &mut self.pixmap.as_mut(),
            text,
            origin.x,
            origin.y,
            self.font_size * scale,
            color,
        );
        size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(rect) = skia_rect(rect) else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &paint(color, true), Transform::identity(), None);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: f32) {
        let Some(rect) = skia_rect(rect) else {
            return;
        };
        let stroke = Stroke {
            width: thickness,
            ..Default::default()
        };
        self.pixmap.stroke_path(
            &PathBuilder::from_rect(rect),
            &paint(color, false),
            &stroke,
            Transform::identity(),
            None,
        );
    }
}

fn paint(color: Color, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color_from_rgba(color));
    paint.anti_alias = anti_alias;
    paint
}
