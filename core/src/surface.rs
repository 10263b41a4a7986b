//! Render surface abstraction and the display list the layout engines emit
//!
//! The engines never draw directly. They measure text through [`TextMeasure`]
//! and record [`DrawCommand`]s into a [`DisplayList`], which the host later
//! replays onto any [`RenderSurface`].

use crate::geometry::{Pos, Rect, Size, TextAnchor};
use tiertip_types::Color;

/// Text measurement in the current font
pub trait TextMeasure {
    /// Width and height of `text` at the base font size
    fn measure(&mut self, text: &str) -> Size;

    /// Measurement at a multiple of the base font size
    fn measure_scaled(&mut self, text: &str, scale: f32) -> Size {
        let size = self.measure(text);
        Size::new(size.w * scale, size.h * scale)
    }
}

/// Drawing primitives provided by the host
pub trait RenderSurface: TextMeasure {
    /// Draw text and return its drawn extent
    fn draw_text(
        &mut self,
        text: &str,
        pos: Pos,
        color: Color,
        anchor: TextAnchor,
        scale: f32,
    ) -> Size;

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: f32);
}

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        text: String,
        pos: Pos,
        color: Color,
        anchor: TextAnchor,
        scale: f32,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        thickness: f32,
    },
}

/// Ordered list of draw commands produced by one render pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record top-left anchored text and return its measured size
    pub fn text(
        &mut self,
        measure: &mut impl TextMeasure,
        text: &str,
        pos: Pos,
        color: Color,
    ) -> Size {
        self.text_anchored(measure, text, pos, color, TextAnchor::TopLeft, 1.0)
    }

    /// Record text with an explicit anchor and scale
    pub fn text_anchored(
        &mut self,
        measure: &mut impl TextMeasure,
        text: &str,
        pos: Pos,
        color: Color,
        anchor: TextAnchor,
        scale: f32,
    ) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let size = measure.measure_scaled(text, scale);
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color,
            anchor,
            scale,
        });
        size
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            thickness,
        });
    }

    /// Insert a filled box behind everything recorded from `index` on
    pub fn insert_background(&mut self, index: usize, rect: Rect, color: Color) {
        let index = index.min(self.commands.len());
        self.commands
            .insert(index, DrawCommand::FillRect { rect, color });
    }

    /// Move all commands of `other` to the end of this list
    pub fn append(&mut self, other: &mut DisplayList) {
        self.commands.append(&mut other.commands);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All recorded text strings, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Replay every command onto a surface
    pub fn paint(&self, surface: &mut impl RenderSurface) {
        for command in &self.commands {
            match command {
                DrawCommand::Text {
                    text,
                    pos,
                    color,
                    anchor,
                    scale,
                } => {
                    surface.draw_text(text, *pos, *color, *anchor, *scale);
                }
                DrawCommand::FillRect { rect, color } => surface.fill_rect(*rect, *color),
                DrawCommand::StrokeRect {
                    rect,
                    color,
                    thickness,
                } => surface.stroke_rect(*rect, *color, *thickness),
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn empty_text_records_nothing() {
        let mut list = DisplayList::new();
        let size = list.text(&mut MonoMeasure::default(), "", Pos::default(), [0; 4]);
        assert_eq!(size, Size::ZERO);
        assert!(list.is_empty());
    }

    #[test]
    fn background_goes_behind_later_commands() {
        let mut measure = MonoMeasure::default();
        let mut list = DisplayList::new();
        list.text(&mut measure, "a", Pos::default(), [0; 4]);
        let mark = list.len();
        list.text(&mut measure, "b", Pos::default(), [0; 4]);
        list.insert_background(mark, Rect::new(0.0, 0.0, 1.0, 1.0), [0; 4]);

        assert!(matches!(list.commands()[1], DrawCommand::FillRect { .. }));
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn paint_replays_in_order() {
        let mut measure = MonoMeasure::default();
        let mut list = DisplayList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), [0; 4]);
        list.text(&mut measure, "hi", Pos::new(1.0, 2.0), [0; 4]);
        list.stroke_rect(Rect::new(0.0, 0.0, 5.0, 5.0), [0; 4], 1.0);

        let mut surface = RecordingSurface::default();
        list.paint(&mut surface);
        assert_eq!(surface.fills, 1);
        assert_eq!(surface.strokes, 1);
        assert_eq!(surface.texts, vec![("hi".to_string(), Pos::new(1.0, 2.0))]);
    }
}
