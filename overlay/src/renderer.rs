//! Text shaping and glyph blitting with cosmic-text
//!
//! Shaped runs are cached per (text, size) so the layout engine's repeated
//! measurements of the same labels stay cheap.
use std::collections::HashMap;

use cosmic_text::{
    Attrs, Buffer, Color as GlyphColor, Family, FontSystem, LayoutGlyph, Metrics, Shaping,
    SwashCache,
};
use tiny_skia::PixmapMut;

/// Shaped entries kept before eviction
const SHAPE_CACHE_LIMIT: usize = 512;

/// Line height as a multiple of the font size
const LINE_SPACING: f32 = 1.2;

struct ShapedText {
    glyphs: Vec<LayoutGlyph>,
    width: f32,
    height: f32,
    /// Offset from the top of the first line to its baseline
    baseline: f32,
    last_used: u64,
}

/// Size in tenths of a pixel
type ShapeKey = (String, u32);

fn shape_key(text: &str, font_size: f32) -> ShapeKey {
    (text.to_owned(), (font_size * 10.0).round() as u32)
}

/// Shapes and draws single strings at arbitrary font sizes
pub struct Renderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    shaped: HashMap<ShapeKey, ShapedText>,
    clock: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
            shaped: HashMap::with_capacity(128),
            clock: 0,
        }
    }

    /// Width and height of `text` at `font_size`
    pub fn measure_text(&mut self, text: &str, font_size: f32) -> (f32, f32) {
        let shaped = self.shape(text, font_size);
        (shaped.width, shaped.height)
    }

    /// Draw `text` with its top-left corner at (x, y)
    pub fn draw_text(
        &mut self,
        pixmap: &mut PixmapMut,
        text: &str,
        x: f32,
        y: f32,
        font_size: f32,
        color: [u8; 4],
    ) {
        let shaped = self.shape(text, font_size);
        let baseline = shaped.baseline;
        // swash_cache needs &mut self while glyphs are borrowed from the cache
        let glyphs = shaped.glyphs.clone();
        let color = GlyphColor::rgba(color[0], color[1], color[2], color[3]);

        for glyph in &glyphs {
            let physical = glyph.physical((x, y + baseline), 1.0);
            let Some(image) = self
                .swash_cache
                .get_image(&mut self.font_system, physical.cache_key)
            else {
                continue;
            };
            blend_coverage(
                pixmap,
                &image.data,
                (image.placement.width, image.placement.height),
                (
                    physical.x + image.placement.left,
                    physical.y - image.placement.top,
                ),
                color,
            );
        }
    }

    fn shape(&mut self, text: &str, font_size: f32) -> &ShapedText {
        self.clock += 1;
        let key = shape_key(text, font_size);
        if self.shaped.len() >= SHAPE_CACHE_LIMIT && !self.shaped.contains_key(&key) {
            self.evict_stale();
        }

        let font_system = &mut self.font_system;
        let entry = self
            .shaped
            .entry(key)
            .or_insert_with(|| shape_uncached(font_system, text, font_size));
        entry.last_used = self.clock;
        entry
    }

    /// Drop the least recently used quarter of the cache
    fn evict_stale(&mut self) {
        let mut ages: Vec<_> = self
            .shaped
            .iter()
            .map(|(key, entry)| (entry.last_used, key.clone()))
            .collect();
        ages.sort_unstable_by_key(|(last_used, _)| *last_used);

        for (_, key) in ages.into_iter().take(SHAPE_CACHE_LIMIT / 4) {
            self.shaped.remove(&key);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn shape_uncached(font_system: &mut FontSystem, text: &str, font_size: f32) -> ShapedText {
    let metrics = Metrics::new(font_size, font_size * LINE_SPACING);
    let mut buffer = Buffer::new(font_system, metrics);
    let attrs = Attrs::new().family(Family::SansSerif);
    buffer.set_text(font_system, text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);

    let mut shaped = ShapedText {
        glyphs: Vec::new(),
        width: 0.0,
        height: 0.0,
        baseline: font_size,
        last_used: 0,
    };
    for (index, run) in buffer.layout_runs().enumerate() {
        if index == 0 {
            shaped.baseline = run.line_y - run.line_top;
        }
        shaped.width = shaped.width.max(run.line_w);
        shaped.height += run.line_height;
        shaped.glyphs.extend(run.glyphs.iter().cloned());
    }

    // An empty string still takes a line
    if shaped.height == 0.0 {
        shaped.height = metrics.line_height;
    }
    shaped
}

/// Alpha-blend an 8-bit coverage mask onto premultiplied pixmap data
fn blend_coverage(
    pixmap: &mut PixmapMut,
    mask: &[u8],
    (mask_w, mask_h): (u32, u32),
    (left, top): (i32, i32),
    color: GlyphColor,
) {
    let (width, height) = (pixmap.width() as i32, pixmap.height() as i32);
    let data = pixmap.data_mut();
    let channels = [color.r(), color.g(), color.b()];

    for my in 0..mask_h as i32 {
        let py = top + my;
        if !(0..height).contains(&py) {
            continue;
        }
        for mx in 0..mask_w as i32 {
            let px = left + mx;
            if !(0..width).contains(&px) {
                continue;
            }
            let coverage = mask
                .get((my * mask_w as i32 + mx) as usize)
                .copied()
                .unwrap_or(0);
            if coverage == 0 {
                continue;
            }

            let offset = ((py * width + px) * 4) as usize;
            let Some(pixel) = data.get_mut(offset..offset + 4) else {
                continue;
            };
            let src_a = coverage as u32 * color.a() as u32 / 255;
            let inv_a = 255 - src_a;
            for (dst, src) in pixel.iter_mut().zip(channels) {
                *dst = ((src as u32 * src_a + *dst as u32 * inv_a) / 255) as u8;
            }
            pixel[3] = (src_a + pixel[3] as u32 * inv_a / 255) as u8;
        }
    }
}
