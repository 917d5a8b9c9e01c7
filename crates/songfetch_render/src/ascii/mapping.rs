use image::{Rgb, RgbImage};

use super::{
    gradient::Gradient,
    grid::{CellGlyph, GlyphGrid},
};

pub struct GlyphMapper {
    gradient: Gradient,
}

impl GlyphMapper {
    pub fn new(gradient: Gradient) -> Self {
        Self { gradient }
    }

    /// One glyph per pixel, picked by mean channel brightness and colored with
    /// the pixel itself.
    pub fn map_rgb(&self, pixels: &RgbImage) -> GlyphGrid {
        let cells = pixels
            .pixels()
            .map(|&Rgb([r, g, b])| {
                CellGlyph::new(self.gradient.char_for_rgb([r, g, b]), [r, g, b])
            })
            .collect();

        GlyphGrid::new(pixels.width(), pixels.height(), cells)
    }
}
