use crate::layout::ansi::{fg_rgb, RESET};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGlyph {
    pub ch: char,
    /// Foreground color encoded as RGB bytes.
    pub fg: [u8; 3],
}

impl CellGlyph {
    pub fn new(ch: char, fg: [u8; 3]) -> Self {
        Self { ch, fg }
    }

    /// The glyph wrapped in its true-color escape and a reset.
    pub fn to_ansi(&self) -> String {
        format!("{}{}{RESET}", fg_rgb(self.fg), self.ch)
    }
}

#[derive(Clone, Debug)]
pub struct GlyphGrid {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<CellGlyph>,
}

impl GlyphGrid {
    pub fn new(width: u32, height: u32, cells: Vec<CellGlyph>) -> Self {
        debug_assert_eq!(width as usize * height as usize, cells.len());
        Self { width, height, cells }
    }

    /// Rows with every glyph individually colored.
    pub fn ansi_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.row_len())
            .map(|row| row.iter().map(CellGlyph::to_ansi).collect::<String>())
    }

    fn row_len(&self) -> usize {
        (self.width as usize).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_escape_layout() {
        let glyph = CellGlyph::new('#', [255, 0, 17]);
        assert_eq!(glyph.to_ansi(), "\x1b[38;2;255;0;17m#\x1b[0m");
    }

    #[test]
    fn rows_follow_width() {
        let cells = "abcdef".chars().map(|ch| CellGlyph::new(ch, [0, 0, 0])).collect();
        let grid = GlyphGrid::new(3, 2, cells);
        let ansi: Vec<String> = grid.ansi_rows().collect();
        assert_eq!(ansi.len(), 2);
        assert_eq!(ansi[0].matches("\x1b[0m").count(), 3);
        assert!(ansi[1].starts_with("\x1b[38;2;0;0;0md\x1b[0m"));
        assert!(ansi[1].ends_with("\x1b[38;2;0;0;0mf\x1b[0m"));
    }
}
