mod ascii;
mod card;
mod image_pipeline;
mod layout;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView};
use log::debug;

pub use ascii::{
    fallback::fallback_art,
    gradient::Gradient,
    grid::{CellGlyph, GlyphGrid},
    mapping::GlyphMapper,
};
pub use card::{
    art_enabled,
    panel::build_panel,
    progress::{format_clock, progress_ratio, render_progress, PROGRESS_SEGMENTS},
    render_card, MetadataSnapshot, MetadataSource, FALLBACK_THRESHOLD_COLS,
};
pub use image_pipeline::{
    loader::{ArtSource, FetchError, RemoteFetch},
    resize::{LayoutPolicy, TargetGeometry},
};
pub use layout::{
    ansi::{fg_rgb, ljust_ansi, strip_ansi, visible_width, RESET},
    compositor::{column_width, composite, MIN_LEFT_WIDTH},
};

/// Width of the rendered artwork in terminal columns.
pub const ART_COLUMNS: u32 = 60;

/// Height-to-width ratio of a terminal cell, used to keep artwork square.
pub const CELL_ASPECT: f32 = 2.2;

/// Brightness ramp, emptiest first.
pub const RAMP: &str = " .:-=+*#%@";

const ART_INDENT: &str = "  ";
const ART_TRAILING_PAD: &str = " ";

#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    #[error("no artwork available")]
    Unavailable,
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("unsupported layout dimensions")]
    InvalidLayout,
}

#[derive(Clone, Debug)]
pub struct CardOptions {
    pub gradient: Gradient,
    /// Output width in glyphs.
    pub columns: u32,
    /// Cell aspect ratio (height / width) the row count is divided by.
    pub cell_aspect: f32,
}

impl CardOptions {
    pub fn layout(&self) -> LayoutPolicy {
        LayoutPolicy::new(self.columns, self.cell_aspect)
    }
}

impl Default for CardOptions {
    fn default() -> Self {
        Self { gradient: Gradient::card(), columns: ART_COLUMNS, cell_aspect: CELL_ASPECT }
    }
}

#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub grid: GlyphGrid,
    pub geometry: TargetGeometry,
}

impl RenderOutput {
    /// Indented, colored rows followed by one blank spacer line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .grid
            .ansi_rows()
            .map(|row| format!("{ART_INDENT}{row}{ART_TRAILING_PAD}"))
            .collect();
        lines.push(String::new());
        lines
    }
}

/// Turns track artwork into colored terminal lines.
///
/// [`ArtRenderer::render`] never fails: anything that keeps the artwork from
/// being resolved, decoded or sampled yields [`fallback_art`] instead.
#[derive(Default)]
pub struct ArtRenderer {
    options: CardOptions,
    fetcher: Option<Box<dyn RemoteFetch>>,
}

impl ArtRenderer {
    pub fn new(options: CardOptions) -> Self {
        Self { options, fetcher: None }
    }

    /// Enables `http(s)://` sources. Without a fetcher every URL falls back.
    pub fn with_fetcher<F>(mut self, fetcher: F) -> Self
    where
        F: RemoteFetch + 'static,
    {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    pub fn render(&self, source: ArtSource) -> Vec<String> {
        match self.try_render(source) {
            Ok(lines) => lines,
            Err(err) => {
                debug!("artwork unavailable, using placeholder: {err}");
                fallback_art()
            },
        }
    }

    fn try_render(&self, source: ArtSource) -> Result<Vec<String>, ArtError> {
        let image = source.load(self.fetcher.as_deref())?;
        Ok(self.render_image(&image)?.lines())
    }

    pub fn render_image(&self, image: &DynamicImage) -> Result<RenderOutput, ArtError> {
        let (width, height) = image.dimensions();
        let geometry =
            self.options.layout().derive(width, height).ok_or(ArtError::InvalidLayout)?;
        debug!(
            "sampling {width}x{height} artwork into {}x{} glyphs",
            geometry.columns, geometry.rows
        );

        let rgb = image.to_rgb8();
        let resized =
            imageops::resize(&rgb, geometry.columns, geometry.rows, FilterType::Triangle);
        let grid = GlyphMapper::new(self.options.gradient.clone()).map_rgb(&resized);

        Ok(RenderOutput { grid, geometry })
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};

    use super::*;

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> ArtSource {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb))).into()
    }

    fn glyphs(line: &str) -> String {
        let visible = strip_ansi(line);
        visible.trim_start_matches(ART_INDENT).trim_end_matches(ART_TRAILING_PAD).to_owned()
    }

    #[test]
    fn line_count_follows_geometry() {
        let lines = ArtRenderer::default().render(solid(200, 100, [10, 120, 240]));
        // round(0.5 * 60 / 2.2) = 14 rows plus the spacer
        assert_eq!(lines.len(), 15);
        assert_eq!(lines.last().map(String::as_str), Some(""));
    }

    #[test]
    fn rows_are_indented_and_padded() {
        let lines = ArtRenderer::default().render(solid(4, 4, [200, 200, 200]));
        for line in &lines[..lines.len() - 1] {
            assert!(line.starts_with("  \x1b[38;2;"));
            assert!(line.ends_with("\x1b[0m "));
            assert_eq!(visible_width(line), 63);
        }
    }

    #[test]
    fn solid_white_is_densest() {
        let lines = ArtRenderer::default().render(solid(2, 2, [255, 255, 255]));
        assert_eq!(lines.len(), 28);
        for line in &lines[..27] {
            assert_eq!(glyphs(line), "@".repeat(60));
            assert!(line.contains("\x1b[38;2;255;255;255m@\x1b[0m"));
        }
    }

    #[test]
    fn solid_black_is_lightest() {
        let lines = ArtRenderer::default().render(solid(2, 2, [0, 0, 0]));
        assert_eq!(lines.len(), 28);
        for line in &lines[..27] {
            assert_eq!(strip_ansi(line).as_ref(), " ".repeat(63));
            assert!(line.contains("\x1b[38;2;0;0;0m \x1b[0m"));
        }
    }

    #[test]
    fn alpha_is_dropped() {
        let image = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            3,
            3,
            image::Rgba([255, 255, 255, 0]),
        ));
        let lines = ArtRenderer::default().render(image.into());
        assert_eq!(glyphs(&lines[0]), "@".repeat(60));
    }

    #[test]
    fn empty_source_is_fallback() {
        assert_eq!(ArtRenderer::default().render(ArtSource::Empty), fallback_art());
    }

    #[test]
    fn invalid_sources_match_empty_source() {
        let renderer = ArtRenderer::default();
        let expected = renderer.render(ArtSource::Empty);
        for uri in ["nonsense", "file:///no/such/cover.png", "https://example.invalid/a.png"] {
            assert_eq!(renderer.render(ArtSource::from_uri(uri)), expected, "{uri}");
        }
    }

    #[test]
    fn zero_sized_image_is_fallback() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        assert_eq!(ArtRenderer::default().render(image.into()), fallback_art());
    }

    #[test]
    fn custom_options_change_geometry() {
        let options = CardOptions { columns: 10, cell_aspect: 1.0, ..Default::default() };
        let output = ArtRenderer::new(options)
            .render_image(&DynamicImage::ImageRgb8(RgbImage::new(5, 10)))
            .unwrap();
        assert_eq!((output.geometry.columns, output.geometry.rows), (10, 20));
        assert_eq!(output.lines().len(), 21);
    }
}
