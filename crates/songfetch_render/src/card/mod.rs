pub mod panel;
pub mod progress;

use crate::layout::compositor::composite;

/// Terminals narrower than this get the panel without artwork.
pub const FALLBACK_THRESHOLD_COLS: u16 = 104;

/// Everything the panel shows about the current track.
///
/// Empty strings and zero durations mean "unknown"; nothing here is
/// validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataSnapshot {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Track length in microseconds.
    pub duration_us: u64,
    /// Playback position in microseconds.
    pub position_us: u64,
    pub volume: String,
    pub loop_status: String,
    pub shuffle: String,
    pub player: String,
    pub backend: String,
    pub status: String,
    pub user: String,
    pub url: String,
    /// Artwork URI as reported by the player (`file://` or `http(s)://`).
    pub art_url: String,
}

/// Supplies the metadata of whatever is playing right now.
pub trait MetadataSource {
    fn snapshot(&self) -> MetadataSnapshot;
}

/// Whether a terminal this wide has room for the artwork column.
pub fn art_enabled(terminal_columns: u16) -> bool {
    terminal_columns >= FALLBACK_THRESHOLD_COLS
}

/// Art column (possibly empty) beside the metadata panel.
pub fn render_card<S: AsRef<str>>(art: &[S], snapshot: &MetadataSnapshot) -> Vec<String> {
    composite(art, &panel::build_panel(snapshot))
}
