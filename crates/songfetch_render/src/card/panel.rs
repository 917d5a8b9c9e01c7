//! Right-hand column of the card: player metadata in labelled sections.

use super::progress::{format_clock, render_progress};
use super::MetadataSnapshot;
use crate::layout::ansi::RESET;

const LABEL: &str = "\x1b[34m";
const HEADING: &str = "\x1b[97m";
const ACCENT: &str = "\x1b[1;34m";

const RULE_WIDTH: usize = 41;

fn rule() -> String {
    format!("{LABEL}{}{RESET}", "─".repeat(RULE_WIDTH))
}

fn heading(text: &str) -> String {
    format!("{HEADING}{text}{RESET}")
}

fn field(label: &str, value: &str) -> String {
    format!("{LABEL}{label}{RESET}: {value}")
}

/// Background swatches for the eight normal and eight bright terminal colors.
fn palette() -> [String; 2] {
    let swatches = |base: u8| -> String {
        (0..8).map(|i| format!("\x1b[{}m   {RESET}", base + i)).collect()
    };
    [swatches(40), swatches(100)]
}

/// Formats a snapshot into the card's text lines, top to bottom.
pub fn build_panel(snapshot: &MetadataSnapshot) -> Vec<String> {
    let [normal, bright] = palette();

    vec![
        format!("{ACCENT}{}{RESET}@{ACCENT}{}{RESET}", snapshot.user, snapshot.player),
        rule(),
        heading("Now Playing"),
        rule(),
        field("Title", &snapshot.title),
        field("Artist", &snapshot.artist),
        field("Album", &snapshot.album),
        field("Duration", &format_clock(snapshot.duration_us)),
        format!("{LABEL}{}{RESET}", render_progress(snapshot.position_us, snapshot.duration_us)),
        rule(),
        heading("Playback Info"),
        rule(),
        field("Status", &snapshot.status),
        field("Volume", &snapshot.volume),
        field("Loop", &snapshot.loop_status),
        field("Shuffle", &snapshot.shuffle),
        field("Player", &snapshot.player),
        field("URL", &snapshot.url),
        rule(),
        heading("Audio System"),
        rule(),
        field("Backend", &snapshot.backend),
        String::new(),
        normal,
        bright,
    ]
}
