use crate::layout::ansi::RESET;

/// Number of cells in the progress bar.
pub const PROGRESS_SEGMENTS: usize = 16;

const FILLED: char = '▓';
const EMPTY: char = '░';

/// Played fraction in `[0, 1]`; zero when either side is unknown.
pub fn progress_ratio(position_us: u64, duration_us: u64) -> f64 {
    if position_us == 0 || duration_us == 0 {
        return 0.0;
    }
    (position_us as f64 / duration_us as f64).clamp(0.0, 1.0)
}

/// `MM:SS` for a microsecond count. Minutes are not wrapped into hours.
pub fn format_clock(micros: u64) -> String {
    let seconds = micros / 1_000_000;
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Bar of filled and empty cells followed by ` MM:SS / MM:SS (P%)`.
///
/// `P` rounds half to even, so 12.5% prints as 12.
pub fn render_progress(position_us: u64, duration_us: u64) -> String {
    let ratio = progress_ratio(position_us, duration_us);
    let filled = ((ratio * PROGRESS_SEGMENTS as f64).floor() as usize).min(PROGRESS_SEGMENTS);
    let empty = PROGRESS_SEGMENTS - filled;

    let mut bar = String::with_capacity(PROGRESS_SEGMENTS * FILLED.len_utf8() + 32);
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(empty));
    bar.push_str(RESET);
    bar.push_str(&format!(
        " {} / {} ({}%)",
        format_clock(position_us),
        format_clock(duration_us),
        (ratio * 100.0).round_ties_even() as u32
    ));
    bar
}
