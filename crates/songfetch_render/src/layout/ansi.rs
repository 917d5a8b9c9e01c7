//! Escape-aware width helpers shared by the art renderer, the panel and the
//! compositor.
//!
//! Only SGR sequences (`ESC [ <params> m`) are recognized. Any other escape
//! shape is left in place and counted like ordinary text.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Resets every color and style attribute.
pub const RESET: &str = "\x1b[0m";

static ANSI_SGR: OnceLock<Regex> = OnceLock::new();

/// True-color foreground escape for the given RGB triple.
pub fn fg_rgb([r, g, b]: [u8; 3]) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

/// Removes every SGR sequence from `text`.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    let regex =
        ANSI_SGR.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").expect("invalid SGR regex"));
    regex.replace_all(text, "")
}

/// Number of characters left in `text` once its color codes are gone.
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).chars().count()
}

/// Left-justifies `text` to `width` visible columns.
///
/// Padding is appended after the content and escapes are kept verbatim. Text
/// that is already wider is returned unchanged, never truncated.
pub fn ljust_ansi(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(text));
    let mut justified = String::with_capacity(text.len() + pad);
    justified.push_str(text);
    justified.extend(std::iter::repeat(' ').take(pad));
    justified
}
