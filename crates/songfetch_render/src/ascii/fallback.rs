//! Placeholder artwork shown whenever no usable image can be rendered.

const DEFAULT_ART: &str = include_str!("../../assets/default_art.txt");

/// The bundled music-note pattern, one entry per line, without color codes.
pub fn fallback_art() -> Vec<String> {
    DEFAULT_ART.split('\n').map(str::to_owned).collect()
}
