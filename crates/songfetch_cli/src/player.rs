//! Track metadata from MPRIS players, queried through `playerctl`.

use std::env;
use std::process::Command;

use log::{debug, warn};
use songfetch_render::{MetadataSnapshot, MetadataSource};

const BACKEND: &str = "MPRIS (playerctl)";
const UNKNOWN: &str = "Unknown";

const FIELD_SEPARATOR: &str = "\x1f";

/// Fields requested from `playerctl metadata --format`, in output order.
const FIELDS: [&str; 12] = [
    "playerName",
    "title",
    "artist",
    "album",
    "mpris:length",
    "position",
    "volume",
    "status",
    "loop",
    "shuffle",
    "xesam:url",
    "mpris:artUrl",
];

fn format_template() -> String {
    FIELDS
        .iter()
        .map(|field| format!("{{{{{field}}}}}"))
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

pub struct Playerctl {
    player: Option<String>,
}

impl Playerctl {
    pub fn new(player: Option<String>) -> Self {
        Self { player }
    }

    fn query(&self) -> Option<String> {
        let mut command = Command::new("playerctl");
        if let Some(player) = &self.player {
            command.arg("--player").arg(player);
        }
        let template = format_template();
        command.args(["metadata", "--format", template.as_str()]);

        let output = match command.output() {
            Ok(output) => output,
            Err(err) => {
                warn!("failed to run playerctl: {err}");
                return None;
            },
        };

        if !output.status.success() {
            debug!(
                "playerctl exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl MetadataSource for Playerctl {
    fn snapshot(&self) -> MetadataSnapshot {
        let user = current_user();
        match self.query() {
            Some(output) => parse_metadata(&output, user),
            None => no_player(user),
        }
    }
}

fn current_user() -> String {
    env::var("USER").or_else(|_| env::var("USERNAME")).unwrap_or_else(|_| "user".to_owned())
}

/// Snapshot shown when no player answers.
pub fn no_player(user: String) -> MetadataSnapshot {
    MetadataSnapshot {
        title: UNKNOWN.to_owned(),
        artist: UNKNOWN.to_owned(),
        album: UNKNOWN.to_owned(),
        volume: UNKNOWN.to_owned(),
        loop_status: UNKNOWN.to_owned(),
        shuffle: UNKNOWN.to_owned(),
        player: UNKNOWN.to_owned(),
        backend: BACKEND.to_owned(),
        status: "No player".to_owned(),
        user,
        url: UNKNOWN.to_owned(),
        ..MetadataSnapshot::default()
    }
}

/// Parses one line of `playerctl metadata --format` output built from
/// [`FIELDS`].
pub fn parse_metadata(output: &str, user: String) -> MetadataSnapshot {
    let line = output.trim_end_matches(['\n', '\r']);
    let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);
    let mut next = || fields.next().unwrap_or_default();

    let player = text(next());
    let title = text(next());
    let artist = text(next());
    let album = text(next());
    let duration_us = micros(next());
    let position_us = micros(next());
    let volume = parse_volume(next());
    let status = text(next());
    let loop_status = text(next());
    let shuffle = parse_shuffle(next());
    let url = text(next());
    let art_url = next().to_owned();

    MetadataSnapshot {
        title,
        artist,
        album,
        duration_us,
        position_us,
        volume,
        loop_status,
        shuffle,
        player,
        backend: BACKEND.to_owned(),
        status,
        user,
        url,
        art_url,
    }
}

fn text(value: &str) -> String {
    if value.is_empty() {
        UNKNOWN.to_owned()
    } else {
        value.to_owned()
    }
}

/// Some players report lengths as floats; anything unparsable is unknown.
fn micros(value: &str) -> u64 {
    value
        .parse::<u64>()
        .ok()
        .or_else(|| {
            let value = value.parse::<f64>().ok()?;
            (value.is_finite() && value >= 0.0).then_some(value as u64)
        })
        .unwrap_or(0)
}

fn parse_volume(value: &str) -> String {
    match value.parse::<f64>() {
        Ok(level) if level.is_finite() => format!("{}%", (level * 100.0).round() as i64),
        _ => UNKNOWN.to_owned(),
    }
}

fn parse_shuffle(value: &str) -> String {
    match value {
        "true" => "On".to_owned(),
        "false" => "Off".to_owned(),
        other => text(other),
    }
}
