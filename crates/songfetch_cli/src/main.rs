mod fetch;
mod player;
mod terminal;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, warn, LevelFilter};
use songfetch_render::{art_enabled, render_card, ArtRenderer, ArtSource, MetadataSource};

use fetch::HttpFetcher;
use player::Playerctl;

#[derive(Parser, Debug)]
#[command(author, version, about = "Show the currently playing track next to its cover art")]
struct Cli {
    /// Artwork URI (file:// or http(s)://) to use instead of the player's
    #[arg(long, value_name = "URI")]
    art: Option<String>,
    /// Only print the metadata panel
    #[arg(long, default_value_t = false)]
    no_art: bool,
    /// Terminal width to lay out for instead of the detected one
    #[arg(long, value_name = "COLS")]
    width: Option<u16>,
    /// MPRIS player to query, as understood by `playerctl --player`
    #[arg(long)]
    player: Option<String>,
    /// Diagnostics written to stderr
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level.to_filter())
        .format_timestamp(None)
        .init();

    let snapshot = Playerctl::new(cli.player.clone()).snapshot();
    let columns = cli.width.unwrap_or_else(terminal::columns);

    let art = if cli.no_art || !art_enabled(columns) {
        debug!("skipping artwork for a {columns} column terminal");
        Vec::new()
    } else {
        let uri = cli.art.as_deref().unwrap_or(&snapshot.art_url);
        renderer().render(ArtSource::from_uri(uri))
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for row in render_card(&art, &snapshot) {
        writeln!(out, "{row}").context("failed to write card to stdout")?;
    }
    out.flush().context("failed to flush stdout")?;

    Ok(())
}

fn renderer() -> ArtRenderer {
    let renderer = ArtRenderer::default();
    match HttpFetcher::new() {
        Ok(fetcher) => renderer.with_fetcher(fetcher),
        Err(err) => {
            warn!("remote artwork disabled: {err}");
            renderer
        },
    }
}

impl LogLevel {
    fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
