use std::env;

use log::debug;

const DEFAULT_COLUMNS: u16 = 80;

/// Width of the attached terminal.
///
/// Falls back to `$COLUMNS` when stdout is not a terminal, then to 80.
pub fn columns() -> u16 {
    match crossterm::terminal::size() {
        Ok((columns, _)) if columns > 0 => columns,
        Ok(_) => columns_from_env(),
        Err(err) => {
            debug!("terminal size unavailable: {err}");
            columns_from_env()
        },
    }
}

fn columns_from_env() -> u16 {
    parse_columns(env::var("COLUMNS").ok().as_deref())
}

fn parse_columns(value: Option<&str>) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|columns| *columns > 0)
        .unwrap_or(DEFAULT_COLUMNS)
}
