use super::ansi::{ljust_ansi, visible_width};

/// Left column width assumed when there is no left column at all.
pub const MIN_LEFT_WIDTH: usize = 2;

/// Widest visible line in `lines`, or `None` for an empty column.
pub fn column_width<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    lines.iter().map(|line| visible_width(line.as_ref())).max()
}

/// Merges two columns into printable rows.
///
/// Every left line is justified to one column past the widest left line and
/// the right line follows it unchanged. The shorter column is padded with
/// blank lines at the end; nothing is reordered or truncated.
pub fn composite<L, R>(left: &[L], right: &[R]) -> Vec<String>
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let left_width = column_width(left).unwrap_or(MIN_LEFT_WIDTH);
    let height = left.len().max(right.len());

    (0..height)
        .map(|row| {
            let left_line = left.get(row).map_or("", |line| line.as_ref());
            let right_line = right.get(row).map_or("", |line| line.as_ref());
            let mut composed = ljust_ansi(left_line, left_width + 1);
            composed.push_str(right_line);
            composed
        })
        .collect()
}
