use crate::error::Result;
use crate::table::{locate, split};

/// Parse a fixed-width table: the first line is the header, every line after
/// it is a data row cut at the header's label offsets.
///
/// `row_fn` maps each right-trimmed column array into the caller's row shape;
/// results keep input row order. A header-only table yields an empty vec.
/// Text without even a header line fails the header check like any other
/// format mismatch.
pub fn parse_table<T>(
    labels: &[&str],
    raw: &str,
    mut row_fn: impl FnMut(Vec<String>) -> T,
) -> Result<Vec<T>> {
    let mut lines = raw.lines();
    let header = lines.next().unwrap_or_default();
    let offsets = locate(labels, header)?;

    Ok(lines.map(|row| row_fn(split(row, &offsets))).collect())
}
