//! Report formatter: threshold filtering and ASCII-box rendering.
//!
//! One block per qualifying directory pair:
//!
//! ```text
//! +--------------------------------+
//! |    /backups/2023 == /photos/old|
//! +--------------------------------+
//! |            a.jpg == a.jpg      |
//! |            b.jpg == b.jpg      |
//! +--------------------------------+
//! ```

use std::io::Write;

use crate::error::PipelineError;
use crate::types::MatchResult;

/// Column widths for one block: the longest string on each side, starting
/// from the directory paths themselves and growing to the matched base names.
fn column_widths(result: &MatchResult) -> (usize, usize) {
    let mut width_left = result.left.to_string_lossy().len();
    let mut width_right = result.right.to_string_lossy().len();
    for (left, right) in &result.matches {
        width_left = width_left.max(left.file_name().len());
        width_right = width_right.max(right.file_name().len());
    }
    (width_left, width_right)
}

fn write_divider<W: Write + ?Sized>(out: &mut W, w1: usize, w2: usize) -> std::io::Result<()> {
    writeln!(out, "+{}+", "-".repeat(w1 + w2 + 4))
}

fn write_row<W: Write + ?Sized>(
    out: &mut W,
    w1: usize,
    w2: usize,
    s1: &str,
    s2: &str,
) -> std::io::Result<()> {
    writeln!(out, "|{s1:>w1$} == {s2:<w2$}|")
}

/// Render every result with at least `min_repeated` matches to `out`.
///
/// Results arrive from the comparison pool in completion order, which varies
/// across runs; they are sorted by directory pair here so the report is
/// reproducible. Output already written before a failed write stays in the
/// sink (at-least-once semantics).
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    mut results: Vec<MatchResult>,
    min_repeated: usize,
) -> Result<(), PipelineError> {
    results.sort_by(|a, b| (&a.left, &a.right).cmp(&(&b.left, &b.right)));

    for result in &results {
        if result.count() < min_repeated {
            continue;
        }
        let (w1, w2) = column_widths(result);
        render_block(out, result, w1, w2).map_err(PipelineError::Output)?;
    }
    out.flush().map_err(PipelineError::Output)
}

fn render_block<W: Write + ?Sized>(
    out: &mut W,
    result: &MatchResult,
    w1: usize,
    w2: usize,
) -> std::io::Result<()> {
    write_divider(out, w1, w2)?;
    write_row(
        out,
        w1,
        w2,
        &result.left.to_string_lossy(),
        &result.right.to_string_lossy(),
    )?;
    write_divider(out, w1, w2)?;
    for (left, right) in &result.matches {
        write_row(out, w1, w2, left.file_name(), right.file_name())?;
    }
    write_divider(out, w1, w2)
}
