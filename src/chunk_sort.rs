//! Per-file in-place sort
//!
//! Loads a whole file's lines, sorts them byte-lexicographically, and
//! rewrites the file with the same terminator convention. There is no
//! atomic rename step: a failure during the rewrite leaves the file in an
//! undefined state and is surfaced to the caller.

use crate::error::{SortContext, SortError, SortResult};
use crate::line_ending::LineEnding;
use crate::line_io::{LineReader, LineWriter};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Sort the lines of `path` in place, reading and rewriting with `ending`.
///
/// The rewrite is a pure permutation of the file's own lines. An empty file
/// is rewritten as an empty file. A final line without a terminator is kept
/// and gains one on the way back out.
pub fn sort_file(path: &Path, ending: LineEnding) -> SortResult<()> {
    let name = path.display().to_string();

    // Opening a directory only fails once the first read is attempted, with
    // an unhelpful kind; reject it up front instead.
    if path.is_dir() {
        return Err(SortError::is_directory(&name));
    }

    let lines = read_lines(path, ending).with_file_context(&name)?;
    write_sorted(path, ending, lines).with_file_context(&name)?;
    Ok(())
}

fn read_lines(path: &Path, ending: LineEnding) -> std::io::Result<Vec<Vec<u8>>> {
    let file = File::open(path)?;
    let mut reader = LineReader::new(BufReader::new(file), ending);

    let mut lines = Vec::new();
    while let Some(line) = reader.read_line()? {
        lines.push(line);
    }
    Ok(lines)
}

fn write_sorted(path: &Path, ending: LineEnding, mut lines: Vec<Vec<u8>>) -> std::io::Result<()> {
    // Duplicates are indistinguishable by content, so an unstable sort is
    // enough for a total byte order.
    lines.sort_unstable();

    let file = File::create(path)?;
    let mut writer = LineWriter::new(BufWriter::new(file), ending);
    for line in &lines {
        writer.write_line(line)?;
    }
    writer.flush()
}
