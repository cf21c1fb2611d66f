//! K-way merge of sorted line sources
//!
//! A min-heap keyed on each source's current head line interleaves N
//! already-sorted readers into one sorted output stream. The heap holds at
//! most one entry per live source; a source appears iff it has a buffered
//! line not yet written.

use crate::error::{SortError, SortResult};
use crate::line_io::{LineReader, LineWriter};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::io::{BufRead, Write};

#[derive(Debug)]
struct MergeEntry {
    line: Vec<u8>,
    source_index: usize,
}

impl PartialEq for MergeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.line == other.line && self.source_index == other.source_index
    }
}

impl Eq for MergeEntry {}

impl PartialOrd for MergeEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MergeEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Byte-lexicographic on the line; the source index only breaks ties
        // so that pop order is deterministic.
        self.line
            .cmp(&other.line)
            .then_with(|| self.source_index.cmp(&other.source_index))
    }
}

/// Merge `sources` into `writer` in ascending byte order.
///
/// Each source must already yield its lines in non-decreasing order; the
/// output then equals the ascending sort of all sources' lines combined.
/// Sources that are empty on the first read, or whose first read fails, are
/// skipped without error. A write failure or a mid-merge read failure
/// aborts immediately, leaving the output partially written.
pub fn merge<W: Write, R: BufRead>(
    writer: &mut LineWriter<W>,
    sources: &mut [LineReader<R>],
) -> SortResult<()> {
    let mut heap: BinaryHeap<Reverse<MergeEntry>> = BinaryHeap::with_capacity(sources.len());

    for (source_index, source) in sources.iter_mut().enumerate() {
        if let Ok(Some(line)) = source.read_line() {
            heap.push(Reverse(MergeEntry { line, source_index }));
        }
    }

    while let Some(Reverse(entry)) = heap.pop() {
        writer.write_line(&entry.line)?;

        let source_index = entry.source_index;
        let source = sources
            .get_mut(source_index)
            .ok_or_else(|| SortError::internal("merge heap referenced an unknown source"))?;
        if let Some(line) = source.read_line()? {
            heap.push(Reverse(MergeEntry { line, source_index }));
        }
    }

    writer.flush()?;
    Ok(())
}
