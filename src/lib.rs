//! External merge sort for line-oriented text files
//!
//! Each input file is loaded, sorted byte-lexicographically, and rewritten
//! in place; the rewritten files are then combined by a k-way min-heap
//! merge into one sorted output stream. The line-ending convention (LF or
//! CRLF) is detected once from the first input and governs every read and
//! write of the run.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod chunk_sort;
pub mod config;
pub mod driver;
pub mod error;
pub mod line_ending;
pub mod line_io;
pub mod merge;

// Re-export commonly used types
pub use config::SortConfig;
pub use driver::{sort_and_merge, sort_and_merge_with};
pub use error::{SortError, SortResult};
pub use line_ending::LineEnding;

/// Exit codes matching GNU sort
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Sort and merge `input_files` according to `config`, writing the merged
/// stream to the configured output file or to stdout.
pub fn sort(config: &SortConfig, input_files: &[String]) -> SortResult<i32> {
    use crate::error::SortContext;
    use std::fs::File;
    use std::io;

    config.validate()?;

    match &config.output_file {
        Some(path) => {
            let file = File::create(path).with_file_context(path)?;
            sort_and_merge_with(file, input_files, config)?;
        }
        None => {
            let stdout = io::stdout();
            sort_and_merge_with(stdout.lock(), input_files, config)?;
        }
    }

    Ok(EXIT_SUCCESS)
}
