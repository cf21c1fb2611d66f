//! Configuration for a sort-and-merge run

use crate::error::{SortError, SortResult};
use crate::line_ending::LineEnding;

/// Options governing one run.
///
/// Input files are passed separately to [`crate::sort`]; the configuration
/// carries everything else: where the merged output goes, whether the line
/// ending is forced or detected, and how much of the first file detection
/// may sample.
#[derive(Debug, Clone, Default)]
pub struct SortConfig {
    /// Output file path; `None` writes to stdout
    pub output_file: Option<String>,
    /// Forced line ending; `None` detects from the first input file
    pub line_ending: Option<LineEnding>,
    /// Detection sample size in lines; `None` samples the whole file
    pub detect_lines: Option<usize>,
    /// Print run diagnostics to stderr
    pub debug: bool,
}

impl SortConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output file
    pub fn with_output_file(mut self, output_file: Option<String>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Force a line ending instead of detecting one
    pub fn with_line_ending(mut self, ending: Option<LineEnding>) -> Self {
        self.line_ending = ending;
        self
    }

    /// Bound the detection sample
    pub fn with_detect_lines(mut self, detect_lines: Option<usize>) -> Self {
        self.detect_lines = detect_lines;
        self
    }

    /// Enable debug diagnostics
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.line_ending.is_some() && self.detect_lines.is_some() {
            return Err(SortError::conflicting_options(
                "a detection limit has no effect when the line ending is forced",
            ));
        }

        if self.detect_lines == Some(0) {
            return Err(SortError::InvalidDetectLimit {
                limit: "0".to_string(),
            });
        }

        Ok(())
    }
}
