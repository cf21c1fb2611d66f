//! Run orchestration
//!
//! Detects the line ending from the first input, sorts every input file in
//! place, then reopens them all and streams the k-way merge into the output
//! sink. The detected convention is threaded through as a plain value; no
//! component consults shared state for it.

use crate::chunk_sort::sort_file;
use crate::config::SortConfig;
use crate::error::{SortContext, SortError, SortResult};
use crate::line_ending::LineEnding;
use crate::line_io::{LineReader, LineWriter};
use crate::merge::merge;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Sort every input file in place, then merge them all into `output`.
///
/// An empty path list is a trivial success: nothing is detected, nothing is
/// written. The first failing file aborts the run; files sorted before it
/// stay sorted, files after it stay untouched. All file handles are scoped
/// to this call and close on every exit path.
pub fn sort_and_merge<W: Write, P: AsRef<Path>>(output: W, paths: &[P]) -> SortResult<()> {
    sort_and_merge_with(output, paths, &SortConfig::default())
}

/// [`sort_and_merge`] with explicit run options.
pub fn sort_and_merge_with<W: Write, P: AsRef<Path>>(
    output: W,
    paths: &[P],
    config: &SortConfig,
) -> SortResult<()> {
    if paths.is_empty() {
        return Ok(());
    }

    let ending = match config.line_ending {
        Some(forced) => forced,
        None => detect_from_first(paths[0].as_ref(), config.detect_lines)?,
    };

    if config.debug {
        eprintln!("line ending: {ending}");
        eprintln!("input files: {}", paths.len());
    }

    for path in paths {
        sort_file(path.as_ref(), ending)?;
    }

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let file = File::open(path).with_file_context(&path.display().to_string())?;
        sources.push(LineReader::new(BufReader::new(file), ending));
    }

    let mut writer = LineWriter::new(BufWriter::new(output), ending);
    merge(&mut writer, &mut sources)
}

fn detect_from_first(path: &Path, line_limit: Option<usize>) -> SortResult<LineEnding> {
    let name = path.display().to_string();
    if path.is_dir() {
        return Err(SortError::is_directory(&name));
    }
    let mut file = File::open(path).with_file_context(&name)?;
    LineEnding::detect(&mut file, line_limit).with_file_context(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_files(dir: &TempDir, contents: &[&[u8]]) -> Vec<PathBuf> {
        contents
            .iter()
            .enumerate()
            .map(|(i, content)| {
                let path = dir.path().join(format!("input_{i}.txt"));
                fs::write(&path, content).expect("write failed");
                path
            })
            .collect()
    }

    #[test]
    fn test_sort_and_merge_two_files() {
        let dir = TempDir::new().expect("tempdir failed");
        let paths = write_files(&dir, &[b"banana\napple\n", b"cherry\napple\n"]);

        let mut out = Vec::new();
        sort_and_merge(&mut out, &paths).expect("run failed");

        assert_eq!(out, b"apple\napple\nbanana\ncherry\n");
        assert_eq!(
            fs::read(&paths[0]).expect("read failed"),
            b"apple\nbanana\n"
        );
        assert_eq!(
            fs::read(&paths[1]).expect("read failed"),
            b"apple\ncherry\n"
        );
    }

    #[test]
    fn test_sort_and_merge_single_file() {
        let dir = TempDir::new().expect("tempdir failed");
        let paths = write_files(&dir, &[b"b\na\nc\n"]);

        let mut out = Vec::new();
        sort_and_merge(&mut out, &paths).expect("run failed");

        assert_eq!(out, b"a\nb\nc\n");
        assert_eq!(fs::read(&paths[0]).expect("read failed"), b"a\nb\nc\n");
    }

    #[test]
    fn test_sort_and_merge_no_files() {
        let mut out = Vec::new();
        sort_and_merge(&mut out, &Vec::<PathBuf>::new()).expect("run failed");
        assert!(out.is_empty());
    }

    #[test]
    fn test_sort_and_merge_empty_file() {
        let dir = TempDir::new().expect("tempdir failed");
        let paths = write_files(&dir, &[b""]);

        let mut out = Vec::new();
        sort_and_merge(&mut out, &paths).expect("run failed");

        assert!(out.is_empty());
        assert!(fs::read(&paths[0]).expect("read failed").is_empty());
    }

    #[test]
    fn test_sort_and_merge_crlf_detected_from_first_file() {
        let dir = TempDir::new().expect("tempdir failed");
        // First file is predominantly CRLF; the whole run follows suit,
        // including the second file and the merged output.
        let paths = write_files(&dir, &[b"b\r\na\r\n", b"d\r\nc\r\n"]);

        let mut out = Vec::new();
        sort_and_merge(&mut out, &paths).expect("run failed");

        assert_eq!(out, b"a\r\nb\r\nc\r\nd\r\n");
        assert_eq!(fs::read(&paths[0]).expect("read failed"), b"a\r\nb\r\n");
        assert_eq!(fs::read(&paths[1]).expect("read failed"), b"c\r\nd\r\n");
    }

    #[test]
    fn test_sort_and_merge_idempotent() {
        let dir = TempDir::new().expect("tempdir failed");
        let paths = write_files(&dir, &[b"q\np\n", b"s\nr\n"]);

        let mut first = Vec::new();
        sort_and_merge(&mut first, &paths).expect("first run failed");

        let mut second = Vec::new();
        sort_and_merge(&mut second, &paths).expect("second run failed");

        assert_eq!(first, second);
    }

    #[test]
    fn test_sort_and_merge_unterminated_final_line() {
        let dir = TempDir::new().expect("tempdir failed");
        let paths = write_files(&dir, &[b"b\na", b"c"]);

        let mut out = Vec::new();
        sort_and_merge(&mut out, &paths).expect("run failed");

        assert_eq!(out, b"a\nb\nc\n");
    }

    #[test]
    fn test_forced_line_ending_skips_detection() {
        let dir = TempDir::new().expect("tempdir failed");
        // LF content, but the run is pinned to CRLF.
        let paths = write_files(&dir, &[b"b\na\n"]);

        let config = SortConfig::new().with_line_ending(Some(LineEnding::Crlf));
        let mut out = Vec::new();
        sort_and_merge_with(&mut out, &paths, &config).expect("run failed");

        // Read as CRLF, the whole LF file is one unterminated line with its
        // bare newlines kept as content.
        assert_eq!(out, b"b\na\n\r\n");
    }

    #[test]
    fn test_directory_input_rejected() {
        let dir = TempDir::new().expect("tempdir failed");
        let sub = dir.path().join("not_a_file");
        fs::create_dir(&sub).expect("mkdir failed");

        let mut out = Vec::new();
        match sort_and_merge(&mut out, &[sub]) {
            Err(SortError::IsDirectory { .. }) => {}
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_aborts_before_later_files() {
        let dir = TempDir::new().expect("tempdir failed");
        let present = dir.path().join("present.txt");
        fs::write(&present, "z\ny\n").expect("write failed");
        let missing = dir.path().join("missing.txt");

        let mut out = Vec::new();
        let result = sort_and_merge(&mut out, &[missing, present.clone()]);

        match result {
            Err(SortError::FileNotFound { .. }) => {}
            other => panic!("unexpected: {other:?}"),
        }
        // The file after the failure point is untouched.
        assert_eq!(fs::read(&present).expect("read failed"), b"z\ny\n");
    }
}
