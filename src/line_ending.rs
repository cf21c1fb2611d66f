//! Line-ending convention and detection
//!
//! A sort run commits to one terminator convention up front, detected by
//! sampling the first input file, and applies it to every file it reads or
//! rewrites as well as to the merged output.

use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};

/// Line terminator convention, fixed for the duration of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix convention, `\n`
    #[default]
    Lf,
    /// DOS convention, `\r\n`
    Crlf,
}

impl LineEnding {
    /// Terminator bytes for this convention
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::Crlf => b"\r\n",
        }
    }

    /// Detect the predominant line ending by sampling up to `line_limit`
    /// lines (`None` samples the whole stream).
    ///
    /// The stream is rewound to its start before and after sampling, so the
    /// caller can hand the same handle straight to a reader. A line ending
    /// in `\r\n` counts only toward the CRLF bucket. Ties, including a
    /// stream with no terminators at all, resolve to LF.
    pub fn detect<R: Read + Seek>(stream: &mut R, line_limit: Option<usize>) -> io::Result<Self> {
        stream.seek(SeekFrom::Start(0))?;

        let mut crlf: u64 = 0;
        let mut lf: u64 = 0;
        {
            let mut reader = BufReader::new(&mut *stream);
            let mut buf = Vec::new();
            let mut seen = 0usize;

            while line_limit.map_or(true, |limit| seen < limit) {
                buf.clear();
                let n = reader.read_until(b'\n', &mut buf)?;
                if n == 0 {
                    break;
                }
                if buf.ends_with(b"\r\n") {
                    crlf += 1;
                } else if buf.ends_with(b"\n") {
                    lf += 1;
                }
                seen += 1;
            }
        }

        stream.seek(SeekFrom::Start(0))?;

        if crlf > lf {
            Ok(LineEnding::Crlf)
        } else {
            Ok(LineEnding::Lf)
        }
    }
}

impl std::fmt::Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LineEnding::Lf => "LF",
            LineEnding::Crlf => "CRLF",
        };
        write!(f, "{name}")
    }
}
