use crate::errors::LoadError;
use crate::sailing::{parse_sailing, Sailing};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// A SailingLog holds every valid sailing read from one input, along with a
/// count of the lines that had to be skipped.
#[derive(Debug, Default)]
pub struct SailingLog {
    sailings: Vec<Sailing>,
    total_lines: usize,
    skipped_lines: usize,
}

impl SailingLog {
    /// Reads sailing records line by line from `reader`.
    ///
    /// Lines that fail to parse are logged and skipped, they never stop the
    /// rest of the input from loading. Bytes that aren't valid UTF-8 are
    /// replaced rather than rejected. Only I/O failures are returned.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, LoadError> {
        let mut log = SailingLog::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            log.total_lines += 1;

            let line = String::from_utf8_lossy(trim_line_ending(&buf));

            match parse_sailing(&line) {
                Ok(sailing) => log.sailings.push(sailing),
                Err(err) => {
                    warn!("Line {} is invalid: {}", log.total_lines, err);
                    log.skipped_lines += 1;
                }
            }
        }

        info!(
            read = log.sailings.len(),
            skipped = log.skipped_lines,
            "finished loading sailings"
        );

        Ok(log)
    }

    pub fn sailings(&self) -> &[Sailing] {
        &self.sailings
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }
}

/// Strips a trailing `\n` or `\r\n` from a raw line.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

impl TryFrom<PathBuf> for SailingLog {
    type Error = LoadError;

    /// Opens the file at `path` and loads every sailing it contains.
    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        debug!(path = %path.display(), "opening sailing file");

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(source) => return Err(LoadError::Open { path, source }),
        };

        SailingLog::from_reader(BufReader::new(file))
    }
}
