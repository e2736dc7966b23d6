//! BENCH-006: streaming log scan
//!
//! Counts lines containing a needle, ASCII case-insensitively. The input is
//! scanned chunk by chunk through the reader's buffer, never loaded whole, and
//! lines need not be valid UTF-8 or fit in memory.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::bench::params::{self, BenchmarkId};
use crate::bench::verification::Checksum;
use crate::error::{BenchError, Result};
use crate::workloads::Workload;

/// True if `haystack` contains `needle_lower` under ASCII lowercase folding.
///
/// `needle_lower` must already be lowercase.
pub fn contains_ascii_ci(haystack: &[u8], needle_lower: &[u8]) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    haystack.windows(needle_lower.len()).any(|w| {
        w.iter()
            .zip(needle_lower)
            .all(|(h, n)| h.to_ascii_lowercase() == *n)
    })
}

/// Count lines of `reader` that contain `needle`.
///
/// Works directly on the reader's buffered chunks, so memory stays bounded by
/// the buffer even when the input has no newlines at all. A match may straddle
/// two chunks; the last `needle.len() - 1` bytes of the open line are carried
/// across the seam. A final line without a trailing newline still counts.
pub fn count_matching_lines<R: BufRead>(mut reader: R, needle: &str, path: &Path) -> Result<u64> {
    let needle = needle.to_ascii_lowercase();
    let needle = needle.as_bytes();
    let overlap = needle.len().saturating_sub(1);

    let mut carry: Vec<u8> = Vec::with_capacity(2 * overlap);
    let mut matched = false;
    let mut count = 0;

    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(BenchError::io(path, e)),
        };
        if chunk.is_empty() {
            break;
        }
        let consumed = chunk.len();

        for piece in chunk.split_inclusive(|&b| b == b'\n') {
            let (body, line_end) = match piece.split_last() {
                Some((&b'\n', body)) => (body, true),
                _ => (piece, false),
            };

            if !matched {
                // carry + head of this piece covers the seam
                carry.extend_from_slice(&body[..body.len().min(overlap)]);
                matched = contains_ascii_ci(&carry, needle) || contains_ascii_ci(body, needle);
                if body.len() >= overlap {
                    carry.clear();
                    carry.extend_from_slice(&body[body.len() - overlap..]);
                } else {
                    let excess = carry.len().saturating_sub(overlap);
                    carry.drain(..excess);
                }
            }

            if line_end {
                if matched {
                    count += 1;
                }
                matched = false;
                carry.clear();
            }
        }

        reader.consume(consumed);
    }

    if matched {
        count += 1;
    }
    Ok(count)
}

/// Scan of one log file
#[derive(Debug, Clone)]
pub struct LogScan {
    pub path: PathBuf,
    pub needle: String,
}

impl LogScan {
    /// Canonical needle against `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            needle: params::file_processing::NEEDLE.to_string(),
        }
    }
}

impl Workload for LogScan {
    type Input = BufReader<File>;
    type Output = u64;

    fn id(&self) -> BenchmarkId {
        BenchmarkId::FileProcessing
    }

    fn prepare(&self) -> Result<BufReader<File>> {
        let file = File::open(&self.path).map_err(|e| BenchError::io(&self.path, e))?;
        Ok(BufReader::with_capacity(64 * 1024, file))
    }

    fn execute(&self, reader: BufReader<File>) -> Result<u64> {
        count_matching_lines(reader, &self.needle, &self.path)
    }

    fn checksum(&self, output: &u64) -> Checksum {
        Checksum::Int(*output)
    }
}
