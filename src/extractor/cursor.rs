use crate::error::{ExtractError, Result};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Pull-based line reader over a text source.
///
/// Lines are returned without their trailing `\n`. Any other trailing bytes,
/// including a `\r`, are kept as-is.
pub struct LineCursor<R> {
    reader: R,
    path: PathBuf,
    line: u64,
    buf: Vec<u8>,
}

impl<R: BufRead> LineCursor<R> {
    /// `path` only labels I/O errors; the reader may be any in-memory source.
    pub fn new(reader: R, path: impl AsRef<Path>) -> Self {
        Self {
            reader,
            path: path.as_ref().to_path_buf(),
            line: 0,
            buf: Vec::with_capacity(256),
        }
    }

    /// Returns the next line, or `None` once the source is exhausted.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.buf.clear();
        let n = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| ExtractError::Read {
                path: self.path.clone(),
                source,
            })?;
        if n == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(strip_newline(&self.buf)))
    }

    /// 1-based number of the line last returned, 0 before the first read.
    pub fn line_number(&self) -> u64 {
        self.line
    }
}

pub fn strip_newline(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\n").unwrap_or(line)
}
