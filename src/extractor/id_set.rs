use super::cursor::LineCursor;
use crate::error::{ExtractError, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Identifiers still being searched for.
///
/// Built once from an ID file, one entry per line with the trailing `\n`
/// removed. Duplicate lines collapse to a single entry and a blank line
/// contributes the empty identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSet {
    ids: HashSet<Vec<u8>>,
}

impl IdSet {
    /// Reads the ID file at `path`. The file is closed before this returns.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ExtractError::MissingFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Self> {
        let mut cursor = LineCursor::new(reader, path);
        let mut ids = HashSet::new();
        while let Some(line) = cursor.next_line()? {
            if !ids.contains(line) {
                ids.insert(line.to_vec());
            }
        }
        Ok(Self { ids })
    }

    pub fn contains(&self, id: &[u8]) -> bool {
        self.ids.contains(id)
    }

    /// Removes `id`, returning whether it was present.
    pub fn take(&mut self, id: &[u8]) -> bool {
        self.ids.remove(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifiers not matched so far, in no particular order.
    pub fn remaining(&self) -> impl Iterator<Item = &[u8]> {
        self.ids.iter().map(Vec::as_slice)
    }
}

impl<S: AsRef<[u8]>> FromIterator<S> for IdSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(|id| id.as_ref().to_vec()).collect(),
        }
    }
}
