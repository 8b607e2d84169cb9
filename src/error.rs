use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("Cannot open \"{}\": {source}", .path.display())]
    MissingFile { path: PathBuf, source: io::Error },

    #[error("Error reading \"{}\": {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Truncated record for identifier \"{id}\" on line {line}: missing {missing} line")]
    TruncatedRecord {
        id: String,
        line: u64,
        missing: RecordSlot,
    },

    #[error("Error writing output: {0}")]
    Write(#[source] io::Error),
}

/// Position of a line inside a 4-line FASTQ record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSlot {
    Identifier,
    Sequence,
    Separator,
    Quality,
}

impl RecordSlot {
    pub(crate) fn next(self) -> RecordSlot {
        use RecordSlot::*;
        match self {
            Identifier => Sequence,
            Sequence => Separator,
            Separator => Quality,
            Quality => Identifier,
        }
    }
}

impl fmt::Display for RecordSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use RecordSlot::*;
        match self {
            Identifier => write!(f, "identifier"),
            Sequence => write!(f, "sequence"),
            Separator => write!(f, "separator"),
            Quality => write!(f, "quality"),
        }
    }
}

pub(crate) fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
