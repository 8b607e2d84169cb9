//! Selective FASTQ extraction.
//!
//! An [`IdSet`] is loaded from a list of identifiers, then an [`Extractor`]
//! streams a FASTQ file through a [`LineCursor`] and copies out every record
//! whose identifier line is still in the set.

mod cursor;
mod id_set;
mod record;
mod scan;
mod stats;

pub use cursor::{strip_newline, LineCursor};
pub use id_set::IdSet;
pub use record::FastqRecord;
pub use scan::{Extractor, ScanMode};
pub use stats::ExtractStats;
