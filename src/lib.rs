pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod extractor;
pub mod utils;

// Re-export main API
pub use error::{ExtractError, RecordSlot, Result};
pub use extractor::{ExtractStats, Extractor, FastqRecord, IdSet, LineCursor, ScanMode};
