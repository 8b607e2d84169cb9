use clap::Parser;
use std::path::PathBuf;

/// Extract the FASTQ records whose identifier line matches a list of IDs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File with one identifier per line, matched against whole FASTQ lines
    pub id_file: PathBuf,

    /// Uncompressed FASTQ file with 4 lines per record
    pub fastq_file: PathBuf,
}
