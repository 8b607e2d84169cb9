use crate::config::Config;
use crate::error::{lossy, ExtractError};
use crate::extractor::{ExtractStats, Extractor, IdSet, LineCursor};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

const MIN_BUFFER_CAPACITY: usize = 8 * 1024;

pub fn run(id_file: &Path, fastq_file: &Path, config: &Config) -> Result<ExtractStats> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let stats = extract_to(id_file, fastq_file, &mut writer, config)?;
    writer
        .flush()
        .map_err(ExtractError::Write)
        .context("Failed to flush extracted records")?;
    Ok(stats)
}

/// Loads the identifiers, then scans `fastq_file` writing matches to `writer`.
///
/// The FASTQ file is never opened when the ID file holds no identifiers.
pub fn extract_to<W: Write + ?Sized>(
    id_file: &Path,
    fastq_file: &Path,
    writer: &mut W,
    config: &Config,
) -> Result<ExtractStats> {
    let ids = IdSet::load(id_file)
        .with_context(|| format!("Failed to load identifiers from {}", id_file.display()))?;

    if ids.is_empty() {
        warn!("No identifiers in {}, nothing to extract", id_file.display());
        return Ok(ExtractStats {
            stopped_early: true,
            ..ExtractStats::default()
        });
    }
    debug!("Loaded {} identifiers from {}", ids.len(), id_file.display());

    let file = File::open(fastq_file)
        .map_err(|source| ExtractError::MissingFile {
            path: fastq_file.to_path_buf(),
            source,
        })
        .with_context(|| format!("Failed to open FASTQ file {}", fastq_file.display()))?;
    let input = LineCursor::new(
        BufReader::with_capacity(config.buffer_capacity.max(MIN_BUFFER_CAPACITY), file),
        fastq_file,
    );

    let progress = ProgressBarBuilder::new(format!("Scanning {}", fastq_file.display()))
        .visible(config.show_progress)
        .with_tick(Duration::from_millis(250))
        .build()?;

    let mut extractor = Extractor::new(ids);
    let result = extractor.extract(input, writer, &progress);
    progress.finish_and_clear();

    let stats = result
        .with_context(|| format!("Failed to extract records from {}", fastq_file.display()))?;

    debug!(
        "Scanned {} lines, extracted {} records, {} identifiers unmatched{}",
        stats.lines_read,
        stats.records_emitted,
        stats.ids_remaining,
        if stats.stopped_early {
            " (all identifiers found, stopped early)"
        } else {
            ""
        }
    );
    for id in extractor.ids().remaining() {
        debug!("Unmatched identifier: {}", lossy(id));
    }

    Ok(stats)
}
