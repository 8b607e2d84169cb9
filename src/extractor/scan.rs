use super::cursor::LineCursor;
use super::id_set::IdSet;
use super::record::FastqRecord;
use super::stats::ExtractStats;
use crate::error::{lossy, ExtractError, RecordSlot, Result};
use indicatif::ProgressBar;
use std::io::{BufRead, Write};

const PROGRESS_INTERVAL: u64 = 100_000;

/// Which input lines are tested against the ID set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Every line not consumed by a read-ahead is a candidate, so a sequence
    /// or quality line equal to an ID also starts a record.
    #[default]
    Raw,
    /// Only the first line of each 4-line record is a candidate.
    RecordAligned,
}

/// Owns the ID set and pulls matching records out of a FASTQ stream.
pub struct Extractor {
    ids: IdSet,
    mode: ScanMode,
    progress_interval: u64,
}

impl Extractor {
    pub fn new(ids: IdSet) -> Self {
        Self {
            ids,
            mode: ScanMode::default(),
            progress_interval: PROGRESS_INTERVAL,
        }
    }

    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn ids(&self) -> &IdSet {
        &self.ids
    }

    /// Copies every record whose identifier is in the set to `writer`, in
    /// input order, removing each identifier on its first match.
    ///
    /// Stops reading as soon as the set is empty; `input` is dropped on
    /// return. A matched identifier followed by fewer than three lines fails
    /// with [`ExtractError::TruncatedRecord`] and nothing of that record is
    /// written.
    pub fn extract<R: BufRead, W: Write + ?Sized>(
        &mut self,
        mut input: LineCursor<R>,
        writer: &mut W,
        progress: &ProgressBar,
    ) -> Result<ExtractStats> {
        let mut stats = ExtractStats::default();
        let mut slot = RecordSlot::Identifier;
        let mut next_tick = self.progress_interval;

        while !self.ids.is_empty() {
            if input.line_number() >= next_tick {
                progress.set_message(format!(
                    "Scanned {} lines, extracted {} records",
                    input.line_number(),
                    stats.records_emitted
                ));
                next_tick = input.line_number() + self.progress_interval;
            }

            let Some(line) = input.next_line()? else {
                break;
            };

            let current = slot;
            slot = slot.next();
            if self.mode == ScanMode::RecordAligned && current != RecordSlot::Identifier {
                continue;
            }
            if !self.ids.contains(line) {
                continue;
            }

            let id = line.to_vec();
            let record = read_record(&mut input, id)?;
            slot = RecordSlot::Identifier;

            record.write_to(writer).map_err(ExtractError::Write)?;
            self.ids.take(&record.id);
            stats.records_emitted += 1;
        }

        stats.lines_read = input.line_number();
        stats.ids_remaining = self.ids.len();
        stats.stopped_early = self.ids.is_empty();
        Ok(stats)
    }
}

/// Pulls the sequence, separator and quality lines following `id`.
fn read_record<R: BufRead>(input: &mut LineCursor<R>, id: Vec<u8>) -> Result<FastqRecord> {
    let line = input.line_number();
    let seq = pull(input, &id, line, RecordSlot::Sequence)?;
    let separator = pull(input, &id, line, RecordSlot::Separator)?;
    let qual = pull(input, &id, line, RecordSlot::Quality)?;
    Ok(FastqRecord {
        id,
        seq,
        separator,
        qual,
    })
}

fn pull<R: BufRead>(
    input: &mut LineCursor<R>,
    id: &[u8],
    line: u64,
    missing: RecordSlot,
) -> Result<Vec<u8>> {
    match input.next_line()? {
        Some(l) => Ok(l.to_vec()),
        None => Err(ExtractError::TruncatedRecord {
            id: lossy(id),
            line,
            missing,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXAMPLE: &str = "read1\nACGT\n+\nIIII\nread2\nTTTT\n+\nJJJJ\n";

    fn run(ids: &[&str], fastq: &str, mode: ScanMode) -> Result<(String, ExtractStats)> {
        let mut extractor = Extractor::new(ids.iter().collect()).with_mode(mode);
        let input = LineCursor::new(Cursor::new(fastq.as_bytes()), "mem.fq");
        let mut out = Vec::new();
        let stats = extractor.extract(input, &mut out, &ProgressBar::hidden())?;
        Ok((String::from_utf8(out).unwrap(), stats))
    }

    #[test]
    fn test_single_id_stops_after_record() {
        let (out, stats) = run(&["read1"], EXAMPLE, ScanMode::Raw).unwrap();
        assert_eq!(out, "read1\nACGT\n+\nIIII\n");
        assert_eq!(stats.lines_read, 4);
        assert_eq!(stats.records_emitted, 1);
        assert!(stats.stopped_early);
    }

    #[test]
    fn test_nothing_consumed_past_last_match() {
        let mut source = Cursor::new(EXAMPLE.as_bytes());
        let mut extractor = Extractor::new(["read1"].into_iter().collect());
        let mut out = Vec::new();
        extractor
            .extract(LineCursor::new(&mut source, "mem.fq"), &mut out, &ProgressBar::hidden())
            .unwrap();

        assert_eq!(source.position(), "read1\nACGT\n+\nIIII\n".len() as u64);
    }

    #[test]
    fn test_output_follows_input_order() {
        let fastq = "r1\nAAAA\n+\n1111\nr2\nCCCC\n+\n2222\nr3\nGGGG\n+\n3333\n";
        let (out, stats) = run(&["r3", "r1"], fastq, ScanMode::Raw).unwrap();
        assert_eq!(out, "r1\nAAAA\n+\n1111\nr3\nGGGG\n+\n3333\n");
        assert_eq!(stats.records_emitted, 2);
        assert_eq!(stats.ids_remaining, 0);
    }

    #[test]
    fn test_no_match_is_not_an_error() {
        let (out, stats) = run(&["read9"], EXAMPLE, ScanMode::Raw).unwrap();
        assert!(out.is_empty());
        assert_eq!(stats.lines_read, 8);
        assert_eq!(stats.ids_remaining, 1);
        assert!(!stats.stopped_early);
    }

    #[test]
    fn test_truncated_record() {
        let err = run(&["readX"], "readX\n", ScanMode::Raw).unwrap_err();
        match err {
            ExtractError::TruncatedRecord { id, line, missing } => {
                assert_eq!(id, "readX");
                assert_eq!(line, 1);
                assert_eq!(missing, RecordSlot::Sequence);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_truncated_record_writes_nothing_partial() {
        let mut extractor = Extractor::new(["r1", "r2"].into_iter().collect());
        let input = LineCursor::new(Cursor::new(&b"r1\nAA\n+\n##\nr2\nCC\n+\n"[..]), "mem.fq");
        let mut out = Vec::new();
        let err = extractor
            .extract(input, &mut out, &ProgressBar::hidden())
            .unwrap_err();

        assert!(matches!(
            err,
            ExtractError::TruncatedRecord {
                missing: RecordSlot::Quality,
                line: 5,
                ..
            }
        ));
        assert_eq!(out, b"r1\nAA\n+\n##\n");
    }

    #[test]
    fn test_truncated_record_missing_separator() {
        let err = run(&["r1"], "r1\nAA\n", ScanMode::Raw).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::TruncatedRecord {
                missing: RecordSlot::Separator,
                line: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_progress_message_updates_periodically() {
        let fastq = "r1\nAAAA\n+\n1111\nr2\nCCCC\n+\n2222\nr3\nGGGG\n+\n3333\n";
        let mut extractor = Extractor::new(["r1", "r3"].into_iter().collect());
        extractor.progress_interval = 4;
        let progress = ProgressBar::hidden();
        let mut out = Vec::new();
        extractor
            .extract(LineCursor::new(Cursor::new(fastq.as_bytes()), "mem.fq"), &mut out, &progress)
            .unwrap();

        assert_eq!(progress.message(), "Scanned 8 lines, extracted 1 records");
    }

    #[test]
    fn test_first_occurrence_only() {
        let fastq = "dup\nAAAA\n+\n1111\nother\nCCCC\n+\n2222\ndup\nGGGG\n+\n3333\n";
        let (out, _) = run(&["dup", "missing"], fastq, ScanMode::Raw).unwrap();
        assert_eq!(out, "dup\nAAAA\n+\n1111\n");
    }

    #[test]
    fn test_raw_mode_matches_any_line() {
        // The quality line of r1 equals the wanted identifier.
        let fastq = "r1\nACGT\n+\nIIII\nr2\nTTTT\n+\nJJJJ\n";
        let (out, _) = run(&["IIII"], fastq, ScanMode::Raw).unwrap();
        assert_eq!(out, "IIII\nr2\nTTTT\n+\n");
    }

    #[test]
    fn test_record_aligned_mode_skips_non_identifier_lines() {
        let fastq = "r1\nACGT\n+\nIIII\nIIII\nTTTT\n+\nJJJJ\n";
        let (out, stats) = run(&["IIII"], fastq, ScanMode::RecordAligned).unwrap();
        assert_eq!(out, "IIII\nTTTT\n+\nJJJJ\n");
        assert_eq!(stats.lines_read, 8);
    }

    #[test]
    fn test_record_aligned_mode_keeps_cycle_after_match() {
        let fastq = "a\n1\n+\n1\nb\nb\n+\n2\nc\n3\n+\n3\n";
        let (out, _) = run(&["b", "c"], fastq, ScanMode::RecordAligned).unwrap();
        assert_eq!(out, "b\nb\n+\n2\nc\n3\n+\n3\n");
    }

    #[test]
    fn test_empty_set_reads_nothing() {
        let (out, stats) = run(&[], EXAMPLE, ScanMode::Raw).unwrap();
        assert!(out.is_empty());
        assert_eq!(stats.lines_read, 0);
        assert!(stats.stopped_early);
    }
}
