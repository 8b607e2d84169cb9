use std::io::{self, Write};

/// One 4-line FASTQ record, each line held without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub id: Vec<u8>,
    pub seq: Vec<u8>,
    pub separator: Vec<u8>,
    pub qual: Vec<u8>,
}

impl FastqRecord {
    /// Writes the record verbatim, one `\n`-terminated line per field.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        for line in [&self.id, &self.seq, &self.separator, &self.qual] {
            writer.write_all(line)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}
