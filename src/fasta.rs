use std::io::BufRead;

use crate::ds::SequenceRecord;
use crate::error::Result;

pub mod fasta_reader;
pub mod fasta_writer;

pub use fasta_reader::FastaReader;
pub use fasta_writer::{FastaWriter, DEFAULT_LINE_WIDTH};

pub fn read_fasta<R: BufRead>(reader: R) -> Result<Vec<SequenceRecord>> {
    FastaReader::new(reader).collect::<_>()
}

pub fn read_fasta_str(text: &str) -> Result<Vec<SequenceRecord>> {
    read_fasta(text.as_bytes())
}

pub fn write_fasta<W: std::io::Write>(
    records: &[SequenceRecord],
    writer: W,
    line_width: usize,
) -> Result<()> {
    let mut writer = FastaWriter::with_line_width(writer, line_width);
    for record in records {
        writer.write_record(record)?;
    }
    writer.flush()
}

pub fn fasta_to_string(records: &[SequenceRecord], line_width: usize) -> Result<String> {
    let mut buf = Vec::new();
    write_fasta(records, &mut buf, line_width)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
