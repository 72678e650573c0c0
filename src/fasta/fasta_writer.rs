use std::io::Write;

use crate::ds::{header_to_id, SequenceRecord};
use crate::error::Result;

/// conventional FASTA line width
pub const DEFAULT_LINE_WIDTH: usize = 60;

pub struct FastaWriter<W: Write> {
    writer: W,
    line_width: usize,
}

impl<W: Write> FastaWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_line_width(writer, DEFAULT_LINE_WIDTH)
    }

    /// line_width == 0 writes every sequence on a single line
    pub fn with_line_width(writer: W, line_width: usize) -> Self {
        Self {
            writer: writer,
            line_width: line_width,
        }
    }

    pub fn write_record(&mut self, record: &SequenceRecord) -> Result<()> {
        self.writer.write_all(b">")?;
        self.writer.write_all(header_line(record).as_bytes())?;
        self.writer.write_all(b"\n")?;

        if record.seq.is_empty() {
            return Ok(());
        }

        if self.line_width == 0 {
            self.writer.write_all(&record.seq)?;
            self.writer.write_all(b"\n")?;
            return Ok(());
        }

        for chunk in record.seq.chunks(self.line_width) {
            self.writer.write_all(chunk)?;
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// header text after '>'. The description is written as is when it already
/// leads with the id, otherwise the id is prepended so it survives a re-parse.
pub fn header_line(record: &SequenceRecord) -> String {
    if record.description.is_empty() {
        record.id.clone()
    } else if header_to_id(&record.description) == record.id {
        record.description.clone()
    } else {
        format!("{} {}", record.id, record.description)
    }
}
