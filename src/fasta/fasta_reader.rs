use std::io::BufRead;

use bio::alphabets::Alphabet;

use crate::dna::{first_invalid_symbol, nucleotide_alphabet};
use crate::ds::SequenceRecord;
use crate::error::{Result, SarafError};

/// Streaming FASTA parser. Yields records in file order.
///
/// Blank lines are skipped, sequence lines are concatenated until the next
/// header. Any sequence data before the first header is an error, as is a
/// header whose identifier is empty or contains '>'.
pub struct FastaReader<R> {
    reader: R,
    line: String,
    line_no: usize,
    pending: Option<SequenceRecord>,
    finished: bool,
    alphabet: Option<Alphabet>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: reader,
            line: String::new(),
            line_no: 0,
            pending: None,
            finished: false,
            alphabet: None,
        }
    }

    /// reject sequence symbols outside the IUPAC nucleotide alphabet
    pub fn strict(mut self, strict: bool) -> Self {
        self.alphabet = if strict {
            Some(nucleotide_alphabet())
        } else {
            None
        };
        self
    }

    fn fail(&mut self, err: SarafError) -> Option<Result<SequenceRecord>> {
        self.finished = true;
        self.pending = None;
        Some(Err(err))
    }
}

fn record_from_header(header: &str, line_no: usize) -> Result<SequenceRecord> {
    let record = SequenceRecord::from_header(header);
    if record.id.is_empty() {
        return Err(SarafError::malformed(line_no, "header without identifier"));
    }
    if record.id.contains('>') {
        let msg = format!("'>' inside identifier: {}", record.id);
        return Err(SarafError::malformed(line_no, msg));
    }
    Ok(record)
}

fn validate(record: SequenceRecord, alphabet: Option<&Alphabet>) -> Result<SequenceRecord> {
    if let Some(alphabet) = alphabet {
        if let Some((position, symbol)) = first_invalid_symbol(&record.seq, alphabet) {
            return Err(SarafError::InvalidSymbol {
                id: record.id,
                symbol: symbol as char,
                position: position,
            });
        }
    }
    Ok(record)
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.line.clear();
            let n = match self.reader.read_line(&mut self.line) {
                Ok(n) => n,
                Err(e) => return self.fail(e.into()),
            };

            if n == 0 {
                self.finished = true;
                let alphabet = self.alphabet.as_ref();
                return self.pending.take().map(|record| validate(record, alphabet));
            }
            self.line_no += 1;

            let line = self.line.trim_end();
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('>') {
                let record = match record_from_header(header, self.line_no) {
                    Ok(record) => record,
                    Err(e) => return self.fail(e),
                };
                if let Some(prev) = self.pending.replace(record) {
                    let res = validate(prev, self.alphabet.as_ref());
                    if res.is_err() {
                        self.finished = true;
                    }
                    return Some(res);
                }
                continue;
            }

            if line.contains('>') {
                let msg = format!("'>' inside sequence line: {}", line);
                return self.fail(SarafError::malformed(self.line_no, msg));
            }

            if self.pending.is_none() {
                let err = SarafError::malformed(self.line_no, "sequence data before the first header");
                return self.fail(err);
            }
            if let Some(record) = self.pending.as_mut() {
                record
                    .seq
                    .extend(line.bytes().filter(|b| !b.is_ascii_whitespace()));
            }
        }
    }
}
