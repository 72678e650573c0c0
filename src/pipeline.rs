//! One run of the tool: parse the whole input, apply one transformation,
//! serialize the result.

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::cleanup::AutoCleanFile;
use crate::coverage::{CoverageExtractor, LastTokenCoverage, MarkerCoverage};
use crate::ds::SequenceRecord;
use crate::error::{Result, SarafError};
use crate::fasta::{write_fasta, FastaReader, DEFAULT_LINE_WIDTH};
use crate::pbar::{get_spin_pb, DrawTarget};
use crate::transform;
use crate::utils::generate_tmp_filename;

/// How coverage is read out of a contig id.
#[derive(Debug, Clone, PartialEq)]
pub enum CoverageStyle {
    LastToken,
    Marker(String),
}

impl CoverageStyle {
    pub fn extractor(&self) -> Box<dyn CoverageExtractor> {
        match self {
            CoverageStyle::LastToken => Box::new(LastTokenCoverage),
            CoverageStyle::Marker(marker) => Box::new(MarkerCoverage::new(marker)),
        }
    }
}

impl Default for CoverageStyle {
    fn default() -> Self {
        CoverageStyle::LastToken
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FilterByLength { min_length: usize },
    FilterByCoverage { min_coverage: f64, style: CoverageStyle },
    RemoveContig { name: String },
    ReverseComplement { name: Option<String> },
    Concatenate,
    ToUppercase,
    ToLowercase,
}

impl Command {
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::FilterByCoverage { min_coverage, style } => {
                if !min_coverage.is_finite() || *min_coverage < 0.0 {
                    return Err(SarafError::InvalidArgument(format!(
                        "min coverage must be a non-negative number, got {}",
                        min_coverage
                    )));
                }
                if let CoverageStyle::Marker(marker) = style {
                    if marker.is_empty() || marker.contains('_') {
                        return Err(SarafError::InvalidArgument(format!(
                            "invalid coverage marker '{}'",
                            marker
                        )));
                    }
                }
            }
            Command::RemoveContig { name } | Command::ReverseComplement { name: Some(name) } => {
                if name.is_empty() {
                    return Err(SarafError::InvalidArgument(
                        "contig name must not be empty".to_string(),
                    ));
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Returns the transformed records and an optional message for the user.
    pub fn apply(&self, records: &[SequenceRecord]) -> Result<(Vec<SequenceRecord>, Option<String>)> {
        let res = match self {
            Command::FilterByLength { min_length } => (
                transform::filter_by_min_length(records, *min_length),
                None,
            ),
            Command::FilterByCoverage { min_coverage, style } => {
                let extractor = style.extractor();
                (
                    transform::filter_by_min_coverage(records, *min_coverage, extractor.as_ref())?,
                    None,
                )
            }
            Command::RemoveContig { name } => {
                let selection = transform::remove_by_name(records, name);
                let msg = if selection.found() {
                    format!("removed contig '{}'", name)
                } else {
                    format!("contig '{}' not found, output unchanged", name)
                };
                (selection.records, Some(msg))
            }
            Command::ReverseComplement { name } => {
                let selection = transform::reverse_complement(records, name.as_deref());
                let msg = match name {
                    Some(name) if !selection.found() => {
                        Some(format!("contig '{}' not found, output unchanged", name))
                    }
                    Some(name) => Some(format!("reverse complemented contig '{}'", name)),
                    None => None,
                };
                (selection.records, msg)
            }
            Command::Concatenate => (transform::concatenate(records), None),
            Command::ToUppercase => (transform::to_uppercase(records), None),
            Command::ToLowercase => (transform::to_lowercase(records), None),
        };
        Ok(res)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::FilterByLength { min_length } => {
                write!(f, "filter-by-length(min_length={})", min_length)
            }
            Command::FilterByCoverage { min_coverage, style } => {
                write!(f, "filter-by-coverage(min_coverage={}, style={:?})", min_coverage, style)
            }
            Command::RemoveContig { name } => write!(f, "remove-contig(name={})", name),
            Command::ReverseComplement { name: Some(name) } => {
                write!(f, "reverse-complement(name={})", name)
            }
            Command::ReverseComplement { name: None } => write!(f, "reverse-complement(all)"),
            Command::Concatenate => write!(f, "concatenate"),
            Command::ToUppercase => write!(f, "to-uppercase"),
            Command::ToLowercase => write!(f, "to-lowercase"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub line_width: usize,
    pub strict: bool,
    pub progress: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            strict: false,
            progress: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub records_in: usize,
    pub records_out: usize,
    pub message: Option<String>,
}

pub fn run<R: BufRead, W: Write>(
    command: &Command,
    options: &RunOptions,
    reader: R,
    writer: W,
) -> Result<Report> {
    command.validate()?;

    let draw_target = if options.progress {
        DrawTarget::Stderr
    } else {
        DrawTarget::Hidden
    };
    let pb = get_spin_pb("reading records".to_string(), draw_target);
    let mut records = vec![];
    for record in FastaReader::new(reader).strict(options.strict) {
        records.push(record?);
        pb.inc(1);
    }
    pb.finish_and_clear();
    tracing::debug!("read {} records", records.len());

    let (out, message) = command.apply(&records)?;
    write_fasta(&out, writer, options.line_width)?;

    Ok(Report {
        records_in: records.len(),
        records_out: out.len(),
        message,
    })
}

/// Runs `command` from `input` into `output`. The result goes to a temporary
/// sibling of `output` first and is only renamed into place on success.
pub fn run_files(
    input: &Path,
    output: &Path,
    command: &Command,
    options: &RunOptions,
) -> Result<Report> {
    command.validate()?;

    let reader = BufReader::new(File::open(input)?);

    let tmp = AutoCleanFile::new(generate_tmp_filename(output));
    tracing::debug!("writing to temporary file {}", tmp.path().display());

    let report = {
        let mut writer = BufWriter::new(File::create(tmp.path())?);
        let report = run(command, options, reader, &mut writer)?;
        writer.flush()?;
        report
    };

    tmp.persist(output)?;
    Ok(report)
}
