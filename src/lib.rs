//! Record level transformations on FASTA assemblies: length and coverage
//! filtering, contig removal, reverse complement, concatenation and case
//! conversion.
//!
//! ```
//! use saraf::fasta::{fasta_to_string, read_fasta_str};
//! use saraf::transform::filter_by_min_length;
//!
//! # fn main() -> saraf::Result<()> {
//! let records = read_fasta_str(">a\nACGT\n>b\nAC\n")?;
//! let kept = filter_by_min_length(&records, 3);
//! assert_eq!(fasta_to_string(&kept, 60)?, ">a\nACGT\n");
//! # Ok(())
//! # }
//! ```

pub mod cleanup;
pub mod cli;
pub mod coverage;
pub mod dna;
pub mod ds;
pub mod error;
pub mod fasta;
pub mod pbar;
pub mod pipeline;
pub mod transform;
pub mod utils;

pub use ds::SequenceRecord;
pub use error::{Result, SarafError};
