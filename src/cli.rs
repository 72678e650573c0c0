use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueEnum};
use log::Level;

use std::{fmt, path::PathBuf};

use crate::fasta::DEFAULT_LINE_WIDTH;
use crate::pipeline::{Command, CoverageStyle, RunOptions};

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Residues per sequence line in the output, 0 disables wrapping
    #[arg(short = 'w', long, global = true, default_value_t = DEFAULT_LINE_WIDTH)]
    pub line_width: usize,

    /// Reject sequences with symbols outside the IUPAC nucleotide alphabet
    #[arg(long, global = true, default_value = "false", action = ArgAction::SetTrue)]
    pub strict: bool,

    /// Show a record counter while reading
    #[arg(long, global = true, default_value = "false", action = ArgAction::SetTrue)]
    pub progress: bool,

    /// Logging verbosity level
    #[arg(short = 'L', long, global = true, default_value = "info")]
    pub level: Level,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct IoArgs {
    /// Input FASTA file
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Output FASTA file, replaced only if the run succeeds
    #[arg(short = 'o', long)]
    pub output: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum CoverageStyleArg {
    /// Last underscore delimited token of the id
    #[default]
    LastToken,
    /// Token following the --marker segment
    Marker,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Keep contigs of at least MIN_LENGTH bp
    #[command(visible_alias = "fl")]
    FilterByLength {
        min_length: usize,
        #[command(flatten)]
        io: IoArgs,
    },

    /// Keep contigs whose id reports coverage of at least MIN_COVERAGE
    #[command(visible_alias = "fc")]
    FilterByCoverage {
        min_coverage: f64,
        /// Where the coverage value sits in the contig id
        #[arg(long, value_enum, default_value_t = CoverageStyleArg::LastToken)]
        coverage_style: CoverageStyleArg,
        /// Segment preceding the coverage value, used with --coverage-style marker
        #[arg(long, default_value = "cov")]
        marker: String,
        #[command(flatten)]
        io: IoArgs,
    },

    /// Remove a contig by id
    #[command(visible_alias = "rm")]
    RemoveContig {
        #[arg(short = 'c', long)]
        contig: String,
        #[command(flatten)]
        io: IoArgs,
    },

    /// Reverse complement the whole assembly or a single contig
    #[command(visible_alias = "rc")]
    ReverseComplement {
        #[arg(short = 'c', long)]
        contig: Option<String>,
        #[command(flatten)]
        io: IoArgs,
    },

    /// Concatenate all contigs into one
    #[command(visible_alias = "concat")]
    Concatenate {
        #[command(flatten)]
        io: IoArgs,
    },

    /// Convert all sequences to uppercase
    #[command(visible_alias = "u")]
    ToUppercase {
        #[command(flatten)]
        io: IoArgs,
    },

    /// Convert all sequences to lowercase
    #[command(visible_alias = "l")]
    ToLowercase {
        #[command(flatten)]
        io: IoArgs,
    },
}

impl Args {
    pub fn io(&self) -> &IoArgs {
        match &self.command {
            Commands::FilterByLength { io, .. }
            | Commands::FilterByCoverage { io, .. }
            | Commands::RemoveContig { io, .. }
            | Commands::ReverseComplement { io, .. }
            | Commands::Concatenate { io }
            | Commands::ToUppercase { io }
            | Commands::ToLowercase { io } => io,
        }
    }

    pub fn to_command(&self) -> Command {
        match &self.command {
            Commands::FilterByLength { min_length, .. } => Command::FilterByLength {
                min_length: *min_length,
            },
            Commands::FilterByCoverage {
                min_coverage,
                coverage_style,
                marker,
                ..
            } => Command::FilterByCoverage {
                min_coverage: *min_coverage,
                style: match coverage_style {
                    CoverageStyleArg::LastToken => CoverageStyle::LastToken,
                    CoverageStyleArg::Marker => CoverageStyle::Marker(marker.clone()),
                },
            },
            Commands::RemoveContig { contig, .. } => Command::RemoveContig {
                name: contig.clone(),
            },
            Commands::ReverseComplement { contig, .. } => Command::ReverseComplement {
                name: contig.clone(),
            },
            Commands::Concatenate { .. } => Command::Concatenate,
            Commands::ToUppercase { .. } => Command::ToUppercase,
            Commands::ToLowercase { .. } => Command::ToLowercase,
        }
    }

    pub fn options(&self) -> RunOptions {
        RunOptions {
            line_width: self.line_width,
            strict: self.strict,
            progress: self.progress,
        }
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let io = self.io();
        write!(
            f,
            "command={}, input={}, output={}, line_width={}, strict={}, progress={}, level={}",
            self.to_command(),
            io.input.display(),
            io.output.display(),
            self.line_width,
            self.strict,
            self.progress,
            self.level,
        )
    }
}
