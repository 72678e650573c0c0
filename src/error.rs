use thiserror::Error;

pub type Result<T> = std::result::Result<T, SarafError>;

#[derive(Debug, Error)]
pub enum SarafError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// sequence data before any header, empty identifiers, stray '>'
    #[error("malformed FASTA at line {line}: {msg}")]
    MalformedInput { line: usize, msg: String },

    #[error("cannot parse coverage from id '{id}': token '{token}' is not a number")]
    CoverageFormat { id: String, token: String },

    /// only raised by the strict reader
    #[error("invalid symbol '{symbol}' at position {position} of record '{id}'")]
    InvalidSymbol {
        id: String,
        symbol: char,
        position: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SarafError {
    pub fn malformed(line: usize, msg: impl Into<String>) -> Self {
        SarafError::MalformedInput {
            line,
            msg: msg.into(),
        }
    }
}
