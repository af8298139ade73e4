use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SeqAlignError {
    /// One of the sequences to align (1 or 2) is empty
    EmptySequence(usize),

    /// A sequence contains a symbol that can't be aligned (non-ASCII or the gap symbol)
    InvalidSymbol { which: usize, pos: usize, symbol: u8 },

    /// The given alignment mode is neither global nor local
    InvalidAlignmentMode(String),

    /// The scoring matrix text could not be parsed
    MalformedMatrix { line: usize, reason: String },

    /// The traceback hit a cell without predecessor before reaching its start
    TracebackError { i: usize, j: usize },

    /// The FASTA file did not contain any record
    NoFastaRecords(PathBuf),

    /// Error variant when we couldn't read from a file
    FileReadError { path: PathBuf, source: io::Error },

    /// Error variant when we could not serialize the alignment result
    SerializationError { source: serde_json::Error },

    /// Other IO errors
    IOError(io::Error),
}

impl Error for SeqAlignError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::FileReadError { ref source, .. } => Some(source),
            Self::SerializationError { ref source } => Some(source),
            Self::IOError(ref source) => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for SeqAlignError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl From<serde_json::Error> for SeqAlignError {
    fn from(value: serde_json::Error) -> Self {
        Self::SerializationError { source: value }
    }
}

impl Display for SeqAlignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::EmptySequence(which) =>
                write!(f, "Sequence {which} must be a non-empty sequence!"),
            Self::InvalidSymbol { which, pos, symbol } =>
                write!(f, "Sequence {which} contains an invalid symbol {:?} at position {pos}!",
                    symbol as char),
            Self::InvalidAlignmentMode(ref mode) =>
                write!(f, "Unknown alignment mode '{mode}', expected 'global' or 'local'."),
            Self::MalformedMatrix { line, ref reason } =>
                write!(f, "Malformed scoring matrix (line {line}): {reason}"),
            Self::TracebackError { i, j } =>
                write!(f, "Traceback got stuck at cell ({i}, {j})!"),
            Self::NoFastaRecords(ref path) =>
                write!(f, "No FASTA records found in {}", path.display()),
            Self::FileReadError { ref path, .. } =>
                write!(f, "Could not read from file {}!", path.display()),
            Self::SerializationError { .. } =>
                write!(f, "Could not serialize the alignment!"),
            Self::IOError(ref err) =>
                err.fmt(f),
        }
    }
}
