//! Error types for biorec

use thiserror::Error;

/// Result type alias for biorec operations
pub type Result<T> = std::result::Result<T, BiorecError>;

/// Error types that can occur in biorec
#[derive(Debug, Error)]
pub enum BiorecError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A named input file could not be opened.
    ///
    /// This is the only unconditional abort in the record pipeline: the host
    /// is expected to terminate the run when it sees this variant.
    #[error("cannot open input '{path}': {source}")]
    OpenInput {
        /// Path given on the argument list
        path: String,
        /// Underlying open failure
        source: std::io::Error,
    },

    /// Malformed FASTA/FASTQ framing
    #[error("invalid FASTA/FASTQ record at line {line}: {msg}")]
    InvalidFastx {
        /// Line number where framing broke down
        line: usize,
        /// Error message
        msg: String,
    },
}
