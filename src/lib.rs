//! biorec: streaming record reader and sequence toolkit for bio text formats
//!
//! # Overview
//!
//! biorec extends a line-oriented text-processing host with domain-aware
//! record parsing for tabular formats (BED, SAM, VCF, GFF/GTF) and multi-line
//! sequence formats (FASTA/FASTQ), plus a library of numerically careful
//! sequence and quality functions.
//!
//! ## Key Features
//!
//! - **Streaming**: One record at a time, single growable buffer, no
//!   whole-file materialization
//! - **Transparent decompression**: gzip/BGZF detected per stream
//! - **Format catalog**: Static field tables bind column names on demand
//! - **Sequence toolkit**: Reverse complement, Phred statistics,
//!   quality-adaptive trimming, genetic-code translation
//!
//! ## Quick Start
//!
//! ```no_run
//! use biorec::catalog::FormatId;
//! use biorec::io::{RecordBuffer, RecordSource};
//!
//! # fn main() -> biorec::Result<()> {
//! let mut source = RecordSource::new(vec!["reads.fq.gz".to_string()], FormatId::Fastx);
//! let mut buf = RecordBuffer::new();
//!
//! while source.next_record(&mut buf, None)? {
//!     // buf holds "name\tseq\tqual\tcomment" for the current record
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`]: Named formats and column-name binding
//! - [`io`]: Record framing, multi-file iteration, decompression
//! - [`ops`]: Sequence and quality functions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod error;
pub mod io;
pub mod ops;

// Re-export commonly used types
pub use catalog::{resolve_format, Binder, FormatId};
pub use error::{BiorecError, Result};
pub use io::{FastxReader, FastxRecord, RecordBuffer, RecordSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
