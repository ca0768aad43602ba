//! I/O module: record framing, multi-file iteration, decompression.
//!
//! Single-threaded and pull-based: the host drives everything by calling
//! [`RecordSource::next_record`], and records arrive in strict argument
//! order, then stream order. Compressed inputs are detected per stream and
//! decompressed transparently.

pub mod compression;
mod fastx;
mod source;

pub use compression::{open_input, open_stdin, InputStream};
pub use fastx::{FastxReader, FastxRecord};
pub use source::{RecordBuffer, RecordSource};
