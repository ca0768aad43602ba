//! Transparent decompression for record input streams.
//!
//! Detection is automatic and per stream: the first two bytes are read off
//! the head (and spliced back in front of the remainder), and a gzip magic
//! (31, 139) routes the stream through [`flate2::read::MultiGzDecoder`]. Multi-member gzip decodes
//! end-to-end, which also covers BGZF output from `bgzip`/htslib since BGZF
//! is a sequence of independent gzip members. Anything else passes through
//! untouched, so plain text and compressed files are interchangeable on the
//! argument list, stdin included.

use crate::error::{BiorecError, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Gzip magic bytes (ID1, ID2)
const GZIP_MAGIC: [u8; 2] = [31, 139];

/// A buffered input stream with compression already resolved.
pub type InputStream = Box<dyn BufRead + Send>;

/// Open a named input file, or stdin for `-`, decompressing transparently.
///
/// A file that cannot be opened is the record pipeline's only fatal
/// resource error; everything downstream propagates as plain I/O errors.
pub fn open_input(path: &str) -> Result<InputStream> {
    if path == "-" {
        return open_stdin();
    }
    let file = File::open(Path::new(path)).map_err(|source| BiorecError::OpenInput {
        path: path.to_string(),
        source,
    })?;
    wrap_decompress(BufReader::new(file))
}

/// Open stdin as an input stream, decompressing transparently.
pub fn open_stdin() -> Result<InputStream> {
    // Locking would tie the stream to a handle lifetime; a fresh stdin()
    // per read is fine for a single-threaded pull model.
    wrap_decompress(BufReader::new(io::stdin()))
}

/// Sniff the stream head and wrap in a gzip decoder when the magic matches.
///
/// A single read may legally deliver one byte on a pipe even when more is
/// coming, so the loop keeps reading until two head bytes are in hand or the
/// stream ends. The consumed bytes are chained back in front of the rest.
fn wrap_decompress<R: BufRead + Send + 'static>(mut reader: R) -> Result<InputStream> {
    let mut head = [0u8; 2];
    let mut filled = 0;
    while filled < head.len() {
        let n = reader.read(&mut head[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    let restored = io::Cursor::new(head[..filled].to_vec()).chain(reader);
    if head[..filled] == GZIP_MAGIC {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(restored))))
    } else {
        Ok(Box::new(BufReader::new(restored)))
    }
}
