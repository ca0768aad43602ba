//! Pull-based record source over command-line-style input arguments.
//!
//! [`RecordSource`] walks a list of arguments left to right, treating
//! `name=value` entries as assignments (handed to the caller's [`Binder`],
//! then skipped), empty entries as deleted, and everything else as a file
//! name (`-` meaning stdin). Exactly one stream is open at a time; when it is
//! exhausted the source advances to the next eligible argument. If the whole
//! list contains no file name at all, stdin is read once instead.
//!
//! Records are delivered into a caller-owned [`RecordBuffer`] whose capacity
//! only ever grows; the buffer content is replaced only on successful
//! delivery, so a `false` return leaves the previous record intact.
//!
//! Tabular formats are framed by a configurable record-terminator byte
//! (default `\n`, with a trailing `\r` also stripped). The `fastx` format
//! instead pulls one complete multi-line unit from [`FastxReader`] and
//! synthesizes the tab-joined record `name\tseq\tqual\tcomment`, quality
//! empty for FASTA input.
//!
//! # Examples
//!
//! ```no_run
//! use biorec::catalog::FormatId;
//! use biorec::io::{RecordBuffer, RecordSource};
//!
//! # fn main() -> biorec::Result<()> {
//! let args = vec!["sample=NA12878".to_string(), "calls.vcf.gz".to_string()];
//! let mut source = RecordSource::new(args, FormatId::Vcf);
//! let mut buf = RecordBuffer::new();
//!
//! while source.next_record(&mut buf, None)? {
//!     // one data line per call, "#" header lines already consumed
//! }
//! # Ok(())
//! # }
//! ```

use crate::catalog::{Binder, FormatId};
use crate::error::Result;
use crate::io::compression::{open_input, open_stdin, InputStream};
use crate::io::fastx::FastxReader;
use std::io::BufRead;

/// Owned, growable byte buffer holding the current record's raw text.
///
/// Capacity grows monotonically and never shrinks between records; growth is
/// explicit via [`RecordBuffer::grow_to`]. Logical length is tracked
/// separately from capacity.
#[derive(Debug, Default)]
pub struct RecordBuffer {
    data: Vec<u8>,
}

impl RecordBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current record bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Current record as UTF-8, lossily for non-UTF-8 input bytes.
    pub fn as_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    /// Logical length of the current record.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no record bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocated capacity, which only ever increases.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Ensure capacity for at least `min_capacity` bytes.
    pub fn grow_to(&mut self, min_capacity: usize) {
        if self.data.capacity() < min_capacity {
            self.data.reserve(min_capacity - self.data.len());
        }
    }

    /// Replace the buffer content with a new record.
    fn set_content(&mut self, bytes: &[u8]) {
        self.grow_to(bytes.len() + 1);
        self.data.clear();
        self.data.extend_from_slice(bytes);
    }
}

/// Framing for the currently open stream.
enum StreamKind {
    /// Terminator-bounded records
    Lines(InputStream),
    /// Multi-line FASTA/FASTQ units
    Fastx(FastxReader<InputStream>),
}

/// One open input stream plus its per-file state.
struct ActiveStream {
    kind: StreamKind,
    is_stdin: bool,
    /// Still consuming leading header-sentinel lines
    in_header: bool,
}

/// Streaming, pull-based iterator over one or more record inputs.
pub struct RecordSource {
    args: Vec<String>,
    arg_index: usize,
    format: FormatId,
    record_terminator: u8,
    echo_headers: bool,
    header_lines: Vec<String>,
    stream: Option<ActiveStream>,
    /// A file argument was seen, so the stdin fallback never applies
    file_arg_seen: bool,
    stdin_used: bool,
    exhausted: bool,
    records_in_file: u64,
    records_total: u64,
    scratch: Vec<u8>,
}

impl RecordSource {
    /// Create a source over command-line-style arguments for one format.
    pub fn new(args: Vec<String>, format: FormatId) -> Self {
        Self {
            args,
            arg_index: 0,
            format,
            record_terminator: b'\n',
            echo_headers: false,
            header_lines: Vec::new(),
            stream: None,
            file_arg_seen: false,
            stdin_used: false,
            exhausted: false,
            records_in_file: 0,
            records_total: 0,
            scratch: Vec::with_capacity(256),
        }
    }

    /// Use a record terminator other than `\n` for tabular formats.
    pub fn with_record_terminator(mut self, terminator: u8) -> Self {
        self.record_terminator = terminator;
        self
    }

    /// Retain consumed header-sentinel lines for the caller to echo.
    pub fn with_header_echo(mut self) -> Self {
        self.echo_headers = true;
        self
    }

    /// Records delivered from the current file (resets per file).
    pub fn records_in_file(&self) -> u64 {
        self.records_in_file
    }

    /// Records delivered across all inputs.
    pub fn records_total(&self) -> u64 {
        self.records_total
    }

    /// Drain header lines consumed since the last call (echo mode only).
    pub fn take_header_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.header_lines)
    }

    /// Deliver the next record into `buf`.
    ///
    /// Returns `Ok(true)` with `buf` holding the record text, or `Ok(false)`
    /// once every input is exhausted, in which case `buf` keeps its previous
    /// content. Assignments encountered while advancing the argument list go
    /// through `binder` when one is supplied.
    pub fn next_record(
        &mut self,
        buf: &mut RecordBuffer,
        mut binder: Option<&mut (dyn Binder + '_)>,
    ) -> Result<bool> {
        loop {
            if self.exhausted {
                return Ok(false);
            }

            if self.stream.is_none() && !self.open_next_stream(binder.as_deref_mut())? {
                self.exhausted = true;
                return Ok(false);
            }

            match self.read_from_stream()? {
                Some(()) => {
                    buf.set_content(&self.scratch);
                    self.records_in_file += 1;
                    self.records_total += 1;
                    return Ok(true);
                }
                None => {
                    // End of the current stream; stdin is left open for the
                    // process, files are closed on drop.
                    self.stream = None;
                }
            }
        }
    }

    /// Scan forward through the argument list and open the next stream.
    ///
    /// Returns `false` when no eligible input remains.
    fn open_next_stream(&mut self, mut binder: Option<&mut (dyn Binder + '_)>) -> Result<bool> {
        while self.arg_index < self.args.len() {
            let arg = std::mem::take(&mut self.args[self.arg_index]);
            self.arg_index += 1;

            if arg.is_empty() {
                continue;
            }
            if let Some((name, value)) = split_assignment(&arg) {
                if let Some(b) = binder.as_deref_mut() {
                    b.bind_value(name, value);
                }
                continue;
            }

            let input = if arg == "-" {
                self.stdin_used = true;
                open_stdin()?
            } else {
                open_input(&arg)?
            };
            self.file_arg_seen = true;
            self.install_stream(input, arg == "-");
            return Ok(true);
        }

        // No file argument anywhere on the list: read stdin, once.
        if !self.file_arg_seen && !self.stdin_used {
            self.stdin_used = true;
            let input = open_stdin()?;
            self.install_stream(input, true);
            return Ok(true);
        }

        Ok(false)
    }

    fn install_stream(&mut self, input: InputStream, is_stdin: bool) {
        let kind = if self.format.is_sequence() {
            StreamKind::Fastx(FastxReader::from_reader(input))
        } else {
            StreamKind::Lines(input)
        };
        self.stream = Some(ActiveStream {
            kind,
            is_stdin,
            in_header: self.format.spec().header_sentinel.is_some(),
        });
        self.records_in_file = 0;
    }

    /// Read one logical record into the scratch buffer.
    ///
    /// `None` means the current stream is exhausted.
    fn read_from_stream(&mut self) -> Result<Option<()>> {
        let sentinel = self.format.spec().header_sentinel;
        let terminator = self.record_terminator;
        let stream = match self.stream.as_mut() {
            Some(stream) => stream,
            None => return Ok(None),
        };

        match &mut stream.kind {
            StreamKind::Lines(reader) => loop {
                self.scratch.clear();
                let n = reader.read_until(terminator, &mut self.scratch)?;
                if n == 0 {
                    return Ok(None);
                }
                if self.scratch.last() == Some(&terminator) {
                    self.scratch.pop();
                    if terminator == b'\n' && self.scratch.last() == Some(&b'\r') {
                        self.scratch.pop();
                    }
                }

                if stream.in_header {
                    if let Some(s) = sentinel {
                        if self.scratch.first() == Some(&s) {
                            if self.echo_headers {
                                self.header_lines
                                    .push(String::from_utf8_lossy(&self.scratch).into_owned());
                            }
                            continue;
                        }
                    }
                    stream.in_header = false;
                }
                return Ok(Some(()));
            },
            StreamKind::Fastx(reader) => match reader.next() {
                None => Ok(None),
                Some(Err(e)) => Err(e),
                Some(Ok(record)) => {
                    // Synthesized tab-joined record: name, seq, qual, comment.
                    self.scratch.clear();
                    self.scratch.extend_from_slice(record.name.as_bytes());
                    self.scratch.push(b'\t');
                    self.scratch.extend_from_slice(&record.seq);
                    self.scratch.push(b'\t');
                    self.scratch.extend_from_slice(&record.qual);
                    self.scratch.push(b'\t');
                    self.scratch.extend_from_slice(record.comment.as_bytes());
                    Ok(Some(()))
                }
            },
        }
    }

    /// Whether the currently open stream is stdin.
    pub fn reading_stdin(&self) -> bool {
        self.stream.as_ref().map(|s| s.is_stdin).unwrap_or(false)
    }
}

/// Split a `name=value` argument, if it is one.
///
/// The name must look like a host identifier (letter or underscore, then
/// alphanumerics/underscores); anything else, such as a path that happens
/// to contain `=`, is treated as a filename.
fn split_assignment(arg: &str) -> Option<(&str, &str)> {
    let (name, value) = arg.split_once('=')?;
    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((name, value))
}
