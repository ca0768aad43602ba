//! FASTA/FASTQ record framing.
//!
//! One [`FastxReader`] handles both shapes of sequence record:
//! - **FASTA**: `>` header, sequence possibly spanning many lines, terminated
//!   by the next header or end of stream.
//! - **FASTQ**: `@` header, sequence (also possibly wrapped), a `+` separator
//!   line, then quality lines accumulated until the quality string reaches
//!   sequence length.
//!
//! The header line splits at the first whitespace run into `name` and
//! `comment`. Quality is empty for FASTA records, so downstream consumers can
//! treat every record as the same four-part shape.
//!
//! # Examples
//!
//! ```
//! use biorec::io::FastxReader;
//! use std::io::{BufReader, Cursor};
//!
//! let data = b"@r1 lane3\nACGT\n+\n!!!!\n>r2\nGG\nCC\n";
//! let mut reader = FastxReader::from_reader(BufReader::new(Cursor::new(data)));
//!
//! let r1 = reader.next().unwrap().unwrap();
//! assert_eq!(r1.name, "r1");
//! assert_eq!(r1.comment, "lane3");
//! assert_eq!(r1.seq, b"ACGT");
//! assert_eq!(r1.qual, b"!!!!");
//!
//! let r2 = reader.next().unwrap().unwrap();
//! assert_eq!(r2.name, "r2");
//! assert_eq!(r2.seq, b"GGCC");
//! assert!(r2.qual.is_empty());
//! ```

use crate::error::{BiorecError, Result};
use std::io::BufRead;

/// A parsed FASTA/FASTQ record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastxRecord {
    /// Sequence name (header line up to the first whitespace, marker stripped)
    pub name: String,
    /// Rest of the header line, empty when absent
    pub comment: String,
    /// Sequence bytes with line breaks removed
    pub seq: Vec<u8>,
    /// Quality bytes (Phred+33); empty for FASTA records
    pub qual: Vec<u8>,
}

impl FastxRecord {
    /// Whether this record carries quality values (i.e. came from FASTQ).
    pub fn has_quality(&self) -> bool {
        !self.qual.is_empty()
    }
}

/// Streaming FASTA/FASTQ parser over any buffered reader.
pub struct FastxReader<R: BufRead> {
    reader: R,
    line: String,
    line_number: usize,
    /// Header line already consumed while scanning past the previous record
    pending_header: Option<String>,
    finished: bool,
}

impl<R: BufRead> FastxReader<R> {
    /// Create a reader over an already-buffered stream.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: String::with_capacity(256),
            line_number: 0,
            pending_header: None,
            finished: false,
        }
    }

    /// Line number of the most recently read input line.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn read_line(&mut self) -> Result<Option<&str>> {
        self.line.clear();
        let n = self.reader.read_line(&mut self.line)?;
        if n == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(self.line.trim_end_matches(['\n', '\r'])))
    }

    fn framing_error(&self, msg: &str) -> BiorecError {
        BiorecError::InvalidFastx {
            line: self.line_number,
            msg: msg.to_string(),
        }
    }

    /// Read one complete record, or `None` at end of stream.
    fn read_record(&mut self) -> Result<Option<FastxRecord>> {
        // Locate the next header, tolerating blank or stray lines between
        // records the way kseq-style scanners do.
        let header = match self.pending_header.take() {
            Some(h) => h,
            None => loop {
                match self.read_line()? {
                    None => return Ok(None),
                    Some(line) if line.starts_with('>') || line.starts_with('@') => {
                        break line.to_string()
                    }
                    Some(_) => continue,
                }
            },
        };

        let is_fastq = header.starts_with('@');
        let body = &header[1..];
        let (name, comment) = match body.split_once(char::is_whitespace) {
            Some((n, c)) => (n.to_string(), c.trim().to_string()),
            None => (body.to_string(), String::new()),
        };

        let mut seq: Vec<u8> = Vec::new();
        let mut qual: Vec<u8> = Vec::new();

        if is_fastq {
            // Sequence lines until the '+' separator.
            loop {
                match self.read_line()? {
                    None => return Err(self.framing_error("unexpected end of file in sequence")),
                    Some(line) if line.starts_with('+') => break,
                    Some(line) => seq.extend_from_slice(line.as_bytes()),
                }
            }
            // Quality lines until quality catches up with the sequence.
            while qual.len() < seq.len() {
                match self.read_line()? {
                    None => return Err(self.framing_error("unexpected end of file in quality")),
                    Some(line) => qual.extend_from_slice(line.as_bytes()),
                }
            }
            if qual.len() != seq.len() {
                return Err(self.framing_error(&format!(
                    "quality length ({}) exceeds sequence length ({})",
                    qual.len(),
                    seq.len()
                )));
            }
        } else {
            // FASTA: sequence until the next header or EOF.
            loop {
                match self.read_line()? {
                    None => {
                        self.finished = true;
                        break;
                    }
                    Some(line) if line.starts_with('>') || line.starts_with('@') => {
                        self.pending_header = Some(line.to_string());
                        break;
                    }
                    Some(line) => seq.extend_from_slice(line.trim().as_bytes()),
                }
            }
        }

        Ok(Some(FastxRecord {
            name,
            comment,
            seq,
            qual,
        }))
    }
}

impl<R: BufRead> Iterator for FastxReader<R> {
    type Item = Result<FastxRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished && self.pending_header.is_none() {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    fn reader(data: &[u8]) -> FastxReader<BufReader<Cursor<Vec<u8>>>> {
        FastxReader::from_reader(BufReader::new(Cursor::new(data.to_vec())))
    }

    fn collect(data: &[u8]) -> Vec<FastxRecord> {
        reader(data).collect::<Result<Vec<_>>>().unwrap()
    }

    #[test]
    fn test_single_fastq() {
        let records = collect(b"@r1\nACGT\n+\n!!!!\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "r1");
        assert_eq!(records[0].comment, "");
        assert_eq!(records[0].seq, b"ACGT");
        assert_eq!(records[0].qual, b"!!!!");
    }

    #[test]
    fn test_fastq_comment() {
        let records = collect(b"@r1 length=4 pass\nACGT\n+r1\nIIII\n");
        assert_eq!(records[0].name, "r1");
        assert_eq!(records[0].comment, "length=4 pass");
    }

    #[test]
    fn test_multiline_fastq() {
        let records = collect(b"@r1\nACGT\nACGT\n+\n!!!!\n!!!!\n");
        assert_eq!(records[0].seq, b"ACGTACGT");
        assert_eq!(records[0].qual, b"!!!!!!!!");
    }

    #[test]
    fn test_quality_with_at_sign() {
        // '@' is a legal quality byte (Q31); must not be mistaken for a header
        let records = collect(b"@r1\nACGT\n+\n@@@@\n@r2\nGGGG\n+\nIIII\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].qual, b"@@@@");
        assert_eq!(records[1].name, "r2");
    }

    #[test]
    fn test_single_fasta() {
        let records = collect(b">chr1 assembled\nACGTACGT\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "chr1");
        assert_eq!(records[0].comment, "assembled");
        assert_eq!(records[0].seq, b"ACGTACGT");
        assert!(records[0].qual.is_empty());
    }

    #[test]
    fn test_multiline_fasta() {
        let records = collect(b">s\nAC\nGT\nAC\n>t\nGG\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].seq, b"ACGTAC");
        assert_eq!(records[1].name, "t");
        assert_eq!(records[1].seq, b"GG");
    }

    #[test]
    fn test_mixed_fasta_fastq() {
        let records = collect(b">a\nACGT\n@b\nGG\n+\nII\n");
        assert_eq!(records.len(), 2);
        assert!(!records[0].has_quality());
        assert!(records[1].has_quality());
    }

    #[test]
    fn test_blank_lines_between_records() {
        let records = collect(b"\n>a\nAC\n\n>b\nGT\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].seq, b"AC");
        assert_eq!(records[1].seq, b"GT");
    }

    #[test]
    fn test_crlf_input() {
        let records = collect(b"@r1\r\nACGT\r\n+\r\n!!!!\r\n");
        assert_eq!(records[0].seq, b"ACGT");
        assert_eq!(records[0].qual, b"!!!!");
    }

    #[test]
    fn test_truncated_quality_is_error() {
        let mut r = reader(b"@r1\nACGT\n+\n!!\n");
        let result = r.next().unwrap();
        assert!(matches!(result, Err(BiorecError::InvalidFastx { .. })));
    }

    #[test]
    fn test_truncated_sequence_is_error() {
        let mut r = reader(b"@r1\nACGT\n");
        let result = r.next().unwrap();
        assert!(matches!(result, Err(BiorecError::InvalidFastx { .. })));
    }

    #[test]
    fn test_empty_input() {
        assert!(reader(b"").next().is_none());
    }
}
