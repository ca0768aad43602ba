//! FASTA/FASTQ re-serialization.

/// Assemble a record into its canonical multi-line textual form.
///
/// With quality the record is FASTQ (`@name`, sequence, `+`, quality);
/// without it, FASTA (`>name`, sequence). A quality string whose length
/// differs from the sequence is a data warning, not an error: the record is
/// still formatted as given.
///
/// # Examples
///
/// ```
/// use biorec::ops::format_fastx;
///
/// assert_eq!(format_fastx("r1", b"ACGT", Some(b"!!!!")), "@r1\nACGT\n+\n!!!!\n");
/// assert_eq!(format_fastx("chr1", b"ACGT", None), ">chr1\nACGT\n");
/// ```
pub fn format_fastx(name: &str, seq: &[u8], qual: Option<&[u8]>) -> String {
    match qual {
        Some(qual) => {
            if qual.len() != seq.len() {
                log::warn!(
                    "fastx output '{}': sequence length ({}) != quality length ({})",
                    name,
                    seq.len(),
                    qual.len()
                );
            }
            let mut out = String::with_capacity(name.len() + seq.len() + qual.len() + 6);
            out.push('@');
            out.push_str(name);
            out.push('\n');
            out.push_str(&String::from_utf8_lossy(seq));
            out.push_str("\n+\n");
            out.push_str(&String::from_utf8_lossy(qual));
            out.push('\n');
            out
        }
        None => {
            let mut out = String::with_capacity(name.len() + seq.len() + 3);
            out.push('>');
            out.push_str(name);
            out.push('\n');
            out.push_str(&String::from_utf8_lossy(seq));
            out.push('\n');
            out
        }
    }
}
