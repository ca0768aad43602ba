//! GC-content over a raw sequence buffer.

/// Fraction of bytes in `{g, c, G, C}` over the total buffer length.
///
/// Returns `None` for empty input: the ratio is undefined there, and an
/// explicit absence beats a silently propagating NaN. Non-nucleotide bytes
/// count toward the denominator, matching the raw-buffer contract.
///
/// # Examples
///
/// ```
/// use biorec::ops::gc_content;
///
/// assert_eq!(gc_content(b"GGCC"), Some(1.0));
/// assert_eq!(gc_content(b"AATT"), Some(0.0));
/// assert_eq!(gc_content(b"ACGT"), Some(0.5));
/// assert_eq!(gc_content(b""), None);
/// ```
pub fn gc_content(seq: &[u8]) -> Option<f64> {
    if seq.is_empty() {
        return None;
    }
    let gc = seq
        .iter()
        .filter(|&&b| matches!(b, b'g' | b'c' | b'G' | b'C'))
        .count();
    Some(gc as f64 / seq.len() as f64)
}
