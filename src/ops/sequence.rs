//! Case-preserving reverse and reverse-complement.
//!
//! The complement goes through a 256-entry lookup table covering upper- and
//! lowercase nucleotide codes, including every IUPAC ambiguity code; bytes
//! outside the alphabet map to themselves, so arbitrary text passes through
//! a reversal unharmed.
//!
//! # Examples
//!
//! ```
//! use biorec::ops::{reverse, reverse_complement};
//!
//! assert_eq!(reverse_complement(b"ATGC"), b"GCAT");
//! assert_eq!(reverse_complement(b"AtGc"), b"gCaT"); // case preserved
//! assert_eq!(reverse(b"ATGC"), b"CGTA");
//! ```

/// Byte-to-byte nucleotide complement.
///
/// A↔T (and U→A), G↔C, ambiguity codes R↔Y, K↔M, B↔V, D↔H, with W, S and N
/// self-complementary; both cases covered; identity for everything else.
const COMPLEMENT_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u8;
        i += 1;
    }

    table[b'A' as usize] = b'T';
    table[b'T' as usize] = b'A';
    table[b'G' as usize] = b'C';
    table[b'C' as usize] = b'G';
    table[b'a' as usize] = b't';
    table[b't' as usize] = b'a';
    table[b'g' as usize] = b'c';
    table[b'c' as usize] = b'g';

    table[b'U' as usize] = b'A';
    table[b'u' as usize] = b'a';

    table[b'R' as usize] = b'Y'; // A/G -> C/T
    table[b'Y' as usize] = b'R';
    table[b'K' as usize] = b'M'; // G/T -> A/C
    table[b'M' as usize] = b'K';
    table[b'B' as usize] = b'V'; // C/G/T -> A/C/G
    table[b'V' as usize] = b'B';
    table[b'D' as usize] = b'H'; // A/G/T -> A/C/T
    table[b'H' as usize] = b'D';
    table[b'W' as usize] = b'W';
    table[b'S' as usize] = b'S';
    table[b'N' as usize] = b'N';
    table[b'r' as usize] = b'y';
    table[b'y' as usize] = b'r';
    table[b'k' as usize] = b'm';
    table[b'm' as usize] = b'k';
    table[b'b' as usize] = b'v';
    table[b'v' as usize] = b'b';
    table[b'd' as usize] = b'h';
    table[b'h' as usize] = b'd';
    table[b'w' as usize] = b'w';
    table[b's' as usize] = b's';
    table[b'n' as usize] = b'n';

    table
};

/// Complement of a single byte (identity for non-nucleotide bytes).
#[inline]
pub fn complement_byte(base: u8) -> u8 {
    COMPLEMENT_TABLE[base as usize]
}

/// Reverse a buffer; no alphabet restriction.
pub fn reverse(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().copied().collect()
}

/// In-place reverse.
pub fn reverse_inplace(seq: &mut [u8]) {
    seq.reverse();
}

/// Complement a buffer without reversing.
pub fn complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(|&b| complement_byte(b)).collect()
}

/// Reverse-complement a buffer.
///
/// Case and ambiguity codes are preserved; unmapped bytes pass through
/// unchanged. Involutive over the DNA alphabet: `revcomp(revcomp(s)) == s`.
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement_byte(b)).collect()
}

/// In-place reverse-complement.
///
/// For odd lengths the middle byte is complemented but not swapped.
pub fn reverse_complement_inplace(seq: &mut [u8]) {
    let len = seq.len();
    for i in 0..(len / 2) {
        let j = len - 1 - i;
        let tmp = complement_byte(seq[i]);
        seq[i] = complement_byte(seq[j]);
        seq[j] = tmp;
    }
    if len % 2 == 1 {
        let mid = len / 2;
        seq[mid] = complement_byte(seq[mid]);
    }
}
