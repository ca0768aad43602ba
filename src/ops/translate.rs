//! Genetic-code translation.
//!
//! Codons index into a static 64-entry table per translation table; the
//! strings follow NCBI's published genetic codes with bases ordered
//! `T, C, A, G` (so `TTT` is index 0 and `GGG` is index 63). Table ids use
//! the standard 1-based genomic nomenclature. Ids that NCBI never assigned
//! (7, 8, 17–20) or that fall outside 1–25 translate with the standard code
//! after a warning instead of failing the run.
//!
//! # Examples
//!
//! ```
//! use biorec::ops::translate;
//!
//! assert_eq!(translate(b"ATGTAA", None), "M*");
//! assert_eq!(translate(b"ATGNNNTAA", None), "MX*");
//! // Vertebrate mitochondrial code: TGA is tryptophan, not a stop
//! assert_eq!(translate(b"TGA", Some(2)), "W");
//! ```

/// Amino acid emitted for codons containing a non-ACGT byte.
pub const UNKNOWN_AMINO_ACID: char = 'X';

/// Stop-codon symbol.
pub const STOP_AMINO_ACID: char = '*';

/// Number of translation-table slots (NCBI tables 1 through 25).
pub const TRANSLATION_TABLE_COUNT: usize = 25;

/// 1-based ids NCBI never assigned; they fall back to the standard code.
const UNASSIGNED_TABLE_IDS: [i64; 6] = [7, 8, 17, 18, 19, 20];

/// NCBI genetic codes, 64 amino acids per table, codons in TCAG order.
///
/// Slot `i` holds table `i + 1`. Unassigned slots repeat the standard code;
/// they are unreachable because the id check falls back first.
const GENETIC_CODES: [&[u8; 64]; TRANSLATION_TABLE_COUNT] = [
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 1 standard
    b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG", // 2 vertebrate mito
    b"FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 3 yeast mito
    b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 4 mold/protozoan mito
    b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG", // 5 invertebrate mito
    b"FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 6 ciliate nuclear
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 7 unassigned
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 8 unassigned
    b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG", // 9 echinoderm mito
    b"FFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 10 euplotid nuclear
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 11 bacterial/plastid
    b"FFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 12 alternative yeast
    b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG", // 13 ascidian mito
    b"FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG", // 14 flatworm mito
    b"FFLLSSSSYY*QCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 15 blepharisma
    b"FFLLSSSSYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 16 chlorophycean mito
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 17 unassigned
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 18 unassigned
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 19 unassigned
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 20 unassigned
    b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNNKSSSSVVVVAAAADDEEGGGG", // 21 trematode mito
    b"FFLLSS*SYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 22 scenedesmus mito
    b"FF*LSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 23 thraustochytrium mito
    b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG", // 24 rhabdopleuridae mito
    b"FFLLSSSSYY**CCGWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG", // 25 SR1/gracilibacteria
];

/// Base-4 digit of a nucleotide in TCAG order, `None` outside ACGT.
#[inline]
fn base_index(base: u8) -> Option<usize> {
    match base {
        b'T' | b't' => Some(0),
        b'C' | b'c' => Some(1),
        b'A' | b'a' => Some(2),
        b'G' | b'g' => Some(3),
        _ => None,
    }
}

/// Select a genetic code by 1-based table id, warning on fallback.
fn genetic_code(table: i64) -> &'static [u8; 64] {
    if !(1..=TRANSLATION_TABLE_COUNT as i64).contains(&table)
        || UNASSIGNED_TABLE_IDS.contains(&table)
    {
        log::warn!("translate: unsupported translation table {}, using the standard table", table);
        return GENETIC_CODES[0];
    }
    GENETIC_CODES[(table - 1) as usize]
}

/// Translate consecutive non-overlapping codons into amino acids.
///
/// `table` is a 1-based NCBI translation-table id (standard table when
/// `None`). Any codon containing a byte outside `{A, C, G, T}` in either
/// case becomes [`UNKNOWN_AMINO_ACID`]; stops are [`STOP_AMINO_ACID`]. The
/// output length is the number of whole codons; a trailing partial codon is
/// dropped, never padded.
pub fn translate(seq: &[u8], table: Option<i64>) -> String {
    let code = genetic_code(table.unwrap_or(1));
    let mut out = String::with_capacity(seq.len() / 3);

    for codon in seq.chunks_exact(3) {
        let index = match (
            base_index(codon[0]),
            base_index(codon[1]),
            base_index(codon[2]),
        ) {
            (Some(a), Some(b), Some(c)) => Some(a * 16 + b * 4 + c),
            _ => None,
        };
        out.push(match index {
            Some(i) => code[i] as char,
            None => UNKNOWN_AMINO_ACID,
        });
    }
    out
}
