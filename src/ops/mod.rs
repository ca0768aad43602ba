//! Sequence and quality function library.
//!
//! Pure, allocation-aware functions over byte/string buffers already
//! materialized by the caller: reversal and complementation, GC-content,
//! Phred statistics, quality-adaptive trimming, genetic-code translation,
//! FASTA/FASTQ re-serialization, and bitwise helpers for flag fields.
//! Nothing here touches file or stream state.
//!
//! Recoverable misuse (a missing operand, an unsupported translation table)
//! warns through [`log`] and returns a defined default rather than failing
//! the run.

mod bitwise;
mod fastx_format;
mod gc;
mod quality;
mod sequence;
mod translate;
mod trimming;

pub use bitwise::{bit_and, bit_or, bit_xor};
pub use fastx_format::format_fastx;
pub use gc::gc_content;
pub use quality::{
    count_quality_at_least, decode_quality, error_probability, max_quality, mean_quality,
    median_quality, min_quality, PHRED_MAX, PHRED_OFFSET,
};
pub use sequence::{
    complement, complement_byte, reverse, reverse_complement, reverse_complement_inplace,
    reverse_inplace,
};
pub use translate::{
    translate, STOP_AMINO_ACID, TRANSLATION_TABLE_COUNT, UNKNOWN_AMINO_ACID,
};
pub use trimming::{trim_quality, TrimWindow, DEFAULT_TRIM_THRESHOLD};
