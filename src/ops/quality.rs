//! Phred quality statistics.
//!
//! Quality strings are Phred+33 and always re-derived from the raw bytes; no
//! alternate offset is supported. The mean is a proper Phred-scale average:
//! qualities convert to error probabilities, the probabilities are averaged,
//! and the result converts back. An arithmetic mean of Q-scores would
//! understate the error rate of mixed-quality reads.
//!
//! # Examples
//!
//! ```
//! use biorec::ops::{max_quality, mean_quality, median_quality, min_quality};
//!
//! let qual = b"II!!"; // two Q40 bases, two Q0 bases
//! assert_eq!(min_quality(qual), Some(0));
//! assert_eq!(max_quality(qual), Some(40));
//! assert_eq!(median_quality(qual), Some(20.0));
//!
//! // Phred-scale mean is dominated by the bad bases: ~Q3, nowhere near Q20
//! let mean = mean_quality(qual).unwrap();
//! assert!(mean < 4.0);
//! ```

/// Fixed Phred offset for textual quality bytes.
pub const PHRED_OFFSET: u8 = 33;

/// Highest representable quality (byte 126, the last printable ASCII).
pub const PHRED_MAX: u8 = 126 - PHRED_OFFSET;

/// Decode one quality byte, clamped to the representable Phred range.
#[inline]
pub fn decode_quality(byte: u8) -> u8 {
    byte.saturating_sub(PHRED_OFFSET).min(PHRED_MAX)
}

/// Error probability for a Phred quality score: `10^(-q/10)`.
#[inline]
pub fn error_probability(quality: u8) -> f64 {
    10f64.powf(-(quality as f64) / 10.0)
}

/// Phred-scale mean quality: `-10·log10(mean error probability)`.
///
/// `None` for empty input. For a constant-quality string this recovers the
/// constant exactly (up to floating rounding).
pub fn mean_quality(qual: &[u8]) -> Option<f64> {
    if qual.is_empty() {
        return None;
    }
    let sum: f64 = qual
        .iter()
        .map(|&b| error_probability(decode_quality(b)))
        .sum();
    Some(-10.0 * (sum / qual.len() as f64).log10())
}

/// Median decoded quality; `None` for empty input.
///
/// Qualities are decoded, sorted, and the middle value taken. Even-length
/// input averages the two middle values, so the result may end in `.5`.
pub fn median_quality(qual: &[u8]) -> Option<f64> {
    if qual.is_empty() {
        return None;
    }
    let mut decoded: Vec<u8> = qual.iter().map(|&b| decode_quality(b)).collect();
    decoded.sort_unstable();
    let mid = decoded.len() / 2;
    if decoded.len() % 2 == 1 {
        Some(decoded[mid] as f64)
    } else {
        Some((decoded[mid - 1] as f64 + decoded[mid] as f64) / 2.0)
    }
}

/// Minimum decoded quality over the buffer; `None` for empty input.
pub fn min_quality(qual: &[u8]) -> Option<u8> {
    qual.iter().map(|&b| decode_quality(b)).min()
}

/// Maximum decoded quality over the buffer; `None` for empty input.
pub fn max_quality(qual: &[u8]) -> Option<u8> {
    qual.iter().map(|&b| decode_quality(b)).max()
}

/// Count bases whose decoded quality is at least `threshold`.
///
/// The threshold is required at the call site; a missing one is a usage
/// error: warn and report 0 rather than fail the run.
pub fn count_quality_at_least(qual: &[u8], threshold: Option<i64>) -> u64 {
    let Some(threshold) = threshold else {
        log::warn!("qualcount: missing quality threshold argument");
        return 0;
    };
    qual.iter()
        .filter(|&&b| decode_quality(b) as i64 >= threshold)
        .count() as u64
}
