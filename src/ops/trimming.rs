//! Quality-adaptive trimming (maximal-scoring window).
//!
//! The classic modified-Mott algorithm: every base contributes
//! `threshold − error_probability(q)` to a running sum; the sum resets to
//! zero whenever it goes negative (restarting the candidate window), and the
//! window with the highest cumulative sum ever reached wins. High-quality
//! bases push the sum up, low-quality bases drag it down, so the result is
//! the contiguous stretch worth keeping.
//!
//! # Examples
//!
//! ```
//! use biorec::ops::trim_quality;
//!
//! // Uniformly high quality keeps everything
//! let w = trim_quality(b"IIIIIIII", None);
//! assert_eq!((w.start, w.end), (1, 8));
//!
//! // Uniformly junk quality keeps nothing
//! let w = trim_quality(b"!!!!!!!!", None);
//! assert!(w.is_empty());
//! ```

use crate::ops::quality::{decode_quality, error_probability};

/// Default error-probability threshold (matches a Q13 cutoff).
pub const DEFAULT_TRIM_THRESHOLD: f64 = 0.05;

/// Best-scoring window of a quality string.
///
/// `start` is the 1-based index of the first kept base; `end` is the 1-based
/// index of the last kept base, equivalently a 0-based exclusive end. The
/// conventions match 1-based substring extraction: keep
/// `substr(seq, start, end - start + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimWindow {
    /// 1-based first kept position
    pub start: usize,
    /// 1-based last kept position (0-based exclusive end)
    pub end: usize,
}

impl TrimWindow {
    /// Whether the window keeps no bases.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Number of kept bases.
    pub fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }
}

/// Compute the maximal-score quality window.
///
/// `threshold` is an error probability (default 0.05 when `None`); quality
/// bytes are clamped to the representable Phred range before decoding. Only
/// the final best window is reported; ties keep the first-found maximum.
pub fn trim_quality(qual: &[u8], threshold: Option<f64>) -> TrimWindow {
    let threshold = threshold.unwrap_or(DEFAULT_TRIM_THRESHOLD);

    let mut running = 0.0f64;
    let mut best = 0.0f64;
    let mut window_start = 0usize; // 0-based start of the current candidate
    let mut best_start = 0usize;
    let mut best_end = 0usize; // 0-based exclusive

    for (i, &byte) in qual.iter().enumerate() {
        running += threshold - error_probability(decode_quality(byte));
        if running < 0.0 {
            running = 0.0;
            window_start = i + 1;
        } else if running > best {
            best = running;
            best_start = window_start;
            best_end = i + 1;
        }
    }

    TrimWindow {
        start: best_start + 1,
        end: best_end,
    }
}
