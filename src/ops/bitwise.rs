//! Bitwise operations over numeric host values.
//!
//! The host's numbers are floating point; operands truncate to integers
//! before the bit operation and the result converts back. A missing second
//! operand is a usage error: warn and return `0.0` so the run continues.

fn bitwise(op: &str, a: f64, b: Option<f64>, f: impl Fn(i64, i64) -> i64) -> f64 {
    let Some(b) = b else {
        log::warn!("{}: missing second operand", op);
        return 0.0;
    };
    f(a.trunc() as i64, b.trunc() as i64) as f64
}

/// Bitwise AND of two truncated numeric operands.
pub fn bit_and(a: f64, b: Option<f64>) -> f64 {
    bitwise("and", a, b, |x, y| x & y)
}

/// Bitwise OR of two truncated numeric operands.
pub fn bit_or(a: f64, b: Option<f64>) -> f64 {
    bitwise("or", a, b, |x, y| x | y)
}

/// Bitwise XOR of two truncated numeric operands.
pub fn bit_xor(a: f64, b: Option<f64>) -> f64 {
    bitwise("xor", a, b, |x, y| x ^ y)
}
