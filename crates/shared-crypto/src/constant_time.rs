//! Constant-time comparison for secret byte strings.

/// Compare two byte slices without an early exit on the first differing byte.
///
/// Only the length is compared in variable time; lengths are public for every
/// value this is used on (fixed-size digests).
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    // Keep the optimizer from turning the fold back into a short-circuit.
    std::hint::black_box(diff) == 0
}
