//! Circular index resolution.

/// Maps any signed offset onto a valid index of a sequence of length `len`.
///
/// Returns `None` for an empty sequence. For `len > 0` the result is always
/// in `[0, len)`, no matter how far negative or positive `index` is.
pub fn circular_index(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    // rem_euclid is ((i % n) + n) % n without the intermediate overflow.
    Some(index.rem_euclid(len) as usize)
}

/// Offsets `base` by `delta` and resolves the result circularly.
pub fn step(base: usize, delta: i64, len: usize) -> Option<usize> {
    let base = i64::try_from(base).unwrap_or(i64::MAX);
    circular_index(base.saturating_add(delta), len)
}
