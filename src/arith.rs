/// Returns the sum of `a` and `b`.
///
/// Overflow wraps with two's-complement semantics, so the function is total:
/// it never panics, in debug or release builds. Pure and stateless; safe to
/// call concurrently without synchronization.
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}
