//! Integer range helpers.

/// Linearly map `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Uses integer arithmetic in `i128`, so the result truncates toward zero. Either range
/// may be descending. `x` outside the input range extrapolates.
///
/// Returns `None` if the input range is empty (`in_min == in_max`) or the
/// result does not fit in an `i32`.
pub fn map_range(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> Option<i32> {
    // Each span fits in 33 bits, so the product cannot overflow i128.
    let in_span = i128::from(in_max) - i128::from(in_min);
    let out_span = i128::from(out_max) - i128::from(out_min);
    let scaled = (i128::from(x) - i128::from(in_min)) * out_span;
    let mapped = scaled.checked_div(in_span)? + i128::from(out_min);
    i32::try_from(mapped).ok()
}
