//! Clamping helpers.
//!
//! Both helpers use plain comparisons so NaN passes through unchanged and a
//! negative limit never panics (unlike `f64::clamp`).

/// Clamp `v` to `[-limit, limit]`.
#[inline]
pub fn clamp_symmetric(v: f64, limit: f64) -> f64 {
    if v > limit {
        limit
    } else if v < -limit {
        -limit
    } else {
        v
    }
}

/// Clamp a depth pose to at or below the surface reference.
#[inline]
pub fn clamp_depth(pose: f64) -> f64 {
    if pose > 0.0 { 0.0 } else { pose }
}
