//! # Input Normalizer
//!
//! Every user-supplied dimension, position and magnitude passes through one of
//! these two functions before a solver sees it. They never fail: any value that
//! is not a usable number is swapped for the caller's fallback.
//!
//! Internal intermediates (spans, centroids, reactions) are not re-normalized.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::normalize::{normalize_number, normalize_positive};
//!
//! assert_eq!(normalize_number(f64::INFINITY, 1.0), 1.0);
//! assert_eq!(normalize_number(-3.0, 1.0), -3.0);
//!
//! assert_eq!(normalize_positive(f64::NAN, 5.0), 5.0);
//! assert_eq!(normalize_positive(-3.0, 5.0), 5.0);
//! assert_eq!(normalize_positive(10.0, 5.0), 10.0);
//! ```

/// Return `fallback` when `value` is NaN or infinite, else `value`.
#[inline]
pub fn normalize_number(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Like [`normalize_number`], but zero and negative values also fall back.
#[inline]
pub fn normalize_positive(value: f64, fallback: f64) -> f64 {
    let value = normalize_number(value, fallback);
    if value > 0.0 {
        value
    } else {
        fallback
    }
}

/// Normalize an optional positive field, keeping `None` as `None`.
///
/// A present but unusable value becomes `None` so the caller can fall back to
/// whichever alternative field is available.
#[inline]
pub fn normalize_optional_positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
