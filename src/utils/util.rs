//! Miscellaneous numeric helpers used throughout the crate.

/// Clamps a value between a minimum and maximum.
///
/// Used by the geometry kernel to restrict a segment projection parameter
/// to [0, 1] and to keep an arccos argument inside [-1, 1].
///
/// # Examples
///
/// ```
/// use pursuit2d::utils::clamp;
///
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(-0.2, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(1.7, 0.0, 1.0), 1.0);
/// ```
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
