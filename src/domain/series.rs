//! E24 preferred-number series matching
//!
//! This module snaps a measured resistance to the nearest commercial
//! value from the E24 (5% tolerance) series.

/// Mantissas of the E24 series, ascending, covering one decade `[1.0, 10.0)`.
pub const E24: [f64; 24] = [
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
    5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
];

/// Snap a resistance in ohms to the nearest E24 commercial value.
///
/// The value is normalized into one decade, matched against [`E24`] by
/// minimal absolute distance (ties go to the lower entry), and scaled back.
/// Non-positive input returns `0.0`, the no-reading sentinel.
///
/// ```
/// use ohmmeter::domain::series::nearest_commercial;
///
/// assert_eq!(nearest_commercial(10_005.87), 10_000.0);
/// assert_eq!(nearest_commercial(4.65e3), 4.7e3);
/// assert_eq!(nearest_commercial(-3.0), 0.0);
/// ```
pub fn nearest_commercial(ohms: f64) -> f64 {
    if ohms <= 0.0 {
        return 0.0;
    }

    let mut scale = libm::pow(10.0, libm::floor(libm::log10(ohms)));
    let mut mantissa = ohms / scale;
    // log10 can land a hair outside [1, 10) at exact powers of ten; renormalize.
    if mantissa >= 10.0 {
        scale *= 10.0;
        mantissa /= 10.0;
    } else if mantissa < 1.0 {
        scale /= 10.0;
        mantissa *= 10.0;
    }

    let mut best = E24[0];
    let mut best_distance = libm::fabs(E24[0] - mantissa);
    for &entry in E24.iter().skip(1) {
        let distance = libm::fabs(entry - mantissa);
        if distance < best_distance {
            best_distance = distance;
            best = entry;
        }
    }

    best * scale
}
