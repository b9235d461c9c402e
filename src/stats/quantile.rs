//! Standard normal quantiles

// Abramowitz & Stegun 26.2.23 coefficients
const C0: f64 = 2.515517;
const C1: f64 = 0.802853;
const C2: f64 = 0.010328;
const D1: f64 = 1.432788;
const D2: f64 = 0.189269;
const D3: f64 = 0.001308;

/// Approximate inverse of the standard normal CDF
///
/// Uses the rational approximation of Abramowitz & Stegun (26.2.23) on the tail
/// `min(p, 1 - p)`, then restores the sign. The absolute error is below 4.5e-4.
///
/// Returns `0.0` for `p <= 0` or `p >= 1` instead of an infinite quantile.
///
/// # Example
/// ```rust,ignore
/// use beplanner::stats::z_quantile;
///
/// let z = z_quantile(0.975);
/// assert!((z - 1.96).abs() < 1e-3);
/// ```
pub fn z_quantile(p: f64) -> f64 {
    if !(p > 0.0 && p < 1.0) {
        return 0.0;
    }

    let (sign, tail) = if p < 0.5 { (-1.0, p) } else { (1.0, 1.0 - p) };
    let t = (-2.0 * tail.ln()).sqrt();
    let num = C0 + C1 * t + C2 * t * t;
    let den = 1.0 + D1 * t + D2 * t * t + D3 * t * t * t;

    sign * (t - num / den)
}
