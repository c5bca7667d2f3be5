//! Scalar interpolation and rounding helpers

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
///
/// Part of the noise format: `fade(0) = 0`, `fade(1) = 1` and both first and
/// second derivatives vanish at the lattice boundaries. Swapping in another
/// curve changes every generated field.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation from `a` (t = 0) to `b` (t = 1).
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Round `x` to `significant` significant digits, ties to even.
///
/// `sround(1234.567, 2) == 1200.0`, `sround(0.01234, 2) == 0.012`.
pub fn sround(x: f64, significant: u32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let magnitude = x.abs().log10().floor() as i32;
    let digits = significant as i32 - magnitude - 1;
    if digits >= 0 {
        let factor = 10f64.powi(digits);
        (x * factor).round_ties_even() / factor
    } else {
        // Divide by an exact power of ten rather than multiply by an inexact one
        let factor = 10f64.powi(-digits);
        (x / factor).round_ties_even() * factor
    }
}
