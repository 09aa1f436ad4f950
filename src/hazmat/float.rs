//! Const-context floating point helpers for the error estimates, since `core` has no `powf`.

/// Calculates `2^exp` exactly (saturating to infinity past the exponent range of `f64`).
pub(crate) const fn two_powi(exp: u32) -> f64 {
    const EXP_BIAS: u32 = 1023;
    if exp > EXP_BIAS {
        return f64::INFINITY;
    }
    f64::from_bits(((EXP_BIAS + exp) as u64) << 52)
}

/// Calculates a lower bound approximation of `2^exp` where `0 <= exp < 1`.
///
/// Uses the first four terms of the Taylor expansion; all terms are positive,
/// so the truncated sum never exceeds the exact value. The error is under 2%.
const fn two_powf_normalized_lower_bound(exp: f64) -> f64 {
    debug_assert!(exp >= 0.);
    debug_assert!(exp < 1.);

    const LN_2: f64 = core::f64::consts::LN_2;
    const C1: f64 = LN_2;
    const C2: f64 = LN_2 * LN_2 / 2.;
    const C3: f64 = LN_2 * LN_2 * LN_2 / 6.;

    let exp_2 = exp * exp;
    1. + C1 * exp + C2 * exp_2 + C3 * exp_2 * exp
}

/// Calculates an approximation of `2^exp` where `exp < 0`, never smaller than the exact value.
pub(crate) const fn two_powf_upper_bound(exp: f64) -> f64 {
    debug_assert!(exp < 0.);

    let positive_exp = -exp;
    // Truncation is the floor for non-negative values.
    let int_part = positive_exp as u32;
    let frac_part = positive_exp - int_part as f64;

    // The denominator underestimates `2^positive_exp`, so the quotient overestimates `2^exp`.
    1. / (two_powi(int_part) * two_powf_normalized_lower_bound(frac_part))
}
