//! Jacobi symbol calculation.

use num_bigint::BigUint;

use super::{Odd, equals_primitive, low_u64};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum JacobiSymbol {
    Zero,
    One,
    MinusOne,
}

impl core::ops::Neg for JacobiSymbol {
    type Output = Self;
    fn neg(self) -> Self {
        match self {
            Self::Zero => Self::Zero,
            Self::One => Self::MinusOne,
            Self::MinusOne => Self::One,
        }
    }
}

/// `(2/p)` is `-1` exactly when `p = 3 or 5 mod 8`.
fn two_flips_sign(p_mod_8: u64) -> bool {
    p_mod_8 == 3 || p_mod_8 == 5
}

/// Quadratic reciprocity: `(a/p) = -(p/a)` exactly when `a = p = 3 mod 4`.
fn swap_flips_sign(a_mod_4: u64, p_mod_4: u64) -> bool {
    a_mod_4 == 3 && p_mod_4 == 3
}

/// Returns the Jacobi symbol `(a/p)` for word-sized `a` and odd `p`.
fn jacobi_symbol_small(a: u64, p: u64) -> JacobiSymbol {
    debug_assert!(p & 1 == 1);

    let mut result = JacobiSymbol::One;
    let mut a = a % p;
    let mut p = p;

    while a != 0 {
        let s = a.trailing_zeros();
        a >>= s;
        if s & 1 == 1 && two_flips_sign(p & 7) {
            result = -result;
        }

        if swap_flips_sign(a & 3, p & 3) {
            result = -result;
        }
        (a, p) = (p % a, a);
    }

    if p == 1 { result } else { JacobiSymbol::Zero }
}

/// Returns the Jacobi symbol `(a/p)` given a small signed `a` and an odd `p`.
pub(crate) fn jacobi_symbol(a: i64, p: &Odd) -> JacobiSymbol {
    let p_low = low_u64(p);
    let mut result = JacobiSymbol::One;

    // Deal with a negative `a` first:
    // (-a/n) = (-1/n) * (a/n)
    //        = (-1)^((n-1)/2) * (a/n)
    //        = (-1 if n = 3 mod 4 else 1) * (a/n)
    if a < 0 && p_low & 3 == 3 {
        result = -result;
    }
    let abs_a = a.unsigned_abs();

    if p.bits() <= 64 {
        return match jacobi_symbol_small(abs_a, p_low) {
            JacobiSymbol::One => result,
            JacobiSymbol::MinusOne => -result,
            JacobiSymbol::Zero => JacobiSymbol::Zero,
        };
    }

    // From here on `p` is larger than any `a`.
    if abs_a == 0 {
        return JacobiSymbol::Zero;
    }

    // Pull out the powers of two from `a`, so that it becomes odd and the roles can be swapped.
    let s = abs_a.trailing_zeros();
    let odd_a = abs_a >> s;
    if s & 1 == 1 && two_flips_sign(p_low & 7) {
        result = -result;
    }
    if odd_a == 1 {
        return result;
    }

    if swap_flips_sign(odd_a & 3, p_low & 3) {
        result = -result;
    }
    let p_mod_a = low_u64(&(p.as_ref() % odd_a));

    match jacobi_symbol_small(p_mod_a, odd_a) {
        JacobiSymbol::One => result,
        JacobiSymbol::MinusOne => -result,
        JacobiSymbol::Zero => JacobiSymbol::Zero,
    }
}

/// Returns `true` if `n` is a perfect square.
pub(crate) fn is_square(n: &BigUint) -> bool {
    let root = n.sqrt();
    &(&root * &root) == n
}

/// Returns `true` if `n` equals `|d|`.
pub(crate) fn equals_abs(n: &BigUint, d: i64) -> bool {
    equals_primitive(n, d.unsigned_abs())
}
