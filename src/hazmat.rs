//! Components to build your own primality test.
//! Handle with care.

mod float;
mod jacobi;
mod lucas;
mod miller_rabin;
mod precomputed;
#[cfg(test)]
pub(crate) mod primes;
#[cfg(test)]
pub(crate) mod pseudoprimes;
mod sieve;

use core::ops::Deref;

use num_bigint::BigUint;
use num_integer::Integer;

pub use lucas::{AStarBase, LucasBase, LucasCheck, SelfridgeBase, lucas_test};
pub use miller_rabin::{MillerRabin, minimum_mr_iterations};
pub use precomputed::SMALL_PRIMES;
pub use sieve::{SetBits, random_bits, random_mod, random_odd_integer, small_factors_test};

/// Possible results of various primality tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Primality {
    /// The number is definitely prime.
    Prime,
    /// The number is definitely composite.
    Composite,
    /// The number is probably prime
    /// (see the documentation for the corresponding test for the estimation of the probability).
    ProbablyPrime,
}

impl Primality {
    /// Returns `true` if the result indicates that the number is probably or definitely prime.
    pub fn is_probably_prime(&self) -> bool {
        match self {
            Self::Prime | Self::ProbablyPrime => true,
            Self::Composite => false,
        }
    }

    /// Returns `true` if the result indicates that the number is definitely composite.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite)
    }
}

/// An odd arbitrary-precision integer.
///
/// The only way to obtain one is [`Odd::new`], so code receiving an `Odd` does not need to
/// re-check the parity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Odd(BigUint);

impl Odd {
    /// Wraps `n` if it is odd, returns `None` otherwise.
    pub fn new(n: BigUint) -> Option<Self> {
        if n.is_odd() { Some(Self(n)) } else { None }
    }

    /// Returns the wrapped integer.
    pub fn get(self) -> BigUint {
        self.0
    }
}

impl Deref for Odd {
    type Target = BigUint;

    fn deref(&self) -> &BigUint {
        &self.0
    }
}

impl AsRef<BigUint> for Odd {
    fn as_ref(&self) -> &BigUint {
        &self.0
    }
}

/// Returns the lowest 64 bits of `num`.
pub(crate) fn low_u64(num: &BigUint) -> u64 {
    num.iter_u64_digits().next().unwrap_or(0)
}

/// Returns `true` if `num` is equal to `value`.
pub(crate) fn equals_primitive(num: &BigUint, value: u64) -> bool {
    num.bits() <= 64 && low_u64(num) == value
}

/// The result of [`conventions_test`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConventionsTestResult {
    /// The number is prime by convention or definition.
    Prime,
    /// The number is composite by convention or definition.
    Composite,
    /// The number is odd and greater than 2; further tests are required.
    Undecided {
        /// The original candidate, now known to be odd.
        odd_candidate: Odd,
    },
}

/// Settles the candidates that do not need a real test: `0` and `1` are not prime, `2` is,
/// and every other even number is composite.
pub fn conventions_test(candidate: BigUint) -> ConventionsTestResult {
    if candidate.bits() <= 1 {
        return ConventionsTestResult::Composite;
    }
    if equals_primitive(&candidate, 2) {
        return ConventionsTestResult::Prime;
    }
    match Odd::new(candidate) {
        Some(odd_candidate) => ConventionsTestResult::Undecided { odd_candidate },
        None => ConventionsTestResult::Composite,
    }
}
