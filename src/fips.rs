//! Functions implementing the functionality prescribed by FIPS-186.5 standard[^FIPS].
//!
//! [^FIPS]: FIPS-186.5 standard, <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.186-5.pdf>

use num_bigint::BigUint;
use rand_core::CryptoRng;

use crate::hazmat::{
    ConventionsTestResult, LucasCheck, MillerRabin, Primality, SelfridgeBase, conventions_test, equals_primitive,
    lucas_test, small_factors_test,
};

/// Optional extra checks for [`is_prime`].
#[derive(Copy, Clone, Debug, Default)]
pub struct FipsOptions {
    /// After the Miller-Rabin rounds, also run the strong Lucas test with [`SelfridgeBase`]
    /// (Appendix B.3 of the standard).
    ///
    /// Off by default.
    pub add_lucas_test: bool,
    /// Before the Miller-Rabin rounds, divide by the small primes (Appendix B.3 of the standard).
    ///
    /// Off by default. This only saves time on candidates likely to have small factors, such as random ones;
    /// the probability of accepting a composite stays the same.
    pub add_trial_division_test: bool,
}

/// Checks `candidate` for primality the way FIPS-186.5[^FIPS] prescribes, using the provided RNG.
///
/// Runs `mr_iterations` rounds of [`MillerRabin`] with random bases; the round count that reaches
/// a given error probability for random candidates is returned by
/// [`minimum_mr_iterations`](`crate::hazmat::minimum_mr_iterations`).
/// The checks enabled in `options` are added on top, see [`FipsOptions`].
///
/// [^FIPS]: FIPS-186.5 standard, <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.186-5.pdf>
pub fn is_prime<R: CryptoRng + ?Sized>(
    rng: &mut R,
    candidate: &BigUint,
    mr_iterations: usize,
    options: FipsOptions,
) -> bool {
    let odd_candidate = match conventions_test(candidate.clone()) {
        ConventionsTestResult::Prime => return true,
        ConventionsTestResult::Composite => return false,
        ConventionsTestResult::Undecided { odd_candidate } => odd_candidate,
    };

    if options.add_trial_division_test {
        match small_factors_test(&odd_candidate) {
            Primality::Composite => return false,
            Primality::Prime => return true,
            Primality::ProbablyPrime => {}
        }
    }

    // No random bases exist for 3.
    if equals_primitive(candidate, 3) {
        return true;
    }

    let mr = MillerRabin::new(odd_candidate.clone());
    if (0..mr_iterations).any(|_| mr.test_random_base(rng).is_composite()) {
        return false;
    }

    !options.add_lucas_test || lucas_test(odd_candidate, SelfridgeBase, LucasCheck::Strong).is_probably_prime()
}
