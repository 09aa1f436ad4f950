use core::num::NonZeroU32;

use num_bigint::BigUint;
use rand_core::CryptoRng;

#[cfg(feature = "default-rng")]
use rand_core::{OsRng, TryRngCore};

use crate::{
    error::Error,
    hazmat::{
        AStarBase, ConventionsTestResult, LucasCheck, MillerRabin, Primality, SetBits, conventions_test, lucas_test,
        random_odd_integer, small_factors_test,
    },
};

/// The default number of Miller-Rabin rounds with random bases performed by [`is_prime_with_rng`]
/// on top of the Baillie-PSW test.
pub const DEFAULT_MR_ROUNDS: usize = 20;

/// The default cap on the number of candidates drawn by [`random_prime`], per bit of the requested length.
///
/// Roughly one in `ln(2^bits) / 2` odd numbers of `bits` bits is prime,
/// so a prime is expected long before the cap is reached.
pub const DEFAULT_ATTEMPTS_PER_BIT: usize = 100;

/// Options for [`is_prime_with_rng`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PrimalityOptions {
    /// The number of Miller-Rabin rounds with random bases.
    ///
    /// Each round lets a composite through with probability at most 1/4.
    /// [`DEFAULT_MR_ROUNDS`] by default.
    pub mr_rounds: usize,
}

impl Default for PrimalityOptions {
    fn default() -> Self {
        Self {
            mr_rounds: DEFAULT_MR_ROUNDS,
        }
    }
}

/// Options for [`random_prime_with_options`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GenerationOptions {
    /// The top bits to set in each candidate.
    ///
    /// [`SetBits::Msb`] by default, so that the result has exactly the requested bit length.
    pub set_bits: SetBits,
    /// The number of Miller-Rabin rounds with random bases applied to each candidate
    /// that passes the Baillie-PSW test.
    ///
    /// [`DEFAULT_MR_ROUNDS`] by default.
    pub mr_rounds: usize,
    /// The maximum number of candidates to draw before giving up.
    ///
    /// If `None` (the default), `DEFAULT_ATTEMPTS_PER_BIT * bit_length` is used.
    pub max_attempts: Option<usize>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            set_bits: SetBits::default(),
            mr_rounds: DEFAULT_MR_ROUNDS,
            max_attempts: None,
        }
    }
}

impl GenerationOptions {
    pub(crate) fn attempt_cap(&self, bit_length: NonZeroU32) -> usize {
        self.max_attempts.unwrap_or_else(|| {
            let bit_length = usize::try_from(bit_length.get()).unwrap_or(usize::MAX);
            DEFAULT_ATTEMPTS_PER_BIT.saturating_mul(bit_length)
        })
    }

    pub(crate) fn primality_options(&self) -> PrimalityOptions {
        PrimalityOptions {
            mr_rounds: self.mr_rounds,
        }
    }
}

/// Checks that a prime of `bit_length` bits can exist.
pub(crate) fn checked_bit_length(bit_length: u32) -> Result<NonZeroU32, Error> {
    match NonZeroU32::new(bit_length) {
        Some(bits) if bit_length >= 2 => Ok(bits),
        _ => Err(Error::InvalidBitLength { bit_length }),
    }
}

/// Returns a random prime of size `bit_length` using [`OsRng`] as the RNG.
///
/// See [`random_prime`] for details.
#[cfg(feature = "default-rng")]
pub fn random_prime_os(bit_length: u32) -> Result<BigUint, Error> {
    random_prime(&mut OsRng.unwrap_err(), bit_length)
}

/// Returns a random prime of size `bit_length` using the provided RNG and the default [`GenerationOptions`].
///
/// The result has its most significant bit set, so it lies in `[2^(bit_length-1), 2^bit_length)`.
///
/// Returns [`Error::InvalidBitLength`] if `bit_length` is less than 2,
/// and [`Error::GenerationFailed`] if no prime was found within the attempt cap.
///
/// See [`is_prime_with_rng`] for details about the performed checks.
pub fn random_prime<R: CryptoRng + ?Sized>(rng: &mut R, bit_length: u32) -> Result<BigUint, Error> {
    random_prime_with_options(rng, bit_length, GenerationOptions::default())
}

/// Returns a random prime of size `bit_length` using the provided RNG.
///
/// Draws random odd candidates with the top bits set according to `options.set_bits`,
/// and returns the first one passing [`is_prime_with_rng`].
/// Each candidate is fresh; nothing is carried over between attempts.
pub fn random_prime_with_options<R: CryptoRng + ?Sized>(
    rng: &mut R,
    bit_length: u32,
    options: GenerationOptions,
) -> Result<BigUint, Error> {
    let bit_length = checked_bit_length(bit_length)?;
    let attempts = options.attempt_cap(bit_length);
    let primality_options = options.primality_options();

    for _ in 0..attempts {
        let candidate = random_odd_integer(rng, bit_length, options.set_bits).get();
        if is_prime_with_rng(rng, &candidate, primality_options) {
            return Ok(candidate);
        }
    }

    Err(Error::GenerationFailed { attempts })
}

/// The outcome of the deterministic part of the primality check.
enum Verdict {
    /// The check was conclusive.
    Decided(bool),
    /// The candidate passed the Baillie-PSW test.
    ProbablyPrime(MillerRabin),
}

/// Runs trial division and the Baillie-PSW test.
fn baillie_psw(candidate: &BigUint) -> Verdict {
    let odd_candidate = match conventions_test(candidate.clone()) {
        ConventionsTestResult::Prime => return Verdict::Decided(true),
        ConventionsTestResult::Composite => return Verdict::Decided(false),
        ConventionsTestResult::Undecided { odd_candidate } => odd_candidate,
    };

    match small_factors_test(&odd_candidate) {
        Primality::Prime => return Verdict::Decided(true),
        Primality::Composite => return Verdict::Decided(false),
        Primality::ProbablyPrime => {}
    }

    let mr = MillerRabin::new(odd_candidate.clone());
    if mr.test_base_two().is_composite() {
        return Verdict::Decided(false);
    }

    match lucas_test(odd_candidate, AStarBase, LucasCheck::Strong) {
        Primality::Composite => Verdict::Decided(false),
        Primality::Prime => Verdict::Decided(true),
        Primality::ProbablyPrime => Verdict::ProbablyPrime(mr),
    }
}

/// Checks if the given number is prime, deterministically.
///
/// Performed checks:
/// - trial division by the odd primes below 4096 (see [`small_factors_test`]);
/// - Miller-Rabin check with base 2;
/// - Strong Lucas check with A* base (see [`AStarBase`] for details).
///
/// The last two checks constitute the Baillie-PSW primality test[^Baillie1980].
/// It is known to be exact for numbers below `2^64`, and at the moment of the writing
/// there are no known composites passing it[^Baillie2021].
///
/// [^Baillie1980]: R. Baillie, S. S. Wagstaff, "Lucas pseudoprimes",
///       Math. Comp. 35 1391-1417 (1980),
///       DOI: [10.2307/2006406](https://dx.doi.org/10.2307/2006406),
///       <http://mpqs.free.fr/LucasPseudoprimes.pdf>
///
/// [^Baillie2021]: R. Baillie, A. Fiori, S. S. Wagstaff,
///       "Strengthening the Baillie-PSW primality test",
///       Math. Comp. 90 1931-1955 (2021),
///       DOI: [10.1090/mcom/3616](https://doi.org/10.1090/mcom/3616)
pub fn is_prime(candidate: &BigUint) -> bool {
    match baillie_psw(candidate) {
        Verdict::Decided(result) => result,
        Verdict::ProbablyPrime(_) => true,
    }
}

/// Probabilistically checks if the given number is prime using the provided RNG.
///
/// Performs the checks of [`is_prime`], followed by `options.mr_rounds` Miller-Rabin checks
/// with random bases, each of which lets a composite through with probability at most 1/4.
/// The extra rounds follow the approach of GMP (as of v6.2.1).
pub fn is_prime_with_rng<R: CryptoRng + ?Sized>(rng: &mut R, candidate: &BigUint, options: PrimalityOptions) -> bool {
    match baillie_psw(candidate) {
        Verdict::Decided(result) => result,
        Verdict::ProbablyPrime(mr) => {
            (0..options.mr_rounds).all(|_| mr.test_random_base(rng).is_probably_prime())
        }
    }
}
