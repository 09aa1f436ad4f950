//! Random candidate sampling, and trial division by small primes
//! for weeding out most composites before proceeding with slower tests.

use alloc::vec;
use core::num::NonZeroU32;

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRng;

use super::{Odd, Primality, equals_primitive, low_u64, precomputed::SMALL_PRIMES};

/// Decides how many of the top bits of a random candidate are forced to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetBits {
    /// Set the most significant bit, so the candidate has exactly the requested bit length.
    #[default]
    Msb,
    /// Set the two most significant bits, so that the product of two such numbers
    /// has exactly twice the requested bit length (useful for RSA moduli).
    TwoMsb,
    /// Leave the top bits random; the requested bit length is then only an upper bound.
    None,
}

/// Returns an integer drawn uniformly from `[0, 2^bit_length)`.
pub fn random_bits<R: CryptoRng + ?Sized>(rng: &mut R, bit_length: u64) -> BigUint {
    if bit_length == 0 {
        return BigUint::zero();
    }

    let len = bit_length.div_ceil(8);
    let mut bytes = vec![0u8; len as usize];
    rng.fill_bytes(&mut bytes);

    // Big-endian, so the excess bits live in the first byte.
    let excess = len * 8 - bit_length;
    bytes[0] &= 0xffu8 >> excess;

    BigUint::from_bytes_be(&bytes)
}

/// Returns an integer drawn uniformly from `[0, modulus)`.
///
/// Panics if `modulus` is zero.
pub fn random_mod<R: CryptoRng + ?Sized>(rng: &mut R, modulus: &BigUint) -> BigUint {
    assert!(!modulus.is_zero(), "`modulus` must be non-zero");

    // Rejection sampling; each draw succeeds with probability above 1/2.
    let bits = modulus.bits();
    loop {
        let random = random_bits(rng, bits);
        if &random < modulus {
            return random;
        }
    }
}

/// Returns a random odd integer of at most `bit_length` bits,
/// with the top bits set according to `set_bits`.
pub fn random_odd_integer<R: CryptoRng + ?Sized>(rng: &mut R, bit_length: NonZeroU32, set_bits: SetBits) -> Odd {
    let bit_length = bit_length.get();
    let mut random = random_bits(rng, bit_length.into());

    // Make it odd
    random.set_bit(0, true);

    let msb = u64::from(bit_length - 1);
    match set_bits {
        SetBits::None => {}
        SetBits::Msb => random.set_bit(msb, true),
        SetBits::TwoMsb => {
            random.set_bit(msb, true);
            if msb > 0 {
                random.set_bit(msb - 1, true);
            }
        }
    }

    Odd::new(random).expect("ensured to be odd")
}

// The product of any five consecutive entries of `SMALL_PRIMES` is below 2^60,
// so the remainder by such a product fits in a `u64`.
const PRIMES_PER_PRODUCT: usize = 5;

/// Checks `candidate` for divisibility by the odd primes in [`SMALL_PRIMES`].
///
/// Returns [`Primality::Prime`] if `candidate` is one of them, or is small enough for the absence of
/// small factors to prove primality; [`Primality::Composite`] if a small factor was found;
/// and [`Primality::ProbablyPrime`] otherwise.
pub fn small_factors_test(candidate: &Odd) -> Primality {
    if equals_primitive(candidate, 1) {
        return Primality::Composite;
    }

    // One big division per chunk of primes, the rest is done on machine words.
    for chunk in SMALL_PRIMES.chunks(PRIMES_PER_PRODUCT) {
        let product = chunk.iter().fold(1u64, |acc, prime| acc * u64::from(*prime));
        let remainder = low_u64(&(candidate.as_ref() % product));
        for prime in chunk.iter().copied().map(u64::from) {
            if remainder % prime == 0 {
                return if equals_primitive(candidate, prime) {
                    Primality::Prime
                } else {
                    Primality::Composite
                };
            }
        }
    }

    let max_prime = u64::from(SMALL_PRIMES[SMALL_PRIMES.len() - 1]);
    if candidate.bits() <= 64 && low_u64(candidate) < max_prime * max_prime {
        // No factors below the square root.
        return Primality::Prime;
    }

    Primality::ProbablyPrime
}
