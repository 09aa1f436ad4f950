use num_bigint::BigUint;
use rand_core::CryptoRng;

use crate::{
    error::Error,
    presets::{PrimalityOptions, is_prime_with_rng, random_prime},
};

/// Provides a generic way to access methods for random prime number generation
/// and primality checking, wrapping the standalone functions ([`is_prime_with_rng`] etc).
pub trait RandomPrimeWithRng: Sized {
    /// Returns a random prime of size `bit_length` using the provided RNG.
    ///
    /// Returns an error if `bit_length` is less than 2, or if the attempt cap was exhausted.
    ///
    /// See [`is_prime_with_rng`] for details about the performed checks.
    fn random_prime_with_rng<R: CryptoRng + ?Sized>(rng: &mut R, bit_length: u32) -> Result<Self, Error>;

    /// Probabilistically checks if the given number is prime using the provided RNG.
    ///
    /// See [`is_prime_with_rng`] for details about the performed checks.
    fn is_prime_with_rng<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> bool;
}

impl RandomPrimeWithRng for BigUint {
    fn random_prime_with_rng<R: CryptoRng + ?Sized>(rng: &mut R, bit_length: u32) -> Result<Self, Error> {
        random_prime(rng, bit_length)
    }
    fn is_prime_with_rng<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> bool {
        is_prime_with_rng(rng, self, PrimalityOptions::default())
    }
}
